//! For and while loops

use crate::demo::session::Session;
use crate::error::Result;
use crate::ops::{numeric, range, range_step};
use crate::value::Value;

pub fn loops(s: &mut Session) -> Result<()> {
    let fruits: Vec<Value> = s.scope().list("fruits_copy")?.iter().cloned().collect();

    for fruit in &fruits {
        s.print(fruit);
    }

    for i in range(5) {
        s.print(i);
    }

    for i in range_step(2, 8, 2)? {
        s.print(i);
    }

    for (index, fruit) in fruits.iter().enumerate() {
        s.print(format!("{}: {}", index, fruit));
    }

    s.scope_mut().bind("count", 0i64);
    let limit = Value::Int(3);
    while numeric::lt(s.scope().get("count")?, &limit)? {
        let count = s.scope().get("count")?.clone();
        s.print(&count);
        let next = numeric::add(&count, &Value::Int(1))?;
        s.scope_mut().bind("count", next);
    }
    Ok(())
}

//! Lists, comprehensions, dicts, tuples and sets

use crate::demo::session::Session;
use crate::error::Result;
use crate::ops::{list_comp, numeric, range, Mapping, Sequence, Set, Tuple};
use crate::value::Value;

fn strings(items: &[&str]) -> Sequence {
    items.iter().map(|s| Value::from(*s)).collect()
}

pub fn lists(s: &mut Session) -> Result<()> {
    s.scope_mut()
        .bind("fruits", strings(&["apple", "banana", "cherry"]));

    let fruits = s.scope().list("fruits")?;
    let first = fruits.get(0)?.clone();
    let last = fruits.get(-1)?.clone();
    let middle = Value::List(fruits.slice(Some(1), Some(3)));
    s.print(first);
    s.print(last);
    s.print(middle);

    let fruits = s.scope_mut().list_mut("fruits")?;
    fruits.append("date");
    fruits.insert(1, "avocado");
    fruits.extend(["elderberry", "fig"]);
    fruits.remove(&"banana".into())?;
    s.show("fruits")?;

    let popped = s.scope_mut().list_mut("fruits")?.pop()?;
    s.assign("popped", popped)?;

    let fruits = s.scope().list("fruits")?;
    let idx = i64::try_from(fruits.index(&"apple".into())?).unwrap_or(i64::MAX);
    let cnt = i64::try_from(fruits.count(&"cherry".into())).unwrap_or(i64::MAX);
    s.assign("idx", idx)?;
    s.assign("cnt", cnt)?;

    s.scope_mut().list_mut("fruits")?.sort()?;
    s.show("fruits")?;
    s.scope_mut().list_mut("fruits")?.reverse();
    s.show("fruits")?;

    let copy = s.scope().list("fruits")?.copy();
    s.assign("fruits_copy", copy)?;
    s.scope_mut().list_mut("fruits")?.clear();
    s.show("fruits")?;
    Ok(())
}

pub fn comprehensions(s: &mut Session) -> Result<()> {
    // [x**2 for x in range(10)]
    let squares = list_comp(range(10), |_| true, |x| {
        numeric::pow(&Value::Int(x), &Value::Int(2))
    })?;
    s.assign("squares", squares)?;

    // [x for x in range(20) if x % 2 == 0]
    let evens = list_comp(
        range(20),
        |x| numeric::modulo(&Value::Int(*x), &Value::Int(2)).is_ok_and(|r| !r.is_truthy()),
        |x| Ok(Value::Int(x)),
    )?;
    s.assign("evens", evens)?;

    // [fruit.upper() for fruit in fruits_copy]
    let upper = list_comp(s.scope().list("fruits_copy")?, |_| true, |fruit| {
        Ok(Value::Str(fruit.to_string().to_uppercase()))
    })?;
    s.assign("upper_fruits", upper)?;
    Ok(())
}

pub fn dicts(s: &mut Session) -> Result<()> {
    let person = Mapping::from_pairs([
        ("name", Value::from("Eswar")),
        ("age", Value::Int(28)),
        ("skills", Value::List(strings(&["Python", "AI"]))),
    ])?;
    s.assign("person", person)?;

    let person = s.scope().dict("person")?;
    let name = person.get(&"name".into())?.clone();
    let email = person.get_or(&"email".into(), "N/A".into());
    s.print(name);
    s.print(email);

    let person = s.scope_mut().dict_mut("person")?;
    person.set("email", "eswar@example.com")?;
    person.delete(&"age".into())?;

    let items: Vec<String> = s
        .scope()
        .dict("person")?
        .items()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    for line in items {
        s.print(line);
    }

    let person = s.scope().dict("person")?;
    let keys: Sequence = person.keys().cloned().collect();
    let values: Sequence = person.values().cloned().collect();
    s.assign("keys", keys)?;
    s.assign("values", values)?;

    let location = Mapping::from_pairs([("location", "Earth")])?;
    s.scope_mut().dict_mut("person")?.update(&location);
    s.show("person")?;

    let popped = s.scope_mut().dict_mut("person")?.pop(&"email".into())?;
    s.assign("popped_email", popped)?;
    s.scope_mut().dict_mut("person")?.clear();
    s.show("person")?;

    // dict(), set() and {} are all empty constructors; {} is a dict.
    s.assign("e", Mapping::new())?;
    s.assign("f", Set::new())?;
    s.assign("g", Mapping::new())?;
    Ok(())
}

pub fn tuples(s: &mut Session) -> Result<()> {
    let coords = Tuple::new(vec![Value::Float(10.5), Value::Float(20.3)]);
    let [cx, cy] = coords.unpack::<2>()?;
    s.assign("coords", coords)?;
    s.assign("cx", cx)?;
    s.assign("cy", cy)?;
    s.assign("single", Tuple::new(vec![Value::Int(42)]))?;
    Ok(())
}

pub fn sets(s: &mut Session) -> Result<()> {
    s.assign("nums", Set::from_values([1i64, 2, 3, 3, 2])?)?;

    let nums = s.scope_mut().set_mut("nums")?;
    nums.add(4i64)?;
    nums.discard(&Value::Int(2));
    nums.remove(&Value::Int(3))?;
    s.show("nums")?;

    // Which element goes is unspecified; only the size is reported.
    s.scope_mut().set_mut("nums")?.pop()?;
    let remaining = s.scope().set("nums")?.len();
    s.print(format!("len(nums) = {}", remaining));

    s.scope_mut().set_mut("nums")?.clear();
    s.show("nums")?;

    let a = Set::from_values([1i64, 2, 3, 4])?;
    let b = Set::from_values([3i64, 4, 5, 6])?;
    s.print(Value::Set(&a | &b));
    s.print(Value::Set(&a & &b));
    s.print(Value::Set(&a - &b));
    s.print(Value::Set(&a ^ &b));
    let scope = s.scope_mut();
    scope.bind("a", a);
    scope.bind("b", b);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lists() -> Session {
        let mut session = Session::new();
        lists(&mut session).unwrap();
        session
    }

    #[test]
    fn test_list_section_output() {
        let mut session = run_lists();
        assert_eq!(
            session.take_lines(),
            [
                "apple",
                "cherry",
                "['banana', 'cherry']",
                "fruits = ['apple', 'avocado', 'cherry', 'date', 'elderberry', 'fig']",
                "popped = 'fig'",
                "idx = 0",
                "cnt = 1",
                "fruits = ['apple', 'avocado', 'cherry', 'date', 'elderberry']",
                "fruits = ['elderberry', 'date', 'cherry', 'avocado', 'apple']",
                "fruits_copy = ['elderberry', 'date', 'cherry', 'avocado', 'apple']",
                "fruits = []",
            ]
        );
    }

    #[test]
    fn test_comprehensions_use_copy() {
        let mut session = run_lists();
        session.take_lines();
        comprehensions(&mut session).unwrap();
        assert_eq!(
            session.take_lines(),
            [
                "squares = [0, 1, 4, 9, 16, 25, 36, 49, 64, 81]",
                "evens = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18]",
                "upper_fruits = ['ELDERBERRY', 'DATE', 'CHERRY', 'AVOCADO', 'APPLE']",
            ]
        );
    }

    #[test]
    fn test_comprehensions_without_lists_fail() {
        let mut session = Session::new();
        assert!(comprehensions(&mut session).is_err());
    }

    #[test]
    fn test_dict_section_output() {
        let mut session = Session::new();
        dicts(&mut session).unwrap();
        assert_eq!(
            session.take_lines(),
            [
                "person = {'name': 'Eswar', 'age': 28, 'skills': ['Python', 'AI']}",
                "Eswar",
                "N/A",
                "name: Eswar",
                "skills: ['Python', 'AI']",
                "email: eswar@example.com",
                "keys = ['name', 'skills', 'email']",
                "values = ['Eswar', ['Python', 'AI'], 'eswar@example.com']",
                "person = {'name': 'Eswar', 'skills': ['Python', 'AI'], 'email': 'eswar@example.com', 'location': 'Earth'}",
                "popped_email = 'eswar@example.com'",
                "person = {}",
                "e = {}",
                "f = set()",
                "g = {}",
            ]
        );
    }

    #[test]
    fn test_tuple_section_output() {
        let mut session = Session::new();
        tuples(&mut session).unwrap();
        assert_eq!(
            session.take_lines(),
            [
                "coords = (10.5, 20.3)",
                "cx = 10.5",
                "cy = 20.3",
                "single = (42,)",
            ]
        );
    }

    #[test]
    fn test_set_section_output() {
        let mut session = Session::new();
        sets(&mut session).unwrap();
        assert_eq!(
            session.take_lines(),
            [
                "nums = {1, 2, 3}",
                "nums = {1, 4}",
                "len(nums) = 1",
                "nums = set()",
                "{1, 2, 3, 4, 5, 6}",
                "{3, 4}",
                "{1, 2}",
                "{1, 2, 5, 6}",
            ]
        );
    }
}

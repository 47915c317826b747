//! Variables, conversions, operators, formatting and math

use crate::demo::session::Session;
use crate::error::{PrimerError, Result};
use crate::ops::{math, numeric, Tuple};
use crate::value::Value;

pub fn variables(s: &mut Session) -> Result<()> {
    s.assign("text", "Hello")?;
    s.assign("number", 42i64)?;
    s.assign("pi", 3.14)?;
    s.assign("is_active", true)?;

    // x, y, z = 10, 20, 30
    let [x, y, z] = Tuple::new(vec![10i64.into(), 20i64.into(), 30i64.into()]).unpack::<3>()?;
    let scope = s.scope_mut();
    scope.bind("x", x);
    scope.bind("y", y);
    scope.bind("z", z);

    // a = b = c = 0
    let zero = Value::Int(0);
    for name in ["a", "b", "c"] {
        scope.bind(name, zero.clone());
    }

    // x, y = y, x
    let swapped = Tuple::new(vec![scope.get("y")?.clone(), scope.get("x")?.clone()]);
    let [x, y] = swapped.unpack::<2>()?;
    scope.bind("x", x);
    scope.bind("y", y);

    for name in ["x", "y", "z", "a", "b", "c"] {
        s.show(name)?;
    }
    Ok(())
}

pub fn conversion(s: &mut Session) -> Result<()> {
    s.assign("int_val", numeric::to_int(&"42".into())?)?;
    s.assign("float_val", numeric::to_float(&"3.14".into())?)?;
    s.assign("str_val", numeric::to_str(&Value::Int(100)))?;
    s.assign("bool_val", numeric::to_bool(&Value::Int(0)))?;
    Ok(())
}

pub fn operators(s: &mut Session) -> Result<()> {
    let (seven, three) = (Value::Int(7), Value::Int(3));
    s.assign("add", numeric::add(&seven, &three)?)?;
    s.assign("sub", numeric::sub(&seven, &three)?)?;
    s.assign("mul", numeric::mul(&seven, &three)?)?;
    s.assign("div", numeric::true_div(&seven, &three)?)?;
    s.assign("floor_div", numeric::floor_div(&seven, &three)?)?;
    s.assign("mod", numeric::modulo(&seven, &three)?)?;
    s.assign("exp", numeric::pow(&Value::Int(2), &Value::Int(10))?)?;

    s.assign("is_equal", numeric::eq(&Value::Int(5), &Value::Int(5)))?;
    s.assign("is_not_equal", !numeric::eq(&Value::Int(5), &Value::Int(3)))?;

    let x = s.scope().get("x")?.clone();
    let chained = numeric::chained_lt(&Value::Int(0), &x, &Value::Int(100))?;
    s.assign("chained", chained)?;

    let and = numeric::short_circuit_and("hello".into(), || Ok("world".into()))?;
    s.assign("short_circuit_and", and)?;
    let or = numeric::short_circuit_or(Value::None, || Ok("default".into()))?;
    s.assign("short_circuit_or", or)?;
    Ok(())
}

pub fn formatting(s: &mut Session) -> Result<()> {
    let scope = s.scope_mut();
    scope.bind("name", "Eswar");
    scope.bind("age", 28i64);
    s.print_f("My name is {name} and I am {age} years old.")?;
    s.print_f("Pi to 2 decimals: {pi:.2f}")?;
    Ok(())
}

pub fn math_functions(s: &mut Session) -> Result<()> {
    s.assign("sqrt_val", math::sqrt(16.0)?)?;
    s.assign("ceil_val", math::ceil(3.2)?)?;
    s.assign("floor_val", math::floor(3.8)?)?;
    let gcd = i64::try_from(math::gcd(12, 8))
        .map_err(|_| PrimerError::ValueError("gcd out of range".to_string()))?;
    s.assign("gcd_val", gcd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(steps: &[fn(&mut Session) -> Result<()>]) -> Vec<String> {
        let mut session = Session::new();
        for step in steps {
            step(&mut session).unwrap();
        }
        session.take_lines()
    }

    #[test]
    fn test_swap_happens_before_show() {
        let lines = run(&[variables]);
        assert!(lines.contains(&"x = 20".to_string()));
        assert!(lines.contains(&"y = 10".to_string()));
        assert!(lines.contains(&"pi = 3.14".to_string()));
    }

    #[test]
    fn test_operator_results() {
        let lines = run(&[variables, operators]);
        assert_eq!(
            &lines[lines.len() - 12..],
            [
                "add = 10",
                "sub = 4",
                "mul = 21",
                "div = 2.3333333333333335",
                "floor_div = 2",
                "mod = 1",
                "exp = 1024",
                "is_equal = True",
                "is_not_equal = True",
                "chained = True",
                "short_circuit_and = 'world'",
                "short_circuit_or = 'default'",
            ]
        );
    }

    #[test]
    fn test_formatting_needs_pi() {
        let mut session = Session::new();
        assert!(formatting(&mut session).is_err());
        let lines = run(&[variables, formatting]);
        assert_eq!(
            &lines[lines.len() - 2..],
            [
                "My name is Eswar and I am 28 years old.",
                "Pi to 2 decimals: 3.14"
            ]
        );
    }

    #[test]
    fn test_math_and_conversion() {
        let lines = run(&[conversion, math_functions]);
        assert_eq!(
            lines,
            [
                "int_val = 42",
                "float_val = 3.14",
                "str_val = '100'",
                "bool_val = False",
                "sqrt_val = 4.0",
                "ceil_val = 4",
                "floor_val = 3",
                "gcd_val = 4",
            ]
        );
    }
}

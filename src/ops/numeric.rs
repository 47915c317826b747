//! Arithmetic, comparison, boolean and conversion operators
//!
//! Floor division and modulo round toward negative infinity, so the result
//! of `%` takes the sign of the divisor: `-7 // 3 == -3`, `7 % -3 == -2`.

use crate::error::{PrimerError, Result};
use crate::value::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::FloorDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
        }
    }
}

fn unsupported(op: BinOp, a: &Value, b: &Value) -> PrimerError {
    PrimerError::TypeError(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        op.symbol(),
        a.type_name(),
        b.type_name()
    ))
}

fn overflow() -> PrimerError {
    PrimerError::ValueError("integer overflow".to_string())
}

/// Apply a binary arithmetic operator.
pub fn apply(op: BinOp, a: &Value, b: &Value) -> Result<Value> {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => numeric(op, x, y),
        _ => sequence_op(op, a, b),
    }
}

pub fn add(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Add, a, b)
}

pub fn sub(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Sub, a, b)
}

pub fn mul(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Mul, a, b)
}

pub fn true_div(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Div, a, b)
}

pub fn floor_div(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::FloorDiv, a, b)
}

pub fn modulo(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Mod, a, b)
}

pub fn pow(a: &Value, b: &Value) -> Result<Value> {
    apply(BinOp::Pow, a, b)
}

fn numeric(op: BinOp, x: Number, y: Number) -> Result<Value> {
    if let (Number::Int(a), Number::Int(b)) = (x, y) {
        return int_op(op, a, b);
    }
    let (a, b) = (x.as_f64(), y.as_f64());
    let result = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => {
            if b == 0.0 {
                return Err(PrimerError::ZeroDivision("float division by zero".to_string()));
            }
            a / b
        }
        BinOp::FloorDiv => {
            if b == 0.0 {
                return Err(PrimerError::ZeroDivision(
                    "float floor division by zero".to_string(),
                ));
            }
            float_divmod(a, b).0
        }
        BinOp::Mod => {
            if b == 0.0 {
                return Err(PrimerError::ZeroDivision("float modulo".to_string()));
            }
            float_divmod(a, b).1
        }
        BinOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(PrimerError::ZeroDivision(
                    "0.0 cannot be raised to a negative power".to_string(),
                ));
            }
            a.powf(b)
        }
    };
    Ok(Value::Float(result))
}

/// Floored quotient and remainder of `a / b`. The quotient is derived from
/// the remainder so that `q * b + r == a` holds at rounding boundaries.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut r = a % b;
    let mut q = (a - r) / b;
    if r != 0.0 {
        if (r < 0.0) != (b < 0.0) {
            r += b;
            q -= 1.0;
        }
    } else {
        r = 0.0_f64.copysign(b);
    }
    let q = if q != 0.0 {
        let floored = q.floor();
        if q - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (q, r)
}

fn int_op(op: BinOp, a: i64, b: i64) -> Result<Value> {
    let zero = || PrimerError::ZeroDivision("integer division or modulo by zero".to_string());
    let value = match op {
        BinOp::Add => a.checked_add(b).ok_or_else(overflow)?,
        BinOp::Sub => a.checked_sub(b).ok_or_else(overflow)?,
        BinOp::Mul => a.checked_mul(b).ok_or_else(overflow)?,
        BinOp::Div => {
            if b == 0 {
                return Err(PrimerError::ZeroDivision("division by zero".to_string()));
            }
            return Ok(Value::Float(a as f64 / b as f64));
        }
        BinOp::FloorDiv => {
            if b == 0 {
                return Err(zero());
            }
            let q = a.checked_div(b).ok_or_else(overflow)?;
            if a % b != 0 && ((a < 0) != (b < 0)) {
                q - 1
            } else {
                q
            }
        }
        BinOp::Mod => {
            if b == 0 {
                return Err(zero());
            }
            let r = a.checked_rem(b).unwrap_or(0);
            if r != 0 && ((r < 0) != (b < 0)) {
                r + b
            } else {
                r
            }
        }
        BinOp::Pow => {
            if b < 0 {
                return numeric(op, Number::Float(a as f64), Number::Float(b as f64));
            }
            let exp = u32::try_from(b).map_err(|_| overflow())?;
            a.checked_pow(exp).ok_or_else(overflow)?
        }
    };
    Ok(Value::Int(value))
}

fn sequence_op(op: BinOp, a: &Value, b: &Value) -> Result<Value> {
    match (op, a, b) {
        (BinOp::Add, Value::Str(x), Value::Str(y)) => Ok(Value::Str(format!("{}{}", x, y))),
        (BinOp::Add, Value::List(x), Value::List(y)) => {
            let mut joined = x.copy();
            joined.extend(y.iter().cloned());
            Ok(Value::List(joined))
        }
        (BinOp::Mul, Value::Str(s), n) | (BinOp::Mul, n, Value::Str(s))
            if matches!(n.as_number(), Some(Number::Int(_))) =>
        {
            repeat_str(s, n)
        }
        _ => Err(unsupported(op, a, b)),
    }
}

/// `s * n`; a count below one gives the empty string.
fn repeat_str(s: &str, count: &Value) -> Result<Value> {
    let times = match count.as_number() {
        Some(Number::Int(n)) => usize::try_from(n).unwrap_or(0),
        _ => 0,
    };
    if s.is_empty() || times == 0 {
        return Ok(Value::Str(String::new()));
    }
    let total = s.len().checked_mul(times).ok_or_else(overflow)?;
    let mut out = String::new();
    out.try_reserve_exact(total).map_err(|_| overflow())?;
    for _ in 0..times {
        out.push_str(s);
    }
    Ok(Value::Str(out))
}

/// `a == b`
pub fn eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// `a < b`. Numbers compare by partial order, so anything against NaN is
/// `false`.
pub fn lt(a: &Value, b: &Value) -> Result<bool> {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return Ok(match (x, y) {
            (Number::Int(x), Number::Int(y)) => x < y,
            (x, y) => x.as_f64() < y.as_f64(),
        });
    }
    Ok(a.compare(b)?.is_lt())
}

/// `lo < x < hi`, evaluated as `(lo < x) and (x < hi)` with `x` taken once.
pub fn chained_lt(lo: &Value, x: &Value, hi: &Value) -> Result<bool> {
    Ok(lt(lo, x)? && lt(x, hi)?)
}

/// `left and right`: returns `left` if it is falsy, otherwise evaluates and
/// returns `right`.
pub fn short_circuit_and<F>(left: Value, right: F) -> Result<Value>
where
    F: FnOnce() -> Result<Value>,
{
    if left.is_truthy() {
        right()
    } else {
        Ok(left)
    }
}

/// `left or right`: returns `left` if it is truthy, otherwise evaluates and
/// returns `right`.
pub fn short_circuit_or<F>(left: Value, right: F) -> Result<Value>
where
    F: FnOnce() -> Result<Value>,
{
    if left.is_truthy() {
        Ok(left)
    } else {
        right()
    }
}

/// `int(value)`
pub fn to_int(value: &Value) -> Result<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Int(i) => Ok(Value::Int(*i)),
        Value::Float(f) if f.is_finite() => {
            let truncated = f.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is already out of range.
            if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
                return Err(overflow());
            }
            Ok(Value::Int(truncated as i64))
        }
        Value::Float(f) => Err(PrimerError::ValueError(format!(
            "cannot convert float {} to integer",
            value_repr_for_float(*f)
        ))),
        Value::Str(s) => s
            .trim()
            .replace('_', "")
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| {
                PrimerError::ValueError(format!(
                    "invalid literal for int() with base 10: {}",
                    value.repr()
                ))
            }),
        other => Err(PrimerError::TypeError(format!(
            "int() argument must be a string or a number, not '{}'",
            other.type_name()
        ))),
    }
}

fn value_repr_for_float(f: f64) -> &'static str {
    if f.is_nan() {
        "NaN"
    } else {
        "infinity"
    }
}

/// `float(value)`
pub fn to_float(value: &Value) -> Result<Value> {
    if let Some(n) = value.as_number() {
        return Ok(Value::Float(n.as_f64()));
    }
    match value {
        Value::Str(s) => {
            let text = s.trim();
            let parsed = match text.to_ascii_lowercase().as_str() {
                "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
                "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
                "nan" | "+nan" | "-nan" => Some(f64::NAN),
                _ => text.parse::<f64>().ok(),
            };
            parsed.map(Value::Float).ok_or_else(|| {
                PrimerError::ValueError(format!(
                    "could not convert string to float: {}",
                    value.repr()
                ))
            })
        }
        other => Err(PrimerError::TypeError(format!(
            "float() argument must be a string or a real number, not '{}'",
            other.type_name()
        ))),
    }
}

/// `str(value)`
pub fn to_str(value: &Value) -> Value {
    Value::Str(value.to_string())
}

/// `bool(value)`
pub fn to_bool(value: &Value) -> Value {
    Value::Bool(value.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn int(i: i64) -> Value {
        Value::Int(i)
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(&int(7), &int(3)).unwrap(), int(10));
        assert_eq!(sub(&int(7), &int(3)).unwrap(), int(4));
        assert_eq!(mul(&int(7), &int(3)).unwrap(), int(21));
        assert_eq!(pow(&int(2), &int(10)).unwrap(), int(1024));
        let div = true_div(&int(7), &int(3)).unwrap();
        assert_eq!(div.repr(), "2.3333333333333335");
    }

    #[test]
    fn test_floor_semantics() {
        assert_eq!(floor_div(&int(7), &int(3)).unwrap(), int(2));
        assert_eq!(floor_div(&int(-7), &int(3)).unwrap(), int(-3));
        assert_eq!(floor_div(&int(7), &int(-3)).unwrap(), int(-3));
        assert_eq!(modulo(&int(7), &int(3)).unwrap(), int(1));
        assert_eq!(modulo(&int(-7), &int(3)).unwrap(), int(2));
        assert_eq!(modulo(&int(7), &int(-3)).unwrap(), int(-2));
        assert_eq!(
            modulo(&Value::Float(-7.5), &int(2)).unwrap(),
            Value::Float(0.5)
        );
        assert_eq!(
            floor_div(&Value::Float(-7.0), &int(2)).unwrap(),
            Value::Float(-4.0)
        );
    }

    #[test]
    fn test_float_floor_matches_remainder() {
        let (a, b) = (Value::Float(1.0), Value::Float(0.1));
        assert_eq!(floor_div(&a, &b).unwrap(), Value::Float(9.0));
        let r = modulo(&a, &b).unwrap();
        assert_eq!(r.repr(), "0.09999999999999995");
        assert_eq!(
            floor_div(&Value::Float(-1.0), &Value::Float(0.1)).unwrap(),
            Value::Float(-10.0)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            true_div(&int(1), &int(0)),
            Err(PrimerError::ZeroDivision(_))
        ));
        assert!(matches!(
            modulo(&int(1), &int(0)),
            Err(PrimerError::ZeroDivision(_))
        ));
        assert!(matches!(
            floor_div(&Value::Float(1.0), &Value::Float(0.0)),
            Err(PrimerError::ZeroDivision(_))
        ));
    }

    #[test]
    fn test_negative_exponent_is_float() {
        assert_eq!(pow(&int(2), &int(-1)).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn test_overflow_reported() {
        assert!(pow(&int(2), &int(64)).is_err());
        assert!(add(&int(i64::MAX), &int(1)).is_err());
    }

    #[test]
    fn test_string_ops() {
        assert_eq!(
            add(&"ab".into(), &"cd".into()).unwrap(),
            Value::from("abcd")
        );
        assert_eq!(mul(&"ab".into(), &int(2)).unwrap(), Value::from("abab"));
        assert_eq!(mul(&int(-1), &"ab".into()).unwrap(), Value::from(""));
        assert_eq!(mul(&"ab".into(), &Value::Bool(true)).unwrap(), Value::from("ab"));
        assert_eq!(mul(&Value::Bool(false), &"ab".into()).unwrap(), Value::from(""));
        assert!(matches!(
            mul(&"ab".into(), &Value::Float(2.0)),
            Err(PrimerError::TypeError(_))
        ));
        assert!(matches!(
            add(&"a".into(), &int(1)),
            Err(PrimerError::TypeError(_))
        ));
    }

    #[test]
    fn test_chained_comparison() {
        for x in [-5, 0, 1, 50, 99, 100, 150] {
            let expected = 0 < x && x < 100;
            assert_eq!(chained_lt(&int(0), &int(x), &int(100)).unwrap(), expected);
        }
    }

    #[test]
    fn test_huge_repeat_is_an_error() {
        assert!(matches!(
            mul(&"ab".into(), &int(i64::MAX)),
            Err(PrimerError::ValueError(_))
        ));
    }

    #[test]
    fn test_nan_comparisons_are_false() {
        let nan = Value::Float(f64::NAN);
        assert!(!lt(&int(0), &nan).unwrap());
        assert!(!lt(&nan, &int(0)).unwrap());
        assert!(!chained_lt(&int(0), &nan, &int(100)).unwrap());
        assert!(chained_lt(&int(0), &Value::Float(0.5), &int(1)).unwrap());
    }

    #[test]
    fn test_short_circuit_returns_deciding_operand() {
        let and = short_circuit_and("hello".into(), || Ok("world".into())).unwrap();
        assert_eq!(and, Value::from("world"));
        let or = short_circuit_or(Value::None, || Ok("default".into())).unwrap();
        assert_eq!(or, Value::from("default"));
    }

    #[test]
    fn test_short_circuit_skips_right_operand() {
        let calls = Cell::new(0);
        let right = || {
            calls.set(calls.get() + 1);
            Ok(Value::from("unused"))
        };
        let and = short_circuit_and(int(0), right).unwrap();
        assert_eq!(and, int(0));
        let or = short_circuit_or("set".into(), || {
            calls.set(calls.get() + 1);
            Ok(Value::None)
        })
        .unwrap();
        assert_eq!(or, Value::from("set"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_int(&"42".into()).unwrap(), int(42));
        assert_eq!(to_int(&Value::Float(-3.9)).unwrap(), int(-3));
        assert_eq!(to_float(&"3.14".into()).unwrap(), Value::Float(3.14));
        assert_eq!(to_str(&int(100)), Value::from("100"));
        assert_eq!(to_bool(&int(0)), Value::Bool(false));
        let err = to_int(&"4x".into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ValueError: invalid literal for int() with base 10: '4x'"
        );
        assert!(to_float(&"pi".into()).is_err());
    }

    #[test]
    fn test_int_of_huge_float_overflows() {
        let err = to_int(&Value::Float(1e30)).unwrap_err();
        assert_eq!(err.to_string(), "ValueError: integer overflow");
        assert!(to_int(&Value::Float(-1e19)).is_err());
        assert_eq!(to_int(&Value::Float(-9.0e18)).unwrap(), int(-9_000_000_000_000_000_000));
    }
}

//! Dynamic values for the tour
//!
//! `Value` models the handful of built-in types the tour touches. Equality,
//! hashing and ordering follow the dynamic-language rules: `True == 1`,
//! `1 == 1.0` (and both hash alike), and only like types are ordered.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{PrimerError, Result};
use crate::ops::mapping::Mapping;
use crate::ops::sequence::Sequence;
use crate::ops::set::Set;
use crate::ops::tuple::Tuple;

#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Sequence),
    Tuple(Tuple),
    Dict(Mapping),
    Set(Set),
}

/// Numeric view of a value, with bools promoted to ints
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
            Value::Set(_) => "set",
        }
    }

    /// Truthiness: empty containers, zero, `None` and `False` are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
            Value::Tuple(t) => !t.is_empty(),
            Value::Dict(d) => !d.is_empty(),
            Value::Set(s) => !s.is_empty(),
        }
    }

    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Fails with `TypeError` for values that cannot be dict keys or set members.
    pub fn ensure_hashable(&self) -> Result<()> {
        match self {
            Value::List(_) | Value::Dict(_) | Value::Set(_) => Err(PrimerError::TypeError(
                format!("unhashable type: '{}'", self.type_name()),
            )),
            Value::Tuple(t) => t.iter().try_for_each(Value::ensure_hashable),
            _ => Ok(()),
        }
    }

    /// Default ordering used by `sort`, `<` and friends.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return match (a, b) {
                (Number::Int(a), Number::Int(b)) => Ok(a.cmp(&b)),
                (a, b) => a.as_f64().partial_cmp(&b.as_f64()).ok_or_else(|| {
                    PrimerError::ValueError("cannot order NaN".to_string())
                }),
            };
        }

        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
            (Value::List(a), Value::List(b)) => compare_lexicographic(a.iter(), b.iter()),
            (Value::Tuple(a), Value::Tuple(b)) => compare_lexicographic(a.iter(), b.iter()),
            _ => Err(PrimerError::TypeError(format!(
                "'<' not supported between instances of '{}' and '{}'",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    /// Developer representation, as shown inside containers.
    pub fn repr(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_repr(*f),
            Value::Str(s) => string_repr(s),
            Value::List(l) => format!("[{}]", join_repr(l.iter())),
            Value::Tuple(t) => match t.len() {
                1 => format!("({},)", join_repr(t.iter())),
                _ => format!("({})", join_repr(t.iter())),
            },
            Value::Dict(d) => {
                let body = d
                    .items()
                    .map(|(k, v)| format!("{}: {}", k.repr(), v.repr()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", body)
            }
            Value::Set(s) if s.is_empty() => "set()".to_string(),
            Value::Set(s) => format!("{{{}}}", join_repr(s.display_order().into_iter())),
        }
    }

    /// Parse a command-line literal: `None`, `True`/`False`, ints, floats,
    /// quoted or bare strings.
    pub fn parse_literal(raw: &str) -> Value {
        let trimmed = raw.trim();
        match trimmed {
            "None" => return Value::None,
            "True" => return Value::Bool(true),
            "False" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if trimmed.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(f) = trimmed.parse::<f64>() {
                return Value::Float(f);
            }
        }
        for quote in ['\'', '"'] {
            if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
                return Value::Str(trimmed[1..trimmed.len() - 1].to_string());
            }
        }
        Value::Str(raw.to_string())
    }
}

fn compare_lexicographic<'a>(
    mut left: impl Iterator<Item = &'a Value>,
    mut right: impl Iterator<Item = &'a Value>,
) -> Result<Ordering> {
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ok(Ordering::Equal),
            (None, Some(_)) => return Ok(Ordering::Less),
            (Some(_), None) => return Ok(Ordering::Greater),
            (Some(a), Some(b)) => {
                if a != b {
                    return a.compare(b);
                }
            }
        }
    }
}

fn join_repr<'a>(items: impl Iterator<Item = &'a Value>) -> String {
    items.map(Value::repr).collect::<Vec<_>>().join(", ")
}

fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let text = format!("{:?}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

fn string_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `str()` form: strings print raw, everything else uses `repr`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return match (a, b) {
                (Number::Int(a), Number::Int(b)) => a == b,
                (a, b) => a.as_f64() == b.as_f64(),
            };
        }
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            _ => false,
        }
    }
}

// NaN is the one value that breaks reflexivity, same as in the source language.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(n) = self.as_number() {
            0u8.hash(state);
            match n {
                Number::Int(i) => i.hash(state),
                Number::Float(f) if f.fract() == 0.0 && f.abs() < 9.2e18 => {
                    (f as i64).hash(state)
                }
                Number::Float(f) => f.to_bits().hash(state),
            }
            return;
        }
        match self {
            Value::None => 1u8.hash(state),
            Value::Str(s) => {
                2u8.hash(state);
                s.hash(state);
            }
            Value::Tuple(t) => {
                3u8.hash(state);
                t.len().hash(state);
                for item in t.iter() {
                    item.hash(state);
                }
            }
            // Unhashable kinds are rejected before they reach a hashed container.
            other => other.type_name().hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Sequence> for Value {
    fn from(l: Sequence) -> Self {
        Value::List(l)
    }
}

impl From<Tuple> for Value {
    fn from(t: Tuple) -> Self {
        Value::Tuple(t)
    }
}

impl From<Mapping> for Value {
    fn from(d: Mapping) -> Self {
        Value::Dict(d)
    }
}

impl From<Set> for Value {
    fn from(s: Set) -> Self {
        Value::Set(s)
    }
}

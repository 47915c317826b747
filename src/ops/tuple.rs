//! Fixed-size tuples

use crate::error::{PrimerError, Result};
use crate::ops::sequence::resolve_index;
use crate::value::Value;

/// Immutable, fixed-length sequence. There is no mutating API.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuple(Box<[Value]>);

impl Tuple {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items.into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn get(&self, index: i64) -> Result<&Value> {
        resolve_index(index, self.0.len())
            .map(|i| &self.0[i])
            .ok_or_else(|| PrimerError::IndexError("tuple index out of range".to_string()))
    }

    /// Destructure into exactly `N` values: `a, b = t`.
    pub fn unpack<const N: usize>(&self) -> Result<[Value; N]> {
        let got = self.0.len();
        if got > N {
            return Err(PrimerError::ValueError(format!(
                "too many values to unpack (expected {})",
                N
            )));
        }
        self.0.to_vec().try_into().map_err(|_| {
            PrimerError::ValueError(format!(
                "not enough values to unpack (expected {}, got {})",
                N, got
            ))
        })
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_coords() {
        let coords = Tuple::new(vec![Value::Float(10.5), Value::Float(20.3)]);
        let [cx, cy] = coords.unpack::<2>().unwrap();
        assert_eq!(cx, Value::Float(10.5));
        assert_eq!(cy, Value::Float(20.3));
    }

    #[test]
    fn test_unpack_arity_mismatch() {
        let t = Tuple::new(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let err = t.unpack::<2>().unwrap_err();
        assert_eq!(err.to_string(), "ValueError: too many values to unpack (expected 2)");
        let err = t.unpack::<4>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "ValueError: not enough values to unpack (expected 4, got 3)"
        );
    }

    #[test]
    fn test_index() {
        let single = Tuple::new(vec![Value::Int(42)]);
        assert_eq!(single.len(), 1);
        assert_eq!(single.get(-1).unwrap(), &Value::Int(42));
        assert!(single.get(1).is_err());
    }
}

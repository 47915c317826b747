//! Unique-element sets and set algebra
//!
//! Iteration order, and therefore which element `pop` returns, is
//! unspecified. Rendering sorts elements when they are mutually orderable so
//! printed output stays reproducible.

use std::collections::HashSet;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::error::{PrimerError, Result};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Set {
    items: HashSet<Value>,
}

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a literal; duplicates collapse.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut set = Self::new();
        for v in values {
            set.add(v)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// No-op if already present.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        value.ensure_hashable()?;
        self.items.insert(value);
        Ok(())
    }

    /// No-op if absent.
    pub fn discard(&mut self, value: &Value) {
        self.items.remove(value);
    }

    pub fn remove(&mut self, value: &Value) -> Result<()> {
        if self.items.remove(value) {
            Ok(())
        } else {
            Err(PrimerError::KeyError(value.repr()))
        }
    }

    /// Remove and return an arbitrary element.
    pub fn pop(&mut self) -> Result<Value> {
        // Rebuilt rather than removed by lookup: NaN never finds itself.
        let mut rest = std::mem::take(&mut self.items).into_iter();
        let picked = rest
            .next()
            .ok_or_else(|| PrimerError::KeyError("'pop from an empty set'".to_string()))?;
        self.items = rest.collect();
        Ok(picked)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn union(&self, other: &Set) -> Set {
        Set {
            items: self.items.union(&other.items).cloned().collect(),
        }
    }

    pub fn intersection(&self, other: &Set) -> Set {
        Set {
            items: self.items.intersection(&other.items).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &Set) -> Set {
        Set {
            items: self.items.difference(&other.items).cloned().collect(),
        }
    }

    pub fn symmetric_difference(&self, other: &Set) -> Set {
        Set {
            items: self
                .items
                .symmetric_difference(&other.items)
                .cloned()
                .collect(),
        }
    }

    /// Elements in the order they are printed.
    pub(crate) fn display_order(&self) -> Vec<&Value> {
        let mut ordered: Vec<&Value> = self.items.iter().collect();
        let orderable = ordered.iter().enumerate().all(|(i, a)| {
            ordered[i + 1..].iter().all(|b| a.compare(b).is_ok())
        });
        if orderable {
            ordered.sort_by(|a, b| a.compare(b).unwrap_or(std::cmp::Ordering::Equal));
        }
        ordered
    }
}

impl BitOr for &Set {
    type Output = Set;

    fn bitor(self, rhs: &Set) -> Set {
        self.union(rhs)
    }
}

impl BitAnd for &Set {
    type Output = Set;

    fn bitand(self, rhs: &Set) -> Set {
        self.intersection(rhs)
    }
}

impl Sub for &Set {
    type Output = Set;

    fn sub(self, rhs: &Set) -> Set {
        self.difference(rhs)
    }
}

impl BitXor for &Set {
    type Output = Set;

    fn bitxor(self, rhs: &Set) -> Set {
        self.symmetric_difference(rhs)
    }
}

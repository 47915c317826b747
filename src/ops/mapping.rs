//! Key-value mapping (dict) operations
//!
//! Backed by `IndexMap` so iteration follows insertion order. Deletion uses
//! `shift_remove` to keep the remaining keys in their original order.

use indexmap::IndexMap;

use crate::error::{PrimerError, Result};
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: IndexMap<Value, Value>,
}

fn missing(key: &Value) -> PrimerError {
    PrimerError::KeyError(key.repr())
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal pairs. Later duplicates overwrite earlier ones in
    /// place, like a dict display.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut mapping = Self::new();
        for (k, v) in pairs {
            mapping.set(k, v)?;
        }
        Ok(mapping)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(key)
    }

    /// `d[key]`
    pub fn get(&self, key: &Value) -> Result<&Value> {
        self.entries.get(key).ok_or_else(|| missing(key))
    }

    /// `d.get(key, default)`
    pub fn get_or(&self, key: &Value, default: Value) -> Value {
        self.entries.get(key).cloned().unwrap_or(default)
    }

    /// `d[key] = value`. Overwriting keeps the key's original position.
    pub fn set(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        key.ensure_hashable()?;
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// `del d[key]`
    pub fn delete(&mut self, key: &Value) -> Result<()> {
        self.entries
            .shift_remove(key)
            .map(|_| ())
            .ok_or_else(|| missing(key))
    }

    pub fn items(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Merge `other` in. Shared keys take the new value, new keys append.
    pub fn update(&mut self, other: &Mapping) {
        for (k, v) in other.items() {
            self.entries.insert(k.clone(), v.clone());
        }
    }

    /// Remove `key` and return its value.
    pub fn pop(&mut self, key: &Value) -> Result<Value> {
        self.entries.shift_remove(key).ok_or_else(|| missing(key))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Dict equality ignores insertion order.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .items()
                .all(|(k, v)| other.entries.get(k).is_some_and(|o| o == v))
    }
}

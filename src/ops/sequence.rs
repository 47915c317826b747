//! Ordered sequence (list) operations

use crate::error::{PrimerError, Result};
use crate::value::Value;

/// A resizable, order-preserving collection that permits duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    items: Vec<Value>,
}

/// Resolve a possibly negative index against `len`.
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { index + len } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Resolve a slice bound, clamping into `0..=len`.
fn clamp_bound(bound: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if bound < 0 { bound + len_i } else { bound };
    usize::try_from(resolved.clamp(0, len_i)).unwrap_or(len)
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn append(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Insert before `index`. Out-of-range indices clamp to either end.
    pub fn insert(&mut self, index: i64, value: impl Into<Value>) {
        let at = clamp_bound(index, self.items.len());
        self.items.insert(at, value.into());
    }

    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.items.extend(values.into_iter().map(Into::into));
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &Value) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|item| item == value)
            .ok_or_else(|| PrimerError::ValueError("list.remove(x): x not in list".to_string()))?;
        self.items.remove(pos);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<Value> {
        self.items
            .pop()
            .ok_or_else(|| PrimerError::IndexError("pop from empty list".to_string()))
    }

    pub fn pop_at(&mut self, index: i64) -> Result<Value> {
        if self.items.is_empty() {
            return Err(PrimerError::IndexError("pop from empty list".to_string()));
        }
        let at = resolve_index(index, self.items.len())
            .ok_or_else(|| PrimerError::IndexError("pop index out of range".to_string()))?;
        Ok(self.items.remove(at))
    }

    /// Position of the first element equal to `value`.
    pub fn index(&self, value: &Value) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item == value)
            .ok_or_else(|| PrimerError::ValueError(format!("{} is not in list", value.repr())))
    }

    pub fn count(&self, value: &Value) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    /// Stable sort by the default ordering. On a `TypeError` the list is
    /// left untouched.
    pub fn sort(&mut self) -> Result<()> {
        let mut sorted = self.items.clone();
        let mut failure = None;
        sorted.sort_by(|a, b| match a.compare(b) {
            Ok(ord) => ord,
            Err(e) => {
                failure.get_or_insert(e);
                std::cmp::Ordering::Equal
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }
        self.items = sorted;
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Shallow copy: nested containers are cloned by value, which is the
    /// closest owned equivalent.
    pub fn copy(&self) -> Sequence {
        self.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, index: i64) -> Result<&Value> {
        resolve_index(index, self.items.len())
            .map(|i| &self.items[i])
            .ok_or_else(|| PrimerError::IndexError("list index out of range".to_string()))
    }

    /// `seq[start:stop]` with clamped bounds.
    pub fn slice(&self, start: Option<i64>, stop: Option<i64>) -> Sequence {
        let len = self.items.len();
        let from = start.map_or(0, |s| clamp_bound(s, len));
        let to = stop.map_or(len, |s| clamp_bound(s, len));
        if from >= to {
            return Sequence::new();
        }
        self.items[from..to].iter().cloned().collect()
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Sequence {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_fruit_mutations() {
        let mut fruits = strings(&["apple", "banana", "cherry"]);
        fruits.append("date");
        fruits.insert(1, "avocado");
        fruits.extend(["elderberry", "fig"]);
        fruits.remove(&Value::from("banana")).unwrap();
        assert_eq!(
            fruits,
            strings(&["apple", "avocado", "cherry", "date", "elderberry", "fig"])
        );
        assert_eq!(fruits.pop().unwrap(), Value::from("fig"));
        assert_eq!(fruits.len(), 5);
    }

    #[test]
    fn test_remove_missing_is_value_error() {
        let mut fruits = strings(&["apple"]);
        let err = fruits.remove(&Value::from("kiwi")).unwrap_err();
        assert!(matches!(err, PrimerError::ValueError(_)));
        assert_eq!(fruits.len(), 1);
    }

    #[test]
    fn test_pop_empty_is_index_error() {
        let mut empty = Sequence::new();
        assert!(matches!(empty.pop(), Err(PrimerError::IndexError(_))));
        assert!(matches!(empty.pop_at(0), Err(PrimerError::IndexError(_))));
    }

    #[test]
    fn test_pop_at_negative() {
        let mut seq = strings(&["a", "b", "c"]);
        assert_eq!(seq.pop_at(-3).unwrap(), Value::from("a"));
        assert!(seq.pop_at(5).is_err());
    }

    #[test]
    fn test_index_and_count() {
        let seq = strings(&["a", "b", "a"]);
        assert_eq!(seq.index(&Value::from("b")).unwrap(), 1);
        assert_eq!(seq.count(&Value::from("a")), 2);
        let err = seq.index(&Value::from("z")).unwrap_err();
        assert_eq!(err.to_string(), "ValueError: 'z' is not in list");
    }

    #[test]
    fn test_insert_clamps() {
        let mut seq = strings(&["b"]);
        seq.insert(-10, "a");
        seq.insert(99, "c");
        seq.insert(-1, "x");
        assert_eq!(seq, strings(&["a", "b", "x", "c"]));
    }

    #[test]
    fn test_sort_and_reverse() {
        let mut seq = strings(&["cherry", "apple", "banana"]);
        seq.sort().unwrap();
        assert_eq!(seq, strings(&["apple", "banana", "cherry"]));
        seq.reverse();
        assert_eq!(seq, strings(&["cherry", "banana", "apple"]));
    }

    #[test]
    fn test_sort_mixed_types_leaves_list() {
        let mut seq: Sequence = vec![Value::Int(2), Value::from("a"), Value::Int(1)].into();
        let before = seq.clone();
        assert!(matches!(seq.sort(), Err(PrimerError::TypeError(_))));
        assert_eq!(seq, before);
    }

    #[test]
    fn test_get_and_slice() {
        let seq = strings(&["apple", "banana", "cherry"]);
        assert_eq!(seq.get(0).unwrap(), &Value::from("apple"));
        assert_eq!(seq.get(-1).unwrap(), &Value::from("cherry"));
        assert!(seq.get(3).is_err());
        assert_eq!(seq.slice(Some(1), Some(3)), strings(&["banana", "cherry"]));
        assert_eq!(seq.slice(Some(5), None), Sequence::new());
        assert_eq!(seq.slice(None, Some(-2)), strings(&["apple"]));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut seq = strings(&["a"]);
        let copy = seq.copy();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(copy.len(), 1);
    }
}

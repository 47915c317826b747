//! `range`, comprehensions and loop helpers

use crate::error::{PrimerError, Result};
use crate::ops::sequence::Sequence;
use crate::value::Value;

/// Arithmetic progression `start, start+step, ...` stopping before `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    next: i64,
    stop: i64,
    step: i64,
}

/// `range(stop)`
pub fn range(stop: i64) -> Range {
    Range {
        next: 0,
        stop,
        step: 1,
    }
}

/// `range(start, stop, step)`
pub fn range_step(start: i64, stop: i64, step: i64) -> Result<Range> {
    if step == 0 {
        return Err(PrimerError::ValueError(
            "range() arg 3 must not be zero".to_string(),
        ));
    }
    Ok(Range {
        next: start,
        stop,
        step,
    })
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let more = if self.step > 0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };
        if !more {
            return None;
        }
        let current = self.next;
        // Saturate past the bound so the range terminates instead of wrapping.
        self.next = current.checked_add(self.step).unwrap_or(self.stop);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let span = if self.step > 0 {
            i128::from(self.stop) - i128::from(self.next)
        } else {
            i128::from(self.next) - i128::from(self.stop)
        };
        let step = i128::from(self.step).abs();
        let len = if span <= 0 { 0 } else { (span + step - 1) / step };
        let len = usize::try_from(len).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Range {}

/// `[expr for item in source if cond]`. `map` may fail; the first failure
/// aborts the comprehension.
pub fn list_comp<I, P, F>(source: I, keep: P, map: F) -> Result<Sequence>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> Result<Value>,
{
    source
        .into_iter()
        .filter(keep)
        .map(map)
        .collect::<Result<Vec<_>>>()
        .map(Sequence::from)
}

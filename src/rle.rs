//! Run-length coding.
//!
//! Compresses a sequence into [`RunLength`] pairs via adjacent grouping and
//! expands them back. Decoding is the left inverse of encoding for every
//! finite input.

use crate::group::group_by;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `(count, value)` pair describing one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunLength<T> {
    /// Number of repetitions; positive in every encoder output.
    pub count: usize,
    /// The repeated element.
    pub value: T,
}

impl<T> RunLength<T> {
    /// Creates a new run-length pair.
    #[inline]
    pub fn new(count: usize, value: T) -> Self {
        Self { count, value }
    }
}

/// Error type for run-length decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecodeError {
    /// The total decoded length does not fit in `usize`.
    LengthOverflow,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::LengthOverflow => {
                write!(f, "total decoded length exceeds usize::MAX")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Counts how often each distinct element occurs.
///
/// The map is ordered by key, so iteration order is deterministic.
///
/// `count_occurrences([1,2,2,3,2]) == {1: 1, 2: 3, 3: 1}`
pub fn count_occurrences<T>(xs: &[T]) -> BTreeMap<T, usize>
where
    T: Clone + Ord,
{
    let mut counts = BTreeMap::new();
    for x in xs {
        *counts.entry(x.clone()).or_insert(0) += 1;
    }
    counts
}

/// Run-length encodes `xs` using `pred` as the run-adjacency relation.
///
/// Each maximal run found by adjacent grouping becomes one pair holding the
/// run's length and its first element.
pub fn run_length_encode_by<T, P>(pred: P, xs: &[T]) -> Vec<RunLength<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> bool,
{
    group_by(pred, xs)
        .into_iter()
        .map(|mut run| {
            let count = run.len();
            RunLength::new(count, run.swap_remove(0))
        })
        .collect()
}

/// Run-length encodes `xs` using plain equality.
///
/// `run_length_encode([1,2,2,2,2,3,3,2]) == [(1,1),(4,2),(2,3),(1,2)]`
pub fn run_length_encode<T>(xs: &[T]) -> Vec<RunLength<T>>
where
    T: Clone + PartialEq,
{
    run_length_encode_by(|a, b| a == b, xs)
}

/// Expands run-length pairs back into a flat sequence.
///
/// The total length is checked before any output is built; an overflowing
/// sum fails with [`DecodeError::LengthOverflow`] rather than truncating.
/// For every `xs`, `run_length_decode(&run_length_encode(&xs)) == Ok(xs)`.
pub fn run_length_decode<T>(pairs: &[RunLength<T>]) -> Result<Vec<T>, DecodeError>
where
    T: Clone,
{
    let mut total: usize = 0;
    for pair in pairs {
        total = total
            .checked_add(pair.count)
            .ok_or(DecodeError::LengthOverflow)?;
    }
    let mut out = Vec::with_capacity(total);
    for pair in pairs {
        out.extend(std::iter::repeat(pair.value.clone()).take(pair.count));
    }
    Ok(out)
}

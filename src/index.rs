//! Index-based splitting.
//!
//! Cuts sequences at explicit positions: a single binary cut
//! ([`split_at_idx`]), a predicate partition ([`partition`]), an arbitrary
//! cut-point set ([`split_at_idxs`]) and fixed-size chunking
//! ([`split_every`]).
//!
//! Precondition violations (an index past the end, a zero chunk size) are
//! typed errors, never silent truncation; an invalid call is always
//! distinguishable from an empty-but-valid result.

use serde::{Deserialize, Serialize};

/// Error type for index-based splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexError {
    /// A cut index lies beyond the end of the sequence.
    OutOfRange {
        /// The offending index.
        idx: usize,
        /// Length of the sequence being cut.
        len: usize,
    },
    /// `split_every` was asked for chunks of size zero.
    ZeroChunkSize,
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::OutOfRange { idx, len } => {
                write!(f, "cut index {} is out of range for length {}", idx, len)
            }
            IndexError::ZeroChunkSize => write!(f, "chunk size must be at least 1"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Splits `xs` into the prefix before `idx` and the suffix from `idx` on.
///
/// `idx` may equal `xs.len()` (the suffix is then empty); anything larger
/// is an [`IndexError::OutOfRange`].
///
/// `split_at_idx(2, [0,1,2,3,4]) == ([0,1], [2,3,4])`
pub fn split_at_idx<T>(idx: usize, xs: &[T]) -> Result<(Vec<T>, Vec<T>), IndexError>
where
    T: Clone,
{
    if idx > xs.len() {
        return Err(IndexError::OutOfRange { idx, len: xs.len() });
    }
    Ok((xs[..idx].to_vec(), xs[idx..].to_vec()))
}

/// Separates `xs` into the elements satisfying `pred` and the rest, both in
/// original order.
///
/// `partition(is_even, [0,1,1,3,7,2,3,4]) == ([0,2,4], [1,1,3,7,3])`
pub fn partition<T, P>(pred: P, xs: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut not_matching = Vec::new();
    for x in xs {
        if pred(x) {
            matching.push(x.clone());
        } else {
            not_matching.push(x.clone());
        }
    }
    (matching, not_matching)
}

/// Splits `xs` at every index in `idxs`.
///
/// The cut set is normalized by adding the boundaries `0` and `xs.len()`
/// and sorting ascending with duplicates retained; one chunk is emitted per
/// consecutive boundary pair, so a duplicated cut index produces an empty
/// chunk at that position.
///
/// ```
/// use seqpart::split_at_idxs;
/// let chunks = split_at_idxs(&[2, 5, 5], &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
/// assert_eq!(chunks, vec![vec![0, 1], vec![2, 3, 4], vec![], vec![5, 6, 7]]);
/// ```
pub fn split_at_idxs<T>(idxs: &[usize], xs: &[T]) -> Result<Vec<Vec<T>>, IndexError>
where
    T: Clone,
{
    for &idx in idxs {
        if idx > xs.len() {
            return Err(IndexError::OutOfRange { idx, len: xs.len() });
        }
    }
    let mut cuts = Vec::with_capacity(idxs.len() + 2);
    cuts.push(0);
    cuts.extend_from_slice(idxs);
    cuts.push(xs.len());
    cuts.sort_unstable();

    // Output length is known up front: one chunk per boundary pair.
    let mut result = Vec::with_capacity(cuts.len() - 1);
    for pair in cuts.windows(2) {
        result.push(xs[pair[0]..pair[1]].to_vec());
    }
    Ok(result)
}

/// Splits `xs` into chunks of `n` elements; the final chunk may be shorter.
///
/// `n` must be at least 1, else [`IndexError::ZeroChunkSize`].
///
/// `split_every(3, [0,1,2,3,4,5,6,7]) == [[0,1,2],[3,4,5],[6,7]]`
pub fn split_every<T>(n: usize, xs: &[T]) -> Result<Vec<Vec<T>>, IndexError>
where
    T: Clone,
{
    if n == 0 {
        return Err(IndexError::ZeroChunkSize);
    }
    let cuts: Vec<usize> = (n..xs.len()).step_by(n).collect();
    split_at_idxs(&cuts, xs)
}

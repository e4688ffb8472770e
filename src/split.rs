//! Predicate-based splitting.
//!
//! Cuts a sequence into runs separated by elements matching a predicate,
//! either consuming the separators ([`split_by`]) or keeping each one as
//! the head of the following chunk ([`split_by_keep_separators`]), plus the
//! prefix scanners [`span`], [`take_while`] and [`drop_while`].
//!
//! # Invariants
//! - `split_by_keep_separators` never drops an element: concatenating its
//!   output reproduces the input exactly.
//! - `split_by` reproduces the input minus the separator elements.

use crate::predicate::is_equal_to;

/// Splits `xs` at every element satisfying `pred`, consuming separators.
///
/// With `allow_empty` set, zero-length runs between consecutive separators
/// are emitted as empty chunks, including the empty chunk after a trailing
/// separator; with it unset they are omitted. An empty input with
/// `allow_empty` set yields one empty chunk, not zero chunks.
///
/// ```
/// use seqpart::split_by;
/// let is_even = |x: &i32| x % 2 == 0;
/// assert_eq!(
///     split_by(is_even, true, &[1, 3, 2, 2, 5, 5, 3, 6, 7, 9]),
///     vec![vec![1, 3], vec![], vec![5, 5, 3], vec![7, 9]],
/// );
/// ```
pub fn split_by<T, P>(pred: P, allow_empty: bool, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    if allow_empty && xs.is_empty() {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    let mut start = 0;
    while start < xs.len() {
        let stop = xs[start..]
            .iter()
            .position(&pred)
            .map_or(xs.len(), |off| start + off);
        if start != stop || allow_empty {
            result.push(xs[start..stop].to_vec());
        }
        if stop == xs.len() {
            break;
        }
        start = stop + 1;
        if allow_empty && start == xs.len() {
            // Trailing separator: the run after it is empty but mandatory.
            result.push(Vec::new());
        }
    }
    result
}

/// Splits at elements equal to `x`, consuming separators.
///
/// `split(0, false, [1,3,2,0,0,6,0,7,5]) == [[1,3,2],[6],[7,5]]`
pub fn split<T>(x: T, allow_empty: bool, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    split_by(is_equal_to(x), allow_empty, xs)
}

/// Splits `xs` at elements satisfying `pred`, keeping each separator as the
/// first element of the chunk it opens.
///
/// The first chunk carries no separator. Empty input yields an empty
/// result. No element is dropped.
///
/// ```
/// use seqpart::split_by_keep_separators;
/// let is_even = |x: &i32| x % 2 == 0;
/// assert_eq!(
///     split_by_keep_separators(is_even, &[1, 3, 2, 2, 5, 5, 3, 6, 7, 9]),
///     vec![vec![1, 3], vec![2], vec![2, 5, 5, 3], vec![6, 7, 9]],
/// );
/// ```
pub fn split_by_keep_separators<T, P>(pred: P, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut result = Vec::new();
    if xs.is_empty() {
        return result;
    }
    let mut start = 0;
    while start < xs.len() {
        // Search begins one past the chunk head, so a separator opening the
        // chunk does not immediately terminate it.
        let stop = xs[start + 1..]
            .iter()
            .position(&pred)
            .map_or(xs.len(), |off| start + 1 + off);
        result.push(xs[start..stop].to_vec());
        if stop == xs.len() {
            break;
        }
        start = stop;
    }
    result
}

/// Splits at elements equal to `x`, keeping separators.
pub fn split_keep_separators<T>(x: T, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    split_by_keep_separators(is_equal_to(x), xs)
}

/// Returns the longest prefix of `xs` satisfying `pred` and the remainder.
///
/// `span(is_even, [0,2,4,5,6,7,8]) == ([0,2,4], [5,6,7,8])`
pub fn span<T, P>(pred: P, xs: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let idx = xs.iter().position(|x| !pred(x)).unwrap_or(xs.len());
    (xs[..idx].to_vec(), xs[idx..].to_vec())
}

/// Returns the longest prefix of `xs` satisfying `pred`.
pub fn take_while<T, P>(pred: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    span(pred, xs).0
}

/// Drops the longest prefix of `xs` satisfying `pred`.
pub fn drop_while<T, P>(pred: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    span(pred, xs).1
}

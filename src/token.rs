//! Token-based splitting.
//!
//! Like predicate splitting, but the separator is a multi-element
//! sub-sequence: [`split_by_token`] cuts at every non-overlapping
//! occurrence of the token, found leftmost-first.

/// Indices where `token` occurs in `xs`, leftmost-first and non-overlapping.
///
/// An empty token occurs nowhere.
fn token_occurrences<T>(token: &[T], xs: &[T]) -> Vec<usize>
where
    T: PartialEq,
{
    let mut begins = Vec::new();
    if token.is_empty() {
        return begins;
    }
    let mut i = 0;
    while i + token.len() <= xs.len() {
        if xs[i..i + token.len()] == *token {
            begins.push(i);
            // Skip past the match so occurrences never overlap.
            i += token.len();
        } else {
            i += 1;
        }
    }
    begins
}

/// Splits `xs` at every non-overlapping occurrence of `token`.
///
/// The token itself is excluded from the output. Zero-length chunks between
/// adjacent occurrences (or at either end) are honored or dropped per
/// `allow_empty`, the same way `split_by` treats them; an empty token
/// matches nowhere, so the whole input comes back as a single chunk.
///
/// ```
/// use seqpart::split_by_token;
/// let chunks = split_by_token(b", ", false, b"foo, bar, baz");
/// assert_eq!(chunks, vec![b"foo".to_vec(), b"bar".to_vec(), b"baz".to_vec()]);
/// ```
pub fn split_by_token<T>(token: &[T], allow_empty: bool, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    let begins = token_occurrences(token, xs);
    let mut result = Vec::with_capacity(begins.len() + 1);
    let mut start = 0;
    for &begin in &begins {
        if begin != start || allow_empty {
            result.push(xs[start..begin].to_vec());
        }
        start = begin + token.len();
    }
    if start != xs.len() || allow_empty {
        result.push(xs[start..].to_vec());
    }
    result
}

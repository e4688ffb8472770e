//! Adjacent and global grouping.
//!
//! Adjacent grouping ([`group_by`]) collects maximal runs of consecutive
//! related elements in a single O(n) scan. Global grouping
//! ([`group_globally_by`]) drops the contiguity requirement and gathers
//! related elements into buckets regardless of position, in O(n²).
//!
//! # Invariants
//! - Every emitted run/bucket is non-empty.
//! - Concatenating `group_by`'s output reproduces the input unchanged.
//! - `group_globally_by` reproduces the input's elements (bucket order =
//!   first-occurrence order, within-bucket order = input order), but not
//!   necessarily the overall input order.

use crate::predicate::is_equal_by;

/// Groups consecutive elements related by the binary predicate `p`.
///
/// Each element is tested against the *last* element of the currently open
/// run, not the first; this matters because `p` need not be transitive.
/// An empty input yields an empty result.
///
/// ```
/// use seqpart::group_by;
/// let runs = group_by(|a: &i32, b: &i32| a == b, &[1, 2, 2, 2, 3, 2, 2, 4, 5, 5]);
/// assert_eq!(runs, vec![vec![1], vec![2, 2, 2], vec![3], vec![2, 2], vec![4], vec![5, 5]]);
/// ```
pub fn group_by<T, P>(p: P, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> bool,
{
    let mut runs: Vec<Vec<T>> = Vec::new();
    for x in xs {
        if let Some(run) = runs.last_mut() {
            if p(&run[run.len() - 1], x) {
                run.push(x.clone());
                continue;
            }
        }
        runs.push(vec![x.clone()]);
    }
    runs
}

/// Groups consecutive elements whose projections under `f` are equal.
///
/// `group_on(|x| x % 10, [12, 22, 34]) == [[12, 22], [34]]`
pub fn group_on<T, K, F>(f: F, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    group_by(is_equal_by(f), xs)
}

/// Groups consecutive equal elements.
pub fn group<T>(xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    group_by(|a, b| a == b, xs)
}

/// Groups related elements regardless of position.
///
/// Each element is compared against the *last element currently in each
/// existing bucket, in bucket-creation order*, and joins the first bucket
/// that matches; if none does, it starts a new bucket. For non-transitive
/// predicates the result therefore depends on insertion order; that rule
/// is deliberate and kept as-is.
///
/// O(n²) worst case: one predicate call per existing bucket per element.
///
/// ```
/// use seqpart::group_globally_by;
/// let buckets = group_globally_by(|a: &i32, b: &i32| a == b, &[1, 2, 2, 2, 3, 2, 2, 4, 5, 5]);
/// assert_eq!(buckets, vec![vec![1], vec![2, 2, 2, 2, 2], vec![3], vec![4], vec![5, 5]]);
/// ```
pub fn group_globally_by<T, P>(p: P, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> bool,
{
    let mut buckets: Vec<Vec<T>> = Vec::new();
    for x in xs {
        let mut found = false;
        for bucket in buckets.iter_mut() {
            if p(x, &bucket[bucket.len() - 1]) {
                bucket.push(x.clone());
                found = true;
                break;
            }
        }
        if !found {
            buckets.push(vec![x.clone()]);
        }
    }
    buckets
}

/// Globally groups elements whose projections under `f` are equal.
///
/// `group_globally_on(|x| x % 10, [12, 34, 22]) == [[12, 22], [34]]`
pub fn group_globally_on<T, K, F>(f: F, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    group_globally_by(is_equal_by(f), xs)
}

/// Globally groups equal elements.
pub fn group_globally<T>(xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    group_globally_by(|a, b| a == b, xs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_runs() {
        let xs = [1, 2, 2, 2, 3, 2, 2, 4, 5, 5];
        let expected = vec![
            vec![1],
            vec![2, 2, 2],
            vec![3],
            vec![2, 2],
            vec![4],
            vec![5, 5],
        ];
        assert_eq!(group_by(|a, b| a == b, &xs), expected);
        assert_eq!(group(&xs), expected);
    }

    #[test]
    fn group_by_empty_input() {
        let runs: Vec<Vec<i32>> = group(&[]);
        assert!(runs.is_empty());
    }

    #[test]
    fn group_by_singleton() {
        assert_eq!(group(&[7]), vec![vec![7]]);
    }

    #[test]
    fn group_by_all_equal() {
        assert_eq!(group(&[4, 4, 4]), vec![vec![4, 4, 4]]);
    }

    #[test]
    fn group_by_compares_against_run_last() {
        // Non-transitive adjacency: |a - b| <= 1 chains 1,2,3 into one run
        // because each element is checked against the run's last, not first.
        let runs = group_by(|a: &i32, b: &i32| (a - b).abs() <= 1, &[1, 2, 3, 5]);
        assert_eq!(runs, vec![vec![1, 2, 3], vec![5]]);
    }

    #[test]
    fn group_by_concat_reproduces_input() {
        let xs = [9, 9, 1, 1, 1, 2, 9];
        let flat: Vec<i32> = group(&xs).into_iter().flatten().collect();
        assert_eq!(flat, xs);
    }

    #[test]
    fn group_on_projection() {
        assert_eq!(group_on(|x: &i32| x % 10, &[12, 22, 34]), vec![vec![12, 22], vec![34]]);
    }

    #[test]
    fn group_globally_merges_separated_elements() {
        let xs = [1, 2, 2, 2, 3, 2, 2, 4, 5, 5];
        let expected = vec![vec![1], vec![2, 2, 2, 2, 2], vec![3], vec![4], vec![5, 5]];
        assert_eq!(group_globally(&xs), expected);
    }

    #[test]
    fn group_globally_on_projection() {
        assert_eq!(
            group_globally_on(|x: &i32| x % 10, &[12, 34, 22]),
            vec![vec![12, 22], vec![34]]
        );
    }

    #[test]
    fn group_globally_bucket_order_is_first_occurrence() {
        let buckets = group_globally(&[3, 1, 3, 2, 1]);
        assert_eq!(buckets, vec![vec![3, 3], vec![1, 1], vec![2]]);
    }

    #[test]
    fn group_globally_empty_input() {
        let buckets: Vec<Vec<i32>> = group_globally(&[]);
        assert!(buckets.is_empty());
    }

    #[test]
    fn group_globally_preserves_multiset() {
        let xs = [5, 3, 5, 3, 5, 1];
        let mut flat: Vec<i32> = group_globally(&xs).into_iter().flatten().collect();
        let mut orig = xs.to_vec();
        flat.sort_unstable();
        orig.sort_unstable();
        assert_eq!(flat, orig);
    }
}

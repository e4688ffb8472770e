//! Seqpart: a sequence partitioning and clustering engine.
//!
//! This crate partitions an ordered sequence into sub-sequences according
//! to a caller-supplied predicate or equality notion:
//! - Adjacent grouping of consecutive related elements ([`group_by`]).
//! - Global grouping of related elements regardless of position
//!   ([`group_globally_by`]).
//! - Connected-component clustering under a symmetric, reflexive, possibly
//!   non-transitive connectivity predicate ([`cluster_by`]).
//! - Splitting at separator elements ([`split_by`],
//!   [`split_by_keep_separators`]), explicit indices ([`split_at_idxs`],
//!   [`split_every`]) or multi-element tokens ([`split_by_token`]).
//! - Run-length coding ([`run_length_encode`], [`run_length_decode`]).
//!
//! All operations are pure, synchronous, and deterministic given a
//! deterministic predicate: they allocate fresh output, never mutate their
//! inputs, and share no state, so independent sequences may be processed
//! from multiple threads without synchronization.
//!
//! Order contracts: grouping and splitting preserve input order, and
//! concatenating their output reproduces the input (minus consumed
//! separators, where applicable). Global grouping and clustering reproduce
//! the input's elements but reorder them by bucket/cluster.
//!
//! Precondition violations (out-of-range cut index, zero chunk size,
//! unrepresentable decoded length) surface as typed errors; degenerate
//! inputs such as empty sequences are valid and follow the documented
//! per-operation policies.
//!
//! # Example
//!
//! ```
//! use seqpart::prelude::*;
//!
//! let clusters = cluster_by(|a: &i32, b: &i32| (a - b).abs() <= 3,
//!                           &[2, 3, 6, 4, 12, 11, 20, 23, 8, 4]);
//! assert_eq!(clusters, vec![vec![2, 3, 6, 4, 12, 11, 8, 4], vec![20, 23]]);
//! ```

pub mod cluster;
pub mod group;
pub mod index;
pub mod predicate;
pub mod rle;
pub mod split;
pub mod token;

pub use cluster::cluster_by;
pub use group::{group, group_by, group_globally, group_globally_by, group_globally_on, group_on};
pub use index::{partition, split_at_idx, split_at_idxs, split_every, IndexError};
pub use predicate::{is_equal_by, is_equal_to, logical_not};
pub use rle::{
    count_occurrences, run_length_decode, run_length_encode, run_length_encode_by, DecodeError,
    RunLength,
};
pub use split::{
    drop_while, span, split, split_by, split_by_keep_separators, split_keep_separators, take_while,
};
pub use token::split_by_token;

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::cluster::cluster_by;
    pub use crate::group::{
        group, group_by, group_globally, group_globally_by, group_globally_on, group_on,
    };
    pub use crate::index::{partition, split_at_idx, split_at_idxs, split_every, IndexError};
    pub use crate::predicate::{is_equal_by, is_equal_to, logical_not};
    pub use crate::rle::{
        count_occurrences, run_length_decode, run_length_encode, run_length_encode_by,
        DecodeError, RunLength,
    };
    pub use crate::split::{
        drop_while, span, split, split_by, split_by_keep_separators, split_keep_separators,
        take_while,
    };
    pub use crate::token::split_by_token;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use proptest::prelude::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    /// The literal scenarios every reimplementation must reproduce.
    #[test]
    fn reference_scenarios() {
        assert_eq!(
            group_by(|a: &i32, b: &i32| a == b, &[1, 2, 2, 2, 3, 2, 2, 4, 5, 5]),
            vec![vec![1], vec![2, 2, 2], vec![3], vec![2, 2], vec![4], vec![5, 5]],
        );
        assert_eq!(
            split_by(is_even, true, &[1, 3, 2, 2, 5, 5, 3, 6, 7, 9]),
            vec![vec![1, 3], vec![], vec![5, 5, 3], vec![7, 9]],
        );
        assert_eq!(
            split_at_idxs(&[2, 5, 5], &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap(),
            vec![vec![0, 1], vec![2, 3, 4], vec![], vec![5, 6, 7]],
        );
        assert_eq!(
            split_every(3, &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap(),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7]],
        );
        let clusters = cluster_by(
            |a: &i32, b: &i32| (a - b).abs() <= 3,
            &[2, 3, 6, 4, 12, 11, 20, 23, 8, 4],
        );
        // Within-cluster order is ascending original index.
        assert_eq!(clusters, vec![vec![2, 3, 6, 4, 12, 11, 8, 4], vec![20, 23]]);
        assert_eq!(
            run_length_encode(&[1, 2, 2, 2, 2, 3, 3, 2]),
            vec![
                RunLength::new(1, 1),
                RunLength::new(4, 2),
                RunLength::new(2, 3),
                RunLength::new(1, 2),
            ],
        );
    }

    /// Adapters compose with the algorithms the way the fixed-value
    /// wrappers do internally.
    #[test]
    fn adapters_compose() {
        assert_eq!(
            group_by(is_equal_by(|x: &i32| x % 10), &[12, 22, 34]),
            group_on(|x: &i32| x % 10, &[12, 22, 34]),
        );
        assert_eq!(
            split_by(is_equal_to(0), false, &[1, 0, 2]),
            split(0, false, &[1, 0, 2]),
        );
        let not_even = logical_not(is_even);
        let (evens, odds) = partition(is_even, &[1, 2, 3, 4]);
        let (odds2, evens2) = partition(not_even, &[1, 2, 3, 4]);
        assert_eq!(evens, evens2);
        assert_eq!(odds, odds2);
    }

    /// Re-grouping the concatenation of `group_by`'s output with the same
    /// adjacency-stable relation yields the same partition.
    #[test]
    fn grouping_boundaries_idempotent() {
        let xs = [1, 1, 2, 3, 3, 3, 2];
        let once = group(&xs);
        let flat: Vec<i32> = once.clone().into_iter().flatten().collect();
        assert_eq!(group(&flat), once);
    }

    proptest! {
        #[test]
        fn group_by_concat_preserves_order(xs in prop::collection::vec(0i32..5, 0..64)) {
            let flat: Vec<i32> = group(&xs).into_iter().flatten().collect();
            prop_assert_eq!(flat, xs);
        }

        #[test]
        fn group_by_runs_are_nonempty_and_maximal(xs in prop::collection::vec(0i32..4, 0..64)) {
            let runs = group(&xs);
            for pair in runs.windows(2) {
                prop_assert!(!pair[0].is_empty());
                // Adjacent runs must not be mergeable.
                prop_assert_ne!(&pair[0][pair[0].len() - 1], &pair[1][0]);
            }
        }

        #[test]
        fn split_by_concat_restores_non_separators(
            xs in prop::collection::vec(0i32..10, 0..64),
        ) {
            let flat: Vec<i32> = split_by(is_even, true, &xs).into_iter().flatten().collect();
            let expected: Vec<i32> = xs.iter().copied().filter(|x| !is_even(x)).collect();
            prop_assert_eq!(flat, expected);
        }

        #[test]
        fn keep_separators_concat_is_identity(
            xs in prop::collection::vec(0i32..10, 0..64),
        ) {
            let flat: Vec<i32> = split_by_keep_separators(is_even, &xs)
                .into_iter()
                .flatten()
                .collect();
            prop_assert_eq!(flat, xs);
        }

        #[test]
        fn split_at_idxs_concat_is_identity(
            xs in prop::collection::vec(0i32..100, 0..64),
            cuts in prop::collection::vec(0usize..65, 0..8),
        ) {
            let cuts: Vec<usize> = cuts.into_iter().filter(|&c| c <= xs.len()).collect();
            let flat: Vec<i32> = split_at_idxs(&cuts, &xs)
                .unwrap()
                .into_iter()
                .flatten()
                .collect();
            prop_assert_eq!(flat, xs);
        }

        #[test]
        fn split_every_concat_is_identity(
            xs in prop::collection::vec(0i32..100, 0..64),
            n in 1usize..10,
        ) {
            let chunks = split_every(n, &xs).unwrap();
            for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
                prop_assert_eq!(chunk.len(), n);
            }
            let flat: Vec<i32> = chunks.into_iter().flatten().collect();
            prop_assert_eq!(flat, xs);
        }

        #[test]
        fn split_by_token_rebuild_is_identity(
            xs in prop::collection::vec(0i32..4, 0..48),
        ) {
            // Re-weaving the chunks with the token restores the input, since
            // the scan is leftmost-first and non-overlapping.
            let token = [0, 1];
            let chunks = split_by_token(&token, true, &xs);
            let mut rebuilt: Vec<i32> = Vec::new();
            for (i, chunk) in chunks.iter().enumerate() {
                if i > 0 {
                    rebuilt.extend_from_slice(&token);
                }
                rebuilt.extend_from_slice(chunk);
            }
            prop_assert_eq!(rebuilt, xs);
        }

        #[test]
        fn partition_is_complete(xs in prop::collection::vec(-50i32..50, 0..64)) {
            let (matching, rest) = partition(is_even, &xs);
            prop_assert!(matching.iter().all(is_even));
            prop_assert!(rest.iter().all(|x| !is_even(x)));
            let mut merged = matching.clone();
            merged.extend_from_slice(&rest);
            merged.sort_unstable();
            let mut orig = xs.clone();
            orig.sort_unstable();
            prop_assert_eq!(merged, orig);
        }

        #[test]
        fn cluster_by_covers_every_index(xs in prop::collection::vec(0i32..30, 0..32)) {
            let clusters = cluster_by(|a: &i32, b: &i32| (a - b).abs() <= 2, &xs);
            let total: usize = clusters.iter().map(Vec::len).sum();
            prop_assert_eq!(total, xs.len());
            // Within each cluster, elements appear in ascending original
            // index order, so each cluster is a subsequence of the input.
            for cluster in &clusters {
                let mut pos = 0;
                for value in cluster {
                    match xs[pos..].iter().position(|x| x == value) {
                        Some(off) => pos += off + 1,
                        None => prop_assert!(false, "cluster is not a subsequence"),
                    }
                }
            }
        }

        #[test]
        fn run_length_round_trip(xs in prop::collection::vec(0i32..6, 0..64)) {
            let decoded = run_length_decode(&run_length_encode(&xs));
            prop_assert_eq!(decoded, Ok(xs));
        }

        #[test]
        fn count_occurrences_totals_match(xs in prop::collection::vec(0i32..8, 0..64)) {
            let counts = count_occurrences(&xs);
            let total: usize = counts.values().sum();
            prop_assert_eq!(total, xs.len());
            for (value, count) in &counts {
                prop_assert_eq!(*count, xs.iter().filter(|x| *x == value).count());
            }
        }
    }
}

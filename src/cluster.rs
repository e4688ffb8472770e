//! Graph-based clustering.
//!
//! [`cluster_by`] computes the connected components of the graph whose
//! vertices are the input's indices and whose edges are given by a
//! connectivity predicate. The predicate is expected to be commutative and
//! reflexive; it need not be transitive.
//!
//! # Determinism
//! - Clusters are emitted in the order their seed index is first reached
//!   while scanning `0..n`.
//! - Within a cluster, indices are sorted ascending before mapping back to
//!   values, so discovery order never leaks into the output.
//!
//! # Invariants
//! - Every input index lands in exactly one cluster.
//! - The adjacency matrix is O(n²) in time and space; this bounds the
//!   practical input size.

/// Dense adjacency matrix over input indices, row-major.
struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Evaluates `p` on every ordered pair of elements.
    fn build<T, P>(p: &P, xs: &[T]) -> Self
    where
        P: Fn(&T, &T) -> bool,
    {
        let n = xs.len();
        let mut cells = vec![false; n * n];
        for (i, a) in xs.iter().enumerate() {
            for (j, b) in xs.iter().enumerate() {
                cells[i * n + j] = p(a, b);
            }
        }
        Self { n, cells }
    }

    #[inline]
    fn connected(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }
}

/// Clusters elements into connected components under `p`.
///
/// `p` is a connectivity check, assumed commutative and reflexive but not
/// necessarily transitive. Component absorption uses an explicit worklist
/// stack rather than recursion, so deeply connected inputs cannot overflow
/// the call stack; traversal order is irrelevant because each finished
/// cluster is index-sorted before values are emitted.
///
/// ```
/// use seqpart::cluster_by;
/// let clusters = cluster_by(|a: &i32, b: &i32| (a - b).abs() <= 3, &[2, 3, 6, 4, 12, 11, 20, 23, 8, 4]);
/// assert_eq!(clusters, vec![vec![2, 3, 6, 4, 12, 11, 8, 4], vec![20, 23]]);
/// ```
pub fn cluster_by<T, P>(p: P, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    P: Fn(&T, &T) -> bool,
{
    let n = xs.len();
    let adj = AdjacencyMatrix::build(&p, xs);
    let mut used = vec![false; n];
    let mut idx_clusters: Vec<Vec<usize>> = Vec::new();

    for seed in 0..n {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut cluster = vec![seed];
        let mut stack = vec![seed];
        while let Some(focus) = stack.pop() {
            for j in 0..n {
                if !used[j] && adj.connected(focus, j) {
                    // Marked used as soon as discovered so a later cluster
                    // can never absorb it again.
                    used[j] = true;
                    cluster.push(j);
                    stack.push(j);
                }
            }
        }
        cluster.sort_unstable();
        idx_clusters.push(cluster);
    }

    idx_clusters
        .into_iter()
        .map(|idxs| idxs.into_iter().map(|i| xs[i].clone()).collect())
        .collect()
}

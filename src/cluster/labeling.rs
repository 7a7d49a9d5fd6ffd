//! Cluster ids shared by both clusterers.
//!
//! A cluster is identified by the smallest point index it contains. Every point starts in
//! its own singleton cluster; [`ClusterLabeling::merge`] unifies two clusters and the lower
//! id survives. Because of that rule, each cluster has exactly one *representative*: the
//! member whose index equals the cluster id.

use log::trace;

use super::util::UnionFind;

/// Point index → cluster id, mutated only through merges.
#[derive(Clone, Debug)]
pub struct ClusterLabeling {
    forest: UnionFind,
    merges: usize,
}

impl ClusterLabeling {
    /// `n` singleton clusters, point `i` carrying id `i`.
    pub fn new(n: usize) -> Self {
        Self {
            forest: UnionFind::new(n),
            merges: 0,
        }
    }

    /// Number of labeled points.
    pub fn len(&self) -> usize {
        self.forest.len()
    }

    /// True when no points are labeled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cluster id of `point`.
    ///
    /// Takes `&mut self` because lookups compress paths; the returned id is always the lowest
    /// index among the point's cluster mates.
    pub fn id(&mut self, point: usize) -> usize {
        self.forest.find(point)
    }

    /// Unify the clusters identified by `a` and `b`. Returns the surviving id, `min(a, b)`.
    ///
    /// Both arguments must be current cluster ids (as returned by [`id`](Self::id)). Merging
    /// an id with itself is a no-op.
    pub fn merge(&mut self, a: usize, b: usize) -> usize {
        debug_assert_eq!(self.forest.parent[a], a, "{a} is not a cluster id");
        debug_assert_eq!(self.forest.parent[b], b, "{b} is not a cluster id");
        if a == b {
            return a;
        }
        let kept = self.forest.union_roots(a, b);
        self.merges += 1;
        trace!("merged cluster {} into {}", a.max(b), kept);
        kept
    }

    /// Put points `i` and `j` in the same cluster. Returns the surviving id.
    pub fn join(&mut self, i: usize, j: usize) -> usize {
        let a = self.id(i);
        let b = self.id(j);
        self.merge(a, b)
    }

    /// True if `i` and `j` currently share a cluster.
    pub fn same_cluster(&mut self, i: usize, j: usize) -> bool {
        self.id(i) == self.id(j)
    }

    /// Number of merges that changed the partition so far.
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    /// Points whose index equals their cluster id, ascending.
    pub fn representatives(&mut self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.id(i) == i).collect()
    }

    /// The cluster indicator array: `labels[i]` is the id of point `i`'s cluster.
    pub fn into_labels(mut self) -> Vec<usize> {
        (0..self.len()).map(|i| self.id(i)).collect()
    }
}

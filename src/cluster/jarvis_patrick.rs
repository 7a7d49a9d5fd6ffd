//! Jarvis-Patrick: shared-near-neighbor clustering.
//!
//! # The Algorithm (Jarvis & Patrick, 1973)
//!
//! Two points belong to the same cluster if
//!
//! 1. each is in the other's list of `m` nearest neighbors, **and**
//! 2. their two lists share at least `p` neighbors.
//!
//! Clusters are the transitive closure of that pairwise relation.
//!
//! ## Neighbor lists
//!
//! Each point keeps its `m` closest other points, ascending by distance. The relation is not
//! symmetric: `j` may be among `i`'s nearest neighbors while `i` is not among `j`'s, which is
//! why condition 1 checks both directions. When the dataset has `m` points or fewer, the
//! trailing slots of every list stay vacant (infinitely far, matching no point).
//!
//! Ties in distance are resolved by evaluation order: the first point seen keeps its place,
//! and a later point at an equal distance never evicts it.
//!
//! ## Shared neighbors
//!
//! When counting the overlap of the lists of `i` and `j`, the pair itself is excluded: `j`
//! in `i`'s list and `i` in `j`'s list are what condition 1 is about, not shared neighbors.
//!
//! ## Complexity
//!
//! - **Time**: O(n² · m) to build the lists, O(n² · m²) worst case for the pair pass.
//! - **Space**: O(n · m).
//!
//! ## Choosing parameters
//!
//! [`NeighborIndex::sorted_k_distances`] produces sorted k-distance curves; a knee in the
//! curve for a given `k` suggests a natural neighborhood scale for `m`.
//!
//! ## References
//!
//! Jarvis, R. A., Patrick, E. A. (1973). "Clustering Using a Similarity Measure Based on
//! Shared Near Neighbors." IEEE Transactions on Computers C-22(11), 1025–1034.

use log::{debug, info};

use super::labeling::ClusterLabeling;
use super::metric::{Euclidean, Metric};
use super::report::ClusterReport;
use super::traits::Clustering;
use super::util;
use crate::error::{Error, Result};

/// A held neighbor: point index and its distance from the list's owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the neighboring point.
    pub index: usize,
    /// Distance from the owning point.
    pub distance: f32,
}

/// Bounded nearest-neighbor list, ascending by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborList {
    capacity: usize,
    entries: Vec<Neighbor>,
}

impl NeighborList {
    /// An empty list holding at most `capacity` neighbors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Offer a candidate. Returns `true` if it was kept.
    ///
    /// The candidate is kept if a slot is vacant or if it is strictly closer than the
    /// farthest held neighbor, which is then evicted. Among equal distances, earlier
    /// candidates stay in front.
    pub fn offer(&mut self, index: usize, distance: f32) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.is_full() {
            match self.entries.last() {
                Some(worst) if distance < worst.distance => {}
                _ => return false,
            }
        }

        let pos = self
            .entries
            .iter()
            .position(|n| distance < n.distance)
            .unwrap_or(self.entries.len());
        if self.is_full() {
            self.entries.pop();
        }
        self.entries.insert(pos, Neighbor { index, distance });
        true
    }

    /// Maximum number of neighbors (`m`).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Held neighbors, nearest first.
    pub fn entries(&self) -> &[Neighbor] {
        &self.entries
    }

    /// Held neighbor indices, nearest first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|n| n.index)
    }

    /// True if `point` is held.
    pub fn contains(&self, point: usize) -> bool {
        self.entries.iter().any(|n| n.index == point)
    }

    /// Distance of the `k`-th nearest neighbor (0-based); infinite for a vacant slot.
    pub fn k_distance(&self, k: usize) -> f32 {
        self.entries.get(k).map_or(f32::INFINITY, |n| n.distance)
    }
}

/// The bounded nearest-neighbor lists of every point.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    m: usize,
    lists: Vec<NeighborList>,
}

impl NeighborIndex {
    /// Build `m`-nearest-neighbor lists for every point of `data`.
    ///
    /// Candidates are offered in ascending index order, which fixes the tie-break. Data is
    /// assumed validated.
    pub fn build<M: Metric>(data: &[Vec<f32>], m: usize, metric: &M) -> Self {
        let lists = util::map_distance_rows(data, metric, |i, row| {
            let mut list = NeighborList::with_capacity(m);
            for (j, &d) in row.iter().enumerate() {
                if j != i {
                    list.offer(j, d);
                }
            }
            list
        });
        Self { m, lists }
    }

    /// List size `m`.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True if the index covers no points.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Neighbor list of `point`.
    pub fn list(&self, point: usize) -> &NeighborList {
        &self.lists[point]
    }

    /// True if each of `i` and `j` is in the other's list.
    pub fn mutual(&self, i: usize, j: usize) -> bool {
        self.lists[i].contains(j) && self.lists[j].contains(i)
    }

    /// Neighbors held by both `i` and `j`, not counting `i` or `j` themselves.
    pub fn shared_neighbors(&self, i: usize, j: usize) -> usize {
        let other = &self.lists[j];
        self.lists[i]
            .indices()
            .filter(|&k| k != i && k != j && other.contains(k))
            .count()
    }

    /// Sorted k-distance curves.
    ///
    /// Entry `k` (for `k` in `0..m`) holds every point's distance to its `(k+1)`-th nearest
    /// neighbor, sorted ascending. Vacant slots contribute `f32::INFINITY`.
    pub fn sorted_k_distances(&self) -> Vec<Vec<f32>> {
        (0..self.m)
            .map(|k| {
                let mut dists: Vec<f32> = self.lists.iter().map(|l| l.k_distance(k)).collect();
                dists.sort_by(|a, b| a.total_cmp(b));
                dists
            })
            .collect()
    }
}

/// Jarvis-Patrick clustering algorithm.
#[derive(Debug, Clone)]
pub struct JarvisPatrick<M = Euclidean> {
    /// Size of each nearest-neighbor list.
    m: usize,
    /// Minimum number of shared neighbors to join a mutual pair.
    p: usize,
    metric: M,
}

impl JarvisPatrick {
    /// Create a new Jarvis-Patrick clusterer with Euclidean distance.
    ///
    /// # Arguments
    ///
    /// * `m` - Number of nearest neighbors kept per point (at least 1).
    /// * `p` - Shared-neighbor threshold. A pair shares at most `m - 1` neighbors, so
    ///   `p >= m` disables merging.
    pub fn new(m: usize, p: usize) -> Self {
        Self {
            m,
            p,
            metric: Euclidean::full(),
        }
    }
}

impl<M: Metric> JarvisPatrick<M> {
    /// Set the neighbor list size `m`.
    pub fn with_neighbors(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    /// Set the shared-neighbor threshold `p`.
    pub fn with_shared_threshold(mut self, p: usize) -> Self {
        self.p = p;
        self
    }

    /// Use a different distance metric.
    pub fn with_metric<N: Metric>(self, metric: N) -> JarvisPatrick<N> {
        JarvisPatrick {
            m: self.m,
            p: self.p,
            metric,
        }
    }

    /// Validate `data` and build its nearest-neighbor lists without clustering.
    pub fn neighbor_index(&self, data: &[Vec<f32>]) -> Result<NeighborIndex> {
        self.validate(data)?;
        Ok(NeighborIndex::build(data, self.m, &self.metric))
    }

    fn validate(&self, data: &[Vec<f32>]) -> Result<()> {
        if self.m == 0 {
            return Err(Error::InvalidParameter {
                name: "m",
                message: "must be at least 1",
            });
        }
        util::validate_data(data, &self.metric)?;
        Ok(())
    }

    /// Run the pair pass over a built index.
    fn label(&self, index: &NeighborIndex) -> ClusterLabeling {
        let n = index.len();
        let mut labeling = ClusterLabeling::new(n);
        let mut mutual_pairs = 0usize;

        for i in 0..n {
            // Only j in i's list can satisfy the mutual test.
            let mut candidates: Vec<usize> = index.list(i).indices().filter(|&j| j > i).collect();
            candidates.sort_unstable();

            for j in candidates {
                if !index.list(j).contains(i) {
                    continue;
                }
                mutual_pairs += 1;

                if index.shared_neighbors(i, j) >= self.p {
                    labeling.join(i, j);
                }
            }
        }

        debug!(
            "jarvis-patrick: {} mutual pairs, {} merges",
            mutual_pairs,
            labeling.merge_count()
        );
        labeling
    }
}

impl Default for JarvisPatrick {
    fn default() -> Self {
        Self::new(8, 3)
    }
}

impl<M: Metric> Clustering for JarvisPatrick<M> {
    fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterReport> {
        self.validate(data)?;

        let index = NeighborIndex::build(data, self.m, &self.metric);
        debug!(
            "jarvis-patrick: built {}-nearest-neighbor lists for {} points",
            self.m,
            index.len()
        );

        let report = ClusterReport::from_labeling(self.label(&index));
        info!(
            "jarvis-patrick (m={}, p={}): {} clusters over {} points",
            self.m,
            self.p,
            report.num_clusters(),
            data.len()
        );
        Ok(report)
    }
}

//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Points strictly closer than ε are neighbors.
//! - **MinPts**: Minimum neighbors within ε for a point to be "core". The point
//!   itself is **not** counted.
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Merge formulation
//!
//! Instead of growing one cluster at a time from a seed, this implementation runs a single
//! pass of merges over a lowest-index labeling:
//!
//! 1. Every core point is merged with its whole ε-neighborhood.
//! 2. For every neighboring pair `i < j` where at least one side is core:
//!    - if `j` is not core, `j` joins `i`'s cluster;
//!    - if `j` is core, `i` is merged with `j`'s whole neighborhood.
//!
//! Noise points are never merged and stay singleton clusters; there is no separate noise
//! label. [`DbscanExt::fit_predict_with_noise`] maps singletons to `None`.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) to build neighborhoods.
//! - **Space**: O(n + Σ|N(i)|) for the neighborhoods.
//!
//! ## Limitations
//!
//! - Struggles with varying densities
//! - ε parameter is sensitive and dataset-dependent; k-distance plots help
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use log::{debug, info};

use super::labeling::ClusterLabeling;
use super::metric::{Euclidean, Metric};
use super::report::ClusterReport;
use super::traits::Clustering;
use super::util;
use crate::error::{Error, Result};

/// The ε-neighborhood of every point, with core flags.
#[derive(Debug, Clone)]
pub struct EpsilonNeighborhoods {
    neighbors: Vec<Vec<usize>>,
    core: Vec<bool>,
}

impl EpsilonNeighborhoods {
    /// Collect, for each point, every other point strictly closer than `epsilon`.
    ///
    /// A point is core when its neighborhood has at least `min_pts` members. Data is
    /// assumed validated.
    pub fn build<M: Metric>(data: &[Vec<f32>], epsilon: f32, min_pts: usize, metric: &M) -> Self {
        let neighbors = util::map_distance_rows(data, metric, |i, row| {
            row.iter()
                .enumerate()
                .filter(|&(j, &d)| j != i && d < epsilon)
                .map(|(j, _)| j)
                .collect::<Vec<usize>>()
        });
        let core = neighbors.iter().map(|n| n.len() >= min_pts).collect();
        Self { neighbors, core }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `point`, ascending.
    pub fn neighbors(&self, point: usize) -> &[usize] {
        &self.neighbors[point]
    }

    /// True if `i` and `j` are within ε of each other.
    pub fn are_neighbors(&self, i: usize, j: usize) -> bool {
        self.neighbors[i].binary_search(&j).is_ok()
    }

    /// True if `point` is a core point.
    pub fn is_core(&self, point: usize) -> bool {
        self.core[point]
    }

    /// Number of core points.
    pub fn core_count(&self) -> usize {
        self.core.iter().filter(|&&c| c).count()
    }
}

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Euclidean> {
    /// Epsilon: neighborhood radius (exclusive).
    epsilon: f32,
    /// Minimum neighbors, self excluded, for core point classification.
    min_pts: usize,
    metric: M,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer with Euclidean distance.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Points strictly closer than this are neighbors.
    /// * `min_pts` - Minimum number of *other* points within `epsilon` for a core point.
    ///   `0` makes every point core.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Euclidean::full(),
        }
    }
}

impl<M: Metric> Dbscan<M> {
    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Use a different distance metric.
    pub fn with_metric<N: Metric>(self, metric: N) -> Dbscan<N> {
        Dbscan {
            epsilon: self.epsilon,
            min_pts: self.min_pts,
            metric,
        }
    }

    /// Validate `data` and build its ε-neighborhoods without clustering.
    pub fn neighborhoods(&self, data: &[Vec<f32>]) -> Result<EpsilonNeighborhoods> {
        self.validate(data)?;
        Ok(EpsilonNeighborhoods::build(
            data,
            self.epsilon,
            self.min_pts,
            &self.metric,
        ))
    }

    fn validate(&self, data: &[Vec<f32>]) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }
        util::validate_data(data, &self.metric)?;
        Ok(())
    }

    /// Run the merge pass over built neighborhoods.
    fn label(hood: &EpsilonNeighborhoods) -> ClusterLabeling {
        let n = hood.len();
        let mut labeling = ClusterLabeling::new(n);

        for i in 0..n {
            let core_i = hood.is_core(i);

            if core_i {
                for &k in hood.neighbors(i) {
                    labeling.join(i, k);
                }
            }

            // Neighborhoods are ascending, so the j > i tail is a suffix.
            let after = hood.neighbors(i).partition_point(|&j| j <= i);
            for &j in &hood.neighbors(i)[after..] {
                let core_j = hood.is_core(j);
                if !(core_i || core_j) {
                    continue;
                }

                if core_j {
                    for &k in hood.neighbors(j) {
                        labeling.join(i, k);
                    }
                } else {
                    labeling.join(i, j);
                }
            }
        }

        labeling
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(3.0, 5)
    }
}

impl<M: Metric> Clustering for Dbscan<M> {
    fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterReport> {
        let hood = self.neighborhoods(data)?;
        debug!(
            "dbscan: {} of {} points are core (epsilon={}, min_pts={})",
            hood.core_count(),
            hood.len(),
            self.epsilon,
            self.min_pts
        );

        let labeling = Self::label(&hood);
        debug!("dbscan: {} merges", labeling.merge_count());

        let report = ClusterReport::from_labeling(labeling);
        info!(
            "dbscan: {} clusters ({} noise) over {} points",
            report.num_clusters(),
            report.singletons().len(),
            data.len()
        );
        Ok(report)
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning cluster ids where noise (singleton clusters) is `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;
}

impl<M: Metric> DbscanExt for Dbscan<M> {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        let report = self.fit(data)?;
        Ok(report
            .labels()
            .iter()
            .map(|&id| {
                let c = report.cluster_of(id)?;
                (report.sizes()[c] > 1).then_some(id)
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::needless_range_loop)]
mod tests {
    use super::*;

    #[test]
    fn test_dbscan_two_clusters() {
        // Two well-separated clusters
        let data = vec![
            // Cluster 1: around (0, 0)
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            vec![0.05, 0.05],
            // Cluster 2: around (5, 5)
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
            vec![5.05, 5.05],
        ];

        let dbscan = Dbscan::new(0.3, 3);
        let labels = dbscan.fit_predict(&data).unwrap();

        assert_eq!(labels.len(), 10);
        assert_eq!(&labels[..5], &[0; 5]);
        assert_eq!(&labels[5..], &[5; 5]);
    }

    #[test]
    fn test_dbscan_with_noise() {
        // Two clusters plus an outlier
        let data = vec![
            // Cluster 1
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            // Outlier
            vec![100.0, 100.0],
            // Cluster 2
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
        ];

        let dbscan = Dbscan::new(0.3, 2);
        let labels = dbscan.fit_predict_with_noise(&data).unwrap();

        assert_eq!(labels.len(), 9);

        // Point 4 (outlier) should be noise
        assert!(labels[4].is_none());

        for (i, label) in labels.iter().enumerate() {
            if i != 4 {
                assert!(label.is_some());
            }
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        // Points too far apart
        let data = vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ];

        let dbscan = Dbscan::new(0.5, 3);
        let labels = dbscan.fit_predict_with_noise(&data).unwrap();

        for label in labels {
            assert!(label.is_none());
        }
    }

    #[test]
    fn test_dbscan_border_point_joins_core() {
        // 0, 1, 2 are mutually close; 3 only reaches 2.
        let data = vec![vec![0.0], vec![0.5], vec![1.0], vec![1.9], vec![5.0]];
        let dbscan = Dbscan::new(1.01, 2);
        let hood = dbscan.neighborhoods(&data).unwrap();
        assert!(hood.is_core(1));
        assert!(hood.is_core(2));
        assert!(!hood.is_core(3));
        assert!(!hood.is_core(4));

        let report = dbscan.fit(&data).unwrap();
        assert_eq!(report.members(), &[vec![0, 1, 2, 3], vec![4]]);
    }

    #[test]
    fn test_dbscan_non_core_pair_not_joined() {
        // Two points within epsilon of each other, neither core.
        let data = vec![vec![0.0], vec![0.5]];
        let report = Dbscan::new(1.0, 2).fit(&data).unwrap();
        assert_eq!(report.num_clusters(), 2);
    }

    #[test]
    fn test_dbscan_epsilon_is_exclusive() {
        let data = vec![vec![0.0], vec![1.0]];
        let hood = Dbscan::new(1.0, 1).neighborhoods(&data).unwrap();
        assert!(!hood.are_neighbors(0, 1));
        let hood = Dbscan::new(1.5, 1).neighborhoods(&data).unwrap();
        assert!(hood.are_neighbors(0, 1));
        assert!(hood.are_neighbors(1, 0));
    }

    #[test]
    fn test_dbscan_neighborhood_excludes_self() {
        let data = vec![vec![0.0], vec![0.1], vec![0.2]];
        let hood = Dbscan::new(1.0, 3).neighborhoods(&data).unwrap();
        for i in 0..3 {
            assert!(!hood.neighbors(i).contains(&i));
            assert_eq!(hood.neighbors(i).len(), 2);
            // Two neighbors do not reach min_pts = 3: self is not counted.
            assert!(!hood.is_core(i));
        }
    }

    #[test]
    fn test_dbscan_min_pts_zero() {
        let data = vec![vec![0.0], vec![0.5], vec![10.0]];
        let report = Dbscan::new(1.0, 0).fit(&data).unwrap();
        assert_eq!(report.members(), &[vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_dbscan_empty() {
        let data: Vec<Vec<f32>> = vec![];
        let dbscan = Dbscan::new(0.5, 3);
        assert_eq!(dbscan.fit(&data).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_dbscan_invalid_params() {
        let data = vec![vec![0.0, 0.0]];

        assert!(Dbscan::new(0.0, 3).fit(&data).is_err());
        assert!(Dbscan::new(-1.0, 3).fit(&data).is_err());
        assert!(Dbscan::new(f32::NAN, 3).fit(&data).is_err());
        assert!(Dbscan::new(f32::INFINITY, 3).fit(&data).is_err());
        assert!(Dbscan::new(1.0, 3)
            .with_metric(Euclidean::leading(3))
            .fit(&data)
            .is_err());
    }

    #[test]
    fn test_dbscan_chain() {
        // Chain of points - DBSCAN should connect them
        let data: Vec<Vec<f32>> = (0..10).map(|i| vec![i as f32 * 0.3, 0.0]).collect();

        let dbscan = Dbscan::new(0.5, 2);
        let labels = dbscan.fit_predict(&data).unwrap();

        // Ends of the chain have one neighbor and are border points.
        for label in labels {
            assert_eq!(label, 0);
        }
    }

    #[test]
    fn test_dbscan_single_point() {
        let report = Dbscan::new(1.0, 0).fit(&[vec![3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(report.num_clusters(), 1);
        assert_eq!(report.singletons(), vec![0]);
    }
}

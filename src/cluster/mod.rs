//! Clustering algorithms for grouping similar items.
//!
//! This module provides two neighborhood-based clustering algorithms for dense vectors.
//! Both are *hard* clusterers: each point ends up in exactly one cluster, and points that
//! join nothing form singleton clusters.
//!
//! ## Algorithms
//!
//! ### Jarvis-Patrick
//!
//! Shared-near-neighbor clustering: every point keeps its `m` nearest neighbors, and two
//! points are joined when each lists the other **and** their lists share at least `p`
//! neighbors.
//!
//! **When to use**: clusters of varying density, where a global distance threshold would
//! either shatter sparse clusters or fuse dense ones.
//!
//! ### DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance.
//!
//! ## Cluster ids
//!
//! Both algorithms share [`ClusterLabeling`]: a cluster's id is the smallest point index it
//! contains, and merging two clusters keeps the lower id. The result is a
//! [`ClusterReport`] listing each cluster's members and ranking clusters by size.
//!
//! ## Usage
//!
//! ```rust
//! use huddle::cluster::{Clustering, Dbscan, JarvisPatrick};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.0, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! // Density-based clustering with DBSCAN: the isolated point is noise.
//! let report = Dbscan::new(1.0, 1).fit(&data).unwrap();
//! assert_eq!(report.num_clusters(), 3);
//! assert_eq!(report.members()[0], vec![0, 1]);
//! assert_eq!(report.singletons(), vec![4]);
//!
//! // Shared-near-neighbor clustering with Jarvis-Patrick.
//! let labels = JarvisPatrick::new(1, 0).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod dbscan;
mod jarvis_patrick;
mod labeling;
mod metric;
mod report;
mod traits;
mod util;

pub use dbscan::{Dbscan, DbscanExt, EpsilonNeighborhoods};
pub use jarvis_patrick::{JarvisPatrick, Neighbor, NeighborIndex, NeighborList};
pub use labeling::ClusterLabeling;
pub use metric::{Euclidean, Metric};
pub use report::ClusterReport;
pub use traits::{ClusterAlgorithm, Clustering};

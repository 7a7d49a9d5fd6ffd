//! Neighborhood-based clustering primitives.
//!
//! `huddle` is a small library of graph-merging clustering algorithms for dense vectors.
//!
//! The primary public API is under [`cluster`], which provides:
//! - Jarvis-Patrick (shared-near-neighbor clustering)
//! - DBSCAN (density clustering, noise as singleton clusters)
//!
//! Both algorithms produce a [`ClusterReport`]: one cluster id per point, per-cluster member
//! lists and a size-descending ranking.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    ClusterAlgorithm, ClusterLabeling, ClusterReport, Clustering, Dbscan, DbscanExt,
    EpsilonNeighborhoods, Euclidean, JarvisPatrick, Metric, Neighbor, NeighborIndex,
    NeighborList,
};
pub use error::{Error, Result};

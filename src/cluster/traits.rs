use super::dbscan::Dbscan;
use super::jarvis_patrick::JarvisPatrick;
use super::report::ClusterReport;
use crate::error::Result;

/// Common interface for hard clustering algorithms (one cluster per point).
pub trait Clustering {
    /// Cluster `data` and report the resulting partition.
    fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterReport>;

    /// Fit and return one cluster id (lowest member index) per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels().to_vec())
    }
}

/// A clustering strategy picked at runtime.
#[derive(Debug, Clone)]
pub enum ClusterAlgorithm {
    /// Shared-near-neighbor clustering.
    JarvisPatrick(JarvisPatrick),
    /// Density clustering.
    Dbscan(Dbscan),
}

impl Clustering for ClusterAlgorithm {
    fn fit(&self, data: &[Vec<f32>]) -> Result<ClusterReport> {
        match self {
            Self::JarvisPatrick(jp) => jp.fit(data),
            Self::Dbscan(db) => db.fit(data),
        }
    }
}

impl From<JarvisPatrick> for ClusterAlgorithm {
    fn from(jp: JarvisPatrick) -> Self {
        Self::JarvisPatrick(jp)
    }
}

impl From<Dbscan> for ClusterAlgorithm {
    fn from(db: Dbscan) -> Self {
        Self::Dbscan(db)
    }
}

//! Distance metrics over dense feature vectors.
//!
//! Both clusterers are generic over [`Metric`], defaulting to [`Euclidean`] over every
//! coordinate. A metric may read only a leading subset of each vector's coordinates, so a
//! dataset carrying extra columns can be clustered on the first `d` of them without copying.

use crate::error::{Error, Result};

/// A dissimilarity between two feature vectors.
///
/// Implementations must be symmetric and non-negative, and return zero for identical inputs.
/// `Sync` is required because distance rows are computed in parallel.
pub trait Metric: Sync {
    /// Distance between `a` and `b`.
    ///
    /// Callers guarantee both slices have the same length and that
    /// [`check_dim`](Metric::check_dim) accepted that length.
    fn distance(&self, a: &[f32], b: &[f32]) -> f32;

    /// Reject datasets of dimensionality `available` that this metric cannot measure.
    fn check_dim(&self, available: usize) -> Result<()> {
        let _ = available;
        Ok(())
    }
}

/// Euclidean distance over all coordinates, or over the first `d` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean {
    leading: Option<usize>,
}

impl Euclidean {
    /// Euclidean distance over every coordinate.
    pub fn full() -> Self {
        Self { leading: None }
    }

    /// Euclidean distance over the first `dims` coordinates.
    ///
    /// `dims == 0`, or more dims than the dataset has, is rejected when the clusterer
    /// validates its input.
    pub fn leading(dims: usize) -> Self {
        Self {
            leading: Some(dims),
        }
    }

    /// The configured coordinate prefix, if any.
    pub fn dims(&self) -> Option<usize> {
        self.leading
    }
}

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        match self.leading {
            Some(d) => squared_euclidean(&a[..d], &b[..d]).sqrt(),
            None => squared_euclidean(a, b).sqrt(),
        }
    }

    fn check_dim(&self, available: usize) -> Result<()> {
        match self.leading {
            Some(0) => Err(Error::InvalidParameter {
                name: "dims",
                message: "metric must read at least 1 coordinate",
            }),
            Some(required) if required > available => Err(Error::MetricDimension {
                required,
                available,
            }),
            _ => Ok(()),
        }
    }
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

use rayon::prelude::*;

use super::metric::Metric;
use crate::error::{Error, Result};

/// Union-find whose root is always the lowest point index of its set.
///
/// `union_roots` hangs the higher root under the lower one, so `find` doubles as the
/// "smallest member" lookup that cluster ids are defined by.
#[derive(Clone, Debug)]
pub(crate) struct UnionFind {
    pub(crate) parent: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    pub(crate) fn union_roots(&mut self, ra: usize, rb: usize) -> usize {
        if ra == rb {
            return ra;
        }

        let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[high] = low;
        low
    }
}

/// Check the dataset preconditions shared by every clusterer.
///
/// Returns the common dimensionality of the points.
pub(crate) fn validate_data<M: Metric>(data: &[Vec<f32>], metric: &M) -> Result<usize> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let d = data[0].len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    for point in data.iter().skip(1) {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
    }

    metric.check_dim(d)?;
    Ok(d)
}

/// Build one value per point from that point's distances to every point (self included).
///
/// `per_point(i, row)` receives `row[j] = metric.distance(data[i], data[j])`. Points are
/// processed in parallel; the output is in point order.
pub(crate) fn map_distance_rows<M, T, F>(data: &[Vec<f32>], metric: &M, per_point: F) -> Vec<T>
where
    M: Metric,
    T: Send,
    F: Fn(usize, &[f32]) -> T + Sync,
{
    (0..data.len())
        .into_par_iter()
        .map(|i| {
            let row: Vec<f32> = data
                .iter()
                .map(|other| metric.distance(&data[i], other))
                .collect();
            per_point(i, &row)
        })
        .collect()
}

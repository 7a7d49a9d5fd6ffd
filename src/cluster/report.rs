use super::labeling::ClusterLabeling;

/// Final partition produced by a clusterer.
///
/// Clusters are enumerated in *sequence order*: ascending by representative (lowest member
/// index). [`ranking`](Self::ranking) reorders them by size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterReport {
    labels: Vec<usize>,
    representatives: Vec<usize>,
    members: Vec<Vec<usize>>,
    sizes: Vec<usize>,
    ranking: Vec<usize>,
}

impl ClusterReport {
    /// Derive member lists and ranking from a converged labeling.
    pub fn from_labeling(mut labeling: ClusterLabeling) -> Self {
        let representatives = labeling.representatives();
        let labels = labeling.into_labels();
        let members = list_members(&labels, &representatives);
        let (sizes, ranking) = sort_clusters(&members);
        Self {
            labels,
            representatives,
            members,
            sizes,
            ranking,
        }
    }

    /// Number of clusters, singletons included.
    pub fn num_clusters(&self) -> usize {
        self.members.len()
    }

    /// Cluster id (lowest member index) of every point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Cluster ids in sequence order.
    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    /// Ascending point indices of each cluster, in sequence order.
    pub fn members(&self) -> &[Vec<usize>] {
        &self.members
    }

    /// Size of each cluster, parallel to [`members`](Self::members).
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Sequence indices sorted by descending size; equal sizes keep sequence order.
    pub fn ranking(&self) -> &[usize] {
        &self.ranking
    }

    /// Member lists, largest cluster first.
    pub fn ranked(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.ranking.iter().map(|&c| self.members[c].as_slice())
    }

    /// Sequence index of the cluster containing `point`.
    pub fn cluster_of(&self, point: usize) -> Option<usize> {
        let id = *self.labels.get(point)?;
        self.representatives.binary_search(&id).ok()
    }

    /// Points alone in their cluster, ascending.
    ///
    /// For DBSCAN these are the noise points.
    pub fn singletons(&self) -> Vec<usize> {
        self.members
            .iter()
            .filter(|m| m.len() == 1)
            .map(|m| m[0])
            .collect()
    }
}

/// Collect, per representative, the points carrying its id.
fn list_members(labels: &[usize], representatives: &[usize]) -> Vec<Vec<usize>> {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); representatives.len()];
    for (point, id) in labels.iter().enumerate() {
        // Every id in `labels` is some representative's own index.
        if let Ok(c) = representatives.binary_search(id) {
            members[c].push(point);
        }
    }
    members
}

/// Cluster sizes and the size-descending ranking of sequence indices.
///
/// A stable sort selects the same order as repeatedly taking the first strictly largest
/// remaining cluster.
fn sort_clusters(members: &[Vec<usize>]) -> (Vec<usize>, Vec<usize>) {
    let sizes: Vec<usize> = members.iter().map(Vec::len).collect();
    let mut ranking: Vec<usize> = (0..sizes.len()).collect();
    ranking.sort_by(|&a, &b| sizes[b].cmp(&sizes[a]));
    (sizes, ranking)
}

use serde::Serialize;

/// Cluster label per segment, produced once by the clusterer.
///
/// `labels[i]` belongs to segment `i` of the clustered collection and lies
/// in `[0, num_clusters)`. Clusters may be empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAssignment {
    pub(super) labels: Vec<usize>,
    pub(super) num_clusters: usize,
    /// Mean orientation of each cluster in [0, π).
    pub(super) orientations: Vec<f32>,
    pub(super) dispersion: f64,
    pub(super) restart_dispersions: Vec<f64>,
    pub(super) best_restart: usize,
    pub(super) iterations: usize,
    pub(super) converged: bool,
    pub(super) seed: u64,
}

impl ClusterAssignment {
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    pub fn orientations(&self) -> &[f32] {
        &self.orientations
    }

    /// Within-cluster dispersion of the kept restart.
    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Dispersion of every restart, in restart order.
    pub fn restart_dispersions(&self) -> &[f64] {
        &self.restart_dispersions
    }

    pub fn best_restart(&self) -> usize {
        self.best_restart
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Base seed the restarts were derived from; replaying it reproduces
    /// this assignment.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.num_clusters];
        for &l in &self.labels {
            sizes[l] += 1;
        }
        sizes
    }
}

use super::timing::TimingBreakdown;
use crate::cluster::ClusterAssignment;
use crate::segments::{DetectionParams, Segment};
use serde::Serialize;

/// Dimensions and edge density of the processed edge map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
}

/// Summary of the clustering stage.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub num_clusters: usize,
    pub num_restarts: usize,
    /// Segments per cluster label.
    pub sizes: Vec<usize>,
    /// Mean orientation of each cluster in degrees.
    pub orientations_deg: Vec<f32>,
    pub assignment: ClusterAssignment,
}

impl ClusterStage {
    pub fn new(assignment: ClusterAssignment, num_restarts: usize) -> Self {
        Self {
            num_clusters: assignment.num_clusters(),
            num_restarts,
            sizes: assignment.cluster_sizes(),
            orientations_deg: assignment
                .orientations()
                .iter()
                .map(|t| t.to_degrees())
                .collect(),
            assignment,
        }
    }
}

/// Everything a single detection run produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    pub params: DetectionParams,
    pub segments: Vec<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<ClusterStage>,
    pub timings: TimingBreakdown,
}

impl DetectionReport {
    /// Cluster labels aligned with `segments`, when clustering ran.
    pub fn labels(&self) -> Option<&[usize]> {
        self.clusters.as_ref().map(|c| c.assignment.labels())
    }
}

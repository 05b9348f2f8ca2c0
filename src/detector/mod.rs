//! Line detector pairing detection parameters with clustering.
//!
//! Overview
//! - `LineDetector::detect` extracts segments from an edge map and returns a
//!   `LineDetection` that owns them.
//! - `LineDetection::cluster_lines` groups those segments by orientation.
//!   Clustering is only reachable after a detection, so it can never run on
//!   a stale or missing segment set.
//! - `LineDetector::run` performs both steps and collects a serializable
//!   `DetectionReport` with per-stage timings.
//!
//! Stage timings are labelled `detect` and `cluster`.

use crate::cluster::{cluster_segments, ClusterAssignment, ClusterOptions};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{ClusterStage, DetectionReport, InputDescriptor, TimingBreakdown};
use crate::error::Result;
use crate::image::EdgeMap;
use crate::segments::{detect_segments, DetectionParams, Segment, SegmentCollection};
use log::debug;
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct LineDetector {
    params: DetectionParams,
}

impl LineDetector {
    pub fn new(params: DetectionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    /// Extract segments from `edges`.
    pub fn detect(&self, edges: &EdgeMap) -> Result<LineDetection> {
        let segments = detect_segments(edges, &self.params)?;
        Ok(LineDetection { segments })
    }

    /// Detect and, when `num_clusters > 0`, cluster in one pass.
    ///
    /// `num_clusters == 0` skips clustering. Otherwise clustering errors
    /// (including an empty detection) are returned as-is.
    pub fn run(
        &self,
        edges: &EdgeMap,
        num_clusters: usize,
        num_restarts: usize,
        options: &ClusterOptions,
    ) -> Result<DetectionReport> {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let detection = timings.time("detect", || self.detect(edges))?;
        let clusters = if num_clusters > 0 {
            let assignment = timings.time("cluster", || {
                detection.cluster_lines(num_clusters, num_restarts, options)
            })?;
            Some(ClusterStage::new(assignment, num_restarts))
        } else {
            None
        };
        timings.total_ms = elapsed_ms(start);

        debug!(
            "LineDetector::run {}x{} segments={} clustered={} total_ms={:.3}",
            edges.width(),
            edges.height(),
            detection.len(),
            clusters.is_some(),
            timings.total_ms
        );

        Ok(DetectionReport {
            input: InputDescriptor {
                width: edges.width(),
                height: edges.height(),
                edge_pixels: edges.edge_count(),
            },
            params: self.params,
            segments: detection.into_segments().into_vec(),
            clusters,
            timings,
        })
    }
}

/// Segments produced by one `LineDetector::detect` call.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDetection {
    segments: SegmentCollection,
}

impl LineDetection {
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> SegmentCollection {
        self.segments
    }

    /// Group the detected segments into `num_clusters` orientation clusters.
    pub fn cluster_lines(
        &self,
        num_clusters: usize,
        num_restarts: usize,
        options: &ClusterOptions,
    ) -> Result<ClusterAssignment> {
        cluster_segments(self.segments(), num_clusters, num_restarts, options)
    }
}

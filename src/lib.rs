#![doc = include_str!("../README.md")]

// Public modules
pub mod cluster;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod render;
pub mod segments;

// Building blocks of the preprocessing stage.
pub mod angle;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::cluster::{cluster_segments, ClusterAssignment, ClusterOptions, OrientationFeature};
pub use crate::detector::{LineDetection, LineDetector};
pub use crate::diagnostics::{DetectionReport, TimingBreakdown};
pub use crate::error::{Error, Result};
pub use crate::image::EdgeMap;
pub use crate::segments::{detect_segments, DetectionParams, Segment, SegmentCollection};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use thermo_lines::prelude::*;
///
/// # fn main() -> thermo_lines::Result<()> {
/// let mut edges = EdgeMap::zeros(320, 240);
/// for x in 20..300 {
///     edges.set_edge(x, 120, true);
/// }
///
/// let detector = LineDetector::new(DetectionParams::default());
/// let detection = detector.detect(&edges)?;
/// let clusters = detection.cluster_lines(1, 5, &ClusterOptions::seeded(7))?;
/// println!("segments={} labels={:?}", detection.len(), clusters.labels());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::EdgeMap;
    pub use crate::{ClusterOptions, DetectionParams, LineDetector, Segment};
}

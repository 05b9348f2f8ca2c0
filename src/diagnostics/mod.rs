//! Serializable reports returned by the detector and written by the CLI.
//!
//! `DetectionReport` bundles the input description, the parameters used, the
//! detected segments, the optional clustering outcome and a per-stage
//! `TimingBreakdown`.

pub mod report;
pub mod timing;

pub use report::{ClusterStage, DetectionReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};

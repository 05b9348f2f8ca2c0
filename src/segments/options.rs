use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the probabilistic line transform.
///
/// Lengths and gaps are expressed in pixels of the edge map. `seed` fixes
/// the order in which edge pixels are visited, which makes detection
/// reproducible for a given input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionParams {
    /// Minimum accepted endpoint distance.
    pub min_line_length: f32,
    /// Accumulator threshold; also the minimum pixel support of an output segment.
    pub min_votes: u32,
    /// Largest run of missing pixels bridged while extending or merging.
    pub max_line_gap: u32,
    /// Distance resolution of the accumulator in pixels.
    pub rho_resolution: f32,
    /// Angular resolution of the accumulator in degrees.
    pub theta_resolution_deg: f32,
    /// Maximum orientation difference of fragments that may be merged.
    pub merge_angle_tolerance_deg: f32,
    /// Maximum perpendicular offset of fragments that may be merged.
    pub merge_distance_px: f32,
    pub seed: u64,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            min_line_length: 100.0,
            min_votes: 50,
            max_line_gap: 10,
            rho_resolution: 1.0,
            theta_resolution_deg: 1.0,
            merge_angle_tolerance_deg: 2.0,
            merge_distance_px: 2.0,
            seed: 0,
        }
    }
}

impl DetectionParams {
    pub fn new(min_line_length: f32, min_votes: u32, max_line_gap: u32) -> Self {
        Self {
            min_line_length,
            min_votes,
            max_line_gap,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_line_length.is_finite() && self.min_line_length > 0.0) {
            return Err(Error::invalid(
                "min_line_length",
                format!("must be a positive length, got {}", self.min_line_length),
            ));
        }
        if self.min_votes == 0 {
            return Err(Error::invalid("min_votes", "must be at least 1"));
        }
        if !(self.rho_resolution.is_finite() && self.rho_resolution > 0.0) {
            return Err(Error::invalid(
                "rho_resolution",
                format!("must be positive, got {}", self.rho_resolution),
            ));
        }
        if !(self.theta_resolution_deg.is_finite()
            && self.theta_resolution_deg > 0.0
            && self.theta_resolution_deg <= 90.0)
        {
            return Err(Error::invalid(
                "theta_resolution_deg",
                format!("must lie in (0, 90], got {}", self.theta_resolution_deg),
            ));
        }
        if !(self.merge_angle_tolerance_deg.is_finite() && self.merge_angle_tolerance_deg >= 0.0) {
            return Err(Error::invalid(
                "merge_angle_tolerance_deg",
                format!("must be >= 0, got {}", self.merge_angle_tolerance_deg),
            ));
        }
        if !(self.merge_distance_px.is_finite() && self.merge_distance_px >= 0.0) {
            return Err(Error::invalid(
                "merge_distance_px",
                format!("must be >= 0, got {}", self.merge_distance_px),
            ));
        }
        Ok(())
    }
}

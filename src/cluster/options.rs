use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Feature vector derived from each segment before clustering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OrientationFeature {
    /// `(cos 2θ, sin 2θ)`: orientation only.
    #[default]
    DoubledAngle,
    /// Doubled angle plus the segment midpoint divided by the extent of all
    /// midpoints, scaled by `position_weight`. Splits parallel segments that
    /// lie in different parts of the image.
    DoubledAngleWithMidpoint { position_weight: f64 },
}

/// Options of the restart-based orientation clusterer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Lloyd iterations allowed per restart.
    pub max_iterations: usize,
    /// Base seed; restart `r` uses `seed + r`. `None` draws one from entropy.
    pub seed: Option<u64>,
    pub feature: OrientationFeature,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            seed: None,
            feature: OrientationFeature::default(),
        }
    }
}

impl ClusterOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid("max_iterations", "must be at least 1"));
        }
        if let OrientationFeature::DoubledAngleWithMidpoint { position_weight } = self.feature {
            if !(position_weight.is_finite() && position_weight >= 0.0) {
                return Err(Error::invalid(
                    "position_weight",
                    format!("must be finite and >= 0, got {position_weight}"),
                ));
            }
        }
        Ok(())
    }
}

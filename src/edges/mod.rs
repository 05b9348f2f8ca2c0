//! Edge-map preprocessing for grayscale photographs.
//!
//! This is the collaborator that turns a grayscale photograph into the
//! binary [`EdgeMap`](crate::image::EdgeMap) expected by the segment
//! extractor:
//!
//! - Optional uniform rescaling (`scale_image`). Everything downstream,
//!   including segment coordinates, is in scaled pixels.
//! - Canny detection via `imageproc::edges::canny` (σ = 1.4 Gaussian, 3x3
//!   Sobel, non-maximum suppression, two-threshold hysteresis), optionally
//!   preceded by extra Gaussian smoothing.
//!
//! Thresholds are expressed in gradient-magnitude units of an 8-bit input.

pub mod canny;
pub mod scale;

pub use canny::{canny, EdgeOptions, SOBEL_APERTURE};
pub use scale::scale_image;

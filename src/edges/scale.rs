//! Uniform rescaling of grayscale inputs before edge detection.
use crate::error::{Error, Result};
use image::imageops::{self, FilterType};
use image::GrayImage;
use log::debug;

/// Resize `gray` by `factor` along both axes with bilinear filtering.
///
/// A factor of 1 returns an unchanged copy. Each output side is at least
/// one pixel. Segments detected afterwards are in scaled pixel units.
pub fn scale_image(gray: &GrayImage, factor: f32) -> Result<GrayImage> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(Error::invalid(
            "scale_factor",
            format!("must be positive, got {factor}"),
        ));
    }
    if factor == 1.0 {
        return Ok(gray.clone());
    }
    let (w, h) = gray.dimensions();
    let nw = ((w as f32 * factor).round() as u32).max(1);
    let nh = ((h as f32 * factor).round() as u32).max(1);
    debug!("scale_image: {w}x{h} -> {nw}x{nh} (factor={factor})");
    Ok(imageops::resize(gray, nw, nh, FilterType::Triangle))
}

//! Canny binary edge map construction on top of `imageproc::edges::canny`.
use crate::error::{Error, Result};
use crate::image::EdgeMap;
use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use log::debug;
use serde::{Deserialize, Serialize};

/// Sobel aperture of `imageproc::edges::canny`; other sizes are rejected.
pub const SOBEL_APERTURE: u32 = 3;

/// Parameters of the edge-map preprocessor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Weak-edge threshold on gradient magnitude.
    pub low_threshold: f32,
    /// Strong-edge threshold on gradient magnitude; seeds hysteresis.
    pub high_threshold: f32,
    /// Sobel kernel size. Only 3 is available.
    pub aperture_size: u32,
    /// Extra Gaussian smoothing applied before the detector's own σ = 1.4
    /// blur. Useful on noisy thermal frames.
    pub pre_blur_sigma: Option<f32>,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            low_threshold: 40.0,
            high_threshold: 160.0,
            aperture_size: SOBEL_APERTURE,
            pre_blur_sigma: None,
        }
    }
}

impl EdgeOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.low_threshold.is_finite() || self.low_threshold < 0.0 {
            return Err(Error::invalid(
                "low_threshold",
                format!("must be finite and >= 0, got {}", self.low_threshold),
            ));
        }
        if !self.high_threshold.is_finite() || self.high_threshold < self.low_threshold {
            return Err(Error::invalid(
                "high_threshold",
                format!(
                    "must be finite and >= low_threshold ({}), got {}",
                    self.low_threshold, self.high_threshold
                ),
            ));
        }
        if self.aperture_size != SOBEL_APERTURE {
            return Err(Error::invalid(
                "aperture_size",
                format!(
                    "only a {SOBEL_APERTURE}x{SOBEL_APERTURE} Sobel aperture is supported, got {}",
                    self.aperture_size
                ),
            ));
        }
        if let Some(sigma) = self.pre_blur_sigma {
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(Error::invalid(
                    "pre_blur_sigma",
                    format!("must be positive, got {sigma}"),
                ));
            }
        }
        Ok(())
    }
}

/// Convert a grayscale image into a binary edge map.
///
/// Images narrower or shorter than 3 pixels have no interior and yield an
/// empty map.
pub fn canny(gray: &GrayImage, options: &EdgeOptions) -> Result<EdgeMap> {
    options.validate()?;
    let (w, h) = gray.dimensions();
    if w < 3 || h < 3 {
        return Ok(EdgeMap::zeros(w as usize, h as usize));
    }

    let edges = match options.pre_blur_sigma {
        Some(sigma) => imageproc::edges::canny(
            &gaussian_blur_f32(gray, sigma),
            options.low_threshold,
            options.high_threshold,
        ),
        None => imageproc::edges::canny(gray, options.low_threshold, options.high_threshold),
    };
    let edges = EdgeMap::from_gray_image(edges);
    debug!(
        "canny: {}x{} -> {} edge pixels (low={:.1}, high={:.1}, pre_blur={:?})",
        w,
        h,
        edges.edge_count(),
        options.low_threshold,
        options.high_threshold,
        options.pre_blur_sigma
    );
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn step_image(width: u32, height: u32, split_x: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| {
            if x >= split_x {
                Luma([220])
            } else {
                Luma([0])
            }
        })
    }

    #[test]
    fn step_image_gives_a_thin_vertical_edge() {
        let (w, h) = (40, 30);
        let edges = canny(&step_image(w, h, 20), &EdgeOptions::default()).unwrap();
        assert!(edges.edge_count() > 0);
        for (x, _) in edges.edge_pixels() {
            assert!((18..=21).contains(&x), "unexpected edge column {x}");
        }
        for y in 2..h as usize - 2 {
            let cols = (0..w as usize).filter(|&x| edges.is_edge(x, y)).count();
            assert!((1..=2).contains(&cols), "row {y} carries {cols} edge pixels");
        }
    }

    #[test]
    fn flat_image_has_no_edges() {
        let gray = GrayImage::from_pixel(16, 16, Luma([90]));
        let edges = canny(&gray, &EdgeOptions::default()).unwrap();
        assert_eq!(edges.edge_count(), 0);
    }

    #[test]
    fn pre_blur_keeps_the_edge_in_place() {
        let opts = EdgeOptions {
            pre_blur_sigma: Some(1.0),
            ..Default::default()
        };
        let edges = canny(&step_image(40, 30, 20), &opts).unwrap();
        assert!(edges.edge_count() > 0);
        assert!(edges.edge_pixels().all(|(x, _)| (17..=22).contains(&x)));
    }

    #[test]
    fn tiny_image_yields_an_empty_map() {
        let edges = canny(&step_image(2, 8, 1), &EdgeOptions::default()).unwrap();
        assert_eq!((edges.width(), edges.height()), (2, 8));
        assert_eq!(edges.edge_count(), 0);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let opts = EdgeOptions {
            low_threshold: 100.0,
            high_threshold: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            canny(&step_image(8, 8, 4), &opts),
            Err(Error::InvalidParameter {
                name: "high_threshold",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unsupported_aperture_and_blur() {
        let gray = step_image(8, 8, 4);
        let aperture = EdgeOptions {
            aperture_size: 5,
            ..Default::default()
        };
        assert!(matches!(
            canny(&gray, &aperture),
            Err(Error::InvalidParameter {
                name: "aperture_size",
                ..
            })
        ));
        let blur = EdgeOptions {
            pre_blur_sigma: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            canny(&gray, &blur),
            Err(Error::InvalidParameter {
                name: "pre_blur_sigma",
                ..
            })
        ));
    }
}

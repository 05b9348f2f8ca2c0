//! Binary edge map: one byte per pixel, non-zero means edge.
//!
//! The segment extractor only accepts single-channel 8-bit input. Callers
//! holding a decoded `DynamicImage` go through [`EdgeMap::from_dynamic`],
//! which refuses anything that is not `Luma8` instead of converting it.
use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage};
use imageproc::drawing::BresenhamLineIter;

/// Value written for edge pixels by the preprocessor and the test builders.
pub const EDGE: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl EdgeMap {
    /// Wrap a row-major buffer of `width * height` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(Error::invalid(
                "edge_map",
                format!(
                    "buffer holds {} bytes, expected {}x{} = {}",
                    data.len(),
                    width,
                    height,
                    width * height
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All-background map of the given size.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Accept a decoded image only if it already is 8-bit single channel.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(gray) => Ok(Self::from_gray_image(gray)),
            other => Err(Error::invalid(
                "edge_map",
                format!(
                    "expected a single-channel 8-bit image, got {:?}",
                    other.color()
                ),
            )),
        }
    }

    pub fn from_gray_image(gray: GrayImage) -> Self {
        let width = gray.width() as usize;
        let height = gray.height() as usize;
        Self {
            width,
            height,
            data: gray.into_raw(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set_edge(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.width + x] = if on { EDGE } else { 0 };
    }

    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Row-major iterator over the `(x, y)` coordinates of edge pixels.
    pub fn edge_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(move |(i, _)| (i % w, i / w))
    }

    /// Mark the Bresenham raster of `p0..=p1` as edges. Pixels outside the
    /// map are skipped.
    pub fn draw_line(&mut self, p0: [i32; 2], p1: [i32; 2]) {
        let line = BresenhamLineIter::new(
            (p0[0] as f32, p0[1] as f32),
            (p1[0] as f32, p1[1] as f32),
        );
        for (x, y) in line {
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_edge(x as usize, y as usize, true);
            }
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn to_gray_image(&self) -> GrayImage {
        // Dimensions always match the buffer length, so this cannot fail.
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Luma([self.data[y as usize * self.width + x as usize]])
        })
    }
}

//! Image source and output helpers.
//!
//! - `DataDir`: explicit root against which relative input paths resolve.
//! - `load_grayscale_image` / `load_rgb_image`: read a PNG/JPEG/TIFF from
//!   disk; a missing path fails with `Error::InputNotFound`.
//! - `load_edge_map`: read a ready binary edge map without conversion.
//! - `save_rgb_image` / `save_edge_map`: write PNGs for inspection.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::EdgeMap;
use crate::error::{Error, Result};
use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory that relative input paths are resolved against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataDir(pub PathBuf);

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    /// Absolute paths pass through untouched.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.0.join(path)
        }
    }
}

fn open_existing(path: &Path) -> Result<image::DynamicImage> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImage> {
    Ok(open_existing(path)?.into_luma8())
}

/// Load a binary edge map; the file must decode to 8-bit single channel.
pub fn load_edge_map(path: &Path) -> Result<EdgeMap> {
    EdgeMap::from_dynamic(open_existing(path)?)
}

/// Load an image from disk as 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    Ok(open_existing(path)?.into_rgb8())
}

pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    edges
        .to_gray_image()
        .save(path)
        .map_err(|source| Error::ImageDecode {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Hotspots.jpg");
        match load_grayscale_image(&missing) {
            Err(Error::InputNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
        assert!(matches!(
            load_rgb_image(&missing),
            Err(Error::InputNotFound { .. })
        ));
    }

    #[test]
    fn data_dir_resolves_relative_paths_only() {
        let root = DataDir::new("/data/flir");
        assert_eq!(
            root.resolve(Path::new("Hotspots.jpg")),
            PathBuf::from("/data/flir/Hotspots.jpg")
        );
        assert_eq!(
            root.resolve(Path::new("/tmp/a.png")),
            PathBuf::from("/tmp/a.png")
        );
    }

    #[test]
    fn edge_map_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/edges.png");
        let mut map = EdgeMap::zeros(6, 4);
        map.set_edge(2, 3, true);
        save_edge_map(&map, &path).unwrap();

        let gray = load_grayscale_image(&path).unwrap();
        assert_eq!(gray.dimensions(), (6, 4));
        assert_eq!(gray.get_pixel(2, 3).0[0], 255);
        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(load_edge_map(&path).unwrap(), map);
    }

    #[test]
    fn color_file_is_not_an_edge_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");
        save_rgb_image(&RgbImage::new(4, 4), &path).unwrap();
        assert!(matches!(
            load_edge_map(&path),
            Err(Error::InvalidParameter { .. })
        ));
    }
}

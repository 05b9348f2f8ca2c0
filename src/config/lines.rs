use crate::cluster::ClusterOptions;
use crate::edges::EdgeOptions;
use crate::error::Result;
use crate::image::io::DataDir;
use crate::segments::DetectionParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `detect_lines` tool.
///
/// Relative input and output paths are resolved against `data_dir`.
#[derive(Debug, Deserialize)]
pub struct LineToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub data_dir: DataDir,
    /// Treat `input` as a ready binary edge map instead of a photograph.
    #[serde(default)]
    pub input_is_edge_map: bool,
    /// Resize factor applied to photographs before edge detection. Segment
    /// coordinates in the outputs are in scaled pixels. Ignored for edge
    /// map inputs.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    #[serde(default)]
    pub edges: EdgeOptions,
    #[serde(default)]
    pub detection: DetectionParams,
    #[serde(default)]
    pub clustering: ClusteringConfig,
    pub output: LineOutputConfig,
}

fn default_scale_factor() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Number of orientation clusters; 0 disables clustering.
    pub num_clusters: usize,
    pub num_restarts: usize,
    #[serde(flatten)]
    pub options: ClusterOptions,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            num_clusters: 20,
            num_restarts: 5,
            options: ClusterOptions::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LineOutputConfig {
    pub overlay_image: PathBuf,
    pub report_json: PathBuf,
    /// Optional dump of the binary edge map fed to the extractor.
    #[serde(default)]
    pub edge_image: Option<PathBuf>,
}

impl LineToolConfig {
    pub fn input_path(&self) -> PathBuf {
        self.data_dir.resolve(&self.input)
    }

    pub fn output_path(&self, path: &Path) -> PathBuf {
        self.data_dir.resolve(path)
    }
}

pub fn load_config(path: &Path) -> Result<LineToolConfig> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

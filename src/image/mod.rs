//! Image buffers used by the preprocessing and detection stages.
//!
//! Grayscale inputs stay in `image::GrayImage`; [`EdgeMap`] is the owned
//! single-channel binary map consumed by the segment extractor.
pub mod edge_map;
pub mod io;

pub use self::edge_map::EdgeMap;

//! Line-segment extraction from binary edge maps.
//!
//! This module implements a progressive probabilistic Hough transform with a
//! deterministic, seeded traversal order:
//!
//! - Edge pixels are shuffled once with a `StdRng` seeded from
//!   `DetectionParams::seed`, so the same map and seed always yield the same
//!   segments.
//! - Each pixel votes into a (θ, ρ) accumulator. As soon as its best bin
//!   reaches `min_votes`, the corresponding line is walked from the pixel in
//!   both directions, bridging up to `max_line_gap` missing pixels. When the
//!   predicted pixel is missing, its two neighbours across the walk are
//!   tried and the walk re-centres on a hit, so the discrete angle bin does
//!   not break long shallow lines apart.
//! - A walked span shorter than `min_line_length` is dropped and leaves its
//!   pixels in place. An accepted span consumes its pixels: they are cleared
//!   from the map and, if they had voted, removed from the accumulator. The
//!   number of consumed pixels is the segment's vote support.
//! - Near-collinear fragments (orientation, perpendicular offset and gap
//!   within tolerance) are merged into one segment spanning their extremes.
//! - Segments shorter than `min_line_length` or supported by fewer than
//!   `min_votes` pixels are dropped, as are exact duplicates.
//!
//! Notes
//! - Orientation is taken modulo π; see `angle::normalize_half_pi`.
//! - Endpoints stay on the pixel grid; there is no sub-pixel refinement.
//!
//! Complexity
//! - Each edge pixel votes at most once: O(E·A) for E edge pixels and A
//!   angle bins, plus walks that are linear in the image size per segment.

mod accumulator;
mod extractor;
mod merge;
mod options;
mod segment;

pub use options::DetectionParams;
pub use segment::{Segment, SegmentCollection};

use crate::error::Result;
use crate::image::EdgeMap;
use log::debug;
use merge::{merge_collinear, MergeTolerances};
use std::collections::HashSet;

/// Extract line segments from a binary edge map.
///
/// An empty map (or one without qualifying lines) yields an empty
/// collection. Invalid parameters are rejected before any work is done.
pub fn detect_segments(edges: &EdgeMap, params: &DetectionParams) -> Result<SegmentCollection> {
    params.validate()?;

    let (w, h) = (edges.width(), edges.height());
    let diagonal = ((w * w + h * h) as f32).sqrt();
    if edges.edge_count() == 0 || params.min_line_length > diagonal {
        debug!(
            "detect_segments: nothing to do on {}x{} (edges={}, min_len={:.1}, diagonal={:.1})",
            w,
            h,
            edges.edge_count(),
            params.min_line_length,
            diagonal
        );
        return Ok(SegmentCollection::default());
    }

    let candidates: Vec<Segment> = extractor::ProbabilisticHough::new(edges, params)
        .extract()
        .into_iter()
        .filter(|s| s.length_sq() > 0.0)
        .collect();
    let raw = candidates.len();

    let merged = merge_collinear(
        candidates,
        MergeTolerances {
            angle_rad: params.merge_angle_tolerance_deg.to_radians(),
            distance_px: params.merge_distance_px,
            max_gap: params.max_line_gap,
        },
    );
    let after_merge = merged.len();

    let mut seen = HashSet::new();
    let segments: SegmentCollection = merged
        .into_iter()
        .filter(|s| s.length() >= params.min_line_length && s.votes() >= params.min_votes)
        .filter(|s| seen.insert((s.p0(), s.p1())))
        .collect();

    debug!(
        "detect_segments: {}x{} candidates={} merged={} kept={}",
        w,
        h,
        raw,
        after_merge,
        segments.len()
    );
    Ok(segments)
}

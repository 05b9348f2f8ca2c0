//! Cluster overlays for visual inspection.
//!
//! Edge pixels are drawn dimmed so colored segments stay readable. Cluster
//! colors step the hue by the golden ratio, so neighbouring labels get
//! clearly different colors and the palette is identical across runs.

use crate::error::{Error, Result};
use crate::image::EdgeMap;
use crate::segments::Segment;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::map::map_colors;

const EDGE_GRAY: Rgb<u8> = Rgb([96, 96, 96]);
const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
/// Color of segments drawn without a cluster label.
pub const UNLABELED: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw `segments` over `edges`, colored by `labels` when given.
///
/// `labels[i]` colors `segments[i]`; a slice of any other length is
/// rejected.
pub fn render_clusters(
    edges: &EdgeMap,
    segments: &[Segment],
    labels: Option<&[usize]>,
) -> Result<RgbImage> {
    if let Some(labels) = labels {
        if labels.len() != segments.len() {
            return Err(Error::invalid(
                "labels",
                format!(
                    "{} labels for {} segments",
                    labels.len(),
                    segments.len()
                ),
            ));
        }
    }

    let gray = edges.to_gray_image();
    let mut canvas = map_colors(&gray, |p| if p[0] > 0 { EDGE_GRAY } else { BACKGROUND });
    for (i, seg) in segments.iter().enumerate() {
        let color = labels.map_or(UNLABELED, |l| cluster_color(l[i]));
        let [x0, y0] = seg.p0();
        let [x1, y1] = seg.p1();
        draw_line_segment_mut(
            &mut canvas,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
    }
    Ok(canvas)
}

/// Deterministic, fully saturated color for a cluster label.
pub fn cluster_color(label: usize) -> Rgb<u8> {
    const GOLDEN: f32 = 0.618_034;
    let hue = (label as f32 * GOLDEN).fract();
    hsv_to_rgb(hue, 0.9, 1.0)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let h6 = h * 6.0;
    let sector = h6.floor() as i32 % 6;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with_row(y: usize) -> EdgeMap {
        let mut map = EdgeMap::zeros(40, 20);
        for x in 5..35 {
            map.set_edge(x, y, true);
        }
        map
    }

    #[test]
    fn segments_take_their_cluster_color() {
        let map = map_with_row(10);
        let segs = [Segment::new([5, 10], [34, 10], 30), Segment::new([2, 2], [2, 17], 16)];
        let img = render_clusters(&map, &segs, Some(&[0, 1][..])).unwrap();
        assert_eq!(img.dimensions(), (40, 20));
        assert_eq!(*img.get_pixel(20, 10), cluster_color(0));
        assert_eq!(*img.get_pixel(2, 8), cluster_color(1));
        assert_eq!(*img.get_pixel(30, 3), BACKGROUND);
    }

    #[test]
    fn edges_without_segments_are_dimmed() {
        let img = render_clusters(&map_with_row(4), &[], None).unwrap();
        assert_eq!(*img.get_pixel(10, 4), EDGE_GRAY);
        assert_eq!(*img.get_pixel(10, 5), BACKGROUND);
    }

    #[test]
    fn unlabeled_segments_share_one_color() {
        let map = EdgeMap::zeros(30, 30);
        let segs = [Segment::new([0, 0], [29, 29], 30)];
        let img = render_clusters(&map, &segs, None).unwrap();
        assert_eq!(*img.get_pixel(15, 15), UNLABELED);
    }

    #[test]
    fn label_count_must_match_segments() {
        let map = EdgeMap::zeros(10, 10);
        let segs = [Segment::new([0, 0], [9, 0], 10)];
        assert!(matches!(
            render_clusters(&map, &segs, Some(&[0, 1][..])),
            Err(Error::InvalidParameter { name: "labels", .. })
        ));
    }

    #[test]
    fn palette_is_distinct_for_first_labels() {
        let colors: Vec<_> = (0..8).map(cluster_color).collect();
        for i in 0..colors.len() {
            for j in i + 1..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}

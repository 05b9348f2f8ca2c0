mod common;

use common::{family_params, init_logging};
use common::synthetic_image::{bright_rectangle, orthogonal_families};
use std::collections::HashSet;
use thermo_lines::edges::{canny, scale_image, EdgeOptions};
use thermo_lines::image::io::{
    load_edge_map, load_grayscale_image, save_edge_map, save_rgb_image, DataDir,
};
use thermo_lines::render::{cluster_color, render_clusters};
use thermo_lines::{ClusterOptions, DetectionParams, Error, LineDetector};

const W: u32 = 200;
const H: u32 = 160;

fn write_rectangle_png(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("rectangle.png");
    bright_rectangle(W, H, (40, 40), (120, 80)).save(&path).unwrap();
    path
}

#[test]
fn photograph_to_clustered_overlay() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let data_dir = DataDir::new(dir.path());
    write_rectangle_png(dir.path());

    let gray = load_grayscale_image(&data_dir.resolve("rectangle.png".as_ref())).unwrap();
    let edges = canny(&gray, &EdgeOptions::default()).unwrap();
    assert!(edges.edge_count() > 0);

    let detector = LineDetector::new(DetectionParams::new(50.0, 40, 3));
    let report = detector
        .run(&edges, 2, 4, &ClusterOptions::seeded(5))
        .unwrap();
    assert!(report.segments.len() >= 4, "got {:?}", report.segments);

    let labels = report.labels().unwrap();
    let mut horizontal = HashSet::new();
    let mut vertical = HashSet::new();
    for (s, &label) in report.segments.iter().zip(labels) {
        let deg = s.theta().to_degrees();
        if deg < 2.0 || deg > 178.0 {
            horizontal.insert(label);
        } else {
            assert!((deg - 90.0).abs() < 2.0, "unexpected orientation {deg}");
            vertical.insert(label);
        }
    }
    assert_eq!(horizontal.len(), 1);
    assert_eq!(vertical.len(), 1);
    assert!(horizontal.is_disjoint(&vertical));

    let overlay = render_clusters(&edges, &report.segments, Some(labels)).unwrap();
    let first = report.segments[0];
    let mid = first.midpoint();
    assert_eq!(
        *overlay.get_pixel(mid[0].round() as u32, mid[1].round() as u32),
        cluster_color(labels[0])
    );
    let out = dir.path().join("out/overlay.png");
    save_rgb_image(&overlay, &out).unwrap();
    assert!(out.exists());
}

#[test]
fn scaled_input_reports_scaled_coordinates() {
    init_logging();
    let gray = bright_rectangle(W, H, (40, 40), (120, 80));
    let half = scale_image(&gray, 0.5).unwrap();
    assert_eq!(half.dimensions(), (W / 2, H / 2));

    let edges = canny(&half, &EdgeOptions::default()).unwrap();
    assert_eq!((edges.width(), edges.height()), (100, 80));
    let detection = LineDetector::new(DetectionParams::new(25.0, 20, 2))
        .detect(&edges)
        .unwrap();
    assert!(!detection.is_empty());
    for s in detection.segments() {
        for [x, y] in [s.p0(), s.p1()] {
            assert!((15..=85).contains(&x) && (15..=65).contains(&y), "{s:?}");
        }
    }
}

#[test]
fn edge_map_files_feed_the_detector_directly() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.png");
    let map = orthogonal_families();
    save_edge_map(&map, &path).unwrap();

    let loaded = load_edge_map(&path).unwrap();
    assert_eq!(loaded, map);
    let detection = LineDetector::new(family_params()).detect(&loaded).unwrap();
    assert_eq!(detection.len(), 40);
}

#[test]
fn missing_input_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = DataDir::new(dir.path()).resolve("Hotspots.jpg".as_ref());
    match load_grayscale_image(&missing) {
        Err(Error::InputNotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

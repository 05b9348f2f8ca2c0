use log::{info, warn};
use std::env;
use std::path::Path;
use thermo_lines::config::lines;
use thermo_lines::edges::{canny, scale_image};
use thermo_lines::image::io::{
    load_edge_map, load_grayscale_image, save_edge_map, save_rgb_image, write_json_file,
};
use thermo_lines::render::render_clusters;
use thermo_lines::LineDetector;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = lines::load_config(Path::new(&config_path))?;

    let input = config.input_path();
    let edges = if config.input_is_edge_map {
        if config.scale_factor != 1.0 {
            warn!(
                "scale_factor {} ignored for edge map input {}",
                config.scale_factor,
                input.display()
            );
        }
        load_edge_map(&input)?
    } else {
        let gray = load_grayscale_image(&input)?;
        let scaled = scale_image(&gray, config.scale_factor)?;
        canny(&scaled, &config.edges)?
    };
    info!(
        "{}: {}x{} edge map (scale {}), {} edge pixels",
        input.display(),
        edges.width(),
        edges.height(),
        config.scale_factor,
        edges.edge_count()
    );

    let detector = LineDetector::new(config.detection);
    let clustering = &config.clustering;
    let report = detector.run(
        &edges,
        clustering.num_clusters,
        clustering.num_restarts,
        &clustering.options,
    )?;

    let overlay = render_clusters(&edges, &report.segments, report.labels())?;
    let overlay_path = config.output_path(&config.output.overlay_image);
    save_rgb_image(&overlay, &overlay_path)?;
    let report_path = config.output_path(&config.output.report_json);
    write_json_file(&report_path, &report)?;
    if let Some(edge_image) = &config.output.edge_image {
        save_edge_map(&edges, &config.output_path(edge_image))?;
    }

    println!(
        "Detected {} segments in {:.1} ms",
        report.segments.len(),
        report.timings.total_ms
    );
    if let Some(clusters) = &report.clusters {
        println!(
            "Clustered into {} groups (sizes {:?}, dispersion {:.4}, seed {})",
            clusters.num_clusters,
            clusters.sizes,
            clusters.assignment.dispersion(),
            clusters.assignment.seed()
        );
    }
    println!("Saved overlay to {}", overlay_path.display());
    println!("Saved report to {}", report_path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: detect_lines <config.json>".to_string()
}

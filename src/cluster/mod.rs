//! Orientation clustering of detected segments.
//!
//! Segments are embedded as `(cos 2θ, sin 2θ)` (optionally extended with
//! their normalized midpoint) and partitioned into `K` groups by k-means,
//! minimizing the total within-cluster sum of squared distances.
//!
//! Because k-means depends on its initial centroids, the procedure runs `R`
//! independent restarts. Restart `r` draws its k-means++ seeding from
//! `StdRng::seed_from_u64(seed + r)` and owns its centroid and label
//! buffers, so restarts can run in parallel (feature `parallel`, rayon)
//! without any shared mutable state. Outcomes are collected in restart order
//! and reduced sequentially: the first restart with the smallest dispersion
//! wins, which keeps the result independent of thread scheduling.
//!
//! Each restart iterates until assignments stop changing or
//! `ClusterOptions::max_iterations` is reached.

mod assignment;
mod features;
mod kmeans;
mod options;

pub use assignment::ClusterAssignment;
pub use options::{ClusterOptions, OrientationFeature};

use crate::angle::normalize_half_pi;
use crate::error::{Error, Result};
use crate::segments::Segment;
use features::{segment_features, Feature};
use kmeans::{run_restart, RestartOutcome};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Partition `segments` into `num_clusters` orientation clusters, keeping
/// the best of `num_restarts` independent k-means runs.
pub fn cluster_segments(
    segments: &[Segment],
    num_clusters: usize,
    num_restarts: usize,
    options: &ClusterOptions,
) -> Result<ClusterAssignment> {
    validate(segments.len(), num_clusters, num_restarts)?;
    options.validate()?;

    let seed = match options.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            debug!("cluster_segments: no seed configured, drew {seed}; results are not reproducible unless it is reused");
            seed
        }
    };

    let features = segment_features(segments, options.feature);
    let outcomes = run_restarts(&features, num_clusters, num_restarts, options.max_iterations, seed);

    let restart_dispersions: Vec<f64> = outcomes.iter().map(|o| o.dispersion).collect();
    let mut best_restart = 0;
    for (r, d) in restart_dispersions.iter().enumerate().skip(1) {
        if *d < restart_dispersions[best_restart] {
            best_restart = r;
        }
    }
    let best = outcomes
        .into_iter()
        .nth(best_restart)
        .ok_or_else(|| Error::invalid("num_restarts", "no restart produced a result"))?;

    debug!(
        "cluster_segments: n={} k={} restarts={} best={} dispersion={:.6} iterations={} converged={}",
        segments.len(),
        num_clusters,
        num_restarts,
        best_restart,
        best.dispersion,
        best.iterations,
        best.converged
    );

    Ok(ClusterAssignment {
        orientations: best.centroids.iter().map(centroid_orientation).collect(),
        labels: best.labels,
        num_clusters,
        dispersion: best.dispersion,
        restart_dispersions,
        best_restart,
        iterations: best.iterations,
        converged: best.converged,
        seed,
    })
}

fn validate(n: usize, k: usize, restarts: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid("segments", "nothing to cluster"));
    }
    if k == 0 {
        return Err(Error::invalid("num_clusters", "must be at least 1"));
    }
    if k > n {
        return Err(Error::invalid(
            "num_clusters",
            format!("{k} clusters requested for {n} segments"),
        ));
    }
    if restarts == 0 {
        return Err(Error::invalid("num_restarts", "must be at least 1"));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_restarts(
    features: &[Feature],
    k: usize,
    restarts: usize,
    max_iterations: usize,
    seed: u64,
) -> Vec<RestartOutcome> {
    (0..restarts)
        .into_par_iter()
        .map(|r| run_restart(features, k, max_iterations, seed.wrapping_add(r as u64)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_restarts(
    features: &[Feature],
    k: usize,
    restarts: usize,
    max_iterations: usize,
    seed: u64,
) -> Vec<RestartOutcome> {
    (0..restarts)
        .map(|r| run_restart(features, k, max_iterations, seed.wrapping_add(r as u64)))
        .collect()
}

fn centroid_orientation(c: &Feature) -> f32 {
    normalize_half_pi((0.5 * c[1].atan2(c[0])) as f32)
}

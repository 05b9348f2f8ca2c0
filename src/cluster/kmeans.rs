//! One restart of Lloyd's k-means with k-means++ seeding.
use super::features::{squared_distance, Feature};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a single restart; owned so restarts never share state.
#[derive(Clone, Debug)]
pub(super) struct RestartOutcome {
    pub labels: Vec<usize>,
    pub centroids: Vec<Feature>,
    /// Sum of squared distances of every point to its centroid.
    pub dispersion: f64,
    pub iterations: usize,
    pub converged: bool,
}

pub(super) fn run_restart(
    features: &[Feature],
    k: usize,
    max_iterations: usize,
    seed: u64,
) -> RestartOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = seed_centroids(features, k, &mut rng);
    let mut labels = vec![usize::MAX; features.len()];

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;
        if !assign(features, &centroids, &mut labels) {
            converged = true;
            break;
        }
        update_centroids(features, &labels, &mut centroids);
    }

    let dispersion = features
        .iter()
        .zip(&labels)
        .map(|(f, &l)| squared_distance(f, &centroids[l]))
        .sum();

    RestartOutcome {
        labels,
        centroids,
        dispersion,
        iterations,
        converged,
    }
}

/// k-means++: first centroid uniform, then each next one drawn with
/// probability proportional to the squared distance to the closest chosen
/// centroid. Falls back to uniform draws once every point coincides with a
/// centroid.
fn seed_centroids(features: &[Feature], k: usize, rng: &mut StdRng) -> Vec<Feature> {
    let n = features.len();
    let mut centroids = Vec::with_capacity(k);
    let first = features[rng.gen_range(0..n)];
    centroids.push(first);
    let mut d2: Vec<f64> = features
        .iter()
        .map(|f| squared_distance(f, &first))
        .collect();

    while centroids.len() < k {
        let next = match WeightedIndex::new(&d2) {
            Ok(dist) => dist.sample(rng),
            Err(_) => rng.gen_range(0..n),
        };
        let c = features[next];
        centroids.push(c);
        for (d, f) in d2.iter_mut().zip(features) {
            *d = d.min(squared_distance(f, &c));
        }
    }
    centroids
}

/// Assign each point to its nearest centroid (lowest index on ties).
/// Returns whether any label changed.
fn assign(features: &[Feature], centroids: &[Feature], labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (f, label) in features.iter().zip(labels.iter_mut()) {
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (j, c) in centroids.iter().enumerate() {
            let d = squared_distance(f, c);
            if d < best_d {
                best_d = d;
                best = j;
            }
        }
        if *label != best {
            *label = best;
            changed = true;
        }
    }
    changed
}

/// Move every non-empty cluster's centroid to the mean of its points.
/// Empty clusters keep their previous centroid.
fn update_centroids(features: &[Feature], labels: &[usize], centroids: &mut [Feature]) {
    let mut sums = vec![[0.0f64; 4]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for (f, &l) in features.iter().zip(labels) {
        for (s, v) in sums[l].iter_mut().zip(f) {
            *s += v;
        }
        counts[l] += 1;
    }
    for ((c, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
        if count == 0 {
            continue;
        }
        for (cv, sv) in c.iter_mut().zip(sum) {
            *cv = sv / count as f64;
        }
    }
}

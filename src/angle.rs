//! Angle utilities shared by segment extraction and orientation clustering.

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(std::f32::consts::PI);
    if norm >= std::f32::consts::PI {
        norm -= std::f32::consts::PI;
    }
    if norm >= std::f32::consts::PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Computes the smallest unsigned angular difference between two angles,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > std::f32::consts::PI {
        diff = diff.rem_euclid(std::f32::consts::PI);
    }
    if diff > std::f32::consts::FRAC_PI_2 {
        std::f32::consts::PI - diff
    } else {
        diff
    }
}

/// Embeds an undirected orientation on the unit circle as `(cos 2θ, sin 2θ)`.
///
/// Doubling the angle maps θ and θ + π to the same point, so orientations
/// close to 0 and close to π end up adjacent instead of maximally distant.
/// Euclidean distances between embeddings grow monotonically with
/// [`angular_difference`].
#[inline]
pub fn doubled_angle_embedding(theta: f32) -> [f64; 2] {
    let t = 2.0 * theta as f64;
    [t.cos(), t.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    }

    #[test]
    fn normalize_half_pi_basic() {
        assert!(approx_eq(normalize_half_pi(0.5), 0.5));
        assert!(approx_eq(normalize_half_pi(-FRAC_PI_4), 3.0 * FRAC_PI_4));
        assert!(approx_eq(normalize_half_pi(PI), 0.0));
        assert!(approx_eq(normalize_half_pi(3.0 * PI), 0.0));
    }

    #[test]
    fn angular_difference_handles_wrap() {
        assert!(approx_eq(angular_difference(0.0, PI), 0.0));
        assert!(approx_eq(angular_difference(0.0, FRAC_PI_2), FRAC_PI_2));
        assert!(approx_eq(angular_difference(FRAC_PI_4, -FRAC_PI_4), FRAC_PI_2));
        assert!(approx_eq(
            angular_difference(0.25, 1.7),
            angular_difference(1.7, 0.25)
        ));
    }

    #[test]
    fn embedding_joins_both_ends_of_the_half_circle() {
        let near_zero = doubled_angle_embedding(0.02);
        let near_pi = doubled_angle_embedding(PI - 0.02);
        let vertical = doubled_angle_embedding(FRAC_PI_2);
        assert!(dist(near_zero, near_pi) < 0.1);
        assert!(dist(near_zero, vertical) > 1.9);
    }
}

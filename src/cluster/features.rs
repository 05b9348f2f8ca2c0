use super::options::OrientationFeature;
use crate::angle::doubled_angle_embedding;
use crate::segments::Segment;

/// Fixed-width feature row; unused trailing components stay zero.
pub(super) type Feature = [f64; 4];

pub(super) fn segment_features(segments: &[Segment], kind: OrientationFeature) -> Vec<Feature> {
    let orientation = segments
        .iter()
        .map(|s| doubled_angle_embedding(s.theta()));

    match kind {
        OrientationFeature::DoubledAngle => orientation.map(|[c, s]| [c, s, 0.0, 0.0]).collect(),
        OrientationFeature::DoubledAngleWithMidpoint { position_weight } => {
            let mids: Vec<[f64; 2]> = segments
                .iter()
                .map(|s| {
                    let m = s.midpoint();
                    [m[0] as f64, m[1] as f64]
                })
                .collect();
            let (min, max) = mids.iter().fold(
                ([f64::INFINITY; 2], [f64::NEG_INFINITY; 2]),
                |(lo, hi), m| {
                    (
                        [lo[0].min(m[0]), lo[1].min(m[1])],
                        [hi[0].max(m[0]), hi[1].max(m[1])],
                    )
                },
            );
            let extent = ((max[0] - min[0]).powi(2) + (max[1] - min[1]).powi(2))
                .sqrt()
                .max(1.0);
            let scale = position_weight / extent;
            orientation
                .zip(&mids)
                .map(|([c, s], m)| [c, s, (m[0] - min[0]) * scale, (m[1] - min[1]) * scale])
                .collect()
        }
    }
}

#[inline]
pub(super) fn squared_distance(a: &Feature, b: &Feature) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_segments_share_a_feature() {
        let a = Segment::new([0, 0], [10, 3], 11);
        let b = Segment::new([10, 3], [0, 0], 11);
        let f = segment_features(&[a, b], OrientationFeature::DoubledAngle);
        assert!(squared_distance(&f[0], &f[1]) < 1e-12);
    }

    #[test]
    fn midpoint_feature_separates_parallel_segments() {
        let near = Segment::new([0, 10], [40, 10], 41);
        let far = Segment::new([0, 90], [40, 90], 41);
        let plain = segment_features(&[near, far], OrientationFeature::DoubledAngle);
        assert!(squared_distance(&plain[0], &plain[1]) < 1e-12);

        let kind = OrientationFeature::DoubledAngleWithMidpoint {
            position_weight: 2.0,
        };
        let placed = segment_features(&[near, far], kind);
        assert!((squared_distance(&placed[0], &placed[1]) - 4.0).abs() < 1e-9);
    }
}

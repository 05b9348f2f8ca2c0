use super::segment::Segment;
use crate::angle::angular_difference;

/// Tolerances for joining fragments of the same physical line.
#[derive(Clone, Copy, Debug)]
pub(super) struct MergeTolerances {
    pub angle_rad: f32,
    pub distance_px: f32,
    pub max_gap: u32,
}

/// Greedily merge near-collinear segments until no pair qualifies.
///
/// Merged segments keep the position of the earlier fragment in the list, so
/// detection order stays stable. Degenerate (zero-length) segments must be
/// removed beforehand.
pub(super) fn merge_collinear(mut segs: Vec<Segment>, tol: MergeTolerances) -> Vec<Segment> {
    let mut i = 0;
    while i < segs.len() {
        let mut grew = false;
        let mut j = i + 1;
        while j < segs.len() {
            if let Some(merged) = try_merge(&segs[i], &segs[j], tol) {
                segs[i] = merged;
                segs.remove(j);
                grew = true;
            } else {
                j += 1;
            }
        }
        // A grown segment may now reach fragments rejected earlier in the scan.
        if !grew {
            i += 1;
        }
    }
    segs
}

fn try_merge(a: &Segment, b: &Segment, tol: MergeTolerances) -> Option<Segment> {
    if angular_difference(a.theta(), b.theta()) > tol.angle_rad {
        return None;
    }
    let (reference, other) = if a.length_sq() >= b.length_sq() {
        (a, b)
    } else {
        (b, a)
    };

    let line = reference.line();
    for p in [other.p0(), other.p1()] {
        let dist = (line[0] * p[0] as f32 + line[1] * p[1] as f32 + line[2]).abs();
        if dist > tol.distance_px {
            return None;
        }
    }

    let origin = reference.p0();
    let dir = reference.direction();
    let project = |p: [i32; 2]| {
        (p[0] - origin[0]) as f32 * dir[0] + (p[1] - origin[1]) as f32 * dir[1]
    };

    let (r0, r1) = (0.0f32, reference.length());
    let (o0, o1) = {
        let (s, t) = (project(other.p0()), project(other.p1()));
        (s.min(t), s.max(t))
    };
    // Adjacent pixels are one step apart, so a gap of g missing pixels
    // separates the ends by g + 1.
    let separation = (o0 - r1).max(r0 - o1);
    if separation > tol.max_gap as f32 + 1.0 {
        return None;
    }

    let points = [reference.p0(), reference.p1(), other.p0(), other.p1()];
    let mut lo = points[0];
    let mut hi = points[0];
    let (mut lo_t, mut hi_t) = (f32::INFINITY, f32::NEG_INFINITY);
    for p in points {
        let t = project(p);
        if t < lo_t {
            lo_t = t;
            lo = p;
        }
        if t > hi_t {
            hi_t = t;
            hi = p;
        }
    }
    Some(Segment::new(lo, hi, a.votes() + b.votes()))
}

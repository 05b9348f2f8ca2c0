use nalgebra::Vector3;
use serde::Serialize;
use std::ops::Deref;

/// Straight line segment with integer pixel endpoints.
///
/// Endpoints are kept in canonical order (lexicographically smaller `(x, y)`
/// first), so a segment and its reverse are the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    p0: [i32; 2],
    p1: [i32; 2],
    /// Number of edge pixels supporting the segment.
    votes: u32,
}

impl Segment {
    pub fn new(a: [i32; 2], b: [i32; 2], votes: u32) -> Self {
        let (p0, p1) = if (a[0], a[1]) <= (b[0], b[1]) {
            (a, b)
        } else {
            (b, a)
        };
        Self { p0, p1, votes }
    }

    pub fn p0(&self) -> [i32; 2] {
        self.p0
    }

    pub fn p1(&self) -> [i32; 2] {
        self.p1
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.p0[0] + self.p1[0]) as f32 * 0.5,
            (self.p0[1] + self.p1[1]) as f32 * 0.5,
        ]
    }

    pub fn length_sq(&self) -> f32 {
        let dx = (self.p1[0] - self.p0[0]) as f32;
        let dy = (self.p1[1] - self.p0[1]) as f32;
        dx * dx + dy * dy
    }

    pub fn length(&self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Unit tangent from `p0` to `p1`; zero for a degenerate segment.
    pub fn direction(&self) -> [f32; 2] {
        let len = self.length();
        if len > 0.0 {
            [
                (self.p1[0] - self.p0[0]) as f32 / len,
                (self.p1[1] - self.p0[1]) as f32 / len,
            ]
        } else {
            [0.0, 0.0]
        }
    }

    /// Undirected orientation in [0, π).
    pub fn theta(&self) -> f32 {
        let dy = (self.p1[1] - self.p0[1]) as f32;
        let dx = (self.p1[0] - self.p0[0]) as f32;
        crate::angle::normalize_half_pi(dy.atan2(dx))
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1
    pub fn line(&self) -> Vector3<f32> {
        let (x0, y0) = (self.p0[0] as f32, self.p0[1] as f32);
        let (x1, y1) = (self.p1[0] as f32, self.p1[1] as f32);
        let a = y1 - y0;
        let b = x0 - x1;
        let c = x1 * y0 - x0 * y1;
        let norm = (a * a + b * b).sqrt();
        Vector3::new(a / norm, b / norm, c / norm)
    }
}

/// Segments in detection order; indices pair with cluster labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SegmentCollection(Vec<Segment>);

impl SegmentCollection {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Segment> {
        self.0
    }
}

impl Deref for SegmentCollection {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.0
    }
}

impl From<Vec<Segment>> for SegmentCollection {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<Segment> for SegmentCollection {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SegmentCollection {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

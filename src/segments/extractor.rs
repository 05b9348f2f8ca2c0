use super::accumulator::HoughAccumulator;
use super::options::DetectionParams;
use super::segment::Segment;
use crate::image::EdgeMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Pending pixels met while walking from a seed in one direction.
struct Trace {
    /// Supporting pixels in walk order, excluding the seed.
    pixels: Vec<[usize; 2]>,
    end: [i32; 2],
}

pub(super) struct ProbabilisticHough<'a> {
    edges: &'a EdgeMap,
    width: usize,
    height: usize,
    min_length: f32,
    min_votes: u32,
    max_gap: usize,
    /// Largest re-centring offset per step, two angle bins of slope.
    drift_slope: f32,
    seed: u64,
    /// Edge pixels not yet consumed by a segment.
    pending: Vec<bool>,
    /// Pixels whose votes are currently in the accumulator.
    voted: Vec<bool>,
    acc: HoughAccumulator,
}

impl<'a> ProbabilisticHough<'a> {
    pub(super) fn new(edges: &'a EdgeMap, params: &DetectionParams) -> Self {
        let width = edges.width();
        let height = edges.height();
        let pending = edges.as_raw().iter().map(|&v| v != 0).collect();
        Self {
            edges,
            width,
            height,
            min_length: params.min_line_length,
            min_votes: params.min_votes,
            max_gap: params.max_line_gap as usize,
            drift_slope: (2.0 * params.theta_resolution_deg).to_radians().tan(),
            seed: params.seed,
            pending,
            voted: vec![false; width * height],
            acc: HoughAccumulator::new(
                width,
                height,
                params.rho_resolution,
                params.theta_resolution_deg.to_radians(),
            ),
        }
    }

    /// Visit edge pixels in seeded random order, vote, and extend every line
    /// whose accumulator bin reaches `min_votes`. Returns accepted
    /// candidates in detection order; the vote filter runs after merging.
    pub(super) fn extract(mut self) -> Vec<Segment> {
        let mut order: Vec<(usize, usize)> = self.edges.edge_pixels().collect();
        order.shuffle(&mut StdRng::seed_from_u64(self.seed));

        let mut candidates = Vec::new();
        for (x, y) in order {
            let idx = y * self.width + x;
            if !self.pending[idx] {
                continue;
            }
            let (bin, count) = self.acc.vote(x, y);
            self.voted[idx] = true;
            if count < self.min_votes {
                continue;
            }
            if let Some(seg) = self.extend(x, y, bin) {
                candidates.push(seg);
            }
        }
        candidates
    }

    /// Walk the line of `bin` through `(x, y)` both ways. Only a span of at
    /// least `min_length` consumes its pixels; a shorter one leaves the map
    /// and the accumulator untouched.
    fn extend(&mut self, x: usize, y: usize, bin: usize) -> Option<Segment> {
        let theta = self.acc.angle(bin);
        let dir = [-theta.sin(), theta.cos()];
        let forward = self.trace(x, y, dir);
        let backward = self.trace(x, y, [-dir[0], -dir[1]]);

        if forward.end == backward.end {
            return None;
        }
        let span = Segment::new(backward.end, forward.end, 0);
        if span.length() < self.min_length {
            return None;
        }

        let mut support = self.consume([x, y]);
        for &p in forward.pixels.iter().chain(&backward.pixels) {
            support += self.consume(p);
        }
        Some(Segment::new(backward.end, forward.end, support))
    }

    fn step_vector(dir: [f32; 2]) -> [f32; 2] {
        let (ax, ay) = (dir[0].abs(), dir[1].abs());
        if ax >= ay {
            [dir[0].signum(), dir[1] / ax]
        } else {
            [dir[0] / ay, dir[1].signum()]
        }
    }

    #[inline]
    fn is_pending(&self, p: [i64; 2]) -> bool {
        self.in_bounds(p) && self.pending[p[1] as usize * self.width + p[0] as usize]
    }

    #[inline]
    fn in_bounds(&self, p: [i64; 2]) -> bool {
        p[0] >= 0 && p[1] >= 0 && (p[0] as usize) < self.width && (p[1] as usize) < self.height
    }

    /// Walk from the seed until more than `max_gap` consecutive predicted
    /// pixels are missing or the image border is reached.
    ///
    /// When the predicted pixel is not pending, its two neighbours across
    /// the walk are tried; a hit shifts every later prediction by the same
    /// offset, so a slightly mis-binned angle still follows the line. The
    /// total shift after `k` steps stays within `1 + k * drift_slope`, which
    /// keeps the walk from following curves.
    fn trace(&self, x: usize, y: usize, dir: [f32; 2]) -> Trace {
        let step = Self::step_vector(dir);
        let minor = if step[0].abs() >= step[1].abs() { 1 } else { 0 };
        let mut drift = 0i64;
        let mut pixels = Vec::new();
        let mut end = [x as i32, y as i32];
        let mut gap = 0;
        let mut k = 1;
        loop {
            let mut base = [
                (x as f32 + step[0] * k as f32).round() as i64,
                (y as f32 + step[1] * k as f32).round() as i64,
            ];
            base[minor] += drift;
            if !self.in_bounds(base) {
                break;
            }
            let max_drift = 1.0 + k as f32 * self.drift_slope;
            let hit = [0, 1, -1].into_iter().find_map(|d| {
                let mut p = base;
                p[minor] += d;
                let within = ((drift + d).abs() as f32) <= max_drift;
                (within && self.is_pending(p)).then_some((p, d))
            });
            match hit {
                Some((p, d)) => {
                    drift += d;
                    gap = 0;
                    pixels.push([p[0] as usize, p[1] as usize]);
                    end = [p[0] as i32, p[1] as i32];
                }
                None => {
                    gap += 1;
                    if gap > self.max_gap {
                        break;
                    }
                }
            }
            k += 1;
        }
        Trace { pixels, end }
    }

    /// Remove a pending pixel from the map and, if it voted, from the
    /// accumulator. Returns 1 when the pixel was still pending.
    fn consume(&mut self, [px, py]: [usize; 2]) -> u32 {
        let idx = py * self.width + px;
        if !self.pending[idx] {
            return 0;
        }
        self.pending[idx] = false;
        if self.voted[idx] {
            self.voted[idx] = false;
            self.acc.unvote(px, py);
        }
        1
    }
}

//! Discretized (θ, ρ) vote accumulator.
//!
//! A pixel `(x, y)` votes once per angle bin `n` for the line
//! `ρ = x·cos θₙ + y·sin θₙ`, θₙ = n·Δθ ∈ [0, π). ρ may be negative, so the
//! distance axis is offset to keep indices non-negative.

pub(super) struct HoughAccumulator {
    num_angle: usize,
    num_rho: usize,
    rho_offset: i32,
    theta_step: f32,
    cos_tab: Vec<f32>,
    sin_tab: Vec<f32>,
    counts: Vec<u32>,
    ties: Vec<usize>,
}

impl HoughAccumulator {
    pub(super) fn new(width: usize, height: usize, rho_res: f32, theta_res: f32) -> Self {
        let num_angle = ((std::f32::consts::PI / theta_res).round() as usize).max(1);
        let theta_step = std::f32::consts::PI / num_angle as f32;
        let max_r = ((width + height) as f32 / rho_res).ceil() as i32;
        let rho_offset = max_r + 1;
        let num_rho = (2 * rho_offset + 1) as usize;
        let irho = 1.0 / rho_res;
        let (cos_tab, sin_tab) = (0..num_angle)
            .map(|n| {
                let theta = n as f32 * theta_step;
                (theta.cos() * irho, theta.sin() * irho)
            })
            .unzip();
        Self {
            num_angle,
            num_rho,
            rho_offset,
            theta_step,
            cos_tab,
            sin_tab,
            counts: vec![0; num_angle * num_rho],
            ties: Vec::with_capacity(num_angle),
        }
    }

    #[inline]
    fn cell(&self, n: usize, x: usize, y: usize) -> usize {
        let r = (x as f32 * self.cos_tab[n] + y as f32 * self.sin_tab[n]).round() as i32;
        n * self.num_rho + (r + self.rho_offset) as usize
    }

    /// Normal angle of bin `n`.
    pub(super) fn angle(&self, n: usize) -> f32 {
        n as f32 * self.theta_step
    }

    /// Add the votes of `(x, y)` and return the best bin among the lines
    /// through it together with its count.
    ///
    /// When several bins share the maximum count the median of the tied
    /// angles is returned; tied bins straddle the true orientation.
    pub(super) fn vote(&mut self, x: usize, y: usize) -> (usize, u32) {
        let mut best = 0u32;
        self.ties.clear();
        for n in 0..self.num_angle {
            let cell = self.cell(n, x, y);
            self.counts[cell] += 1;
            let count = self.counts[cell];
            if count > best {
                best = count;
                self.ties.clear();
                self.ties.push(n);
            } else if count == best {
                self.ties.push(n);
            }
        }
        (self.median_tie(), best)
    }

    pub(super) fn unvote(&mut self, x: usize, y: usize) {
        for n in 0..self.num_angle {
            let cell = self.cell(n, x, y);
            self.counts[cell] = self.counts[cell].saturating_sub(1);
        }
    }

    fn median_tie(&self) -> usize {
        let n = self.ties.len();
        if n == 1 {
            return self.ties[0];
        }
        // Angles are circular: start the run after the widest hole so that
        // ties straddling θ = 0 ≡ π stay contiguous.
        let mut start = 0;
        let mut widest = self.ties[0] + self.num_angle - self.ties[n - 1];
        for i in 1..n {
            let hole = self.ties[i] - self.ties[i - 1];
            if hole > widest {
                widest = hole;
                start = i;
            }
        }
        self.ties[(start + n / 2) % n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_votes_peak_at_the_line_normal() {
        let mut acc = HoughAccumulator::new(64, 64, 1.0, 1f32.to_radians());
        let mut last = (0, 0);
        for x in 10..40 {
            last = acc.vote(x, 20);
        }
        let (n, count) = last;
        assert_eq!(count, 30);
        assert!((acc.angle(n).to_degrees() - 90.0).abs() < 0.5);
    }

    #[test]
    fn vertical_ties_wrap_around_zero() {
        let mut acc = HoughAccumulator::new(64, 64, 1.0, 1f32.to_radians());
        let mut last = (0, 0);
        for y in 5..60 {
            last = acc.vote(30, y);
        }
        let (n, count) = last;
        assert_eq!(count, 55);
        let deg = acc.angle(n).to_degrees();
        let off = crate::angle::angular_difference(acc.angle(n), 0.0).to_degrees();
        assert!(off < 1.5, "expected a vertical line, got {deg}");
    }

    #[test]
    fn tie_median_runs_across_the_seam() {
        let mut acc = HoughAccumulator::new(16, 16, 1.0, 1f32.to_radians());
        acc.ties = vec![0, 1, 2, 178, 179];
        assert_eq!(acc.median_tie(), 0);
        acc.ties = vec![40, 41, 42, 43];
        assert_eq!(acc.median_tie(), 42);
    }

    #[test]
    fn unvote_restores_counts() {
        let mut acc = HoughAccumulator::new(16, 16, 1.0, 1f32.to_radians());
        acc.vote(3, 4);
        acc.vote(5, 4);
        acc.unvote(3, 4);
        acc.unvote(5, 4);
        assert!(acc.counts.iter().all(|&c| c == 0));
    }
}

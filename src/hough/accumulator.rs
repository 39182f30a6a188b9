//! The rho–theta voting grid.
//!
//! Rho spans `[-diag, diag]` so the index offset keeps every vote in
//! bounds; theta spans `[0, π)`. Trig values are tabulated once per
//! detection call.
pub(super) struct Accumulator {
    num_rho: usize,
    rho_offset: i32,
    inv_rho_res: f32,
    counts: Vec<i32>,
    trig: Vec<(f32, f32)>, // (cos, sin) per theta bin
}

impl Accumulator {
    pub(super) fn new(w: usize, h: usize, rho_res_px: f32, theta_res_deg: f32) -> Self {
        let num_theta = (180.0 / theta_res_deg).round().max(1.0) as usize;
        let diag = ((w * w + h * h) as f32).sqrt();
        let span = (diag / rho_res_px).ceil() as usize + 1;
        let num_rho = 2 * span + 1;
        let trig = (0..num_theta)
            .map(|t| {
                let theta = (t as f32 * theta_res_deg).to_radians();
                (theta.cos(), theta.sin())
            })
            .collect();
        Self {
            num_rho,
            rho_offset: span as i32,
            inv_rho_res: 1.0 / rho_res_px,
            counts: vec![0; num_theta * num_rho],
            trig,
        }
    }

    pub(super) fn num_theta(&self) -> usize {
        self.trig.len()
    }

    /// Unit direction of the line family for a theta bin: `(-sinθ, cosθ)`.
    pub(super) fn line_direction(&self, theta_idx: usize) -> (f32, f32) {
        let (c, s) = self.trig[theta_idx];
        (-s, c)
    }

    #[inline]
    fn bin(&self, x: i32, y: i32, theta_idx: usize) -> usize {
        let (c, s) = self.trig[theta_idx];
        let rho = (x as f32 * c + y as f32 * s) * self.inv_rho_res;
        let r = rho.round() as i32 + self.rho_offset;
        theta_idx * self.num_rho + r as usize
    }

    /// Cast one vote per theta bin; returns the best (votes, theta bin)
    /// among the bins this pixel touched.
    pub(super) fn vote(&mut self, x: i32, y: i32) -> (i32, usize) {
        let mut best_votes = 0;
        let mut best_theta = 0;
        for t in 0..self.num_theta() {
            let b = self.bin(x, y, t);
            self.counts[b] += 1;
            if self.counts[b] > best_votes {
                best_votes = self.counts[b];
                best_theta = t;
            }
        }
        (best_votes, best_theta)
    }

    /// Remove a consumed pixel's votes from every theta bin.
    pub(super) fn unvote(&mut self, x: i32, y: i32) {
        for t in 0..self.num_theta() {
            let b = self.bin(x, y, t);
            self.counts[b] -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_points_peak_in_one_bin() {
        let mut acc = Accumulator::new(100, 100, 1.0, 1.0);
        let mut peak = (0, 0usize);
        for x in 0..60 {
            peak = acc.vote(x, 40);
        }
        let (votes, theta_idx) = peak;
        assert_eq!(votes, 60, "all votes should land in the y=40 bin");
        assert_eq!(theta_idx, 90, "horizontal line peaks at theta=90 deg");
        let (dx, dy) = acc.line_direction(theta_idx);
        assert!(dx.abs() > 0.999 && dy.abs() < 1e-3);
    }

    #[test]
    fn unvote_reverses_vote() {
        let mut acc = Accumulator::new(64, 64, 1.0, 1.0);
        for x in 0..10 {
            acc.vote(x, 20);
        }
        let before = acc.counts.clone();
        acc.vote(5, 21);
        acc.unvote(5, 21);
        assert_eq!(acc.counts, before);
    }
}

//! Segment extraction: randomized voting plus walk-and-consume.
use super::accumulator::Accumulator;
use super::HoughOptions;
use crate::edges::EdgeMap;
use crate::types::LineSegment;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub(super) fn extract_segments(edges: &EdgeMap, opts: &HoughOptions) -> Vec<LineSegment> {
    let w = edges.w as i32;
    let h = edges.h as i32;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut points: Vec<(i32, i32)> = Vec::new();
    for y in 0..edges.h {
        for x in 0..edges.w {
            if edges.get(x, y) {
                points.push((x as i32, y as i32));
            }
        }
    }
    if points.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    points.shuffle(&mut rng);

    let mut mask = edges.data.clone();
    let mut acc = Accumulator::new(edges.w, edges.h, opts.rho_res_px, opts.theta_res_deg);
    let min_len = (opts.min_length_frac * edges.w as f32).floor() as i32;
    let mut segments = Vec::new();

    for &(x, y) in &points {
        // Consumed by an earlier walk.
        if mask[(y * w + x) as usize] == 0 {
            continue;
        }

        let (votes, theta_idx) = acc.vote(x, y);
        if votes < opts.vote_threshold {
            continue;
        }

        // Step vector with a unit dominant component so each step advances
        // exactly one pixel along the major axis.
        let (a, b) = acc.line_direction(theta_idx);
        let (dx, dy) = if a.abs() > b.abs() {
            (a.signum(), b / a.abs())
        } else {
            (a / b.abs(), b.signum())
        };

        let mut ends = [(x, y); 2];
        for (k, end) in ends.iter_mut().enumerate() {
            let (sx, sy) = if k == 0 { (dx, dy) } else { (-dx, -dy) };
            let mut px = x as f32 + sx;
            let mut py = y as f32 + sy;
            let mut gap = 0;
            loop {
                let xi = px.round() as i32;
                let yi = py.round() as i32;
                if xi < 0 || yi < 0 || xi >= w || yi >= h {
                    break;
                }
                if mask[(yi * w + xi) as usize] != 0 {
                    gap = 0;
                    *end = (xi, yi);
                } else {
                    gap += 1;
                    if gap > opts.max_gap_px {
                        break;
                    }
                }
                px += sx;
                py += sy;
            }
        }

        // Axis-aligned extent, as the classic probabilistic variant uses.
        let good = (ends[1].0 - ends[0].0).abs() >= min_len
            || (ends[1].1 - ends[0].1).abs() >= min_len;

        // Consume the walked corridor either way so the loop terminates;
        // only accepted segments withdraw their votes.
        for (k, end) in ends.iter().enumerate() {
            let (sx, sy) = if k == 0 { (dx, dy) } else { (-dx, -dy) };
            let mut px = x as f32;
            let mut py = y as f32;
            loop {
                let xi = px.round() as i32;
                let yi = py.round() as i32;
                if xi < 0 || yi < 0 || xi >= w || yi >= h {
                    break;
                }
                let idx = (yi * w + xi) as usize;
                if mask[idx] != 0 {
                    mask[idx] = 0;
                    if good {
                        acc.unvote(xi, yi);
                    }
                }
                if (xi, yi) == *end {
                    break;
                }
                px += sx;
                py += sy;
            }
        }

        if good {
            segments.push(LineSegment {
                x1: ends[0].0,
                y1: ends[0].1,
                x2: ends[1].0,
                y2: ends[1].1,
            });
        }
    }

    segments
}

//! Two-threshold hysteresis linking.
//!
//! Pixels at or above the high threshold are definite edges and seed a
//! stack-based flood over 8-connected neighbors; pixels at or above the low
//! threshold are confirmed only when reached by that flood.
use super::EdgeMap;
use crate::image::ImageF32;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Confirm edges from a thinned magnitude raster.
pub fn link_edges(thin: &ImageF32, low: f32, high: f32) -> EdgeMap {
    let w = thin.w;
    let h = thin.h;
    let mut edges = EdgeMap::new(w, h);
    if w == 0 || h == 0 {
        return edges;
    }

    let mut stack: Vec<usize> = Vec::with_capacity(64);
    for y in 0..h {
        let row = thin.row(y);
        for x in 0..w {
            if row[x] >= high && !edges.get(x, y) {
                edges.set(x, y);
                stack.push(y * w + x);
                flood_weak(thin, &mut edges, &mut stack, low);
            }
        }
    }
    edges
}

fn flood_weak(thin: &ImageF32, edges: &mut EdgeMap, stack: &mut Vec<usize>, low: f32) {
    let w = thin.w as isize;
    let h = thin.h as isize;
    while let Some(idx) = stack.pop() {
        let x = (idx % thin.w) as isize;
        let y = (idx / thin.w) as isize;
        for (dx, dy) in NEIGH_OFFSETS {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let (ux, uy) = (nx as usize, ny as usize);
            if edges.get(ux, uy) {
                continue;
            }
            if thin.get(ux, uy) >= low {
                edges.set(ux, uy);
                stack.push(uy * thin.w + ux);
            }
        }
    }
}

//! Reproducible point clouds for demos, benches and tests.
//!
//! Model
//! - `uniform_in_box`: i.i.d. uniform points in an axis-aligned box.
//! - `jittered_grid`: a regular lattice with bounded per-point jitter. With
//!   zero jitter the lattice is exactly collinear along rows and columns,
//!   which the triangulator does not handle robustly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point2D;

/// Axis-aligned sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2 {
    pub fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0))
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `count` uniform points inside `bounds`.
pub fn uniform_in_box(count: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point2D> {
    let mut rng = tok.to_std_rng();
    let (w, h) = (bounds.width().max(0.0), bounds.height().max(0.0));
    (0..count)
        .map(|_| {
            Point2D::new(
                bounds.min.x + rng.gen::<f64>() * w,
                bounds.min.y + rng.gen::<f64>() * h,
            )
        })
        .collect()
}

/// `cols × rows` lattice spanning `bounds`, each point moved by up to
/// `jitter_frac` (clamped to [0, 0.49]) of the cell size per axis.
pub fn jittered_grid(
    cols: usize,
    rows: usize,
    bounds: Bounds2,
    jitter_frac: f64,
    tok: ReplayToken,
) -> Vec<Point2D> {
    let mut rng = tok.to_std_rng();
    let jf = jitter_frac.clamp(0.0, 0.49);
    let dx = bounds.width() / (cols.max(2) - 1) as f64;
    let dy = bounds.height() / (rows.max(2) - 1) as f64;
    let mut pts = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            let mut x = bounds.min.x + i as f64 * dx;
            let mut y = bounds.min.y + j as f64 * dy;
            if jf > 0.0 {
                x += rng.gen_range(-jf..=jf) * dx;
                y += rng.gen_range(-jf..=jf) * dy;
            }
            pts.push(Point2D::new(x, y));
        }
    }
    pts
}

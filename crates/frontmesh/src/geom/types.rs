//! Point, edge and triangle value types.
//!
//! - `Point2D`: exact equality, bit-pattern hashing (`-0.0` folded into `+0.0`).
//! - `Edge`: unordered for identity, ordered for orientation tests.
//! - `Triangle`: vertex order is the construction order `(start, end, apex)`.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality.
///
/// `Eq` and `Hash` assume finite coordinates; the triangulator rejects NaN
/// and infinities before any point reaches a hashed collection.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Bit-level identity consistent with `==` (signed zeros collapse).
    #[inline]
    fn key(self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Vector2<f64>> for Point2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Segment between two points. Direction matters for orientation tests,
/// not for identity: `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub start: Point2D,
    pub end: Point2D,
}

impl Edge {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        self.start == p || self.end == p
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (ka, kb) = (self.start.key(), self.end.key());
        if ka <= kb {
            (ka, kb).hash(state);
        } else {
            (kb, ka).hash(state);
        }
    }
}

/// Triangle in construction order: the live edge `(a, b)` followed by the apex `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }
    #[inline]
    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }
    /// The three edges in frontier toggle order: `(a,b)`, `(c,b)`, `(a,c)`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.c, self.b),
            Edge::new(self.a, self.c),
        ]
    }
    /// Twice the signed area; positive when `c` lies left of `a → b`.
    #[inline]
    pub fn area2(&self) -> f64 {
        super::cross(self.a, self.b, self.c)
    }
    /// Same vertex set, ignoring construction order.
    pub fn same_vertices(&self, other: &Triangle) -> bool {
        let mine = self.vertices();
        let theirs = other.vertices();
        mine.iter().all(|p| theirs.contains(p)) && theirs.iter().all(|p| mine.contains(p))
    }
}

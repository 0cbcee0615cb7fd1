//! Orientation, distance and circumcenter predicates.

use super::types::Point2D;

/// Denominator threshold below which a circumcenter is reported as degenerate.
pub const EPS_CIRCUM: f64 = 1e-6;

/// Side of a directed line `a → b` on which a point lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Strictly left (counter-clockwise turn).
    Left,
    /// Strictly right (clockwise turn).
    Right,
    /// On the line. NaN cross products land here too.
    Collinear,
}

impl Orientation {
    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Orientation::Left)
    }
}

/// Cross product `(b − a) × (c − a)`: twice the signed area of `abc`.
#[inline]
pub fn cross(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ab = b.to_vector() - a.to_vector();
    let ac = c.to_vector() - a.to_vector();
    ab.x * ac.y - ab.y * ac.x
}

/// Exact sign of `cross(a, b, c)`; zero is `Collinear`.
#[inline]
pub fn orientation(a: Point2D, b: Point2D, c: Point2D) -> Orientation {
    let v = cross(a, b, c);
    if v > 0.0 {
        Orientation::Left
    } else if v < 0.0 {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Squared Euclidean distance; ranking only, never square-rooted.
#[inline]
pub fn squared_distance(a: Point2D, b: Point2D) -> f64 {
    (b.to_vector() - a.to_vector()).norm_squared()
}

/// Outcome of a circumcenter computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Circumcenter {
    Center(Point2D),
    /// `|d| < eps`: the three points are (nearly) collinear.
    Degenerate,
}

/// Circumcenter of `abc` from the closed-form determinant solution.
///
/// `d = 2 (a.x (b.y − c.y) + b.x (c.y − a.y) + c.x (a.y − b.y))`; when
/// `|d| < eps` the triple is reported as `Degenerate` instead of dividing.
pub fn circumcenter(a: Point2D, b: Point2D, c: Point2D, eps: f64) -> Circumcenter {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < eps {
        return Circumcenter::Degenerate;
    }
    let sa = a.x * a.x + a.y * a.y;
    let sb = b.x * b.x + b.y * b.y;
    let sc = c.x * c.x + c.y * c.y;
    let ux = (sa * (b.y - c.y) + sb * (c.y - a.y) + sc * (a.y - b.y)) / d;
    let uy = (sa * (c.x - b.x) + sb * (a.x - c.x) + sc * (b.x - a.x)) / d;
    Circumcenter::Center(Point2D::new(ux, uy))
}

//! Circumcenter-based candidate ranking for a live edge.
//!
//! Lower is better. A candidate whose circumcenter is not strictly left of
//! the edge scores `-r²` and beats every candidate scoring `+r²`. A
//! degenerate triple scores `+inf`, and since the running minimum also
//! starts at `+inf` under a strict `<`, such a candidate is never selected.

use crate::geom::{circumcenter, orientation, squared_distance, Circumcenter, Edge, Point2D};

use super::TriCfg;

/// Score of `p` for `edge`, or `None` when `p` is not strictly left of it.
pub fn score(edge: Edge, p: Point2D, cfg: &TriCfg) -> Option<f64> {
    if !orientation(edge.start, edge.end, p).is_left() {
        return None;
    }
    let s = match circumcenter(edge.start, edge.end, p, cfg.eps_circum) {
        Circumcenter::Degenerate => f64::INFINITY,
        Circumcenter::Center(c) => {
            let r2 = squared_distance(c, edge.start);
            if orientation(edge.start, edge.end, c).is_left() {
                r2
            } else {
                -r2
            }
        }
    };
    Some(s)
}

/// Minimum-score candidate over `points` in input order (first wins ties).
pub fn best_candidate(edge: Edge, points: &[Point2D], cfg: &TriCfg) -> Option<Point2D> {
    let mut best = None;
    let mut min = f64::INFINITY;
    for &p in points {
        if let Some(s) = score(edge, p, cfg) {
            if s < min {
                min = s;
                best = Some(p);
            }
        }
    }
    best
}

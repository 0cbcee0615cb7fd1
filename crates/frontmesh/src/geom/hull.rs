//! Gift-wrapping (Jarvis march) convex hull.
//!
//! Starts at the lexicographically smallest point (x, then y; first
//! occurrence wins) and repeatedly picks the point with no other point
//! strictly left of `current → next`, preferring the farther point on exact
//! collinearity. Interior therefore lies to the right of each hull edge, so
//! the reversed first edge `hull[1] → hull[0]` has the interior on its left.
//!
//! O(n·h) for n points and h hull vertices.

use tracing::warn;

use super::predicates::{cross, squared_distance};
use super::types::Point2D;

/// Index of the lexicographically smallest point (first occurrence on ties).
fn lowest_index(points: &[Point2D]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(j) => {
                let q = points[j];
                if p.x < q.x || (p.x == q.x && p.y < q.y) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Hull vertices as indices into `points`, in wrapping order.
///
/// Returns a single index when all points coincide, and an empty vector
/// for empty input or when the march fails to close within `points.len()`
/// vertices (only possible with non-finite or pathological coordinates).
pub fn convex_hull_indices(points: &[Point2D]) -> Vec<usize> {
    let Some(start) = lowest_index(points) else {
        return Vec::new();
    };
    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        if hull.len() > points.len() {
            warn!(points = points.len(), "convex hull march did not close");
            return Vec::new();
        }
        let cur = points[current];
        let mut next = 0usize;
        for (i, &p) in points.iter().enumerate() {
            if p == cur {
                continue;
            }
            let nx = points[next];
            let turn = cross(cur, nx, p);
            if nx == cur
                || turn > 0.0
                || (turn == 0.0 && squared_distance(cur, p) > squared_distance(cur, nx))
            {
                next = i;
            }
        }
        current = next;
        if points[current] == points[start] {
            break;
        }
    }
    hull
}

/// Hull vertices as points, in wrapping order. See `convex_hull_indices`.
pub fn convex_hull(points: &[Point2D]) -> Vec<Point2D> {
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

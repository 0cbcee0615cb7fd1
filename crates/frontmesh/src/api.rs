//! Curated surface for embedding callers (point capture and rendering layers).
//!
//! Prefer these re-exports over reaching into submodules.

pub use crate::error::{Result, TriangulationError};
pub use crate::geom::{convex_hull, Edge, Point2D, Triangle};
pub use crate::sample::{jittered_grid, uniform_in_box, Bounds2, ReplayToken};
pub use crate::triangulate::{
    triangulate, FrontRun, Mesh, Phase, RunStats, Step, TriCfg, Triangulator,
};

/// Points from `[x, y]` pairs, in order.
pub fn points_from_pairs(pairs: &[[f64; 2]]) -> Vec<Point2D> {
    pairs.iter().map(|&[x, y]| Point2D::new(x, y)).collect()
}

/// Unique undirected edges of `mesh` in first-appearance order, for line rendering.
pub fn mesh_edges(mesh: &Mesh) -> Vec<Edge> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for t in mesh {
        for e in t.edges() {
            if seen.insert(e) {
                out.push(e);
            }
        }
    }
    out
}

//! Advancing-front triangulation of 2D point sets.
//!
//! Pipeline
//! - `geom`: exact-equality point/edge/triangle types, orientation and
//!   circumcenter predicates, and a gift-wrapping convex hull.
//! - `triangulate`: the live-edge frontier, the candidate scoring heuristic,
//!   the `FrontRun` state machine and the `Triangulator` session that owns
//!   the committed mesh.
//! - `sample`: reproducible point clouds for demos, tests and benches.
//!
//! The output is not guaranteed to be Delaunay. There is no edge-flip pass
//! and candidate search is exhaustive over the input points.

pub mod api;
pub mod error;
pub mod geom;
pub mod sample;
pub mod triangulate;

pub use error::{Result, TriangulationError};
pub use geom::{Edge, Point2D, Triangle};
pub use triangulate::{triangulate, FrontRun, Mesh, TriCfg, Triangulator};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Result, TriangulationError};
    pub use crate::geom::{
        circumcenter, convex_hull, orientation, squared_distance, Circumcenter, Edge,
        Orientation, Point2D, Triangle,
    };
    pub use crate::sample::{jittered_grid, uniform_in_box, Bounds2, ReplayToken};
    pub use crate::triangulate::{
        triangulate, Front, FrontRun, Mesh, Phase, Step, TriCfg, Triangulator,
    };
}

//! Advancing-front triangulation: frontier, scoring, state machine, session.
//!
//! Purpose
//! - Seed a frontier with the reversed first hull edge, then repeatedly take
//!   the earliest live edge, attach the best-scoring point strictly to its
//!   left, and toggle the new triangle's edges into the frontier.
//! - Edges without a candidate leave the frontier as final boundary edges.
//!
//! Determinism
//! - Candidates are scanned in input order, the frontier is consumed FIFO,
//!   and every comparison is strict `<`, so ties go to the first encountered.
//!
//! Layout
//! - `front.rs` (toggle set), `mesh.rs` (output sink), `score.rs` (candidate
//!   ranking), `run.rs` (`FrontRun` state machine), `session.rs`
//!   (`Triangulator`, validate-then-commit).

mod front;
mod mesh;
mod run;
mod score;
mod session;

pub use front::{Front, Toggle};
pub use mesh::Mesh;
pub use run::{FrontRun, Phase, RunStats, Step};
pub use score::{best_candidate, score};
pub use session::Triangulator;

use crate::error::Result;
use crate::geom::{Point2D, EPS_CIRCUM};

/// Triangulation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriCfg {
    /// Circumcenter denominator threshold; smaller `|d|` scores `+inf`.
    pub eps_circum: f64,
    /// Optional cap on loop iterations. `None` runs until the frontier closes.
    pub max_steps: Option<usize>,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self {
            eps_circum: EPS_CIRCUM,
            max_steps: None,
        }
    }
}

/// One-shot triangulation with the default configuration.
pub fn triangulate(points: &[Point2D]) -> Result<Mesh> {
    FrontRun::new(points, TriCfg::default())?.run_to_end()
}

#[cfg(test)]
mod tests;

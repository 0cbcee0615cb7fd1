//! Session that owns the committed mesh between runs.

use tracing::warn;

use crate::error::Result;
use crate::geom::Point2D;

use super::mesh::Mesh;
use super::run::FrontRun;
use super::TriCfg;

/// Holds the last successful mesh; failed runs leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct Triangulator {
    cfg: TriCfg,
    mesh: Mesh,
}

impl Triangulator {
    pub fn new(cfg: TriCfg) -> Self {
        Self {
            cfg,
            mesh: Mesh::new(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> TriCfg {
        self.cfg
    }

    /// Mesh from the last successful run (empty before the first one or after `reset`).
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Triangulate `points` and replace the committed mesh on success.
    pub fn run(&mut self, points: &[Point2D]) -> Result<&Mesh> {
        let mesh = FrontRun::new(points, self.cfg)
            .and_then(FrontRun::run_to_end)
            .map_err(|e| {
                warn!(error = %e, points = points.len(), "triangulation aborted");
                e
            })?;
        self.mesh = mesh;
        Ok(&self.mesh)
    }

    /// Drop the committed mesh.
    pub fn reset(&mut self) {
        self.mesh.reset();
    }
}

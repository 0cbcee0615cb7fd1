//! The `Seeded → Growing → Done` state machine for one triangulation run.

use tracing::{debug, trace};

use crate::error::{Result, TriangulationError};
use crate::geom::{convex_hull, Edge, Point2D, Triangle};

use super::front::Front;
use super::mesh::Mesh;
use super::score::best_candidate;
use super::TriCfg;

/// Run phase. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Frontier holds exactly the seed edge `hull[1] → hull[0]`.
    Seeded,
    /// At least one step taken, frontier non-empty.
    Growing,
    /// Frontier empty; the mesh is final.
    Done,
}

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// A triangle was attached to the head edge.
    Emitted(Triangle),
    /// The head edge had no candidate and left the frontier.
    Discarded(Edge),
    /// Nothing left to do.
    Done,
}

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub steps: usize,
    pub emitted: usize,
    pub discarded: usize,
}

/// A triangulation run over a read-only snapshot of the input points.
///
/// Construction validates the input and seeds the frontier; nothing is
/// built until `step` or `run_to_end` is called.
#[derive(Clone, Debug)]
pub struct FrontRun<'a> {
    points: &'a [Point2D],
    cfg: TriCfg,
    hull: Vec<Point2D>,
    front: Front,
    mesh: Mesh,
    phase: Phase,
    stats: RunStats,
}

impl<'a> FrontRun<'a> {
    /// Validate `points`, build the hull and seed the frontier.
    ///
    /// Errors: `InsufficientPoints` (< 3 points), `NonFiniteCoordinate`,
    /// `HullInitialization` (hull with < 2 vertices).
    pub fn new(points: &'a [Point2D], cfg: TriCfg) -> Result<Self> {
        if points.len() < 3 {
            return Err(TriangulationError::InsufficientPoints {
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        let hull = convex_hull(points);
        if hull.len() < 2 {
            return Err(TriangulationError::HullInitialization {
                hull_len: hull.len(),
            });
        }
        let mut front = Front::new();
        front.toggle(Edge::new(hull[1], hull[0]));
        debug!(points = points.len(), hull = hull.len(), "run seeded");
        Ok(Self {
            points,
            cfg,
            hull,
            front,
            mesh: Mesh::new(),
            phase: Phase::Seeded,
            stats: RunStats::default(),
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }
    #[inline]
    pub fn front(&self) -> &Front {
        &self.front
    }
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
    #[inline]
    pub fn hull(&self) -> &[Point2D] {
        &self.hull
    }
    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Process the earliest live edge.
    ///
    /// Fails only when `cfg.max_steps` is set and already reached.
    pub fn step(&mut self) -> Result<Step> {
        let Some(edge) = self.front.first() else {
            self.phase = Phase::Done;
            return Ok(Step::Done);
        };
        if let Some(limit) = self.cfg.max_steps {
            if self.stats.steps >= limit {
                return Err(TriangulationError::StepLimitExceeded {
                    steps: self.stats.steps,
                });
            }
        }
        self.stats.steps += 1;
        let step = match best_candidate(edge, self.points, &self.cfg) {
            Some(apex) => {
                let tri = Triangle::new(edge.start, edge.end, apex);
                self.mesh.push(tri);
                for e in tri.edges() {
                    self.front.toggle(e);
                }
                self.stats.emitted += 1;
                trace!(?tri, front = self.front.len(), "triangle emitted");
                Step::Emitted(tri)
            }
            None => {
                self.front.discard_first();
                self.stats.discarded += 1;
                trace!(?edge, front = self.front.len(), "edge discarded");
                Step::Discarded(edge)
            }
        };
        self.phase = if self.front.is_empty() {
            Phase::Done
        } else {
            Phase::Growing
        };
        Ok(step)
    }

    /// Step until the frontier closes and hand back the mesh.
    pub fn run_to_end(mut self) -> Result<Mesh> {
        while self.step()? != Step::Done {}
        debug!(
            steps = self.stats.steps,
            triangles = self.stats.emitted,
            discarded = self.stats.discarded,
            "run finished"
        );
        Ok(self.mesh)
    }
}

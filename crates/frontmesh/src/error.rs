//! Error kinds reported by a triangulation run.
//!
//! Every variant is terminal for the run that produced it. None of them
//! touch the mesh committed by an earlier successful run.

use thiserror::Error;

/// Errors that abort a triangulation run before anything is committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("at least three points are required for triangulation, found {found}")]
    InsufficientPoints {
        /// Number of points supplied.
        found: usize,
    },

    /// The convex hull has fewer than two distinct vertices (e.g. all points coincide).
    #[error("could not initialize triangulation: convex hull has {hull_len} vertices")]
    HullInitialization {
        /// Number of hull vertices found.
        hull_len: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input order.
        index: usize,
    },

    /// The configured step cap was reached before the frontier closed.
    #[error("frontier did not close within {steps} steps")]
    StepLimitExceeded {
        /// Steps executed before giving up.
        steps: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TriangulationError>;

//! Exact 2D geometry for the advancing-front triangulator.
//!
//! Purpose
//! - Value types with exact coordinate equality (`Point2D`), undirected
//!   edges whose identity ignores endpoint order (`Edge`), and triangles that
//!   remember their construction order (`Triangle`).
//! - Stateless predicates: orientation, squared distance, circumcenter.
//! - Gift-wrapping convex hull used to seed the frontier.
//!
//! No tolerance is applied to orientation: zero means collinear and is never
//! treated as a left turn. The only epsilon lives in `circumcenter`.

mod hull;
mod predicates;
mod types;

pub use hull::{convex_hull, convex_hull_indices};
pub use predicates::{
    circumcenter, cross, orientation, squared_distance, Circumcenter, Orientation, EPS_CIRCUM,
};
pub use types::{Edge, Point2D, Triangle};

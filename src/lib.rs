#![doc = include_str!("../README.md")]

// Geometric value types and primitives.
pub mod angle;
pub mod line;
pub mod point;
pub mod polar;
pub mod segment;
pub mod tolerance;

// Estimation and edit-time constraint rules.
pub mod edit;
pub mod vp;

// Tooling support for the command-line demo.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::edit::{pull_segment, update_segment};
pub use crate::line::Line;
pub use crate::point::Point;
pub use crate::polar::{from_polar, rotate, to_polar, PolarPoint};
pub use crate::segment::LineSegment;
pub use crate::vp::{estimate_vanishing_point, AngleFactor, VanishingPointEstimate};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for annotation-tool integrations.
///
/// ```
/// use vp_geometry::prelude::*;
///
/// let segments = [
///     LineSegment::new(Point::new(0.0, 0.0), Point::new(2010.0, 970.0)),
///     LineSegment::new(Point::new(5000.0, 0.0), Point::new(6020.0, 1020.0)),
/// ];
/// let estimate = estimate_vanishing_point(&segments, Some(1f64.to_radians())).unwrap();
/// let vp = estimate.vanishing_point.unwrap();
/// assert!((vp.x - 9663.4615).abs() < 1e-3);
/// ```
pub mod prelude {
    pub use crate::edit::{pull_segment, update_segment};
    pub use crate::vp::estimate_vanishing_point;
    pub use crate::{Line, LineSegment, Point};
}

//! Vanishing-point estimation and adjustment for user-drawn segments.
//!
//! Pipeline
//! - Lines: one standard-form line per segment; a zero-length segment aborts
//!   the estimation.
//! - Candidate: least-squares intersection of all lines via the 2×2 normal
//!   equations; none when the normal matrix is near-singular (truly parallel
//!   lines).
//! - Anchors: each segment is reordered so its first endpoint is the one
//!   farther from the candidate. Its direction to the candidate is the least
//!   sensitive to picking error.
//! - Decision: a [`FinitenessPolicy`] keeps or discards the candidate. The
//!   default [`AngularSpread`] discards it when the anchors, seen from the
//!   candidate, span no more than a threshold angle.
//! - Adjustment: with a vanishing point every segment is snapped onto the
//!   line from its anchor to the vanishing point; without one, onto the line
//!   through its anchor with the averaged [`AngleFactor`] direction.
//!
//! Notes
//! - Line coefficients are not normalized before the solve, so longer
//!   segments weigh more in the least-squares fit.
//! - The estimator is stateless; callers keep the returned vanishing point
//!   and pass it to [`crate::edit::update_segment`] while the user drags.

mod angle_factor;
mod estimator;
mod policy;
mod solve;

pub use angle_factor::AngleFactor;
pub use estimator::{
    estimate_vanishing_point, estimate_vanishing_point_with, VanishingPointEstimate,
};
pub use policy::{max_angular_spread, AngularSpread, DistanceCutoff, FinitenessPolicy};
pub use solve::approximate_lines_intersection;

//! Edit-time rules that keep a shape consistent while a single handle is
//! dragged.
//!
//! - [`update_segment`]: re-solve the non-dragged endpoint of a segment
//!   against the vanishing point (or the segment's own direction).
//! - [`pull_segment`]: carry an interior point along when the segment it is
//!   bound to is resized.

mod pull;
mod segment;

pub use pull::pull_segment;
pub use segment::update_segment;

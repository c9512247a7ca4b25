//! Finite-vs-infinite decision for a least-squares vanishing point candidate.
//!
//! A linear solve over nearly parallel lines "succeeds" but lands on a point
//! whose position is dominated by picking noise. A policy looks at the
//! candidate together with the segment anchors and decides whether it is
//! trustworthy; a rejected candidate makes the estimator fall back to a
//! shared parallel direction.

use crate::angle::angle_between;
use crate::point::Point;
use crate::polar::to_polar;
use log::debug;
use serde::{Deserialize, Serialize};

pub trait FinitenessPolicy {
    /// Returns `true` when `candidate` should be kept as a finite vanishing
    /// point for segments anchored at `anchors`.
    fn accepts(&self, candidate: &Point, anchors: &[Point]) -> bool;
}

impl<P: FinitenessPolicy + ?Sized> FinitenessPolicy for &P {
    fn accepts(&self, candidate: &Point, anchors: &[Point]) -> bool {
        (**self).accepts(candidate, anchors)
    }
}

/// Rejects candidates seen from which all anchors lie within a narrow cone.
///
/// `threshold` is in radians; `None` accepts every candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularSpread {
    pub threshold: Option<f64>,
}

impl AngularSpread {
    pub fn new(threshold: Option<f64>) -> Self {
        Self { threshold }
    }
}

impl FinitenessPolicy for AngularSpread {
    fn accepts(&self, candidate: &Point, anchors: &[Point]) -> bool {
        let Some(threshold) = self.threshold else {
            return true;
        };
        let spread = max_angular_spread(candidate, anchors);
        if spread <= threshold {
            debug!(
                "vp: rejecting candidate ({:.3}, {:.3}), angular spread {:.4} deg <= {:.4} deg",
                candidate.x,
                candidate.y,
                spread.to_degrees(),
                threshold.to_degrees()
            );
            return false;
        }
        true
    }
}

/// Rejects candidates whose larger coordinate magnitude reaches
/// `infinity_distance`. Scale dependent; kept for callers tuned against a
/// fixed pixel cutoff.
///
/// A missing, zero, negative or non-finite limit disables the cutoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceCutoff {
    pub infinity_distance: Option<f64>,
}

impl DistanceCutoff {
    pub fn new(infinity_distance: Option<f64>) -> Self {
        Self { infinity_distance }
    }
}

impl FinitenessPolicy for DistanceCutoff {
    fn accepts(&self, candidate: &Point, _anchors: &[Point]) -> bool {
        let Some(limit) = self.infinity_distance.filter(|d| d.is_finite() && *d > 0.0) else {
            return true;
        };
        let reach = candidate.x.abs().max(candidate.y.abs());
        if reach >= limit {
            debug!("vp: rejecting candidate at distance {reach:.3} >= {limit:.3}");
            return false;
        }
        true
    }
}

/// Maximum pairwise circular angle, in [0, π], between the directions from
/// `center` to each of `points`. Zero for fewer than two points.
pub fn max_angular_spread(center: &Point, points: &[Point]) -> f64 {
    let angles: Vec<f64> = points
        .iter()
        .map(|p| to_polar(p, Some(center)).phi)
        .collect();
    let mut spread = 0.0f64;
    for (i, &alpha) in angles.iter().enumerate() {
        for &beta in &angles[i + 1..] {
            spread = spread.max(angle_between(alpha, beta));
        }
    }
    spread
}

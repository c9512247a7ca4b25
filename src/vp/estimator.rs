use super::angle_factor::AngleFactor;
use super::policy::{max_angular_spread, AngularSpread, FinitenessPolicy};
use super::solve::approximate_lines_intersection;
use crate::line::Line;
use crate::point::Point;
use crate::segment::LineSegment;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Segments snapped onto a common vanishing point, or onto a shared
/// direction when `vanishing_point` is `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VanishingPointEstimate {
    pub segments: Vec<LineSegment>,
    pub vanishing_point: Option<Point>,
    /// Least-squares intersection before the finiteness decision; `None`
    /// only for exactly parallel input.
    pub candidate: Option<Point>,
    /// Widest angle (radians) between the anchors as seen from `candidate`.
    pub angular_spread: Option<f64>,
}

/// Estimates a vanishing point for `segments` and adjusts them to meet it.
///
/// `threshold_angle` (radians) drives the [`AngularSpread`] policy: a
/// candidate from which the segment anchors span no more than this angle is
/// discarded and the segments are made exactly parallel instead.
pub fn estimate_vanishing_point(
    segments: &[LineSegment],
    threshold_angle: Option<f64>,
) -> Option<VanishingPointEstimate> {
    estimate_vanishing_point_with(segments, &AngularSpread::new(threshold_angle))
}

/// Same as [`estimate_vanishing_point`] with an explicit finiteness policy.
///
/// Returns `None` only for degenerate input (a zero-length segment, or a
/// segment whose anchor coincides with the vanishing point).
pub fn estimate_vanishing_point_with<P: FinitenessPolicy + ?Sized>(
    segments: &[LineSegment],
    policy: &P,
) -> Option<VanishingPointEstimate> {
    let mut lines = Vec::with_capacity(segments.len());
    for (idx, segment) in segments.iter().enumerate() {
        let Some(line) = segment.line() else {
            warn!("vp: segment {idx} is degenerate ({segment:?}), aborting estimation");
            return None;
        };
        lines.push(line);
    }

    let candidate = approximate_lines_intersection(&lines);
    let anchored: Vec<LineSegment> = match candidate {
        Some(ref c) => segments.iter().map(|s| s.anchored_from(c)).collect(),
        None => segments.to_vec(),
    };
    let anchors: Vec<Point> = anchored.iter().map(|s| s.p0).collect();
    let angular_spread = candidate.map(|c| max_angular_spread(&c, &anchors));
    let vanishing_point = candidate.filter(|c| policy.accepts(c, &anchors));

    let adjusted_lines: Vec<Line> = match vanishing_point {
        Some(vp) => anchored
            .iter()
            .map(|s| Line::through_points(&s.p0, &vp))
            .collect::<Option<_>>()?,
        None => {
            let factor = AngleFactor::approximate(&lines)?;
            debug!(
                "vp: no finite vanishing point over {} segments, using shared direction ({:.4}, {:.4})",
                segments.len(),
                factor.a,
                factor.b
            );
            anchored
                .iter()
                .map(|s| factor.line_through(&s.p0))
                .collect::<Option<_>>()?
        }
    };

    let segments = anchored
        .iter()
        .zip(adjusted_lines.iter())
        .map(|(s, line)| s.projected_onto(line))
        .collect::<Option<Vec<_>>>()?;
    Some(VanishingPointEstimate {
        segments,
        vanishing_point,
        candidate,
        angular_spread,
    })
}

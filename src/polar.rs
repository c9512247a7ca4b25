//! Polar coordinates about an optional pivot, used by rotation handles.

use crate::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub r: f64,
    pub phi: f64,
}

/// Polar form of `point` relative to `pivot` (the origin when `None`).
pub fn to_polar(point: &Point, pivot: Option<&Point>) -> PolarPoint {
    let (dx, dy) = match pivot {
        Some(pivot) => (point.x - pivot.x, point.y - pivot.y),
        None => (point.x, point.y),
    };
    PolarPoint {
        r: dx.hypot(dy),
        phi: dy.atan2(dx),
    }
}

/// Inverse of [`to_polar`].
pub fn from_polar(polar: &PolarPoint, pivot: Option<&Point>) -> Point {
    let (sin, cos) = polar.phi.sin_cos();
    let mut point = Point::new(polar.r * cos, polar.r * sin);
    if let Some(pivot) = pivot {
        point.x += pivot.x;
        point.y += pivot.y;
    }
    point
}

/// Rotates `point` about the origin by `phi` in image coordinates (y down).
pub fn rotate(point: &Point, phi: f64) -> Point {
    let (sin, cos) = phi.sin_cos();
    Point::new(
        point.x * cos + point.y * sin,
        -point.x * sin + point.y * cos,
    )
}

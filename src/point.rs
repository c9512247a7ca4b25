use crate::tolerance::POSITION_EPS;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Point in image pixel coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// True when the points coincide up to [`POSITION_EPS`].
    #[inline]
    pub fn approx_eq(&self, other: &Point) -> bool {
        self.distance_to(other) < POSITION_EPS
    }

    pub fn mid_point(&self, other: &Point) -> Point {
        Point {
            x: self.x + (other.x - self.x) / 2.0,
            y: self.y + (other.y - self.y) / 2.0,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

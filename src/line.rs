//! Standard-form lines `a·x + b·y + c = 0`.
//!
//! Every constructor rejects a vanishing normal `(a, b)` and returns `None`
//! instead, so a `Line` value never carries a zero or NaN normal. Coefficients
//! are kept in the raw scale of their construction (pixel differences) unless
//! [`Line::normalized`] is requested.

use crate::point::Point;
use crate::tolerance::{is_degenerate, POSITION_EPS};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Builds a line from raw coefficients, rejecting a degenerate normal.
    pub fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return None;
        }
        if is_degenerate(a) && is_degenerate(b) {
            return None;
        }
        Some(Self { a, b, c })
    }

    /// Line through two points; `None` when the points coincide.
    pub fn through_points(first: &Point, second: &Point) -> Option<Self> {
        Self::new(
            first.y - second.y,
            second.x - first.x,
            first.x * second.y - second.x * first.y,
        )
    }

    /// Line with normal `(a, b)` passing through `point`.
    pub fn through_point_with_direction(point: &Point, a: f64, b: f64) -> Option<Self> {
        Self::new(a, b, -(a * point.x + b * point.y))
    }

    /// Line through `point` whose [`Line::angle`] equals `phi` (modulo π).
    pub fn through_point_at_angle(point: &Point, phi: f64) -> Self {
        let (sin, cos) = phi.sin_cos();
        let a = -sin;
        let b = cos;
        Self {
            a,
            b,
            c: -(a * point.x + b * point.y),
        }
    }

    /// Polar angle of the line direction, `atan2(-a, b)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        (-self.a).atan2(self.b)
    }

    /// Intersection by Cramer's rule; `None` for parallel or identical lines.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let divisor = self.a * other.b - other.a * self.b;
        if is_degenerate(divisor) {
            return None;
        }
        let x = (self.b * other.c - other.b * self.c) / divisor;
        let y = (other.a * self.c - self.a * other.c) / divisor;
        let p = Point::new(x, y);
        p.is_finite().then_some(p)
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn project(&self, point: &Point) -> Option<Point> {
        let normal = Line {
            a: -self.b,
            b: self.a,
            c: self.b * point.x - self.a * point.y,
        };
        self.intersect(&normal)
    }

    /// Unsigned perpendicular distance from `point` to the line.
    pub fn distance_to(&self, point: &Point) -> f64 {
        (self.a * point.x + self.b * point.y + self.c).abs() / self.a.hypot(self.b)
    }

    /// Unit-normal form with a canonical sign: `a >= 0`, and `b > 0` when
    /// the line is horizontal. Both orientations of a line normalize equally.
    pub fn normalized(&self) -> Line {
        let mut factor = if self.a < 0.0 { -1.0 } else { 1.0 };
        factor /= self.a.hypot(self.b);
        let mut line = Line {
            a: self.a * factor,
            b: self.b * factor,
            c: self.c * factor,
        };
        if is_degenerate(line.a) && line.b < 0.0 {
            line.a = -line.a;
            line.b = -line.b;
            line.c = -line.c;
        }
        line
    }

    /// Compares normalized forms within [`POSITION_EPS`].
    pub fn approx_eq(&self, other: &Line) -> bool {
        let l = self.normalized();
        let r = other.normalized();
        (l.a - r.a).abs() < POSITION_EPS
            && (l.b - r.b).abs() < POSITION_EPS
            && (l.c - r.c).abs() < POSITION_EPS
    }
}

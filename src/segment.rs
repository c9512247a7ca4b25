use crate::line::Line;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Ordered pair of endpoints. After vanishing-point estimation `p0` is the
/// anchor, i.e. the endpoint farther from the vanishing point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Point; 2]", into = "[Point; 2]")]
pub struct LineSegment {
    pub p0: Point,
    pub p1: Point,
}

impl LineSegment {
    #[inline]
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    pub fn length(&self) -> f64 {
        self.p0.distance_to(&self.p1)
    }

    pub fn mid_point(&self) -> Point {
        self.p0.mid_point(&self.p1)
    }

    /// Supporting line; `None` for a zero-length segment.
    pub fn line(&self) -> Option<Line> {
        Line::through_points(&self.p0, &self.p1)
    }

    /// Unit direction from `p0` to `p1`, `[0, 0]` for a zero-length segment.
    pub fn direction(&self) -> [f64; 2] {
        let len = self.length();
        if len > 0.0 {
            [(self.p1.x - self.p0.x) / len, (self.p1.y - self.p0.y) / len]
        } else {
            [0.0, 0.0]
        }
    }

    /// Orders the endpoints so `p0` is the one farther from `target`.
    /// Endpoints are swapped only when `p1` is strictly farther.
    pub fn anchored_from(&self, target: &Point) -> Self {
        if self.p1.distance_to(target) > self.p0.distance_to(target) {
            self.reversed()
        } else {
            *self
        }
    }

    /// Projects both endpoints onto `line`, keeping their order.
    pub fn projected_onto(&self, line: &Line) -> Option<Self> {
        Some(Self {
            p0: line.project(&self.p0)?,
            p1: line.project(&self.p1)?,
        })
    }
}

impl From<[Point; 2]> for LineSegment {
    fn from(points: [Point; 2]) -> Self {
        Self {
            p0: points[0],
            p1: points[1],
        }
    }
}

impl From<LineSegment> for [Point; 2] {
    fn from(s: LineSegment) -> Self {
        [s.p0, s.p1]
    }
}

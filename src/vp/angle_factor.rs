use crate::line::Line;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Shared normal direction `(a, b)` of a family of (nearly) parallel lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleFactor {
    pub a: f64,
    pub b: f64,
}

impl AngleFactor {
    /// Averages the line normals after scaling each by its largest component.
    ///
    /// The first normal is flipped into the half-plane `a >= 0` (`b > 0` on
    /// the `a == 0` boundary) and becomes the reference; every later normal
    /// pointing away from it is flipped, so a line and its negation reinforce
    /// instead of cancelling, also when the family straddles the `a == 0` axis.
    pub fn approximate(lines: &[Line]) -> Option<Self> {
        let (first, rest) = lines.split_first()?;
        let (ref_a, ref_b) = canonical_normal(first);
        let mut sum_a = ref_a;
        let mut sum_b = ref_b;
        for line in rest {
            let (mut a, mut b) = scaled_normal(line);
            if a * ref_a + b * ref_b < 0.0 {
                a = -a;
                b = -b;
            }
            sum_a += a;
            sum_b += b;
        }
        let n = lines.len() as f64;
        Some(Self {
            a: sum_a / n,
            b: sum_b / n,
        })
    }

    /// Line through `point` with this direction.
    pub fn line_through(&self, point: &Point) -> Option<Line> {
        Line::through_point_with_direction(point, self.a, self.b)
    }
}

fn scaled_normal(line: &Line) -> (f64, f64) {
    let q = line.a.abs().max(line.b.abs());
    (line.a / q, line.b / q)
}

fn canonical_normal(line: &Line) -> (f64, f64) {
    let (a, b) = scaled_normal(line);
    if a < 0.0 || (a == 0.0 && b < 0.0) {
        (-a, -b)
    } else {
        (a, b)
    }
}

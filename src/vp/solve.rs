use crate::line::Line;
use crate::point::Point;
use crate::tolerance::DEGENERACY_EPS;
use log::debug;
use nalgebra::{Matrix2, Vector2};

/// Least-squares intersection of a family of lines.
///
/// Solves for `v = (x, y)` minimizing `Σ (a x + b y + c)^2` through the 2×2
/// normal equations. Returns `None` when the normal matrix is near-singular,
/// i.e. all lines are parallel (or identical).
pub fn approximate_lines_intersection(lines: &[Line]) -> Option<Point> {
    if lines.is_empty() {
        return None;
    }
    let mut normal = Matrix2::<f64>::zeros();
    let mut rhs = Vector2::<f64>::zeros();
    for line in lines {
        let n = Vector2::new(line.a, line.b);
        normal += n * n.transpose();
        rhs += n * -line.c;
    }
    let det = normal.determinant();
    let trace = normal.trace();
    if !det.is_finite() || det.abs() <= DEGENERACY_EPS.max(DEGENERACY_EPS * trace * trace) {
        debug!(
            "vp: normal matrix near-singular (det={det:.3e}, trace={trace:.3e}) over {} lines",
            lines.len()
        );
        return None;
    }
    let inverse = normal.try_inverse()?;
    let solution = Point::from(inverse * rhs);
    solution.is_finite().then_some(solution)
}

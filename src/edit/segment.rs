use crate::line::Line;
use crate::point::Point;
use crate::segment::LineSegment;

/// Reconciles a segment after one of its endpoints was dragged.
///
/// The endpoint that moved (compared with [`Point::approx_eq`]) is kept as
/// given in `next`; the other one is recomputed from `previous` so the
/// segment still passes through `vanishing_point`, or keeps its previous
/// direction when there is none. `p0` is checked first: if both endpoints
/// moved, `p0` is treated as the dragged one.
///
/// Returns `next` untouched when neither endpoint moved, and `None` when the
/// constraint line is degenerate (the dragged endpoint sits on the vanishing
/// point, or `previous` has zero length).
pub fn update_segment(
    previous: &LineSegment,
    next: &LineSegment,
    vanishing_point: Option<&Point>,
) -> Option<LineSegment> {
    if !previous.p0.approx_eq(&next.p0) {
        let p1 = follow(previous, &next.p0, &previous.p1, vanishing_point)?;
        Some(LineSegment::new(next.p0, p1))
    } else if !previous.p1.approx_eq(&next.p1) {
        let p0 = follow(previous, &next.p1, &previous.p0, vanishing_point)?;
        Some(LineSegment::new(p0, next.p1))
    } else {
        Some(*next)
    }
}

fn follow(
    previous: &LineSegment,
    moved: &Point,
    unmoved: &Point,
    vanishing_point: Option<&Point>,
) -> Option<Point> {
    let line = match vanishing_point {
        Some(vp) => Line::through_points(vp, moved)?,
        None => {
            let own = previous.line()?;
            Line::through_point_with_direction(moved, own.a, own.b)?
        }
    };
    line.project(unmoved)
}

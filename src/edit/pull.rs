use crate::point::Point;
use crate::segment::LineSegment;

/// Relocates `point`, bound to `previous`, proportionally onto `next`.
///
/// The position is expressed as a ratio along `previous` over the axis with
/// the larger span and re-applied per axis on `next`. The ratio is not
/// clamped, so points beyond the segment ends extrapolate. A zero-length
/// `previous` puts the point at the middle of `next`.
pub fn pull_segment(point: &Point, previous: &LineSegment, next: &LineSegment) -> Point {
    let span_x = previous.p1.x - previous.p0.x;
    let span_y = previous.p1.y - previous.p0.y;
    let ratio = if span_x.abs() >= span_y.abs() {
        (point.x - previous.p0.x) / span_x
    } else {
        (point.y - previous.p0.y) / span_y
    };
    let ratio = if ratio.is_finite() { ratio } else { 0.5 };
    Point::new(
        next.p0.x + ratio * (next.p1.x - next.p0.x),
        next.p0.y + ratio * (next.p1.y - next.p0.y),
    )
}

#[cfg(test)]
mod tests {
    use super::pull_segment;
    use crate::point::Point;
    use crate::segment::LineSegment;

    fn seg(a: (f64, f64), b: (f64, f64)) -> LineSegment {
        LineSegment::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
    }

    #[test]
    fn keeps_ratio_along_resized_segment() {
        let moved = pull_segment(
            &Point::new(75.0, 0.0),
            &seg((0.0, 0.0), (100.0, 0.0)),
            &seg((0.0, 0.0), (100.0, 100.0)),
        );
        assert_eq!(moved, Point::new(75.0, 75.0));
    }

    #[test]
    fn extrapolates_outlier_points() {
        let moved = pull_segment(
            &Point::new(150.0, 150.0),
            &seg((0.0, 0.0), (100.0, 100.0)),
            &seg((0.0, 0.0), (20.0, 40.0)),
        );
        assert_eq!(moved, Point::new(30.0, 60.0));
    }

    #[test]
    fn extrapolates_reversed_outlier_points() {
        let moved = pull_segment(
            &Point::new(150.0, 150.0),
            &seg((0.0, 0.0), (-100.0, -100.0)),
            &seg((0.0, 0.0), (-20.0, -40.0)),
        );
        assert_eq!(moved, Point::new(30.0, 60.0));
    }

    #[test]
    fn uses_the_longer_axis_of_a_vertical_segment() {
        let moved = pull_segment(
            &Point::new(3.0, 40.0),
            &seg((0.0, 0.0), (0.0, 100.0)),
            &seg((10.0, 10.0), (10.0, 60.0)),
        );
        assert_eq!(moved, Point::new(10.0, 30.0));
    }

    #[test]
    fn zero_length_previous_falls_back_to_midpoint() {
        let moved = pull_segment(
            &Point::new(5.0, 5.0),
            &seg((5.0, 5.0), (5.0, 5.0)),
            &seg((0.0, 0.0), (20.0, 10.0)),
        );
        assert_eq!(moved, Point::new(10.0, 5.0));
    }
}

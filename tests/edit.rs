mod common;

use common::synthetic_segments::{assert_close, converging_segments};
use vp_geometry::{estimate_vanishing_point, pull_segment, update_segment, LineSegment, Point};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn drags_keep_segments_on_the_vanishing_point() {
    init_logger();
    let truth = Point::new(500.0, 100.0);
    let angles: Vec<f64> = [70.0f64, 90.0, 115.0]
        .iter()
        .map(|d| d.to_radians())
        .collect();
    let segments = converging_segments(truth, &angles, 200.0, 700.0, 0.0);
    let estimate =
        estimate_vanishing_point(&segments, Some(1f64.to_radians())).expect("estimate");
    let vp = estimate.vanishing_point.expect("finite vanishing point");
    assert_close(&vp, &truth, 1e-6);

    let mut shape = estimate.segments.clone();
    let drags = [
        (0usize, 0usize, Point::new(300.0, 720.0)),
        (1, 1, Point::new(520.0, 260.0)),
        (2, 0, Point::new(180.0, 760.0)),
        (0, 1, Point::new(560.0, 400.0)),
    ];
    for (idx, endpoint, to) in drags {
        let previous = shape[idx];
        let next = if endpoint == 0 {
            LineSegment::new(to, previous.p1)
        } else {
            LineSegment::new(previous.p0, to)
        };
        let updated = update_segment(&previous, &next, Some(&vp)).expect("update");
        let dragged = if endpoint == 0 { updated.p0 } else { updated.p1 };
        assert_eq!(dragged, to);
        let line = updated.line().expect("segment keeps its length");
        assert!(
            line.distance_to(&vp) < 1e-6,
            "segment {idx} left the vanishing point: {updated:?}"
        );
        shape[idx] = updated;
    }
}

#[test]
fn drags_without_vanishing_point_keep_parallelism() {
    let previous = LineSegment::new(Point::new(0.0, 0.0), Point::new(300.0, 100.0));
    let next = LineSegment::new(previous.p0, Point::new(320.0, 150.0));
    let updated = update_segment(&previous, &next, None).expect("update");
    assert_eq!(updated.p1, Point::new(320.0, 150.0));
    let before = previous.direction();
    let after = updated.direction();
    assert!((before[0] * after[1] - before[1] * after[0]).abs() < 1e-12);
}

#[test]
fn bound_points_follow_a_resized_segment() {
    let previous = LineSegment::new(Point::new(100.0, 400.0), Point::new(300.0, 100.0));
    let next = LineSegment::new(Point::new(100.0, 400.0), Point::new(500.0, 0.0));
    let middle = previous.mid_point();
    assert_close(&pull_segment(&middle, &previous, &next), &next.mid_point(), 1e-9);

    let beyond = Point::new(400.0, -50.0);
    assert_close(
        &pull_segment(&beyond, &previous, &next),
        &Point::new(700.0, -200.0),
        1e-9,
    );
}

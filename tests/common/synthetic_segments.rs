use vp_geometry::{LineSegment, Point};

/// Segments lying on rays from `vp`, one per angle (radians), spanning
/// distances `near..far` from it. `jitter` shifts the far endpoint
/// perpendicular to its ray by alternating signs to mimic picking noise.
pub fn converging_segments(
    vp: Point,
    angles: &[f64],
    near: f64,
    far: f64,
    jitter: f64,
) -> Vec<LineSegment> {
    assert!(far > near && near > 0.0, "distances must be ordered and positive");
    angles
        .iter()
        .enumerate()
        .map(|(i, &phi)| {
            let (sin, cos) = phi.sin_cos();
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let p_near = Point::new(vp.x + near * cos, vp.y + near * sin);
            let p_far = Point::new(
                vp.x + far * cos - sign * jitter * sin,
                vp.y + far * sin + sign * jitter * cos,
            );
            // Near endpoint first so the estimator has to reorder.
            LineSegment::new(p_near, p_far)
        })
        .collect()
}

pub fn assert_close(actual: &Point, expected: &Point, tol: f64) {
    assert!(
        (actual.x - expected.x).abs() < tol && (actual.y - expected.y).abs() < tol,
        "expected {expected:?}, got {actual:?} (tol {tol})"
    );
}

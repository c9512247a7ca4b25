//! Angle utilities shared by the polar helpers and the estimator.

use std::f64::consts::{PI, TAU};

/// Wraps an angle into the range (-π, π].
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let norm = angle.rem_euclid(TAU);
    if norm > PI {
        norm - TAU
    } else {
        norm
    }
}

/// Counterclockwise angle from `alpha` to `beta`, in [0, 2π).
#[inline]
pub fn counterclockwise_angle(alpha: f64, beta: f64) -> f64 {
    let diff = (beta - alpha).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if diff >= TAU {
        0.0
    } else {
        diff
    }
}

/// Smallest circular difference between two angles, in [0, π].
#[inline]
pub fn angle_between(alpha: f64, beta: f64) -> f64 {
    let diff = counterclockwise_angle(alpha, beta);
    if diff <= PI {
        diff
    } else {
        TAU - diff
    }
}

/// Antipodal angle wrapped into (-π, π].
#[inline]
pub fn opposite_angle(alpha: f64) -> f64 {
    wrap_angle(alpha + PI)
}

//! Tolerances shared by every geometric primitive in the crate.
//!
//! Two scales are in play. Positions are image pixels, so "the same point"
//! means equal up to a sub-pixel snap. Algebraic degeneracy (zero normals,
//! singular systems) is decided at machine precision.

/// Sub-pixel snap used for point equality and "did this endpoint move" tests.
pub const POSITION_EPS: f64 = 1e-3;

/// Magnitude below which a line normal, determinant or normal matrix is
/// considered singular.
pub const DEGENERACY_EPS: f64 = f64::EPSILON;

#[inline]
pub(crate) fn is_degenerate(value: f64) -> bool {
    value.abs() < DEGENERACY_EPS
}

//! Closed-form formulas for plane and solid figures.
//!
//! Everything takes and returns `f64`. Angles are in degrees. Inputs are
//! not validated; see [`crate::helpers::is_greater_than_zero`] for callers
//! that want to reject non-positive lengths.

pub mod circle;
pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod rectangle;
pub mod sphere;
pub mod triangle;

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} != {expected}"
    );
}

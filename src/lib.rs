//! Closed-form formulas for common figures, unit conversions, number
//! formatting and a linear congruential pseudo-random generator.

pub mod convert;
pub mod error;
pub mod format;
pub mod geometry;
pub mod helpers;
pub mod rng;

pub use error::MathError;
pub use rng::{Lcg, LcgParams};

//! Convenience wrappers over the system random source. These are not
//! deterministic and are mostly useful for picking an LCG seed.

use crate::error::MathError;
use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn generate_random_integer(min: i64, max: i64) -> Result<i64, MathError> {
    random_integer_with(&mut rand::thread_rng(), min, max)
}

/// Uniform float in `[min, max)`. Returns `min` when both bounds are equal.
pub fn generate_random_float(min: f64, max: f64) -> Result<f64, MathError> {
    random_float_with(&mut rand::thread_rng(), min, max)
}

pub fn random_integer_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, MathError> {
    if min > max {
        log::warn!("Empty integer range [{}, {}]", min, max);
        return Err(MathError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(rng.gen_range(min..=max))
}

pub fn random_float_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<f64, MathError> {
    // the span must be finite too, or the sampler cannot scale into it
    if min > max || !(max - min).is_finite() {
        log::warn!("Unusable float range [{}, {})", min, max);
        return Err(MathError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.gen_range(min..max))
}

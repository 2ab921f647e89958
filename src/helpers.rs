use crate::error::MathError;

/// Checks that `value` is strictly positive. NaN is not.
///
/// `name` ends up in the error message, e.g. "Radius must be greater than 0.".
/// Callers that only want a yes/no answer use `.is_ok()` on the result.
pub fn is_greater_than_zero(value: f64, name: &'static str) -> Result<(), MathError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(MathError::NotPositive { name })
    }
}

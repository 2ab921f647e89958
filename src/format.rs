use crate::error::MathError;

pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 100;

/// Rounds `value` to `precision` fractional digits and hands back a number,
/// so trailing zeros disappear: `format(1.0, 100)` is `1.0`.
///
/// An exact tie rounds away from zero, so `format(2.5, 0)` is `3.0` and
/// `format(-2.5, 0)` is `-3.0`. Whether a value is a tie is decided on its
/// exact binary value: `1.005` is stored slightly below and becomes `1.0`.
/// Infinities and NaN pass through untouched.
pub fn format(value: f64, precision: usize) -> Result<f64, MathError> {
    if precision > MAX_PRECISION {
        return Err(MathError::InvalidPrecision { precision });
    }
    if !value.is_finite() {
        return Ok(value);
    }

    let text = round_half_away(value, precision);
    text.parse()
        .map_err(|_| MathError::InvalidNumber { input: text })
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

fn round_half_away(value: f64, precision: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let dropped = &frac_part[precision..];
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        // not a tie, so ties-to-even rendering gives the nearest value
        return format!("{value:.precision$}");
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..precision].bytes())
        .collect();
    // add one unit in the last kept place
    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            break;
        }
    }

    let split = digits.len() - precision;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(digits[..split].iter().map(|&d| d as char));
    if precision > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|&d| d as char));
    }
    text
}

/// Parses `input` as a number first, then behaves like [`format`].
pub fn format_str(input: &str, precision: usize) -> Result<f64, MathError> {
    let value: f64 = input.trim().parse().map_err(|_| MathError::InvalidNumber {
        input: input.to_string(),
    })?;
    format(value, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision() {
        assert_eq!(format(1.434, DEFAULT_PRECISION), Ok(1.43));
        assert_eq!(format(1.436, DEFAULT_PRECISION), Ok(1.44));
        assert_eq!(format(-2.718, DEFAULT_PRECISION), Ok(-2.72));
    }

    #[test]
    fn explicit_precision() {
        assert_eq!(format_str("1.432", 2), Ok(1.43));
        assert_eq!(format_str("1.432", 1), Ok(1.4));
        assert_eq!(format_str("1.432", 0), Ok(1.0));
        assert_eq!(format_str("1.6", 0), Ok(2.0));
        assert_eq!(format(1.0, MAX_PRECISION), Ok(1.0));
        assert_eq!(format(1234.5678, 3), Ok(1234.568));
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format(2.5, 0), Ok(3.0));
        assert_eq!(format(0.5, 0), Ok(1.0));
        assert_eq!(format(0.125, 2), Ok(0.13));
        assert_eq!(format(-2.5, 0), Ok(-3.0));
        assert_eq!(format(9.5, 0), Ok(10.0));
        assert_eq!(format(-0.375, 2), Ok(-0.38));
        assert_eq!(format_str("1.5", 0), Ok(2.0));
    }

    #[test]
    fn near_ties_follow_stored_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format(1.005, 2), Ok(1.0));
        // 0.15 is stored slightly below the tie too
        assert_eq!(format(0.15, 1), Ok(0.1));
        assert_eq!(format(3.5, 1), Ok(3.5));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            format(1.0, 101),
            Err(MathError::InvalidPrecision { precision: 101 })
        );
        assert_eq!(
            format_str("one", 2),
            Err(MathError::InvalidNumber {
                input: "one".to_string()
            })
        );
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(format(f64::INFINITY, 2), Ok(f64::INFINITY));
        assert!(format(f64::NAN, 2).unwrap().is_nan());
    }
}

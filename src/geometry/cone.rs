use super::{circle, triangle};
use std::f64::consts::PI;

/// Distance from the apex to the rim of the base.
pub fn slant_height(r: f64, h: f64) -> f64 {
    triangle::hypotenuse(r, h)
}

/// πrl, the curved surface without the base.
pub fn lateral_area(r: f64, h: f64) -> f64 {
    PI * r * slant_height(r, h)
}

pub fn total_area(r: f64, h: f64) -> f64 {
    lateral_area(r, h) + circle::area(r)
}

/// ⅓πr²h
pub fn volume(r: f64, h: f64) -> f64 {
    PI * r.powi(2) * h / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::assert_close;

    #[test]
    fn cone_three_four() {
        assert_eq!(slant_height(3.0, 4.0), 5.0);
        assert_close(lateral_area(3.0, 4.0), 15.0 * PI);
        assert_close(total_area(3.0, 4.0), 24.0 * PI);
        assert_close(volume(3.0, 4.0), 12.0 * PI);
    }
}

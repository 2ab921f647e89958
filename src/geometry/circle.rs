use std::f64::consts::PI;

/// πr²
pub fn area(r: f64) -> f64 {
    PI * r.powi(2)
}

/// 2πr
pub fn circumference(r: f64) -> f64 {
    2.0 * PI * r
}

pub fn diameter(r: f64) -> f64 {
    r * 2.0
}

/// √(A/π)
pub fn radius_from_area(a: f64) -> f64 {
    (a / PI).sqrt()
}

/// C/2π
pub fn radius_from_circumference(c: f64) -> f64 {
    c / (2.0 * PI)
}

pub fn radius_from_diameter(d: f64) -> f64 {
    d / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format;

    #[test]
    fn area_equals_circumference_at_radius_two() {
        assert_eq!(area(2.0), circumference(2.0));
    }

    #[test]
    fn area_values() {
        assert_eq!(area(0.0), 0.0);
        assert_eq!(area(0.1), 0.031415926535897934);
        assert_eq!(area(1.0), PI);
        assert_eq!(format(area(2.0), 2), Ok(12.57));
    }

    #[test]
    fn circumference_and_diameter() {
        assert_eq!(circumference(0.1), 0.6283185307179586);
        assert_eq!(circumference(1.0), 6.283185307179586);
        assert_eq!(diameter(0.1), 0.2);
        assert_eq!(diameter(2.0), 4.0);
    }

    #[test]
    fn radius_back_from_measures() {
        assert_eq!(radius_from_area(0.0), 0.0);
        assert_eq!(radius_from_area(PI), 1.0);
        assert_eq!(format(radius_from_area(12.57), 2), Ok(2.0));
        assert_eq!(radius_from_circumference(6.283185307179586), 1.0);
        assert_eq!(format(radius_from_circumference(12.57), 2), Ok(2.0));
        assert_eq!(radius_from_diameter(0.2), 0.1);
        assert_eq!(radius_from_diameter(4.0), 2.0);
    }
}

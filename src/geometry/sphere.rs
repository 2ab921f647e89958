use std::f64::consts::PI;

/// 4πr²
pub fn area(r: f64) -> f64 {
    4.0 * PI * r.powi(2)
}

/// ⁴⁄₃πr³
pub fn volume(r: f64) -> f64 {
    4.0 / 3.0 * PI * r.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::assert_close;

    #[test]
    fn sphere() {
        assert_close(area(1.0), 4.0 * PI);
        assert_close(volume(3.0), 36.0 * PI);
        // at r = 3 the two agree numerically
        assert_close(area(3.0), volume(3.0));
    }
}

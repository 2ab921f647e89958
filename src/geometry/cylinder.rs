use super::circle;
use std::f64::consts::PI;

/// 2πrh
pub fn lateral_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * h
}

/// Lateral surface plus both caps.
pub fn total_area(r: f64, h: f64) -> f64 {
    lateral_area(r, h) + 2.0 * circle::area(r)
}

pub fn volume(r: f64, h: f64) -> f64 {
    PI * r.powi(2) * h
}

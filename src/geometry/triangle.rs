//! Triangle formulas. Sides are `a`, `b`, `c`; the angle opposite a side
//! shares its letter (alpha for `a`, beta for `b`, gamma for `c`).

use crate::convert::degrees_to_radians;

/// ½hb
pub fn area(h: f64, b: f64) -> f64 {
    0.5 * h * b
}

/// Height over base `b`, from the area.
pub fn altitude(area: f64, b: f64) -> f64 {
    2.0 * (area / b)
}

/// Base under height `h`, from the area.
pub fn base(area: f64, h: f64) -> f64 {
    2.0 * (area / h)
}

pub fn perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

pub fn semiperimeter(p: f64) -> f64 {
    p / 2.0
}

/// Heron's formula, √(s(s-a)(s-b)(s-c)). Side lengths that violate the
/// triangle inequality give NaN.
pub fn area_sss(a: f64, b: f64, c: f64) -> f64 {
    let s = semiperimeter(perimeter(a, b, c));
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// ½ab·sin(γ), with `gamma` the angle between `a` and `b`.
pub fn area_sas(a: f64, b: f64, gamma: f64) -> f64 {
    0.5 * a * b * degrees_to_radians(gamma).sin()
}

/// Area from two angles and the side `c` between them.
pub fn area_asa(alpha: f64, beta: f64, c: f64) -> f64 {
    let gamma = angle_asa(alpha, beta);
    let a = side_asa(c, gamma, alpha);
    let b = side_asa(c, gamma, beta);
    area_sss(a, b, c)
}

/// The third angle: 180° - (α + β).
pub fn angle_asa(alpha: f64, beta: f64) -> f64 {
    180.0 - (alpha + beta)
}

/// Law of sines: the side opposite `theta`, given side `a` and its
/// opposite angle `alpha`.
pub fn side_asa(a: f64, alpha: f64, theta: f64) -> f64 {
    a / degrees_to_radians(alpha).sin() * degrees_to_radians(theta).sin()
}

/// √(a² + b²)
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Pythagorean check with `c` as the hypotenuse. Compared with a relative
/// tolerance so that computed sides like √2 still qualify.
pub fn is_right(a: f64, b: f64, c: f64) -> bool {
    let lhs = c.powi(2);
    let rhs = a.powi(2) + b.powi(2);
    (lhs - rhs).abs() <= 1e-12 * lhs.abs().max(rhs.abs())
}

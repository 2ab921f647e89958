pub fn volume(w: f64, h: f64, l: f64) -> f64 {
    w * h * l
}

/// Total surface area.
pub fn area(w: f64, h: f64, l: f64) -> f64 {
    2.0 * (w * l + h * l + h * w)
}

/// Space diagonal, √(w² + h² + l²).
pub fn diagonal(w: f64, h: f64, l: f64) -> f64 {
    (w.powi(2) + h.powi(2) + l.powi(2)).sqrt()
}

/// The remaining edge, given the volume and the other two edges.
pub fn side_from_volume(v: f64, a: f64, b: f64) -> f64 {
    v / (a * b)
}

/// The remaining edge, given the space diagonal and the other two edges.
pub fn side_from_diagonal(d: f64, a: f64, b: f64) -> f64 {
    (d.powi(2) - a.powi(2) - b.powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid() {
        assert_eq!(volume(2.0, 3.0, 4.0), 24.0);
        assert_eq!(area(2.0, 3.0, 4.0), 52.0);
        assert_eq!(diagonal(2.0, 3.0, 6.0), 7.0);
        assert_eq!(side_from_volume(24.0, 2.0, 3.0), 4.0);
        assert_eq!(side_from_diagonal(7.0, 2.0, 3.0), 6.0);
    }
}

use super::triangle;

pub fn area(a: f64, b: f64) -> f64 {
    a * b
}

/// Perimeter, 2a + 2b.
pub fn circumference(a: f64, b: f64) -> f64 {
    a * 2.0 + b * 2.0
}

pub fn diagonal(a: f64, b: f64) -> f64 {
    triangle::hypotenuse(a, b)
}

pub fn is_square(a: f64, b: f64) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle() {
        assert_eq!(area(3.0, 4.0), 12.0);
        assert_eq!(circumference(3.0, 4.0), 14.0);
        assert_eq!(diagonal(3.0, 4.0), 5.0);
        assert!(is_square(2.5, 2.5));
        assert!(!is_square(2.5, 2.0));
    }
}

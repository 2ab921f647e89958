use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    /// A generator parameter is outside its documented range.
    #[error("Invalid LCG parameter {name}={value}: {bound}")]
    InvalidParameter {
        name: &'static str,
        value: u64,
        bound: &'static str,
    },

    #[error("Missing LCG parameter {name}")]
    MissingParameter { name: &'static str },

    #[error("Unknown LCG preset {name:?}")]
    UnknownPreset { name: String },

    /// The lower bound of a random range lies above the upper bound.
    #[error("Invalid range [{min}, {max}]")]
    InvalidRange { min: String, max: String },

    /// Precision outside 0..=100.
    #[error("Precision {precision} is outside 0..=100")]
    InvalidPrecision { precision: usize },

    #[error("Could not parse {input:?} as a number")]
    InvalidNumber { input: String },

    /// Length unit name or symbol that is not recognized.
    #[error("Unknown unit {unit:?}")]
    UnknownUnit { unit: String },

    #[error("{name} must be greater than 0.")]
    NotPositive { name: &'static str },
}

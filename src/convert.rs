//! Angle and length conversions.

use crate::error::MathError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Maps `value` onto `[0, 1]` relative to `min..max`. Values outside the
/// range land outside `[0, 1]`; `min == max` gives NaN or infinity.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 11] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
        LengthUnit::NauticalMile,
    ];

    /// Meters per one of this unit.
    pub fn si_factor(self) -> f64 {
        match self {
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1e3,
            // international yard and pound agreement
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
            LengthUnit::NauticalMile => 1852.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "μm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::NauticalMile => "NM",
        }
    }

    /// Lowercase names without spaces, as matched by [`FromStr`].
    fn names(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Nanometer => &["nanometer", "nanometers", "nanometre", "nanometres"],
            LengthUnit::Micrometer => &[
                "micrometer",
                "micrometers",
                "micrometre",
                "micrometres",
                "um",
            ],
            LengthUnit::Millimeter => &["millimeter", "millimeters", "millimetre", "millimetres"],
            LengthUnit::Centimeter => &["centimeter", "centimeters", "centimetre", "centimetres"],
            LengthUnit::Meter => &["meter", "meters", "metre", "metres", "si"],
            LengthUnit::Kilometer => &["kilometer", "kilometers", "kilometre", "kilometres"],
            LengthUnit::Inch => &["inch", "inches"],
            LengthUnit::Foot => &["foot", "feet"],
            LengthUnit::Yard => &["yard", "yards"],
            LengthUnit::Mile => &["mile", "miles"],
            LengthUnit::NauticalMile => &["nauticalmile", "nauticalmiles"],
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // symbols are case-sensitive: "nm" is a nanometer, "NM" a nautical mile
        if let Some(unit) = LengthUnit::ALL.iter().find(|u| u.symbol() == trimmed) {
            return Ok(*unit);
        }

        let name: String = trimmed
            .chars()
            .filter(|c| !matches!(*c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        LengthUnit::ALL
            .iter()
            .find(|u| u.names().contains(&name.as_str()))
            .copied()
            .ok_or_else(|| MathError::UnknownUnit {
                unit: s.to_string(),
            })
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.si_factor() / to.si_factor()
}

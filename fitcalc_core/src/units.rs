//! Unit conversion and rounding helpers shared by the calculators.

use crate::UnitSystem;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

impl UnitSystem {
    /// Convert a linear measurement in this system to centimetres
    pub fn length_to_cm(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => inches_to_cm(value),
        }
    }

    /// Convert a mass in this system to kilograms
    pub fn mass_to_kg(self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => pounds_to_kg(value),
        }
    }

    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "inches",
        }
    }

    pub fn mass_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

/// True for finite numbers strictly greater than zero
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round to the nearest integer, ties towards positive infinity
///
/// `f64::round` sends -2.5 to -3; results here send it to -2 so negative
/// and positive ties break the same way.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, ties towards positive infinity
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

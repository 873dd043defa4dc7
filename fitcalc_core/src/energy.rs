//! Maintenance-calorie estimator.
//!
//! BMR uses the Mifflin–St Jeor equation:
//! ```text
//! male:   10 × kg + 6.25 × cm − 5 × age + 5
//! female: 10 × kg + 6.25 × cm − 5 × age − 161
//! ```
//! TDEE scales BMR by the activity multiplier; the fat-loss and muscle-gain
//! targets are a 15% deficit and a 15% surplus on TDEE.

use crate::units::{is_positive, round_half_up};
use crate::{EnergyInput, EnergyResult, Error, Result, Sex};

/// Youngest age the equation is offered for
pub const MIN_AGE: u32 = 15;

/// Oldest age the equation is offered for
pub const MAX_AGE: u32 = 100;

const FAT_LOSS_FACTOR: f64 = 0.85;
const MUSCLE_GAIN_FACTOR: f64 = 1.15;

/// Disclaimer printed under the result
pub const NOTE: &str = "These calculations provide estimates based on population averages. \
Individual metabolism can vary. For best results, track your intake and weight changes over \
time, and adjust as needed.";

/// Compute BMR, TDEE and calorie targets
///
/// All four outputs are rounded to the nearest calorie. The targets are
/// derived from the unrounded TDEE.
///
/// # Errors
/// `Error::InvalidInput` if age is outside [15, 100] or height/weight are
/// not positive finite numbers.
pub fn compute_energy(input: &EnergyInput) -> Result<EnergyResult> {
    validate(input)?;

    let weight_kg = input.unit_system.mass_to_kg(input.weight);
    let height_cm = input.unit_system.length_to_cm(input.height);

    let bmr = mifflin_st_jeor(input.sex, weight_kg, height_cm, input.age);
    let tdee = bmr * input.activity_level.multiplier();

    // Every output must survive the cast to i64
    let largest = tdee * MUSCLE_GAIN_FACTOR;
    if !fits_calorie_range(bmr) || !fits_calorie_range(largest) {
        return Err(Error::invalid(
            "height and weight are too large to produce a calorie estimate",
        ));
    }

    tracing::debug!(
        weight_kg,
        height_cm,
        bmr,
        tdee,
        "Computed energy expenditure for {:?}",
        input.activity_level
    );

    Ok(EnergyResult {
        bmr: round_half_up(bmr) as i64,
        tdee: round_half_up(tdee) as i64,
        fat_loss_target: round_half_up(tdee * FAT_LOSS_FACTOR) as i64,
        muscle_gain_target: round_half_up(tdee * MUSCLE_GAIN_FACTOR) as i64,
    })
}

/// Raw Mifflin–St Jeor BMR in kcal/day (metric inputs, unrounded)
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

fn validate(input: &EnergyInput) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
        return Err(Error::invalid(format!(
            "age must be between {} and {}, got {}",
            MIN_AGE, MAX_AGE, input.age
        )));
    }
    if !is_positive(input.height) {
        return Err(Error::invalid(format!(
            "height must be positive, got {}",
            input.height
        )));
    }
    if !is_positive(input.weight) {
        return Err(Error::invalid(format!(
            "weight must be positive, got {}",
            input.weight
        )));
    }
    Ok(())
}

fn fits_calorie_range(value: f64) -> bool {
    value.is_finite() && value.abs() < i64::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CM_PER_INCH, KG_PER_LB};
    use crate::{ActivityLevel, UnitSystem};

    fn male_reference() -> EnergyInput {
        EnergyInput {
            age: 30,
            sex: Sex::Male,
            unit_system: UnitSystem::Metric,
            height: 180.0,
            weight: 80.0,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_male_reference_values() {
        let result = compute_energy(&male_reference()).unwrap();
        // 10*80 + 6.25*180 - 5*30 + 5
        assert_eq!(result.bmr, 1780);
        assert_eq!(result.tdee, 2759);
        assert_eq!(result.fat_loss_target, 2345);
        assert_eq!(result.muscle_gain_target, 3173);
    }

    #[test]
    fn test_female_offset() {
        let input = EnergyInput {
            age: 25,
            sex: Sex::Female,
            unit_system: UnitSystem::Metric,
            height: 165.0,
            weight: 60.0,
            activity_level: ActivityLevel::Light,
        };
        let result = compute_energy(&input).unwrap();
        // 600 + 1031.25 - 125 - 161 = 1345.25
        assert_eq!(result.bmr, 1345);
        assert_eq!(result.tdee, 1850);
        assert_eq!(result.fat_loss_target, 1572);
        assert_eq!(result.muscle_gain_target, 2127);
    }

    #[test]
    fn test_sex_difference_is_166() {
        let male = mifflin_st_jeor(Sex::Male, 70.0, 175.0, 40);
        let female = mifflin_st_jeor(Sex::Female, 70.0, 175.0, 40);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_symmetry() {
        for level in ActivityLevel::ALL {
            let metric = EnergyInput {
                activity_level: level,
                ..male_reference()
            };
            let imperial = EnergyInput {
                unit_system: UnitSystem::Imperial,
                height: metric.height / CM_PER_INCH,
                weight: metric.weight / KG_PER_LB,
                ..metric.clone()
            };

            let a = compute_energy(&metric).unwrap();
            let b = compute_energy(&imperial).unwrap();
            assert!((a.bmr - b.bmr).abs() <= 1);
            assert!((a.tdee - b.tdee).abs() <= 1);
            assert!((a.fat_loss_target - b.fat_loss_target).abs() <= 1);
            assert!((a.muscle_gain_target - b.muscle_gain_target).abs() <= 1);
        }
    }

    #[test]
    fn test_each_activity_multiplier_applied() {
        let expected = [2136, 2448, 2759, 3071, 3382];
        for (level, tdee) in ActivityLevel::ALL.iter().zip(expected) {
            let input = EnergyInput {
                activity_level: *level,
                ..male_reference()
            };
            assert_eq!(compute_energy(&input).unwrap().tdee, tdee, "{:?}", level);
        }
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        for age in [0, 14, 101] {
            let input = EnergyInput {
                age,
                ..male_reference()
            };
            let err = compute_energy(&input).unwrap_err();
            assert!(err.is_invalid_input(), "age {} should be rejected", age);
        }

        for age in [15, 100] {
            let input = EnergyInput {
                age,
                ..male_reference()
            };
            assert!(compute_energy(&input).is_ok());
        }
    }

    #[test]
    fn test_non_positive_measurements_rejected() {
        let zero_height = EnergyInput {
            height: 0.0,
            ..male_reference()
        };
        assert!(compute_energy(&zero_height).unwrap_err().is_invalid_input());

        let negative_weight = EnergyInput {
            weight: -5.0,
            ..male_reference()
        };
        assert!(compute_energy(&negative_weight)
            .unwrap_err()
            .is_invalid_input());

        let nan_weight = EnergyInput {
            weight: f64::NAN,
            ..male_reference()
        };
        assert!(compute_energy(&nan_weight).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_overflowing_estimate_rejected() {
        // 10 * 1e308 overflows to infinity
        let huge_weight = EnergyInput {
            weight: 1e308,
            ..male_reference()
        };
        let err = compute_energy(&huge_weight).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("too large"));

        // Finite but beyond what an i64 calorie count can hold
        let beyond_i64 = EnergyInput {
            height: 1e300,
            ..male_reference()
        };
        assert!(compute_energy(&beyond_i64).unwrap_err().is_invalid_input());
    }
}

//! Body-fat estimator using the U.S. Navy circumference method.
//!
//! Formulas (measurements in cm):
//! ```text
//! male:   495 / (1.0324  − 0.19077 × log10(waist − neck)       + 0.15456 × log10(height)) − 450
//! female: 495 / (1.29579 − 0.35004 × log10(waist + hip − neck) + 0.22100 × log10(height)) − 450
//! ```
//!
//! The estimate is then nudged down when the user reports visible abdominal
//! definition, rounded to one decimal and placed in a sex-specific band.

use crate::units::{is_positive, round_to_tenth};
use crate::{
    AnthropometricInput, BodyFatCategory, BodyFatResult, CategoryBand, Error, Result, Sex,
};

/// Disclaimer printed under the result
pub const NOTE: &str = "This is an estimate based on the U.S. Navy method, which has a standard \
error of 3-4%. For a more accurate measurement, consider methods like DEXA scans, BodPod, or \
hydrostatic weighing. This calculator is not meant to diagnose any medical conditions.";

/// Visible-abs adjustment parameters: (threshold, reduction, floor)
const MALE_ABS_ADJUSTMENT: (f64, f64, f64) = (15.0, 2.0, 10.0);
const FEMALE_ABS_ADJUSTMENT: (f64, f64, f64) = (22.0, 2.0, 18.0);

/// Upper bounds (exclusive) for EssentialFat, Athletic, Fitness, Average
const MALE_BANDS: [f64; 4] = [6.0, 14.0, 18.0, 25.0];
const FEMALE_BANDS: [f64; 4] = [16.0, 21.0, 25.0, 32.0];

static MALE_TABLE: [CategoryBand; 5] = [
    CategoryBand {
        category: BodyFatCategory::EssentialFat,
        range: "2-5%",
        description: "Minimum needed for basic health",
    },
    CategoryBand {
        category: BodyFatCategory::Athletic,
        range: "6-13%",
        description: "Defined muscles, visible veins",
    },
    CategoryBand {
        category: BodyFatCategory::Fitness,
        range: "14-17%",
        description: "Lean with some definition",
    },
    CategoryBand {
        category: BodyFatCategory::Average,
        range: "18-24%",
        description: "Some muscle definition, but some fat",
    },
    CategoryBand {
        category: BodyFatCategory::Obese,
        range: "25%+",
        description: "Significant fat accumulation",
    },
];

static FEMALE_TABLE: [CategoryBand; 5] = [
    CategoryBand {
        category: BodyFatCategory::EssentialFat,
        range: "10-15%",
        description: "Minimum needed for basic health",
    },
    CategoryBand {
        category: BodyFatCategory::Athletic,
        range: "16-20%",
        description: "Defined muscles, athletic appearance",
    },
    CategoryBand {
        category: BodyFatCategory::Fitness,
        range: "21-24%",
        description: "Lean with some definition",
    },
    CategoryBand {
        category: BodyFatCategory::Average,
        range: "25-31%",
        description: "Less definition, more fat storage",
    },
    CategoryBand {
        category: BodyFatCategory::Obese,
        range: "32%+",
        description: "Significant fat accumulation",
    },
];

/// Tape measurements already converted to centimetres
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricMeasurements {
    pub height_cm: f64,
    pub waist_cm: f64,
    pub neck_cm: f64,
    /// Only read for females
    pub hip_cm: Option<f64>,
}

impl MetricMeasurements {
    /// Validate the input record and convert it to centimetres
    pub fn from_input(input: &AnthropometricInput) -> Result<Self> {
        check_positive("height", input.height)?;
        check_positive("waist", input.waist)?;
        check_positive("neck", input.neck)?;
        if let Some(weight) = input.weight {
            check_positive("weight", weight)?;
        }

        let hip = match (input.sex, input.hip) {
            (Sex::Female, None) => {
                return Err(Error::invalid("hip measurement is required for females"));
            }
            (Sex::Female, Some(hip)) => {
                check_positive("hip", hip)?;
                Some(hip)
            }
            (Sex::Male, _) => None,
        };

        let units = input.unit_system;
        Ok(Self {
            height_cm: units.length_to_cm(input.height),
            waist_cm: units.length_to_cm(input.waist),
            neck_cm: units.length_to_cm(input.neck),
            hip_cm: hip.map(|h| units.length_to_cm(h)),
        })
    }
}

/// Estimate body fat from a full input record
///
/// # Errors
/// `Error::InvalidInput` if a required measurement is missing or not
/// positive, or if the measurements fall outside the formula's domain
/// (e.g. neck ≥ waist for males).
pub fn compute_body_fat(input: &AnthropometricInput) -> Result<BodyFatResult> {
    let measurements = MetricMeasurements::from_input(input)?;
    let raw = navy_estimate(input.sex, &measurements)?;

    let (adjusted, applied) = if input.visible_abs {
        apply_visible_abs(input.sex, raw)
    } else {
        (raw, false)
    };

    let percentage = round_to_tenth(adjusted);
    let category = classify(input.sex, percentage);

    tracing::debug!(
        raw,
        adjusted,
        percentage,
        "Estimated body fat for {:?}: {:?}",
        input.sex,
        category
    );

    Ok(BodyFatResult {
        percentage,
        category,
        adjusted: applied,
    })
}

/// Unadjusted, unrounded U.S. Navy estimate
pub fn navy_estimate(sex: Sex, m: &MetricMeasurements) -> Result<f64> {
    let denominator = match sex {
        Sex::Male => {
            let girth = m.waist_cm - m.neck_cm;
            if girth <= 0.0 {
                return Err(Error::invalid(
                    "waist must be larger than neck for the male formula",
                ));
            }
            1.0324 - 0.19077 * girth.log10() + 0.15456 * m.height_cm.log10()
        }
        Sex::Female => {
            let hip = m
                .hip_cm
                .ok_or_else(|| Error::invalid("hip measurement is required for females"))?;
            let girth = m.waist_cm + hip - m.neck_cm;
            if girth <= 0.0 {
                return Err(Error::invalid(
                    "waist plus hip must be larger than neck for the female formula",
                ));
            }
            1.29579 - 0.35004 * girth.log10() + 0.22100 * m.height_cm.log10()
        }
    };

    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(Error::invalid(
            "measurements are outside the range the Navy formula supports",
        ));
    }

    Ok(495.0 / denominator - 450.0)
}

/// Apply the visible-abs correction once
///
/// Returns the (possibly) reduced estimate and whether it changed.
pub fn apply_visible_abs(sex: Sex, body_fat: f64) -> (f64, bool) {
    let (threshold, reduction, floor) = match sex {
        Sex::Male => MALE_ABS_ADJUSTMENT,
        Sex::Female => FEMALE_ABS_ADJUSTMENT,
    };

    if body_fat > threshold {
        ((body_fat - reduction).max(floor), true)
    } else {
        (body_fat, false)
    }
}

/// Place a percentage in its band; each band is a half-open interval
pub fn classify(sex: Sex, percentage: f64) -> BodyFatCategory {
    let bounds = match sex {
        Sex::Male => &MALE_BANDS,
        Sex::Female => &FEMALE_BANDS,
    };

    if percentage < bounds[0] {
        BodyFatCategory::EssentialFat
    } else if percentage < bounds[1] {
        BodyFatCategory::Athletic
    } else if percentage < bounds[2] {
        BodyFatCategory::Fitness
    } else if percentage < bounds[3] {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Obese
    }
}

/// Reference table of bands for display
pub fn category_table(sex: Sex) -> &'static [CategoryBand] {
    match sex {
        Sex::Male => &MALE_TABLE,
        Sex::Female => &FEMALE_TABLE,
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{} must be positive, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitSystem;

    fn male(waist: f64, neck: f64) -> AnthropometricInput {
        AnthropometricInput {
            sex: Sex::Male,
            unit_system: UnitSystem::Metric,
            height: 180.0,
            weight: Some(80.0),
            waist,
            neck,
            hip: None,
            visible_abs: false,
        }
    }

    fn female(waist: f64, neck: f64, hip: Option<f64>) -> AnthropometricInput {
        AnthropometricInput {
            sex: Sex::Female,
            unit_system: UnitSystem::Metric,
            height: 165.0,
            weight: Some(60.0),
            waist,
            neck,
            hip,
            visible_abs: false,
        }
    }

    #[test]
    fn test_male_estimate() {
        let result = compute_body_fat(&male(85.0, 38.0)).unwrap();
        assert_eq!(result.percentage, 16.1);
        assert_eq!(result.category, BodyFatCategory::Fitness);
        assert!(!result.adjusted);
    }

    #[test]
    fn test_female_estimate() {
        let result = compute_body_fat(&female(75.0, 33.0, Some(95.0))).unwrap();
        assert_eq!(result.percentage, 26.9);
        assert_eq!(result.category, BodyFatCategory::Average);

        let result = compute_body_fat(&female(85.0, 33.0, Some(105.0))).unwrap();
        assert_eq!(result.percentage, 36.6);
        assert_eq!(result.category, BodyFatCategory::Obese);
    }

    #[test]
    fn test_male_ignores_hip() {
        let mut input = male(85.0, 38.0);
        let without = compute_body_fat(&input).unwrap();
        input.hip = Some(100.0);
        let with = compute_body_fat(&input).unwrap();
        assert_eq!(without, with);
    }

    #[test]
    fn test_visible_abs_adjustment() {
        let mut input = male(85.0, 38.0);
        input.visible_abs = true;
        let result = compute_body_fat(&input).unwrap();
        assert_eq!(result.percentage, 14.1);
        assert_eq!(result.category, BodyFatCategory::Fitness);
        assert!(result.adjusted);

        let mut input = female(75.0, 33.0, Some(95.0));
        input.visible_abs = true;
        let result = compute_body_fat(&input).unwrap();
        assert_eq!(result.percentage, 24.9);
        assert_eq!(result.category, BodyFatCategory::Fitness);
    }

    #[test]
    fn test_visible_abs_below_threshold_unchanged() {
        let mut input = male(80.0, 40.0);
        input.visible_abs = true;
        let result = compute_body_fat(&input).unwrap();
        assert_eq!(result.percentage, 10.3);
        assert!(!result.adjusted);
    }

    #[test]
    fn test_visible_abs_never_below_floor() {
        let mut bf = 0.0;
        while bf < 60.0 {
            let (male_adj, male_applied) = apply_visible_abs(Sex::Male, bf);
            if male_applied {
                assert!(male_adj >= 10.0);
            }
            let (female_adj, female_applied) = apply_visible_abs(Sex::Female, bf);
            if female_applied {
                assert!(female_adj >= 18.0);
            }
            bf += 0.25;
        }
    }

    #[test]
    fn test_visible_abs_applied_once() {
        let (once, _) = apply_visible_abs(Sex::Male, 20.0);
        assert_eq!(once, 18.0);

        let mut input = male(95.0, 38.0);
        let plain = compute_body_fat(&input).unwrap();
        input.visible_abs = true;
        let adjusted = compute_body_fat(&input).unwrap();
        assert!((plain.percentage - adjusted.percentage - 2.0).abs() < 0.11);
    }

    #[test]
    fn test_monotonic_in_waist() {
        let base = MetricMeasurements {
            height_cm: 180.0,
            waist_cm: 70.0,
            neck_cm: 38.0,
            hip_cm: None,
        };
        let mut previous = navy_estimate(Sex::Male, &base).unwrap();
        for step in 1..60 {
            let m = MetricMeasurements {
                waist_cm: base.waist_cm + step as f64,
                ..base
            };
            let current = navy_estimate(Sex::Male, &m).unwrap();
            assert!(current > previous, "waist {} did not increase", m.waist_cm);
            previous = current;
        }
    }

    #[test]
    fn test_imperial_matches_metric() {
        let imperial = AnthropometricInput {
            sex: Sex::Male,
            unit_system: UnitSystem::Imperial,
            height: 70.0,
            weight: Some(170.0),
            waist: 34.0,
            neck: 15.0,
            hip: None,
            visible_abs: false,
        };
        let metric = AnthropometricInput {
            unit_system: UnitSystem::Metric,
            height: 70.0 * 2.54,
            weight: None,
            waist: 34.0 * 2.54,
            neck: 15.0 * 2.54,
            ..imperial.clone()
        };

        let a = compute_body_fat(&imperial).unwrap();
        let b = compute_body_fat(&metric).unwrap();
        assert_eq!(a.percentage, 17.4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_male_band_boundaries() {
        assert_eq!(classify(Sex::Male, 5.9), BodyFatCategory::EssentialFat);
        assert_eq!(classify(Sex::Male, 6.0), BodyFatCategory::Athletic);
        assert_eq!(classify(Sex::Male, 14.0), BodyFatCategory::Fitness);
        assert_eq!(classify(Sex::Male, 18.0), BodyFatCategory::Average);
        assert_eq!(classify(Sex::Male, 24.9), BodyFatCategory::Average);
        assert_eq!(classify(Sex::Male, 25.0), BodyFatCategory::Obese);
    }

    #[test]
    fn test_female_band_boundaries() {
        assert_eq!(classify(Sex::Female, 15.9), BodyFatCategory::EssentialFat);
        assert_eq!(classify(Sex::Female, 16.0), BodyFatCategory::Athletic);
        assert_eq!(classify(Sex::Female, 21.0), BodyFatCategory::Fitness);
        assert_eq!(classify(Sex::Female, 25.0), BodyFatCategory::Average);
        assert_eq!(classify(Sex::Female, 32.0), BodyFatCategory::Obese);
    }

    #[test]
    fn test_female_missing_hip_rejected() {
        let err = compute_body_fat(&female(75.0, 33.0, None)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("hip"));
    }

    #[test]
    fn test_non_positive_measurements_rejected() {
        assert!(compute_body_fat(&male(0.0, 38.0))
            .unwrap_err()
            .is_invalid_input());
        assert!(compute_body_fat(&male(85.0, -1.0))
            .unwrap_err()
            .is_invalid_input());
        assert!(compute_body_fat(&female(75.0, 33.0, Some(0.0)))
            .unwrap_err()
            .is_invalid_input());

        let mut input = male(85.0, 38.0);
        input.weight = Some(0.0);
        assert!(compute_body_fat(&input).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_neck_not_smaller_than_waist_rejected() {
        let err = compute_body_fat(&male(38.0, 38.0)).unwrap_err();
        assert!(err.is_invalid_input());

        let err = compute_body_fat(&male(35.0, 40.0)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_female_girth_not_positive_rejected() {
        let input = female(1.0, 5.0, Some(1.0));
        let err = compute_body_fat(&input).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("waist plus hip"));
    }

    #[test]
    fn test_denominator_out_of_range_rejected() {
        let mut input = male(1e12, 1.0);
        input.height = 1.0;
        let err = compute_body_fat(&input).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("outside the range"));
    }

    #[test]
    fn test_category_tables_cover_every_band() {
        for sex in [Sex::Male, Sex::Female] {
            let table = category_table(sex);
            let categories: Vec<_> = table.iter().map(|b| b.category).collect();
            assert_eq!(
                categories,
                vec![
                    BodyFatCategory::EssentialFat,
                    BodyFatCategory::Athletic,
                    BodyFatCategory::Fitness,
                    BodyFatCategory::Average,
                    BodyFatCategory::Obese,
                ]
            );
        }
    }
}

//! Core domain types for the fitcalc calculators.
//!
//! This module defines the value types passed in and out of the three
//! calculators:
//! - Shared enums (sex, unit system, activity level, split parameters)
//! - Input records for each calculator
//! - Result records
//!
//! None of these carry identity; they are created by the caller, consumed
//! by a single calculation and dropped.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Shared Enums
// ============================================================================

/// Biological sex, selects the formula variant and band table
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Unit system the caller's measurements are expressed in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Centimetres and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

/// Habitual activity level, scales BMR into TDEE
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// All levels, lowest to highest
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Human-readable description shown next to the choice
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Lightly Active (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderately Active (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Very Active (hard exercise 6-7 days/week)",
            ActivityLevel::VeryActive => {
                "Extremely Active (very hard exercise, physical job or 2x training)"
            }
        }
    }
}

/// Training experience of the person the split is for
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
}

/// Primary training goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    FatLoss,
    MuscleGain,
    GeneralHealth,
}

/// Body region the split emphasises
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    Overall,
    UpperBody,
    LowerBody,
}

/// Day of the week, Monday first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Sunday
    pub const WEEK: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

// ============================================================================
// Display / FromStr
// ============================================================================

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        })
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        })
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralHealth => "General Health",
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Target::Overall => "Overall",
            Target::UpperBody => "Upper Body",
            Target::LowerBody => "Lower Body",
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        })
    }
}

/// Lowercase the input and drop separators so "very-active", "Very Active"
/// and "very_active" all compare equal
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(Error::invalid(format!("unknown sex '{}'", s))),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(Error::invalid(format!("unknown unit system '{}'", s))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Ok(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "veryactive" | "extremelyactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(Error::invalid(format!("unknown activity level '{}'", s))),
        }
    }
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            _ => Err(Error::invalid(format!("unknown experience level '{}'", s))),
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "fatloss" => Ok(Goal::FatLoss),
            "musclegain" => Ok(Goal::MuscleGain),
            "generalhealth" => Ok(Goal::GeneralHealth),
            _ => Err(Error::invalid(format!("unknown goal '{}'", s))),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "overall" | "fullbody" => Ok(Target::Overall),
            "upperbody" | "upper" => Ok(Target::UpperBody),
            "lowerbody" | "lower" => Ok(Target::LowerBody),
            _ => Err(Error::invalid(format!("unknown target '{}'", s))),
        }
    }
}

// ============================================================================
// Input Records
// ============================================================================

/// Input for the maintenance-calorie estimator
///
/// `height` and `weight` are in the units named by `unit_system`
/// (cm/kg or in/lb).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnergyInput {
    pub age: u32,
    pub sex: Sex,
    pub unit_system: UnitSystem,
    pub height: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
}

/// Input for the body-fat estimator
///
/// Linear measurements are in cm or inches depending on `unit_system`.
/// `hip` is required for females and ignored for males. `weight` is
/// collected alongside the tape measurements but the Navy method does not
/// use it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnthropometricInput {
    pub sex: Sex,
    pub unit_system: UnitSystem,
    pub height: f64,
    #[serde(default)]
    pub weight: Option<f64>,
    pub waist: f64,
    pub neck: f64,
    #[serde(default)]
    pub hip: Option<f64>,
    #[serde(default)]
    pub visible_abs: bool,
}

/// Input for the workout-split generator
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitInput {
    pub experience: Experience,
    pub goal: Goal,
    pub target: Target,
    pub days_per_week: u8,
}

// ============================================================================
// Result Records
// ============================================================================

/// Daily energy figures, each rounded to the nearest calorie
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyResult {
    pub bmr: i64,
    pub tdee: i64,
    pub fat_loss_target: i64,
    pub muscle_gain_target: i64,
}

/// Body-fat band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletic,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Estimated body-fat percentage and its band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyFatResult {
    /// Percentage rounded to one decimal place
    pub percentage: f64,
    pub category: BodyFatCategory,
    /// Whether the visible-abs adjustment changed the estimate
    pub adjusted: bool,
}

/// One row of the reference table printed next to a body-fat result
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryBand {
    pub category: BodyFatCategory,
    pub range: &'static str,
    pub description: &'static str,
}

/// What happens on a given day of the split
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Session {
    Rest,
    Training {
        focus: String,
        /// Cardio add-on driven by the goal
        cardio: Option<String>,
    },
}

/// A single day of a split template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayEntry {
    pub day: Weekday,
    pub session: Session,
}

impl DayEntry {
    pub fn is_rest(&self) -> bool {
        matches!(self.session, Session::Rest)
    }

    /// Label as shown in the weekly schedule, e.g. "Push + Cardio (20-30 min)"
    pub fn label(&self) -> String {
        match &self.session {
            Session::Rest => "Rest".to_string(),
            Session::Training {
                focus,
                cardio: Some(cardio),
            } => format!("{} + {}", focus, cardio),
            Session::Training { focus, cardio: None } => focus.clone(),
        }
    }
}

/// One prescribed exercise, e.g. "Squats: 3-4 sets x 8-12 reps"
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseSet {
    pub name: String,
    pub sets: String,
    /// Reps or duration per set
    pub dose: String,
}

impl fmt::Display for ExerciseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} sets x {}", self.name, self.sets, self.dose)
    }
}

/// A named group of sample exercises for one workout day type
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseBlock {
    pub id: String,
    pub name: String,
    pub exercises: Vec<ExerciseSet>,
}

/// Generated weekly plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitPlan {
    pub title: String,
    pub summary: String,
    pub schedule: [DayEntry; 7],
    pub exercise_sets: Vec<ExerciseBlock>,
}

impl SplitPlan {
    /// Number of non-rest days in the schedule
    pub fn training_days(&self) -> usize {
        self.schedule.iter().filter(|d| !d.is_rest()).count()
    }
}

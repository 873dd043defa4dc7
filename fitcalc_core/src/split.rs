//! Workout-split generator.
//!
//! Selection is a pure table lookup:
//! - The weekly schedule is keyed by `(target, days bucket)`.
//! - The goal only decorates training days with a cardio add-on.
//! - Sample exercise blocks are keyed by the days bucket alone.
//! - Experience only changes the plan's title and summary.
//!
//! Exercise blocks deliberately ignore the target: an upper-body 3-day plan
//! gets the same Full Body A/B samples as an overall 3-day plan.

use crate::catalog::{self, get_default_catalog, Catalog};
use crate::{
    DayEntry, Error, ExerciseBlock, Experience, Goal, Result, Session, SplitInput, SplitPlan,
    Target, Weekday,
};

pub const MIN_DAYS: u8 = 2;
pub const MAX_DAYS: u8 = 6;

/// Disclaimer printed under the plan
pub const NOTE: &str = "This workout split is a general recommendation. Always adjust weights, \
reps, and exercises based on your fitness level and any physical limitations. Consider \
consulting with a fitness professional before starting a new workout program.";

/// Training frequency bucket used as the second table key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaysBucket {
    Two,
    Three,
    Four,
    /// Five or six days; the count decides whether Saturday is trained
    FivePlus(u8),
}

impl DaysBucket {
    pub fn from_days(days_per_week: u8) -> Result<Self> {
        match days_per_week {
            2 => Ok(DaysBucket::Two),
            3 => Ok(DaysBucket::Three),
            4 => Ok(DaysBucket::Four),
            5 | 6 => Ok(DaysBucket::FivePlus(days_per_week)),
            other => Err(Error::invalid(format!(
                "days per week must be between {} and {}, got {}",
                MIN_DAYS, MAX_DAYS, other
            ))),
        }
    }
}

impl Goal {
    /// Cardio add-on appended to every training day
    pub fn cardio(self) -> Option<&'static str> {
        match self {
            Goal::FatLoss => Some("Cardio (20-30 min)"),
            Goal::GeneralHealth => Some("Light Cardio (10-15 min)"),
            Goal::MuscleGain => None,
        }
    }
}

/// Weekly focus per day, Monday first; `None` is a rest day
type Template = [Option<&'static str>; 7];

/// Build a plan from the default exercise catalog
///
/// # Errors
/// `Error::InvalidInput` if `days_per_week` is outside [2, 6].
pub fn select_split(input: &SplitInput) -> Result<SplitPlan> {
    select_split_with(get_default_catalog(), input)
}

/// Build a plan using exercise blocks from `catalog`
pub fn select_split_with(catalog: &Catalog, input: &SplitInput) -> Result<SplitPlan> {
    let bucket = DaysBucket::from_days(input.days_per_week)?;

    let template = schedule_template(input.target, bucket);
    let cardio = input.goal.cardio();
    let schedule = Weekday::WEEK.map(|day| DayEntry {
        day,
        session: match template[day as usize] {
            Some(focus) => Session::Training {
                focus: focus.to_string(),
                cardio: cardio.map(str::to_string),
            },
            None => Session::Rest,
        },
    });

    let exercise_sets = exercise_block_ids(bucket)
        .iter()
        .map(|id| {
            catalog.block(id).cloned().ok_or_else(|| {
                Error::CatalogValidation(format!("exercise block '{}' not found", id))
            })
        })
        .collect::<Result<Vec<ExerciseBlock>>>()?;

    tracing::debug!(
        "Selected {:?}/{:?} split with {} exercise blocks",
        input.target,
        bucket,
        exercise_sets.len()
    );

    Ok(SplitPlan {
        title: title(input),
        summary: summary(input),
        schedule,
        exercise_sets,
    })
}

/// Decision table for the weekly schedule
///
/// Overall arms double as the general fallback for each bucket.
pub fn schedule_template(target: Target, bucket: DaysBucket) -> Template {
    use DaysBucket::*;

    match (target, bucket) {
        (Target::UpperBody, Two) => [
            Some("Upper Body Focus"),
            None,
            None,
            Some("Lower Body + Core"),
            None,
            None,
            None,
        ],
        (Target::LowerBody, Two) => [
            Some("Lower Body Focus"),
            None,
            None,
            Some("Upper Body + Core"),
            None,
            None,
            None,
        ],
        (Target::Overall, Two) => [
            Some("Full Body A"),
            None,
            None,
            Some("Full Body B"),
            None,
            None,
            None,
        ],
        (Target::UpperBody, Three) => [
            Some("Push (Chest/Shoulders/Triceps)"),
            None,
            Some("Pull (Back/Biceps)"),
            None,
            Some("Lower Body + Core"),
            None,
            None,
        ],
        (Target::LowerBody, Three) => [
            Some("Quads Focus"),
            None,
            Some("Upper Body Push/Pull"),
            None,
            Some("Hamstrings/Glutes + Core"),
            None,
            None,
        ],
        (Target::Overall, Three) => [
            Some("Full Body A"),
            None,
            Some("Full Body B"),
            None,
            Some("Full Body C"),
            None,
            None,
        ],
        (Target::UpperBody, Four) => [
            Some("Chest/Triceps"),
            Some("Back/Biceps"),
            None,
            Some("Shoulders/Arms"),
            Some("Lower Body + Core"),
            None,
            None,
        ],
        (Target::LowerBody, Four) => [
            Some("Quads/Calves"),
            Some("Upper Body Push"),
            None,
            Some("Hamstrings/Glutes"),
            Some("Upper Body Pull + Core"),
            None,
            None,
        ],
        (Target::Overall, Four) => [
            Some("Upper Body"),
            Some("Lower Body"),
            None,
            Some("Upper Body"),
            Some("Lower Body"),
            None,
            None,
        ],
        (Target::UpperBody, FivePlus(days)) => [
            Some("Chest"),
            Some("Back"),
            Some("Lower Body"),
            Some("Shoulders"),
            Some("Arms"),
            (days >= 6).then_some("Lower Body (Weak Points)"),
            None,
        ],
        (Target::LowerBody, FivePlus(days)) => [
            Some("Quads"),
            Some("Upper Body Push"),
            Some("Hamstrings/Glutes"),
            Some("Upper Body Pull"),
            Some("Full Lower Body"),
            (days >= 6).then_some("Upper Body (Weak Points)"),
            None,
        ],
        (Target::Overall, FivePlus(days)) => [
            Some("Push"),
            Some("Pull"),
            Some("Legs"),
            Some("Push"),
            Some("Pull"),
            (days >= 6).then_some("Legs"),
            None,
        ],
    }
}

/// Sample exercise blocks for a frequency, independent of target
pub fn exercise_block_ids(bucket: DaysBucket) -> [&'static str; 2] {
    match bucket {
        DaysBucket::Three => [catalog::FULL_BODY_A, catalog::FULL_BODY_B],
        DaysBucket::Four => [catalog::UPPER_BODY, catalog::LOWER_BODY],
        DaysBucket::Two | DaysBucket::FivePlus(_) => [catalog::PUSH, catalog::PULL],
    }
}

fn title(input: &SplitInput) -> String {
    format!(
        "{} {} {} {}-Day Split",
        input.experience, input.goal, input.target, input.days_per_week
    )
}

fn summary(input: &SplitInput) -> String {
    let who = match input.experience {
        Experience::Beginner => "beginners",
        Experience::Intermediate => "intermediate trainees",
    };
    let goal = match input.goal {
        Goal::FatLoss => "fat loss",
        Goal::MuscleGain => "muscle gain",
        Goal::GeneralHealth => "general health",
    };
    let emphasis = match input.target {
        Target::Overall => "overall body development",
        Target::UpperBody => "upper body strength and aesthetics",
        Target::LowerBody => "lower body strength and power",
    };
    format!(
        "A {}-day workout split designed for {} focusing on {} with emphasis on {}.",
        input.days_per_week, who, goal, emphasis
    )
}

//! Default catalog of sample exercise blocks.
//!
//! Each block lists the sample exercises for one workout day type
//! ("Full Body A", "Push", ...). The split generator picks blocks from here
//! by id.

use crate::{ExerciseBlock, ExerciseSet};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const FULL_BODY_A: &str = "full_body_a";
pub const FULL_BODY_B: &str = "full_body_b";
pub const UPPER_BODY: &str = "upper_body";
pub const LOWER_BODY: &str = "lower_body";
pub const PUSH: &str = "push";
pub const PULL: &str = "pull";

/// All sample exercise blocks, keyed by id
#[derive(Clone, Debug)]
pub struct Catalog {
    pub blocks: HashMap<String, ExerciseBlock>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn ex(name: &str, sets: &str, dose: &str) -> ExerciseSet {
    ExerciseSet {
        name: name.into(),
        sets: sets.into(),
        dose: dose.into(),
    }
}

fn block(id: &str, name: &str, exercises: Vec<ExerciseSet>) -> (String, ExerciseBlock) {
    (
        id.to_string(),
        ExerciseBlock {
            id: id.into(),
            name: name.into(),
            exercises,
        },
    )
}

/// Builds the default catalog
///
/// **Note**: prefer `get_default_catalog()`, which returns a cached
/// reference. This is kept public for tests and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    let blocks = HashMap::from([
        // ====================================================================
        // 3-day full body rotation
        // ====================================================================
        block(
            FULL_BODY_A,
            "Full Body A",
            vec![
                ex("Squats", "3-4", "8-12 reps"),
                ex("Bench Press", "3-4", "8-12 reps"),
                ex("Bent-Over Rows", "3-4", "8-12 reps"),
                ex("Overhead Press", "3", "8-12 reps"),
                ex("Bicep Curls", "3", "10-15 reps"),
                ex("Plank", "3", "30-60 seconds"),
            ],
        ),
        block(
            FULL_BODY_B,
            "Full Body B",
            vec![
                ex("Deadlifts", "3-4", "8-12 reps"),
                ex("Incline Press", "3-4", "8-12 reps"),
                ex("Pull-ups/Lat Pulldowns", "3-4", "8-12 reps"),
                ex("Lateral Raises", "3", "10-15 reps"),
                ex("Tricep Extensions", "3", "10-15 reps"),
                ex("Russian Twists", "3", "10-15 reps per side"),
            ],
        ),
        // ====================================================================
        // 4-day upper/lower
        // ====================================================================
        block(
            UPPER_BODY,
            "Upper Body",
            vec![
                ex("Bench Press", "3-4", "8-12 reps"),
                ex("Bent-Over Rows", "3-4", "8-12 reps"),
                ex("Overhead Press", "3", "8-12 reps"),
                ex("Pull-ups/Lat Pulldowns", "3", "8-12 reps"),
                ex("Tricep Extensions", "3", "10-15 reps"),
                ex("Bicep Curls", "3", "10-15 reps"),
            ],
        ),
        block(
            LOWER_BODY,
            "Lower Body",
            vec![
                ex("Squats", "3-4", "8-12 reps"),
                ex("Romanian Deadlifts", "3-4", "8-12 reps"),
                ex("Leg Press", "3", "10-15 reps"),
                ex("Leg Curls", "3", "10-15 reps"),
                ex("Calf Raises", "3", "12-20 reps"),
                ex("Planks", "3", "30-60 seconds"),
            ],
        ),
        // ====================================================================
        // Push/pull for every other frequency
        // ====================================================================
        block(
            PUSH,
            "Push",
            vec![
                ex("Bench Press", "3-4", "8-12 reps"),
                ex("Overhead Press", "3-4", "8-12 reps"),
                ex("Incline Dumbbell Press", "3", "8-12 reps"),
                ex("Lateral Raises", "3", "10-15 reps"),
                ex("Tricep Pushdowns", "3", "10-15 reps"),
                ex("Overhead Tricep Extensions", "3", "10-15 reps"),
            ],
        ),
        block(
            PULL,
            "Pull",
            vec![
                ex("Deadlifts", "3-4", "8-12 reps"),
                ex("Pull-ups/Lat Pulldowns", "3-4", "8-12 reps"),
                ex("Bent-Over Rows", "3", "8-12 reps"),
                ex("Face Pulls", "3", "10-15 reps"),
                ex("Bicep Curls", "3", "10-15 reps"),
                ex("Hammer Curls", "3", "10-15 reps"),
            ],
        ),
    ]);

    Catalog { blocks }
}

impl Catalog {
    /// Look up a block by id
    pub fn block(&self, id: &str) -> Option<&ExerciseBlock> {
        self.blocks.get(id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, block) in &self.blocks {
            if id.is_empty() || block.id.is_empty() {
                errors.push("Exercise block has empty ID".to_string());
            }
            if id != &block.id {
                errors.push(format!(
                    "Block key '{}' doesn't match block.id '{}'",
                    id, block.id
                ));
            }
            if block.name.is_empty() {
                errors.push(format!("Block '{}' has empty name", id));
            }
            if block.exercises.is_empty() {
                errors.push(format!("Block '{}' has no exercises", id));
            }

            for exercise in &block.exercises {
                if exercise.name.is_empty() {
                    errors.push(format!("Block '{}' has an unnamed exercise", id));
                }
                if exercise.sets.is_empty() || exercise.dose.is_empty() {
                    errors.push(format!(
                        "Block '{}': exercise '{}' is missing sets or dose",
                        id, exercise.name
                    ));
                }
            }
        }

        // Every block the split generator can ask for must be present
        for required in [FULL_BODY_A, FULL_BODY_B, UPPER_BODY, LOWER_BODY, PUSH, PULL] {
            if !self.blocks.contains_key(required) {
                errors.push(format!("Catalog is missing block '{}'", required));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.blocks.len(), 6);
        for block in catalog.blocks.values() {
            assert_eq!(block.exercises.len(), 6, "{}", block.id);
        }
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_cached_catalog_matches_fresh_build() {
        let cached = get_default_catalog();
        let fresh = build_default_catalog();
        assert_eq!(cached.blocks, fresh.blocks);
    }

    #[test]
    fn test_validate_reports_missing_block() {
        let mut catalog = build_default_catalog();
        catalog.blocks.remove(PULL);
        let errors = catalog.validate();
        assert_eq!(errors, vec!["Catalog is missing block 'pull'".to_string()]);
    }

    #[test]
    fn test_validate_reports_mismatched_id() {
        let mut catalog = build_default_catalog();
        if let Some(block) = catalog.blocks.get_mut(PUSH) {
            block.id = "shove".into();
        }
        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("doesn't match")));
    }

    #[test]
    fn test_exercise_display() {
        let catalog = build_default_catalog();
        let first = &catalog.block(FULL_BODY_A).unwrap().exercises[0];
        assert_eq!(first.to_string(), "Squats: 3-4 sets x 8-12 reps");
    }
}

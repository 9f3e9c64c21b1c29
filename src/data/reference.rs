//! Built-in reference tables
//!
//! The default data set, built on first use and shared for the life of the process.

use std::sync::OnceLock;

use super::provider::FactProvider;
use super::tables::Tables;
use crate::models::{ExerciseCategory, ExerciseRecord, FoodRecord};

pub const BUILTIN_SOURCE: &str = "built-in";

static BUILTIN: OnceLock<Tables> = OnceLock::new();

fn builtin_foods() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("apple", 95, "0.5g", "25g", "0.3g"),
        FoodRecord::new("banana", 105, "1.3g", "27g", "0.4g"),
    ]
}

fn builtin_exercises() -> Vec<ExerciseRecord> {
    vec![
        ExerciseRecord::new(
            "push-ups",
            ExerciseCategory::Strength,
            300,
            "Place hands shoulder-width apart, lower body until chest nearly touches floor, push back up.",
        ),
        ExerciseRecord::new(
            "jumping jacks",
            ExerciseCategory::Cardio,
            250,
            "Stand with feet together, jump to a position with legs spread wide and hands touching overhead, return to start.",
        ),
    ]
}

/// Shared built-in tables
pub fn builtin() -> &'static Tables {
    BUILTIN.get_or_init(|| {
        Tables::from_distinct_records(BUILTIN_SOURCE, builtin_foods(), builtin_exercises())
    })
}

/// Provider backed by the built-in tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTables;

impl FactProvider for ReferenceTables {
    fn food(&self, key: &str) -> Option<FoodRecord> {
        builtin().food(key)
    }

    fn exercise(&self, key: &str) -> Option<ExerciseRecord> {
        builtin().exercise(key)
    }

    fn food_count(&self) -> usize {
        builtin().food_count()
    }

    fn exercise_count(&self) -> usize {
        builtin().exercise_count()
    }

    fn source(&self) -> String {
        BUILTIN_SOURCE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_complete() {
        let tables = ReferenceTables;
        assert_eq!(tables.food_count(), 2);
        assert_eq!(tables.exercise_count(), 2);
        assert_eq!(tables.source(), "built-in");
    }

    #[test]
    fn test_builtin_rows_are_lowercase_and_distinct() {
        let checked =
            Tables::from_records(BUILTIN_SOURCE, builtin_foods(), builtin_exercises()).unwrap();
        assert_eq!(checked.food_count(), builtin_foods().len());
        assert_eq!(checked.exercise_count(), builtin_exercises().len());
        assert!(builtin_foods().iter().all(|r| r.food == r.key()));
        assert!(builtin_exercises().iter().all(|r| r.exercise == r.key()));
    }

    #[test]
    fn test_builtin_food_rows() {
        let tables = ReferenceTables;
        assert_eq!(
            tables.food("banana"),
            Some(FoodRecord::new("banana", 105, "1.3g", "27g", "0.4g"))
        );
        assert_eq!(
            tables.food("apple"),
            Some(FoodRecord::new("apple", 95, "0.5g", "25g", "0.3g"))
        );
    }

    #[test]
    fn test_builtin_exercise_rows() {
        let tables = ReferenceTables;
        let jacks = tables.exercise("jumping jacks").unwrap();
        assert_eq!(jacks.category, ExerciseCategory::Cardio);
        assert_eq!(jacks.calories_burned_30min_avg_person, 250);
        assert_eq!(
            jacks.instructions,
            "Stand with feet together, jump to a position with legs spread wide and hands touching overhead, return to start."
        );
        assert_eq!(
            tables.exercise("push-ups").unwrap().category,
            ExerciseCategory::Strength
        );
    }
}

//! Exercise record model
//!
//! Describes a single exercise with an average calorie burn and how to perform it.

use serde::{Deserialize, Serialize};

/// Exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Cardio => "cardio",
        }
    }
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference data for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub exercise: String,
    pub category: ExerciseCategory,
    /// Calories burned in 30 minutes by an average person
    pub calories_burned_30min_avg_person: i64,
    pub instructions: String,
}

impl ExerciseRecord {
    pub fn new(
        exercise: impl Into<String>,
        category: ExerciseCategory,
        calories_burned_30min_avg_person: i64,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            exercise: exercise.into(),
            category,
            calories_burned_30min_avg_person,
            instructions: instructions.into(),
        }
    }

    /// Table key for this record
    pub fn key(&self) -> String {
        self.exercise.to_lowercase()
    }

    /// Same record with its name lowercased
    pub fn normalized(mut self) -> Self {
        self.exercise = self.key();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(ExerciseCategory::Strength.to_string(), "strength");
        assert_eq!(ExerciseCategory::Cardio.to_string(), "cardio");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let value = serde_json::to_value(ExerciseCategory::Cardio).unwrap();
        assert_eq!(value, serde_json::json!("cardio"));
        assert_eq!(ExerciseCategory::Cardio.as_str(), "cardio");
    }

    #[test]
    fn test_normalized_lowercases_name_only() {
        let record = ExerciseRecord::new("Push-Ups", ExerciseCategory::Strength, 300, "Push.")
            .normalized();
        assert_eq!(record.exercise, "push-ups");
        assert_eq!(record.instructions, "Push.");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<ExerciseRecord, _> = serde_json::from_value(serde_json::json!({
            "exercise": "plank",
            "category": "core",
            "calories_burned_30min_avg_person": 100,
            "instructions": "Hold."
        }));
        assert!(result.is_err());
    }
}

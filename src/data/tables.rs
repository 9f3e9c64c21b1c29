//! In-memory reference tables
//!
//! Maps of normalized names to records, built once and never written again.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::provider::{DataError, DataResult, FactProvider};
use crate::models::{ExerciseRecord, FoodRecord};

/// On-disk shape of a reference data file
#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    foods: Vec<FoodRecord>,
    #[serde(default)]
    exercises: Vec<ExerciseRecord>,
}

/// Immutable food and exercise tables
#[derive(Debug, Clone, Default)]
pub struct Tables {
    foods: HashMap<String, FoodRecord>,
    exercises: HashMap<String, ExerciseRecord>,
    source: String,
}

impl Tables {
    /// Build tables from record lists, rejecting duplicate keys
    ///
    /// Names are lowercased, so a hit always returns the normalized key.
    pub fn from_records(
        source: impl Into<String>,
        foods: Vec<FoodRecord>,
        exercises: Vec<ExerciseRecord>,
    ) -> DataResult<Self> {
        let mut food_map = HashMap::with_capacity(foods.len());
        for record in foods.into_iter().map(FoodRecord::normalized) {
            if food_map.contains_key(&record.food) {
                return Err(DataError::DuplicateKey { table: "food", key: record.food });
            }
            food_map.insert(record.food.clone(), record);
        }

        let mut exercise_map = HashMap::with_capacity(exercises.len());
        for record in exercises.into_iter().map(ExerciseRecord::normalized) {
            if exercise_map.contains_key(&record.exercise) {
                return Err(DataError::DuplicateKey { table: "exercise", key: record.exercise });
            }
            exercise_map.insert(record.exercise.clone(), record);
        }

        Ok(Self {
            foods: food_map,
            exercises: exercise_map,
            source: source.into(),
        })
    }

    /// Build tables from records whose names are already lowercase and distinct
    ///
    /// A later record with the same name replaces an earlier one.
    pub(crate) fn from_distinct_records(
        source: impl Into<String>,
        foods: Vec<FoodRecord>,
        exercises: Vec<ExerciseRecord>,
    ) -> Self {
        Self {
            foods: foods.into_iter().map(|r| (r.food.clone(), r)).collect(),
            exercises: exercises.into_iter().map(|r| (r.exercise.clone(), r)).collect(),
            source: source.into(),
        }
    }

    /// Parse tables from a JSON document of the form `{"foods": [...], "exercises": [...]}`
    pub fn from_json(source: impl Into<String>, json: &str) -> DataResult<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::from_records(source, file.foods, file.exercises)
    }

    /// Load tables from a JSON reference data file
    pub fn load<P: AsRef<Path>>(path: P) -> DataResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let tables = Self::from_json(path.display().to_string(), &json)?;
        info!(
            path = %path.display(),
            foods = tables.foods.len(),
            exercises = tables.exercises.len(),
            "loaded reference data file"
        );
        Ok(tables)
    }
}

impl FactProvider for Tables {
    fn food(&self, key: &str) -> Option<FoodRecord> {
        self.foods.get(key).cloned()
    }

    fn exercise(&self, key: &str) -> Option<ExerciseRecord> {
        self.exercises.get(key).cloned()
    }

    fn food_count(&self) -> usize {
        self.foods.len()
    }

    fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    fn source(&self) -> String {
        self.source.clone()
    }
}

//! Fact lookup tools
//!
//! Resolves a free-text name to a nutrition or exercise record by exact,
//! case-insensitive match. A miss is an ordinary return value.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::data::{FactProvider, ReferenceTables};
use crate::models::{ExerciseRecord, FoodRecord, LookupError, LookupResult};

/// Lookup service over a fact provider
#[derive(Clone)]
pub struct FactLookup {
    provider: Arc<dyn FactProvider>,
}

impl FactLookup {
    pub fn new(provider: Arc<dyn FactProvider>) -> Self {
        Self { provider }
    }

    /// Lookup service over the built-in tables
    pub fn builtin() -> Self {
        Self::new(Arc::new(ReferenceTables))
    }

    pub fn provider(&self) -> &Arc<dyn FactProvider> {
        &self.provider
    }

    /// Look up nutritional info for a food item
    ///
    /// The input is lowercased before matching but is not trimmed. The miss
    /// message embeds the input as given.
    pub fn lookup_nutrition(&self, food_item: &str) -> LookupResult<FoodRecord> {
        let key = food_item.to_lowercase();
        match self.provider.food(&key) {
            Some(record) => {
                debug!(food_item, key = %key, "nutrition hit");
                Ok(record)
            }
            None => {
                debug!(food_item, "nutrition miss");
                Err(LookupError::FoodNotFound(food_item.to_string()))
            }
        }
    }

    /// Look up reference data for an exercise
    pub fn lookup_exercise(&self, exercise_name: &str) -> LookupResult<ExerciseRecord> {
        let key = exercise_name.to_lowercase();
        match self.provider.exercise(&key) {
            Some(record) => {
                debug!(exercise_name, key = %key, category = %record.category, "exercise hit");
                Ok(record)
            }
            None => {
                debug!(exercise_name, "exercise miss");
                Err(LookupError::ExerciseNotFound(exercise_name.to_string()))
            }
        }
    }
}

/// Look up nutritional info in the built-in tables
pub fn lookup_nutrition(food_item: &str) -> LookupResult<FoodRecord> {
    FactLookup::builtin().lookup_nutrition(food_item)
}

/// Look up exercise data in the built-in tables
pub fn lookup_exercise(exercise_name: &str) -> LookupResult<ExerciseRecord> {
    FactLookup::builtin().lookup_exercise(exercise_name)
}

/// Response body for a miss
#[derive(Debug, Serialize)]
struct MissResponse {
    error: String,
}

/// Convert a lookup result into the mapping handed back to a tool caller
///
/// A hit yields the record's fields. A miss yields exactly one key, `error`.
pub fn to_tool_output<T: Serialize>(result: &LookupResult<T>) -> serde_json::Result<Value> {
    match result {
        Ok(record) => serde_json::to_value(record),
        Err(e) => serde_json::to_value(MissResponse {
            error: e.to_string(),
        }),
    }
}

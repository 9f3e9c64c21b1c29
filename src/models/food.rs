//! Food record model
//!
//! Nutritional facts for a single food, keyed by its lowercase name.

use serde::{Deserialize, Serialize};

/// Nutritional facts for one food item
///
/// Macronutrients are kept as display strings with their unit suffix
/// (e.g. `"0.5g"`) so tool output matches the reference data verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub food: String,
    pub calories: i64,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl FoodRecord {
    pub fn new(
        food: impl Into<String>,
        calories: i64,
        protein: impl Into<String>,
        carbs: impl Into<String>,
        fat: impl Into<String>,
    ) -> Self {
        Self {
            food: food.into(),
            calories,
            protein: protein.into(),
            carbs: carbs.into(),
            fat: fat.into(),
        }
    }

    /// Table key for this record
    pub fn key(&self) -> String {
        self.food.to_lowercase()
    }

    /// Same record with its name lowercased
    pub fn normalized(mut self) -> Self {
        self.food = self.key();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase() {
        let record = FoodRecord::new("Banana", 105, "1.3g", "27g", "0.4g");
        assert_eq!(record.key(), "banana");
    }

    #[test]
    fn test_normalized_lowercases_name_only() {
        let record = FoodRecord::new("Oatmeal", 150, "5g", "27g", "3g").normalized();
        assert_eq!(record, FoodRecord::new("oatmeal", 150, "5g", "27g", "3g"));
    }

    #[test]
    fn test_serialized_field_names() {
        let record = FoodRecord::new("apple", 95, "0.5g", "25g", "0.3g");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "food": "apple",
                "calories": 95,
                "protein": "0.5g",
                "carbs": "25g",
                "fat": "0.3g",
            })
        );
    }
}

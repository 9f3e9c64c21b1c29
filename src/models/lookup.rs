//! Lookup outcome types

use thiserror::Error;

/// A lookup miss
///
/// The display text is the message returned to the caller under the `error` key.
/// Variants carry the caller's input exactly as given, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Nutritional info not found for {0}")]
    FoodNotFound(String),

    #[error("Exercise data not found for {0}")]
    ExerciseNotFound(String),
}

/// Result of a fact lookup
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_original_input() {
        assert_eq!(
            LookupError::FoodNotFound("Mango".into()).to_string(),
            "Nutritional info not found for Mango"
        );
        assert_eq!(
            LookupError::ExerciseNotFound("YOGA".into()).to_string(),
            "Exercise data not found for YOGA"
        );
    }
}

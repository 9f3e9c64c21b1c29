//! Fact provider capability
//!
//! Abstracts where reference records come from so the lookup contract does not
//! depend on a particular data source.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ExerciseRecord, FoodRecord};

/// Reference data loading errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read reference data {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {table} key: {key}")]
    DuplicateKey { table: &'static str, key: String },
}

/// Result type for reference data operations
pub type DataResult<T> = Result<T, DataError>;

/// Read-only source of reference records
///
/// Keys passed to `food` and `exercise` are already normalized (lowercase).
pub trait FactProvider: Send + Sync {
    fn food(&self, key: &str) -> Option<FoodRecord>;

    fn exercise(&self, key: &str) -> Option<ExerciseRecord>;

    fn food_count(&self) -> usize;

    fn exercise_count(&self) -> usize;

    /// Human-readable description of where the records come from
    fn source(&self) -> String;
}

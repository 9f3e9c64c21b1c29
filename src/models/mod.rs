//! Data models
//!
//! Immutable records served by the lookup tools.

mod exercise;
mod food;
mod lookup;

pub use exercise::{ExerciseCategory, ExerciseRecord};
pub use food::FoodRecord;
pub use lookup::{LookupError, LookupResult};

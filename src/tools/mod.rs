//! Advisor Tools module
//!
//! Tool implementations for the Fitness Diet Advisor.

pub mod lookup;
pub mod status;

pub use lookup::{lookup_exercise, lookup_nutrition, to_tool_output, FactLookup};

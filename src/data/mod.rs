//! Reference data module
//!
//! Provides the read-only tables behind the lookup tools.

pub mod provider;
pub mod reference;
pub mod tables;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use provider::{DataError, DataResult, FactProvider};
pub use reference::ReferenceTables;
pub use tables::Tables;

/// Environment variable naming an optional JSON reference data file
pub const DATA_PATH_ENV: &str = "ADVISOR_DATA_PATH";

/// Get the reference data path from the environment, if set
pub fn get_data_path() -> Option<PathBuf> {
    std::env::var_os(DATA_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build a provider from an optional data file, falling back to the built-in tables
pub fn load_provider(path: Option<&Path>) -> DataResult<Arc<dyn FactProvider>> {
    match path {
        Some(path) => Ok(Arc::new(Tables::load(path)?)),
        None => Ok(Arc::new(ReferenceTables)),
    }
}

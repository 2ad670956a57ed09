//! Dataset loading port.

use std::path::PathBuf;

use crate::application::store::RecordStore;
use crate::error::Result;

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub orders: PathBuf,
    pub reviews: PathBuf,
    pub items: PathBuf,
}

/// Source of the three base tables.
///
/// Implementations read and normalize the raw tables once; the returned
/// store is never touched again by the source.
pub trait DatasetSource {
    /// Load every table. Any missing or unreadable table is fatal.
    fn load(&self) -> Result<RecordStore>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

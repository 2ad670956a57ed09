//! Input file locations.

use std::path::PathBuf;

use serde::Deserialize;

use crate::port::outbound::dataset::DatasetPaths;

/// Where the three base tables live.
///
/// File names are resolved against `dir` unless they are absolute.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub orders: PathBuf,
    pub reviews: PathBuf,
    pub items: PathBuf,
}

impl DataConfig {
    /// Resolved paths for the CSV source.
    #[must_use]
    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths {
            orders: self.dir.join(&self.orders),
            reviews: self.dir.join(&self.reviews),
            items: self.dir.join(&self.items),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            orders: PathBuf::from("all_data.csv"),
            reviews: PathBuf::from("orders_review.csv"),
            items: PathBuf::from("orders_item.csv"),
        }
    }
}

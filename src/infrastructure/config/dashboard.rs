//! Dashboard presentation settings.

use serde::Deserialize;

use crate::application::views::{ViewOptions, DEFAULT_HISTOGRAM_BINS};

/// Largest accepted histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 500;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Bins in the days-to-review histogram.
    pub histogram_bins: usize,
}

impl DashboardConfig {
    #[must_use]
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            histogram_bins: self.histogram_bins,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

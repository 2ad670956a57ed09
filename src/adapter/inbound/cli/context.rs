//! Shared setup for command handlers: configuration, logging and the
//! record store.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapter::outbound::csv::CsvDatasetSource;
use crate::application::store::RecordStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::dataset::DatasetSource;

use super::command::DEFAULT_CONFIG;
use super::output;

/// Resolve the config path a handler should report.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), Path::to_path_buf)
}

/// Load configuration without touching logging.
///
/// An explicit path must exist; the implicit default falls back to built-in
/// defaults when absent.
pub fn read_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG),
    }
}

/// Load configuration and install the tracing subscriber.
///
/// `-v` raises the log level to `debug`, `-vv` to `trace`.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = read_config(explicit)?;
    match output::verbosity() {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();
    Ok(config)
}

/// Load the record store from the configured CSV files.
pub fn load_store(config: &Config) -> Result<RecordStore> {
    let source = CsvDatasetSource::new(config.data.paths());
    info!(source = %source.describe(), "loading dataset");
    source.load()
}

//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; every section has
//! defaults, and `ORDERSCOPE_DATA_DIR` overrides the data directory.
//!
//! # Example
//!
//! ```no_run
//! use orderscope::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("orderscope.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::dashboard::{DashboardConfig, MAX_HISTOGRAM_BINS};
use super::data::DataConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `data.dir`.
pub const DATA_DIR_ENV: &str = "ORDERSCOPE_DATA_DIR";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Input file locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Dashboard presentation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        let config = config.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Used for the implicit default config path; an explicitly requested
    /// file should go through [`Config::load`] so that absence is reported.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let config =
            Self::default().with_data_dir_override(std::env::var(DATA_DIR_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace `data.dir` when an override is given and non-empty.
    #[must_use]
    pub fn with_data_dir_override(mut self, dir: Option<String>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.trim().is_empty()) {
            self.data.dir = PathBuf::from(dir);
        }
        self
    }

    /// Check that all values are within acceptable ranges.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("data.orders", &self.data.orders),
            ("data.reviews", &self.data.reviews),
            ("data.items", &self.data.items),
        ];
        for (field, file) in files {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        let bins = self.dashboard.histogram_bins;
        if bins == 0 || bins > MAX_HISTOGRAM_BINS {
            return Err(ConfigError::InvalidValue {
                field: "histogram_bins",
                reason: format!("must be between 1 and {MAX_HISTOGRAM_BINS}, got {bins}"),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[data]
dir = "/srv/olist"

[dashboard]
histogram_bins = 12
"#,
        )
        .unwrap();
        assert_eq!(config.data.dir, PathBuf::from("/srv/olist"));
        assert_eq!(config.data.orders, PathBuf::from("all_data.csv"));
        assert_eq!(config.dashboard.histogram_bins, 12);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let mut config = Config::default();
        config.dashboard.histogram_bins = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "histogram_bins",
                ..
            }))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".into();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_file_name() {
        let mut config = Config::default();
        config.data.items = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::MissingField {
                field: "data.items"
            }))
        ));
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config::default().with_data_dir_override(Some("/tmp/olist".into()));
        assert_eq!(config.data.dir, PathBuf::from("/tmp/olist"));

        let untouched = Config::default().with_data_dir_override(Some("  ".into()));
        assert_eq!(untouched.data.dir, PathBuf::from("data"));
    }
}

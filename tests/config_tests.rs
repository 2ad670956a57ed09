use std::fs;
use std::path::PathBuf;

use orderscope::error::{ConfigError, Error};
use orderscope::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("orderscope.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_rejects_zero_histogram_bins() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[dashboard]\nhistogram_bins = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "histogram_bins",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid histogram_bins error, got {err}"),
        Ok(_) => panic!("Expected config to be rejected"),
    }
}

#[test]
fn config_rejects_unknown_log_format() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[logging]\nformat = \"xml\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        }))
    ));
}

#[test]
fn config_rejects_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[dashboard\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn default_path_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.dashboard.histogram_bins, 30);
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(
        &dir,
        "[data]\norders = \"orders.csv\"\n\n[dashboard]\nhistogram_bins = 12\n",
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.data.orders, PathBuf::from("orders.csv"));
    assert_eq!(config.data.reviews, PathBuf::from("orders_review.csv"));
    assert_eq!(config.dashboard.view_options().histogram_bins, 12);
}

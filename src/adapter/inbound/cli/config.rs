//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{context, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../orderscope.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} to point at your CSV files", path.display()));
    output::note(&format!(
        "2. Run: orderscope config validate -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: orderscope dashboard -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(explicit: Option<&Path>) -> Result<()> {
    let config = context::read_config(explicit)?;
    let paths = config.data.paths();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": context::config_path(explicit).display().to_string(),
            "data": {
                "orders": paths.orders.display().to_string(),
                "reviews": paths.reviews.display().to_string(),
                "items": paths.items.display().to_string(),
            },
            "dashboard": {
                "histogram_bins": config.dashboard.histogram_bins,
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", context::config_path(explicit).display());

    output::section("Data");
    output::field("Orders", paths.orders.display());
    output::field("Reviews", paths.reviews.display());
    output::field("Items", paths.items.display());

    output::section("Dashboard");
    output::field("Histogram bins", config.dashboard.histogram_bins);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(explicit: Option<&Path>) -> Result<()> {
    let path = context::config_path(explicit);
    let config = context::read_config(explicit)?;

    output::section("Config Validation");
    output::success(&format!("{} is valid", path.display()));

    for (label, file) in [
        ("orders", config.data.paths().orders),
        ("reviews", config.data.paths().reviews),
        ("items", config.data.paths().items),
    ] {
        if !file.exists() {
            output::warning(&format!("{label} file not found: {}", file.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    #[test]
    fn test_template_parses_and_validates() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.dashboard.histogram_bins, 30);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("orderscope.toml");
        fs::write(&path, "# existing").unwrap();

        assert!(execute_init(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}

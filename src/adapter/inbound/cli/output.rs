//! Terminal output formatting.
//!
//! Every handler prints through this module so that JSON mode (one object per
//! line, for scripting) and quiet mode behave the same across commands.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json {
        emit_json_line(
            "header",
            json!({
                "app": "orderscope",
                "version": version,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{} {}", "orderscope".bold(), version.dimmed());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<16} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.bold());
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.dimmed())
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", message.dimmed());
}

/// Print a hint with a "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly (for commands that produce one document).
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Horizontal bar scaled so that `max` fills `width` cells.
#[must_use]
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if !value.is_finite() || !max.is_finite() || value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_new() {
        let config = OutputConfig::new(true, false, 2);
        assert!(config.json);
        assert!(!config.quiet);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_regular_output_suppressed_only_when_quiet_without_json() {
        assert!(regular_output_suppressed(OutputConfig::new(false, true, 0)));
        assert!(!regular_output_suppressed(OutputConfig::new(true, true, 0)));
        assert!(!regular_output_suppressed(OutputConfig::new(false, false, 0)));
    }

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(10.0, 10.0, 20).chars().count(), 20);
        assert_eq!(bar(5.0, 10.0, 20).chars().count(), 10);
    }

    #[test]
    fn test_bar_keeps_small_values_visible() {
        assert_eq!(bar(1.0, 1000.0, 20).chars().count(), 1);
    }

    #[test]
    fn test_bar_empty_for_zero() {
        assert!(bar(0.0, 10.0, 20).is_empty());
        assert!(bar(3.0, 0.0, 20).is_empty());
    }
}

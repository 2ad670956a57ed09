//! Command-line interface definitions.
//!
//! Defines the CLI structure for orderscope using `clap`. The date-range
//! flags on `dashboard` play the part of a date picker: each end defaults to
//! the matching observed purchase-date bound.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Config file read when `--config` is not given; absence means defaults.
pub const DEFAULT_CONFIG: &str = "orderscope.toml";

/// Explore a static e-commerce order dataset by purchase date
#[derive(Parser, Debug)]
#[command(name = "orderscope")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the dashboard views for a purchase-date range
    Dashboard(DashboardArgs),

    /// Show an overview of the loaded dataset
    Summary(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// The four dashboard tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    /// Days between order and review
    ReviewTiming,
    /// On-time delivery against review scores
    Delivery,
    /// Orders and revenue per month
    Monthly,
    /// Order volume by the freight-based discount proxy
    Discount,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::ReviewTiming, Tab::Delivery, Tab::Monthly, Tab::Discount];

    /// Stable key used in JSON output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Tab::ReviewTiming => "review_timing",
            Tab::Delivery => "delivery",
            Tab::Monthly => "monthly",
            Tab::Discount => "discount",
        }
    }
}

/// Subcommands for `orderscope config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from the template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: orderscope.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Path to the configuration file [default: orderscope.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First purchase date to include (YYYY-MM-DD) [default: earliest]
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last purchase date to include (YYYY-MM-DD) [default: latest]
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Render a single tab instead of all four
    #[arg(long, value_enum)]
    pub tab: Option<Tab>,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

//! CLI module graph.

pub mod command;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod output;
pub mod summary;

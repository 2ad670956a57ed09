//! Infrastructure: configuration and logging setup.

pub mod config;

//! Handler for the `dashboard` command.

mod format;
mod json;

pub mod handler;

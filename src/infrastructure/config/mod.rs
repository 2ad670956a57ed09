//! Infrastructure configuration modules.

pub mod dashboard;
pub mod data;
pub mod logging;
pub mod settings;

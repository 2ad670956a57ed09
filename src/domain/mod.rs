//! Dataset-agnostic types: table rows, date ranges, derived metrics and the
//! chart shapes handed to renderers.

pub mod error;
pub mod metric;
pub mod order;
pub mod range;
pub mod view;

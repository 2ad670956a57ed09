//! Orderscope - date-filtered exploration of a static e-commerce dataset.
//!
//! The crate loads three CSV exports (orders, orders joined with reviews,
//! orders joined with items) once, then recomputes four dashboard views for
//! every purchase-date range the user selects.
//!
//! # Architecture
//!
//! - **`domain`** - Plain data: orders, reviews, date ranges, derived metrics
//!   and the view shapes handed to a renderer
//! - **`application`** - Time normalization, the record store, the range
//!   filter, metric derivation and the `compute_views` pipeline
//! - **`port`** - The `DatasetSource` trait the store is loaded through
//! - **`adapter`** - CSV loading (outbound) and the command-line interface
//!   (inbound)
//! - **`infrastructure`** - TOML configuration and logging setup
//!
//! # Modules
//!
//! - [`application`] - Record store and view pipeline
//! - [`domain`] - Typed records and view data
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

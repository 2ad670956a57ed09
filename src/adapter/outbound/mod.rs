//! Outbound adapters (driven side).

pub mod csv;

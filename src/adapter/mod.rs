//! Adapters around the core pipeline: the CLI that drives it and the CSV
//! files it reads.

pub mod inbound;
pub mod outbound;

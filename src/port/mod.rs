//! Port traits separating the core pipeline from its adapters.

pub mod outbound;

//! Core pipeline: normalize once at load, then filter, derive and shape on
//! every range change.

pub mod filter;
pub mod metric;
pub mod normalize;
pub mod shape;
pub mod store;
pub mod views;

pub use store::RecordStore;
pub use views::{compute_views, ViewOptions};

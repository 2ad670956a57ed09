//! CSV file adapter for the dataset port.

mod row;
mod source;

pub use source::CsvDatasetSource;

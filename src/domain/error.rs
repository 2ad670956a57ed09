//! Domain validation errors.
//!
//! Returned when a value handed to the core violates an invariant, for
//! example a date range whose start falls after its end.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use orderscope::domain::error::DomainError;
//! use orderscope::domain::range::DateRange;
//!
//! let start = NaiveDate::from_ymd_opt(2018, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
//!
//! assert!(matches!(
//!     DateRange::try_new(start, end),
//!     Err(DomainError::InvertedRange { .. })
//! ));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The range start lies after its end.
    #[error("range start {start} is after range end {end}")]
    InvertedRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// The range reaches outside the purchase dates observed in the data.
    #[error("range {start}..={end} is outside the observed purchase dates {min}..={max}")]
    RangeOutOfBounds {
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// No order carries a usable purchase timestamp, so no bounds exist.
    #[error("no order has a parsable purchase timestamp")]
    EmptyDataset,
}

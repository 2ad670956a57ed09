//! Inclusive purchase-date windows.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::error::DomainError;

/// An inclusive calendar-date window over order purchase times.
///
/// Both ends are whole days: a range ending on 2018-01-31 keeps orders placed
/// at any time on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    ///
    /// `start == end` is a valid single-day range.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a timestamp falls on a day inside the range.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let day = timestamp.date();
        self.start <= day && day <= self.end
    }

    /// Whether `other` lies entirely inside this range.
    #[must_use]
    pub fn encloses(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Earliest and latest purchase dates observed in the order table.
///
/// This is what a date picker offers as its selectable window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Compute bounds from purchase timestamps, skipping absent ones.
    ///
    /// Returns `None` when no timestamp is present.
    pub fn observe<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<NaiveDateTime>>,
    {
        timestamps
            .into_iter()
            .flatten()
            .map(|ts| ts.date())
            .fold(None, |acc, day| match acc {
                None => Some(Self { min: day, max: day }),
                Some(bounds) => Some(Self {
                    min: bounds.min.min(day),
                    max: bounds.max.max(day),
                }),
            })
    }

    /// The range covering every observed purchase date.
    #[must_use]
    pub fn full_range(&self) -> DateRange {
        DateRange {
            start: self.min,
            end: self.max,
        }
    }

    /// Build a range from optional picker values, defaulting each missing end
    /// to the matching bound and rejecting ranges that leave the bounds.
    pub fn select(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<DateRange, DomainError> {
        let range = DateRange::try_new(start.unwrap_or(self.min), end.unwrap_or(self.max))?;
        if !self.full_range().encloses(&range) {
            return Err(DomainError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                min: self.min,
                max: self.max,
            });
        }
        Ok(range)
    }
}

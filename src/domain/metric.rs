//! Derived metric types.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Per-order values recomputed on every range change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    pub order_id: String,
    /// Whole days from purchase to review; negative when the review predates
    /// the recorded purchase.
    pub days_to_review: Option<i64>,
    /// Below-average freight, against the base-table mean.
    pub discount: Option<bool>,
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// The month a timestamp falls in.
    #[must_use]
    pub fn of(timestamp: NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Long label such as `January 2018`.
    #[must_use]
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Orders and revenue for one observed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub month: MonthKey,
    /// Distinct order ids purchased in the month.
    pub order_count: usize,
    /// Sum of present `total_price` values.
    pub revenue: Decimal,
}

/// Row counts split by the discount proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscountVolume {
    pub discounted: usize,
    pub regular: usize,
}

/// Reviews split by delivery punctuality; unknown deliveries are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryShare {
    pub on_time: usize,
    pub late: usize,
}

impl DeliveryShare {
    #[must_use]
    pub fn total(&self) -> usize {
        self.on_time + self.late
    }

    /// Percentage delivered on time, `None` when nothing is known.
    #[must_use]
    pub fn on_time_pct(&self) -> Option<f64> {
        percentage(self.on_time, self.total())
    }

    /// Percentage delivered late, `None` when nothing is known.
    #[must_use]
    pub fn late_pct(&self) -> Option<f64> {
        percentage(self.late, self.total())
    }
}

fn percentage(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

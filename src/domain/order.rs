//! Base table rows.
//!
//! Every temporal or numeric field is an `Option`: `None` marks a value that
//! was missing or failed to parse, and is never confused with zero or the
//! epoch.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the order table (orders joined with their review date).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: String,
    pub purchased_at: Option<NaiveDateTime>,
    pub review_created_at: Option<NaiveDateTime>,
    pub freight_value: Option<Decimal>,
    pub total_price: Option<Decimal>,
}

/// One row of the order/review table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub order_id: String,
    pub review_score: Option<u8>,
    pub review_created_at: Option<NaiveDateTime>,
    pub delivered_at: Option<NaiveDateTime>,
    pub estimated_delivery_at: Option<NaiveDateTime>,
}

impl Review {
    /// Whether the order arrived no later than estimated.
    ///
    /// `None` when either delivery date is absent: an unknown delivery is
    /// neither on time nor late.
    #[must_use]
    pub fn delivery_on_time(&self) -> Option<bool> {
        match (self.delivered_at, self.estimated_delivery_at) {
            (Some(delivered), Some(estimated)) => Some(delivered <= estimated),
            _ => None,
        }
    }
}

/// One row of the order/item table, carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub order_id: String,
    /// Remaining columns keyed by header name.
    pub attributes: BTreeMap<String, String>,
}

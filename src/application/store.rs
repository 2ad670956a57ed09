//! The immutable record store.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::order::{Order, OrderItem, Review};
use crate::domain::range::DateBounds;

use super::metric::freight_mean;

/// The three base tables, loaded once and never mutated afterwards.
///
/// Quantities that depend only on the full base tables (the purchase-date
/// bounds and the freight mean used by the discount proxy) are fixed at
/// construction so that no date range can shift them.
#[derive(Debug, Clone)]
pub struct RecordStore {
    orders: Vec<Order>,
    reviews: Vec<Review>,
    items: Vec<OrderItem>,
    bounds: Option<DateBounds>,
    freight_threshold: Option<Decimal>,
}

impl RecordStore {
    #[must_use]
    pub fn new(orders: Vec<Order>, reviews: Vec<Review>, items: Vec<OrderItem>) -> Self {
        let bounds = DateBounds::observe(orders.iter().map(|o| o.purchased_at));
        let freight_threshold = freight_mean(&orders);
        Self {
            orders,
            reviews,
            items,
            bounds,
            freight_threshold,
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Purchase-date bounds, `None` if no order has a purchase timestamp.
    #[must_use]
    pub fn bounds(&self) -> Option<DateBounds> {
        self.bounds
    }

    /// Mean freight value over every order in the base table.
    #[must_use]
    pub fn freight_threshold(&self) -> Option<Decimal> {
        self.freight_threshold
    }

    /// Number of distinct orders referenced by the item table.
    #[must_use]
    pub fn orders_with_items(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.order_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Orders whose purchase timestamp is absent.
    #[must_use]
    pub fn orders_missing_purchase_time(&self) -> usize {
        self.orders.iter().filter(|o| o.purchased_at.is_none()).count()
    }
}

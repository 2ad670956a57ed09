//! Derived metrics over the base and filtered tables.
//!
//! Each computation skips rows that lack a field it needs and keeps going;
//! a missing value never aborts a whole metric.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::metric::{
    DeliveryShare, DerivedRow, DiscountVolume, MonthKey, MonthlyAggregate,
};
use crate::domain::order::{Order, Review};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from purchase to review, floored.
///
/// A review dated before the purchase yields a negative count; it is kept so
/// that charts can surface the anomaly.
#[must_use]
pub fn days_between(purchased_at: NaiveDateTime, reviewed_at: NaiveDateTime) -> i64 {
    (reviewed_at - purchased_at)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Days-to-review for one order, absent if either timestamp is absent.
#[must_use]
pub fn days_to_review(order: &Order) -> Option<i64> {
    Some(days_between(order.purchased_at?, order.review_created_at?))
}

/// Mean freight value over `orders`, skipping absent values.
#[must_use]
pub fn freight_mean(orders: &[Order]) -> Option<Decimal> {
    let (sum, count) = orders
        .iter()
        .filter_map(|o| o.freight_value)
        .fold((Decimal::ZERO, 0u64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / Decimal::from(count))
    }
}

/// Discount proxy: freight strictly below `threshold`.
#[must_use]
pub fn discount_flag(order: &Order, threshold: Option<Decimal>) -> Option<bool> {
    Some(order.freight_value? < threshold?)
}

/// Per-order derived values for a filtered table.
#[must_use]
pub fn derive_rows(orders: &[Order], threshold: Option<Decimal>) -> Vec<DerivedRow> {
    orders
        .iter()
        .map(|order| DerivedRow {
            order_id: order.order_id.clone(),
            days_to_review: days_to_review(order),
            discount: discount_flag(order, threshold),
        })
        .collect()
}

/// Distinct orders and revenue per observed purchase month, oldest first.
///
/// Months without orders are omitted rather than zero-filled.
#[must_use]
pub fn monthly_aggregates(orders: &[Order]) -> Vec<MonthlyAggregate> {
    let mut months: BTreeMap<MonthKey, (HashSet<&str>, Decimal)> = BTreeMap::new();

    for order in orders {
        let Some(purchased_at) = order.purchased_at else {
            continue;
        };
        let entry = months
            .entry(MonthKey::of(purchased_at))
            .or_insert_with(|| (HashSet::new(), Decimal::ZERO));
        entry.0.insert(order.order_id.as_str());
        if let Some(price) = order.total_price {
            entry.1 += price;
        }
    }

    months
        .into_iter()
        .map(|(month, (ids, revenue))| MonthlyAggregate {
            month,
            order_count: ids.len(),
            revenue,
        })
        .collect()
}

/// Count derived rows by discount flag; rows without a flag are skipped.
#[must_use]
pub fn discount_volume(rows: &[DerivedRow]) -> DiscountVolume {
    rows.iter()
        .fold(DiscountVolume::default(), |mut volume, row| {
            match row.discount {
                Some(true) => volume.discounted += 1,
                Some(false) => volume.regular += 1,
                None => {}
            }
            volume
        })
}

/// Count reviews by delivery punctuality; unknown deliveries are skipped.
#[must_use]
pub fn delivery_share(reviews: &[Review]) -> DeliveryShare {
    reviews
        .iter()
        .fold(DeliveryShare::default(), |mut share, review| {
            match review.delivery_on_time() {
                Some(true) => share.on_time += 1,
                Some(false) => share.late += 1,
                None => {}
            }
            share
        })
}

/// Review scores grouped as `(late, on_time)`.
///
/// Reviews missing a score or a delivery flag are skipped.
#[must_use]
pub fn scores_by_delivery(reviews: &[Review]) -> (Vec<u8>, Vec<u8>) {
    let mut late = Vec::new();
    let mut on_time = Vec::new();
    for review in reviews {
        match (review.delivery_on_time(), review.review_score) {
            (Some(true), Some(score)) => on_time.push(score),
            (Some(false), Some(score)) => late.push(score),
            _ => {}
        }
    }
    (late, on_time)
}

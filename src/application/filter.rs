//! Purchase-date range filtering.

use crate::domain::order::Order;
use crate::domain::range::DateRange;

/// Orders purchased inside `range`, in their original order.
///
/// Orders with an absent purchase timestamp never match. The result is a new
/// table; the input is left untouched, so filtering a filtered table again
/// with the same or a wider range returns it unchanged.
#[must_use]
pub fn filter_orders(orders: &[Order], range: &DateRange) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.purchased_at.is_some_and(|ts| range.contains(ts)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, m, d).unwrap()
    }

    fn at(m: u32, d: u32, h: u32) -> Option<NaiveDateTime> {
        day(m, d).and_hms_opt(h, 30, 0)
    }

    fn order(id: &str, purchased_at: Option<NaiveDateTime>) -> Order {
        Order {
            order_id: id.to_string(),
            purchased_at,
            review_created_at: None,
            freight_value: None,
            total_price: None,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("a", at(1, 2, 9)),
            order("b", None),
            order("c", at(1, 15, 23)),
            order("d", at(2, 1, 0)),
            order("e", at(3, 10, 12)),
        ]
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.order_id.as_str()).collect()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::try_new(start, end).unwrap()
    }

    #[test]
    fn test_filter_keeps_inclusive_bounds_in_order() {
        let filtered = filter_orders(&sample(), &range(day(1, 15), day(2, 1)));
        assert_eq!(ids(&filtered), vec!["c", "d"]);
    }

    #[test]
    fn test_full_bounds_return_every_timestamped_row() {
        let filtered = filter_orders(&sample(), &range(day(1, 2), day(3, 10)));
        assert_eq!(ids(&filtered), vec!["a", "c", "d", "e"]);
    }

    #[test]
    fn test_single_day_range() {
        let filtered = filter_orders(&sample(), &range(day(1, 15), day(1, 15)));
        assert_eq!(ids(&filtered), vec!["c"]);
    }

    #[test]
    fn test_empty_match_is_not_an_error() {
        let filtered = filter_orders(&sample(), &range(day(6, 1), day(6, 30)));
        assert!(filtered.is_empty());
        assert!(filter_orders(&[], &range(day(1, 1), day(12, 31))).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let r = range(day(1, 10), day(2, 20));
        let once = filter_orders(&sample(), &r);
        let twice = filter_orders(&once, &r);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_refiltering_with_wider_range_is_noop() {
        let narrow = filter_orders(&sample(), &range(day(1, 10), day(2, 20)));
        let widened = filter_orders(&narrow, &range(day(1, 1), day(12, 31)));
        assert_eq!(narrow, widened);
    }

    #[test]
    fn test_nested_range_yields_subsequence() {
        let orders = sample();
        let inner = filter_orders(&orders, &range(day(1, 10), day(2, 1)));
        let outer = filter_orders(&orders, &range(day(1, 1), day(3, 1)));

        let mut cursor = outer.iter();
        for row in &inner {
            assert!(cursor.any(|candidate| candidate == row));
        }
    }
}

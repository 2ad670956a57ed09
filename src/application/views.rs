//! The recompute pass run on every range change.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::metric::{DerivedRow, MonthlyAggregate};
use crate::domain::order::Order;
use crate::domain::range::DateRange;
use crate::domain::view::{
    Categorical, DeliveryView, DiscountView, MonthlyView, PairedSeries, ReviewTimingView, Series,
    ViewData,
};

use super::filter::filter_orders;
use super::metric::{
    delivery_share, derive_rows, discount_volume, monthly_aggregates, scores_by_delivery,
};
use super::shape::{box_summary, histogram};
use super::store::RecordStore;

/// Default number of bins in the days-to-review histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Presentation knobs that affect shaping, not filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub histogram_bins: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

/// Filter the store to `range` and shape every dashboard view.
///
/// Pure with respect to the store: it is only borrowed, and the returned
/// value owns everything it holds. A range that matches nothing produces
/// empty range-dependent views.
///
/// The delivery and discount tabs are drawn from the whole base tables and
/// come out the same for every range.
#[must_use]
pub fn compute_views(store: &RecordStore, range: &DateRange, options: &ViewOptions) -> ViewData {
    let filtered = filter_orders(store.orders(), range);
    let threshold = store.freight_threshold();
    let derived = derive_rows(&filtered, threshold);

    debug!(
        range = %range,
        orders = filtered.len(),
        "recomputed views"
    );

    ViewData {
        range: *range,
        order_count: filtered.len(),
        review_timing: review_timing_view(&filtered, &derived, options),
        delivery: delivery_view(store),
        monthly: monthly_view(monthly_aggregates(&filtered)),
        discount: discount_view(&derive_rows(store.orders(), threshold), threshold),
    }
}

fn review_timing_view(
    filtered: &[Order],
    derived: &[DerivedRow],
    options: &ViewOptions,
) -> ReviewTimingView {
    let days: Vec<i64> = derived.iter().filter_map(|row| row.days_to_review).collect();
    let as_f64: Vec<f64> = days.iter().map(|&d| d as f64).collect();

    let points = filtered
        .iter()
        .filter_map(|o| Some((o.purchased_at?, o.review_created_at?)))
        .collect();

    ReviewTimingView {
        histogram: histogram(&as_f64, options.histogram_bins),
        summary: box_summary(&as_f64),
        days_to_review: Series {
            label: "Days between order and review",
            values: days,
        },
        order_vs_review: PairedSeries {
            x_label: "Order time",
            y_label: "Review time",
            points,
        },
    }
}

fn delivery_view(store: &RecordStore) -> DeliveryView {
    let counts = delivery_share(store.reviews());
    let (late, on_time) = scores_by_delivery(store.reviews());
    let to_f64 = |scores: Vec<u8>| scores.into_iter().map(f64::from).collect::<Vec<_>>();

    let share = match (counts.late_pct(), counts.on_time_pct()) {
        (Some(late_pct), Some(on_time_pct)) => vec![
            ("Late".to_string(), late_pct),
            ("On-Time".to_string(), on_time_pct),
        ],
        _ => Vec::new(),
    };

    DeliveryView {
        counts,
        share: Categorical {
            label: "Percentage",
            entries: share,
        },
        late_scores: box_summary(&to_f64(late)),
        on_time_scores: box_summary(&to_f64(on_time)),
    }
}

fn monthly_view(months: Vec<MonthlyAggregate>) -> MonthlyView {
    let order_counts = months
        .iter()
        .map(|m| (m.month.label(), m.order_count))
        .collect();
    let revenue = months
        .iter()
        .map(|m| (m.month.label(), m.revenue))
        .collect::<Vec<(String, Decimal)>>();

    MonthlyView {
        months,
        order_counts: Categorical {
            label: "Number of orders",
            entries: order_counts,
        },
        revenue: Categorical {
            label: "Revenue",
            entries: revenue,
        },
    }
}

fn discount_view(all_rows: &[DerivedRow], threshold: Option<Decimal>) -> DiscountView {
    let volume = discount_volume(all_rows);
    let entries = if volume.discounted + volume.regular == 0 {
        Vec::new()
    } else {
        vec![
            ("Regular".to_string(), volume.regular),
            ("Discounted".to_string(), volume.discounted),
        ]
    };

    DiscountView {
        threshold,
        volume,
        chart: Categorical {
            label: "Number of orders",
            entries,
        },
    }
}

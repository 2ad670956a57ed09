//! Chart-ready shapes handed to a renderer.
//!
//! A renderer only ever receives one of three forms: a single series, two
//! paired series, or a categorical-to-value mapping. Histograms and box
//! summaries are pre-binned forms of a single series.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::metric::{DeliveryShare, DiscountVolume, MonthlyAggregate};
use super::range::DateRange;

/// A single numeric or temporal series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<T> {
    pub label: &'static str,
    pub values: Vec<T>,
}

/// Two series of equal length, plotted against each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedSeries<X, Y> {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<(X, Y)>,
}

/// Category names mapped to values, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Categorical<V> {
    pub label: &'static str,
    pub entries: Vec<(String, V)>,
}

/// One equal-width histogram bin, `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// Five-number summary used by box plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Days between purchase and review for the selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewTimingView {
    pub days_to_review: Series<i64>,
    pub histogram: Histogram,
    pub summary: Option<BoxSummary>,
    pub order_vs_review: PairedSeries<NaiveDateTime, NaiveDateTime>,
}

/// Delivery punctuality against review scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryView {
    pub counts: DeliveryShare,
    /// Late and on-time shares in percent.
    pub share: Categorical<f64>,
    pub late_scores: Option<BoxSummary>,
    pub on_time_scores: Option<BoxSummary>,
}

/// Orders and revenue per observed month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyView {
    pub months: Vec<MonthlyAggregate>,
    pub order_counts: Categorical<usize>,
    pub revenue: Categorical<Decimal>,
}

/// Order volume split by the freight-based discount proxy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountView {
    /// Base-table freight mean used as the flag threshold.
    pub threshold: Option<Decimal>,
    pub volume: DiscountVolume,
    pub chart: Categorical<usize>,
}

/// Everything the four dashboard tabs draw for one range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewData {
    pub range: DateRange,
    /// Orders left after range filtering.
    pub order_count: usize,
    pub review_timing: ReviewTimingView,
    pub delivery: DeliveryView,
    pub monthly: MonthlyView,
    pub discount: DiscountView,
}

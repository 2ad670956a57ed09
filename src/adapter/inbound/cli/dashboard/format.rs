//! Text rendering of the dashboard tabs.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::view::{
    BoxSummary, DeliveryView, DiscountView, MonthlyView, ReviewTimingView, ViewData,
};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "")]
    trend: String,
}

fn format_box(summary: &BoxSummary) -> String {
    format!(
        "n={} min={:.0} q1={:.1} median={:.1} q3={:.1} max={:.0}",
        summary.count, summary.min, summary.q1, summary.median, summary.q3, summary.max
    )
}

/// One table row per month, drawn from the order-count and revenue charts.
fn month_rows(view: &MonthlyView) -> Vec<MonthRow> {
    let max = view
        .order_counts
        .entries
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0) as f64;
    view.order_counts
        .entries
        .iter()
        .zip(&view.revenue.entries)
        .map(|((month, orders), (_, revenue))| MonthRow {
            month: month.clone(),
            orders: *orders,
            revenue: format!("{revenue:.2}"),
            trend: output::bar(*orders as f64, max, BAR_WIDTH),
        })
        .collect()
}

/// Print the range banner shared by every tab.
pub fn print_header(views: &ViewData) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Purchases from {}", views.range));
    output::field("Orders", views.order_count);
}

/// Print the days-between-order-and-review tab.
pub fn print_review_timing(view: &ReviewTimingView) {
    output::section(view.days_to_review.label);
    let Some(summary) = view.summary else {
        output::note("No reviewed orders in this range.");
        return;
    };

    output::field("Reviewed", summary.count);
    output::field("Median", format!("{:.1} days", summary.median));
    output::field("Q1 / Q3", format!("{:.1} / {:.1}", summary.q1, summary.q3));
    output::field("Min / Max", format!("{:.0} / {:.0}", summary.min, summary.max));

    let early = view
        .days_to_review
        .values
        .iter()
        .filter(|&&days| days < 0)
        .count();
    if early > 0 {
        output::warning(&format!("{early} reviews are dated before their purchase"));
    }

    let max = view.histogram.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let histogram: Vec<String> = view
        .histogram
        .bins
        .iter()
        .map(|bin| {
            format!(
                "{:>8.1} .. {:>8.1} │ {:<width$} {}",
                bin.lower,
                bin.upper,
                output::bar(bin.count as f64, max, BAR_WIDTH),
                bin.count,
                width = BAR_WIDTH
            )
        })
        .collect();
    output::section("Distribution");
    output::lines(&histogram.join("\n"));

    output::section(&format!(
        "{} vs {}",
        view.order_vs_review.x_label, view.order_vs_review.y_label
    ));
    let points = &view.order_vs_review.points;
    output::field("Points", points.len());
    if let (Some(first), Some(last)) = (points.iter().min(), points.iter().max()) {
        output::field("Earliest", format!("{} → {}", first.0, first.1));
        output::field("Latest", format!("{} → {}", last.0, last.1));
    }
}

/// Print the delivery punctuality tab.
pub fn print_delivery(view: &DeliveryView) {
    output::section("On-time vs Late Deliveries");
    output::hint("computed over every review; the date range does not apply");
    if view.share.entries.is_empty() {
        output::note("No reviews with both delivery dates.");
        return;
    }

    for (label, pct) in &view.share.entries {
        output::field(
            label,
            format!("{:>5.1}% {}", pct, output::bar(*pct, 100.0, BAR_WIDTH)),
        );
    }
    output::field(
        "Known",
        output::muted(format!(
            "{} on time, {} late",
            view.counts.on_time, view.counts.late
        )),
    );

    output::section("Review Score by Delivery");
    for (label, summary) in [("Late", view.late_scores), ("On-Time", view.on_time_scores)] {
        match summary {
            Some(summary) => output::field(label, format_box(&summary)),
            None => output::field(label, output::muted("no scores")),
        }
    }
}

/// Print the monthly orders and revenue tab.
pub fn print_monthly(view: &MonthlyView) {
    output::section("Orders and Revenue per Month");
    if view.order_counts.entries.is_empty() {
        output::note("No orders in this range.");
        return;
    }

    let rows = month_rows(view);
    output::lines(&Table::new(rows).to_string());
}

/// Print the discount-proxy tab.
pub fn print_discount(view: &DiscountView) {
    output::section("Sales Volume by Discount Proxy");
    match view.threshold {
        Some(threshold) => output::field(
            "Threshold",
            format!("freight < {}", output::highlight(format!("{threshold:.2}"))),
        ),
        None => output::field("Threshold", output::muted("no freight values")),
    }
    output::hint("computed over every order; the date range does not apply");
    if view.chart.entries.is_empty() {
        output::note("No orders with a freight value.");
        return;
    }

    let max = view
        .chart
        .entries
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0) as f64;
    for (label, count) in &view.chart.entries {
        output::field(
            label,
            format!(
                "{:>8} {}",
                count,
                output::bar(*count as f64, max, BAR_WIDTH)
            ),
        );
    }
}

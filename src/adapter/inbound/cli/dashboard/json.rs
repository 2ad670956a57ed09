//! JSON serialization for dashboard output.
//!
//! Each tab is emitted in its chart shape: series as `{label, values}`,
//! paired series as `{x_label, y_label, points}`, categorical charts as
//! `{label, entries: [[name, value], ...]}`.

use serde_json::{json, Map, Value};

use crate::adapter::inbound::cli::command::Tab;
use crate::domain::view::ViewData;
use crate::error::Result;

fn tab_to_json(views: &ViewData, tab: Tab) -> serde_json::Result<Value> {
    match tab {
        Tab::ReviewTiming => serde_json::to_value(&views.review_timing),
        Tab::Delivery => serde_json::to_value(&views.delivery),
        Tab::Monthly => serde_json::to_value(&views.monthly),
        Tab::Discount => serde_json::to_value(&views.discount),
    }
}

/// Full dashboard document restricted to `tabs`.
pub fn views_to_json(views: &ViewData, tabs: &[Tab]) -> Result<Value> {
    let mut rendered = Map::new();
    for &tab in tabs {
        rendered.insert(tab.key().to_string(), tab_to_json(views, tab)?);
    }

    Ok(json!({
        "command": "dashboard",
        "from": views.range.start().to_string(),
        "to": views.range.end().to_string(),
        "order_count": views.order_count,
        "tabs": rendered,
    }))
}

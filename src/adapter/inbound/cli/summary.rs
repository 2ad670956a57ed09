//! Handler for the `summary` command.

use serde_json::json;

use crate::adapter::inbound::cli::{context, output};
use crate::application::store::RecordStore;
use crate::error::Result;

use super::command::ConfigPathArg;

fn summary_to_json(store: &RecordStore) -> serde_json::Value {
    let bounds = store.bounds();
    json!({
        "command": "summary",
        "orders": store.orders().len(),
        "reviews": store.reviews().len(),
        "items": store.items().len(),
        "orders_with_items": store.orders_with_items(),
        "orders_missing_purchase_time": store.orders_missing_purchase_time(),
        "first_purchase": bounds.map(|b| b.min.to_string()),
        "last_purchase": bounds.map(|b| b.max.to_string()),
        "freight_mean": store.freight_threshold(),
    })
}

/// Execute `summary`.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = context::load_config(args.config.as_deref())?;
    let store = context::load_store(&config)?;

    if output::is_json() {
        output::json_output(summary_to_json(&store));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Tables");
    output::field("Orders", store.orders().len());
    output::field("Reviews", store.reviews().len());
    output::field("Order items", store.items().len());
    output::field("Orders w/ items", store.orders_with_items());

    output::section("Purchase Dates");
    match store.bounds() {
        Some(bounds) => {
            output::field("First", bounds.min);
            output::field("Last", bounds.max);
        }
        None => output::warning("no order has a parsable purchase timestamp"),
    }
    let missing = store.orders_missing_purchase_time();
    if missing > 0 {
        output::field("Missing", output::muted(format!("{missing} orders")));
    }

    output::section("Discount Proxy");
    match store.freight_threshold() {
        Some(mean) => output::field("Freight mean", format!("{mean:.2}")),
        None => output::field("Freight mean", output::muted("n/a")),
    }

    Ok(())
}

//! Handler for the `dashboard` command.
//!
//! Loads the store once, turns the `--from/--to` flags into a validated
//! range, runs one recompute pass and renders the requested tabs.

use crate::adapter::inbound::cli::command::{DashboardArgs, Tab};
use crate::adapter::inbound::cli::{context, output};
use crate::application::views::compute_views;
use crate::domain::error::DomainError;
use crate::error::Result;

use super::format::{
    print_delivery, print_discount, print_header, print_monthly, print_review_timing,
};
use super::json::views_to_json;

/// Execute `dashboard`.
pub fn execute(args: &DashboardArgs) -> Result<()> {
    let config = context::load_config(args.config.as_deref())?;
    let store = context::load_store(&config)?;

    let bounds = store.bounds().ok_or(DomainError::EmptyDataset)?;
    let range = bounds.select(args.from, args.to)?;
    let views = compute_views(&store, &range, &config.dashboard.view_options());

    let tabs: Vec<Tab> = match args.tab {
        Some(tab) => vec![tab],
        None => Tab::ALL.to_vec(),
    };

    if output::is_json() {
        output::json_output(views_to_json(&views, &tabs)?);
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    print_header(&views);
    for tab in tabs {
        match tab {
            Tab::ReviewTiming => print_review_timing(&views.review_timing),
            Tab::Delivery => print_delivery(&views.delivery),
            Tab::Monthly => print_monthly(&views.monthly),
            Tab::Discount => print_discount(&views.discount),
        }
    }

    Ok(())
}

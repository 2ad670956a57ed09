//! Raw CSV row shapes.
//!
//! Every cell is read as optional text; typing happens afterwards so a bad
//! cell can only ever become absent, never fail the file.

use serde::Deserialize;

/// A row of `all_data.csv`. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
pub struct RawOrderRow {
    pub order_id: String,
    #[serde(default, rename = "order_purchase_timestamp")]
    pub purchased_at: Option<String>,
    #[serde(default, rename = "review_creation_date")]
    pub review_created_at: Option<String>,
    #[serde(default)]
    pub freight_value: Option<String>,
    #[serde(default)]
    pub total_price: Option<String>,
}

/// A row of `orders_review.csv`. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
pub struct RawReviewRow {
    pub order_id: String,
    #[serde(default)]
    pub review_score: Option<String>,
    #[serde(default, rename = "review_creation_date")]
    pub review_created_at: Option<String>,
    #[serde(default, rename = "order_delivered_customer_date")]
    pub delivered_at: Option<String>,
    #[serde(default, rename = "order_estimated_delivery_date")]
    pub estimated_delivery_at: Option<String>,
}

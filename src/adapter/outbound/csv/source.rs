//! CSV-backed dataset source.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::application::normalize::{normalize, parse_decimal, parse_score};
use crate::application::store::RecordStore;
use crate::domain::order::{Order, OrderItem, Review};
use crate::error::{LoadError, Result};
use crate::port::outbound::dataset::{DatasetPaths, DatasetSource};

use super::row::{RawOrderRow, RawReviewRow};

const ORDER_ID_COLUMN: &str = "order_id";

/// Reads the base tables from CSV files with a header row.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    paths: DatasetPaths,
}

impl CsvDatasetSource {
    #[must_use]
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    #[must_use]
    pub fn paths(&self) -> &DatasetPaths {
        &self.paths
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<RecordStore> {
        let orders = load_orders(&self.paths.orders)?;
        info!(rows = orders.len(), path = %self.paths.orders.display(), "loaded orders");

        let reviews = load_reviews(&self.paths.reviews)?;
        info!(rows = reviews.len(), path = %self.paths.reviews.display(), "loaded reviews");

        let items = load_items(&self.paths.items)?;
        info!(rows = items.len(), path = %self.paths.items.display(), "loaded order items");

        Ok(RecordStore::new(orders, reviews, items))
    }

    fn describe(&self) -> String {
        format!(
            "csv({}, {}, {})",
            self.paths.orders.display(),
            self.paths.reviews.display(),
            self.paths.items.display()
        )
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file))
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> LoadError + '_ {
    move |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = open_reader(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(csv_error(path))?;
    Ok(rows)
}

/// Normalize one timestamp column and log how many cells became absent.
fn timestamp_column<'a, I>(column: &'static str, cells: I) -> Vec<Option<NaiveDateTime>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let cells: Vec<Option<&str>> = cells.into_iter().collect();
    let provided = cells.iter().filter(|c| c.is_some()).count();
    let parsed = normalize(cells);
    let coerced = provided - parsed.iter().filter(|ts| ts.is_some()).count();
    if coerced > 0 {
        debug!(column, coerced, "unparsable timestamps coerced to absent");
    }
    parsed
}

fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let rows: Vec<RawOrderRow> = read_rows(path)?;

    let purchased = timestamp_column(
        "order_purchase_timestamp",
        rows.iter().map(|r| r.purchased_at.as_deref()),
    );
    let reviewed = timestamp_column(
        "review_creation_date",
        rows.iter().map(|r| r.review_created_at.as_deref()),
    );

    Ok(rows
        .into_iter()
        .zip(purchased)
        .zip(reviewed)
        .map(|((row, purchased_at), review_created_at)| Order {
            order_id: row.order_id,
            purchased_at,
            review_created_at,
            freight_value: row.freight_value.as_deref().and_then(parse_decimal),
            total_price: row.total_price.as_deref().and_then(parse_decimal),
        })
        .collect())
}

fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let rows: Vec<RawReviewRow> = read_rows(path)?;

    let created = timestamp_column(
        "review_creation_date",
        rows.iter().map(|r| r.review_created_at.as_deref()),
    );
    let delivered = timestamp_column(
        "order_delivered_customer_date",
        rows.iter().map(|r| r.delivered_at.as_deref()),
    );
    let estimated = timestamp_column(
        "order_estimated_delivery_date",
        rows.iter().map(|r| r.estimated_delivery_at.as_deref()),
    );

    Ok(rows
        .into_iter()
        .zip(created)
        .zip(delivered.into_iter().zip(estimated))
        .map(
            |((row, review_created_at), (delivered_at, estimated_delivery_at))| Review {
                order_id: row.order_id,
                review_score: row.review_score.as_deref().and_then(parse_score),
                review_created_at,
                delivered_at,
                estimated_delivery_at,
            },
        )
        .collect())
}

fn load_items(path: &Path) -> Result<Vec<OrderItem>> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().map_err(csv_error(path))?.clone();
    let key = headers
        .iter()
        .position(|h| h == ORDER_ID_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: ORDER_ID_COLUMN,
        })?;

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error(path))?;
        let mut attributes = BTreeMap::new();
        let mut order_id = String::new();
        for (index, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
            if index == key {
                order_id = value.to_string();
            } else {
                attributes.insert(header.to_string(), value.to_string());
            }
        }
        items.push(OrderItem {
            order_id,
            attributes,
        });
    }
    Ok(items)
}

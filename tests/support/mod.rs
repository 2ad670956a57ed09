#![allow(dead_code)]

//! Shared fixtures: a small dataset written into a temp directory.
//!
//! Orders (freight mean 30):
//!
//! | id | purchased           | reviewed            | freight | price  |
//! |----|---------------------|---------------------|---------|--------|
//! | o1 | 2018-01-10 10:00:00 | 2018-01-15 00:00:00 | 10.00   | 50.00  |
//! | o2 | 2018-01-20 09:30:00 | 2018-01-18 09:30:00 | 20.00   | 30.00  |
//! | o3 | 2018-01-30 12:00:00 |                     | 30.00   |        |
//! | o4 | 2018-03-05 08:00:00 | 2018-03-12 08:00:00 | 40.00   | 100.00 |
//! | o5 | not a date          | 2018-03-20 00:00:00 | 50.00   | 10.00  |

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use orderscope::adapter::outbound::csv::CsvDatasetSource;
use orderscope::application::store::RecordStore;
use orderscope::port::outbound::dataset::{DatasetPaths, DatasetSource};
use tempfile::TempDir;

pub const ORDERS_CSV: &str = "\
order_id,customer_id,order_purchase_timestamp,review_creation_date,freight_value,total_price
o1,c1,2018-01-10 10:00:00,2018-01-15 00:00:00,10.00,50.00
o2,c2,2018-01-20 09:30:00,2018-01-18 09:30:00,20.00,30.00
o3,c3,2018-01-30 12:00:00,,30.00,
o4,c4,2018-03-05 08:00:00,2018-03-12 08:00:00,40.00,100.00
o5,c5,not a date,2018-03-20 00:00:00,50.00,10.00
";

pub const REVIEWS_CSV: &str = "\
order_id,review_score,review_creation_date,order_delivered_customer_date,order_estimated_delivery_date
o1,5,2018-01-15 00:00:00,2018-01-14 10:00:00,2018-01-20 00:00:00
o2,1,2018-01-18 09:30:00,2018-01-25 00:00:00,2018-01-22 00:00:00
o3,,,,
o4,4,2018-03-12 08:00:00,2018-03-10 00:00:00,2018-03-15 00:00:00
";

pub const ITEMS_CSV: &str = "\
order_id,order_item_id,product_id,price
o1,1,p1,25.00
o1,2,p2,25.00
o4,1,p3,100.00
";

/// A temp directory holding the three fixture CSVs.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_orders(ORDERS_CSV)
    }

    pub fn with_orders(orders: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("all_data.csv"), orders).expect("write orders");
        fs::write(dir.path().join("orders_review.csv"), REVIEWS_CSV).expect("write reviews");
        fs::write(dir.path().join("orders_item.csv"), ITEMS_CSV).expect("write items");
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths {
            orders: self.dir().join("all_data.csv"),
            reviews: self.dir().join("orders_review.csv"),
            items: self.dir().join("orders_item.csv"),
        }
    }

    pub fn store(&self) -> RecordStore {
        CsvDatasetSource::new(self.paths())
            .load()
            .expect("load fixture store")
    }

    /// Write a config file pointing at the fixture data and return its path.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.dir().join("orderscope.toml");
        let contents = format!(
            "[data]\ndir = '{}'\n\n[logging]\nlevel = \"warn\"\n\n{extra}",
            self.dir().display()
        );
        fs::write(&path, contents).expect("write config");
        path
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

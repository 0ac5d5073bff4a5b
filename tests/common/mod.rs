//! Shared fixtures for report integration tests
//!
//! A small retail dataset modelled on the `retail_sales` table: three
//! categories, two years, a spread of hours and repeat customers.

use chrono::{NaiveDate, NaiveTime};
use salesrank::engine::Dataset;
use salesrank::types::SaleRecord;

#[allow(clippy::too_many_arguments)]
pub fn record(
    id: i64,
    date: &str,
    time: &str,
    customer_id: i64,
    gender: &str,
    category: &str,
    quantity: u32,
    price_per_unit: f64,
) -> SaleRecord {
    SaleRecord {
        transaction_id: id,
        sale_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        sale_time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
        customer_id,
        gender: gender.to_string(),
        category: category.to_string(),
        quantity,
        price_per_unit,
        total_sale: f64::from(quantity) * price_per_unit,
    }
}

pub fn retail_sales() -> Dataset {
    Dataset::new(vec![
        record(180, "2022-11-05", "10:47:00", 117, "Male", "Clothing", 3, 300.0),
        record(522, "2022-11-05", "11:00:00", 52, "Male", "Beauty", 3, 500.0),
        record(559, "2022-11-15", "14:32:00", 5, "Female", "Clothing", 4, 300.0),
        record(1256, "2022-12-01", "19:05:00", 8, "Female", "Electronics", 2, 30.0),
        record(1587, "2022-12-24", "18:12:00", 117, "Male", "Electronics", 1, 50.0),
        record(1888, "2023-01-13", "09:15:00", 5, "Female", "Beauty", 2, 25.0),
        record(2002, "2023-06-30", "17:59:00", 52, "Male", "Clothing", 4, 500.0),
        record(2011, "2023-06-30", "18:00:00", 8, "Female", "Beauty", 1, 1000.0),
        record(2120, "2023-09-09", "19:45:00", 99, "Female", "Electronics", 2, 500.0),
        record(2200, "2023-12-31", "21:30:00", 117, "Male", "Clothing", 1, 25.0),
    ])
    .unwrap()
}

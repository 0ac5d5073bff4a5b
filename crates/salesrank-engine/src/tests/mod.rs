//! Engine-level tests and shared row builders

use chrono::{NaiveDate, NaiveTime};
use salesrank_types::SaleRecord;


/// A one-unit sale on 2022-01-01 at 10:00, bought by customer `id`.
pub(crate) fn sale(id: i64, category: &str, total: f64) -> SaleRecord {
    SaleRecord {
        transaction_id: id,
        sale_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        sale_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        customer_id: id,
        gender: "Female".to_string(),
        category: category.to_string(),
        quantity: 1,
        price_per_unit: total,
        total_sale: total,
    }
}

pub(crate) fn sale_at(id: i64, date: (i32, u32, u32), hour: u32, total: f64) -> SaleRecord {
    let mut record = sale(id, "Clothing", total);
    record.sale_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    record.sale_time = NaiveTime::from_hms_opt(hour, 15, 0).unwrap();
    record
}

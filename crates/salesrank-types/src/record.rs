//! The typed sales transaction row

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::{Column, Shift, Value};

/// One cleaned row of the `retail_sales` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub transaction_id: i64,
    pub sale_date: NaiveDate,
    pub sale_time: NaiveTime,
    pub customer_id: i64,
    pub gender: String,
    pub category: String,
    pub quantity: u32,
    pub price_per_unit: f64,
    /// Expected to be quantity * price_per_unit; not enforced.
    pub total_sale: f64,
}

impl SaleRecord {
    /// Read a stored or derived column as a Value.
    pub fn value(&self, column: Column) -> Value {
        match column {
            Column::TransactionId => Value::Integer(self.transaction_id),
            Column::SaleDate => Value::Date(self.sale_date),
            Column::SaleTime => Value::Time(self.sale_time),
            Column::CustomerId => Value::Integer(self.customer_id),
            Column::Gender => Value::Varchar(self.gender.clone()),
            Column::Category => Value::Varchar(self.category.clone()),
            Column::Quantity => Value::Integer(i64::from(self.quantity)),
            Column::PricePerUnit => Value::Real(self.price_per_unit),
            Column::TotalSale => Value::Real(self.total_sale),
            Column::Year => Value::Integer(i64::from(self.sale_date.year())),
            Column::Month => Value::Integer(i64::from(self.sale_date.month())),
            Column::Hour => Value::Integer(i64::from(self.sale_time.hour())),
            Column::Shift => Value::Varchar(self.shift().label().to_string()),
        }
    }

    pub fn shift(&self) -> Shift {
        Shift::from_time(self.sale_time)
    }

    /// Stored column values in `Column::STORED` order.
    pub fn stored_values(&self) -> Vec<Value> {
        Column::STORED.iter().map(|c| self.value(*c)).collect()
    }
}

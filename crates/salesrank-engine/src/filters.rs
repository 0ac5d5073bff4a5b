//! Plain row filters. Output carries every stored column.

use chrono::{Datelike, NaiveDate};
use salesrank_types::{Column, SaleRecord};

use crate::result::ResultSet;

fn collect<'a>(rows: impl Iterator<Item = &'a SaleRecord>) -> ResultSet {
    let mut result = ResultSet::new(Column::STORED.iter().map(|c| c.name().to_string()).collect());
    for row in rows {
        result.push(row.stored_values());
    }
    result
}

/// All transactions made on `date`.
pub fn sales_on(rows: &[SaleRecord], date: NaiveDate) -> ResultSet {
    collect(rows.iter().filter(|r| r.sale_date == date))
}

/// Transactions in `category` with at least `min_quantity` units, sold in
/// the given month.
pub fn category_bulk_in_month(
    rows: &[SaleRecord],
    category: &str,
    min_quantity: u32,
    year: i32,
    month: u32,
) -> ResultSet {
    collect(rows.iter().filter(|r| {
        r.category == category
            && r.quantity >= min_quantity
            && r.sale_date.year() == year
            && r.sale_date.month() == month
    }))
}

/// Transactions whose total strictly exceeds `threshold`.
pub fn high_value(rows: &[SaleRecord], threshold: f64) -> ResultSet {
    collect(rows.iter().filter(|r| r.total_sale > threshold))
}

#[cfg(test)]
mod tests {
    use salesrank_types::Value;

    use super::*;
    use crate::tests::sale;

    #[test]
    fn test_sales_on_date() {
        let mut a = sale(1, "Clothing", 100.0);
        a.sale_date = NaiveDate::from_ymd_opt(2022, 11, 5).unwrap();
        let b = sale(2, "Clothing", 100.0);

        let result = sales_on(&[a, b], NaiveDate::from_ymd_opt(2022, 11, 5).unwrap());

        assert_eq!(result.len(), 1);
        assert_eq!(result.value(0, "transactions_id"), Some(&Value::Integer(1)));
        assert_eq!(result.columns.len(), Column::STORED.len());
    }

    #[test]
    fn test_category_bulk_in_month() {
        let mut hit = sale(1, "Clothing", 400.0);
        hit.quantity = 4;
        hit.sale_date = NaiveDate::from_ymd_opt(2022, 11, 20).unwrap();
        let mut too_few = hit.clone();
        too_few.transaction_id = 2;
        too_few.quantity = 3;
        let mut wrong_month = hit.clone();
        wrong_month.transaction_id = 3;
        wrong_month.sale_date = NaiveDate::from_ymd_opt(2022, 12, 1).unwrap();
        let mut wrong_category = hit.clone();
        wrong_category.transaction_id = 4;
        wrong_category.category = "Beauty".to_string();

        let rows = vec![hit, too_few, wrong_month, wrong_category];
        let result = category_bulk_in_month(&rows, "Clothing", 4, 2022, 11);

        assert_eq!(result.column_values("transactions_id"), vec![Value::Integer(1)]);
    }

    #[test]
    fn test_high_value_is_strict() {
        let rows = vec![sale(1, "Beauty", 1000.0), sale(2, "Beauty", 1000.01), sale(3, "Beauty", 50.0)];
        let result = high_value(&rows, 1000.0);
        assert_eq!(result.column_values("transactions_id"), vec![Value::Integer(2)]);
    }
}

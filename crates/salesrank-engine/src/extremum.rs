//! First and last sale by date
//!
//! Rows are numbered by `sale_date` ascending and, independently, descending
//! (ROW_NUMBER, ties in insertion order). The row numbered 1 ascending is the
//! first sale, the row numbered 1 descending is the last sale. A row that is
//! both is reported once, as the first sale.

use salesrank_types::{Column, SaleRecord, Value};

use crate::{
    query::Direction,
    ranking::{evaluate_row_number, sort_by_metric},
    result::ResultSet,
};

pub const FIRST_SALE: &str = "First Sale";
pub const LAST_SALE: &str = "Last Sale";

/// Output column holding the label.
pub const LABEL_COLUMN: &str = "label";

/// Row index numbered 1 when ordering by date in `direction`.
fn first_in_order(dates: &[(usize, Value)], direction: Direction) -> Option<usize> {
    let mut ordered = dates.to_vec();
    sort_by_metric(&mut ordered, direction, |(_, date)| date);
    let row_numbers = evaluate_row_number(ordered.len());
    ordered.into_iter().zip(row_numbers).find(|(_, rn)| *rn == 1).map(|((idx, _), _)| idx)
}

pub fn first_last_sale(rows: &[SaleRecord]) -> ResultSet {
    let mut result = ResultSet::new(vec![
        Column::TransactionId.name().to_string(),
        Column::SaleDate.name().to_string(),
        Column::SaleTime.name().to_string(),
        LABEL_COLUMN.to_string(),
    ]);

    let dates: Vec<(usize, Value)> =
        rows.iter().enumerate().map(|(idx, row)| (idx, row.value(Column::SaleDate))).collect();

    let first = first_in_order(&dates, Direction::Asc);
    let last = first_in_order(&dates, Direction::Desc);

    let mut emit = |idx: usize, label: &str| {
        let row = &rows[idx];
        result.push(vec![
            row.value(Column::TransactionId),
            row.value(Column::SaleDate),
            row.value(Column::SaleTime),
            Value::from(label),
        ]);
    };

    if let Some(idx) = first {
        emit(idx, FIRST_SALE);
    }
    match (first, last) {
        (Some(f), Some(l)) if f == l => {}
        (_, Some(l)) => emit(l, LAST_SALE),
        _ => {}
    }

    result
}

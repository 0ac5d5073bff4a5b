//! CSV loading and cleaning
//!
//! Maps the header row onto `SaleRecord` fields, ignores columns the
//! analysis does not use (age, cogs, ...) and drops rows with a missing value
//! in any required column.

use std::{fs::File, io::Read, path::Path};

use chrono::{NaiveDate, NaiveTime};
use log::{debug, info};
use salesrank_types::{Column, SaleRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Line {line}: invalid {column} value '{value}'")]
    BadValue { line: u64, column: &'static str, value: String },
}

/// Counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_skipped: usize,
}

#[derive(Debug)]
pub struct Loaded {
    pub records: Vec<SaleRecord>,
    pub stats: LoadStats,
}

pub fn load_path(path: &Path) -> Result<Loaded, LoadError> {
    let file = File::open(path)
        .map_err(|source| LoadError::Io { path: path.display().to_string(), source })?;
    let loaded = load_reader(file)?;
    info!(
        "Loaded {} of {} rows from '{}' ({} skipped for missing values)",
        loaded.stats.rows_kept,
        loaded.stats.rows_read,
        path.display(),
        loaded.stats.rows_skipped
    );
    Ok(loaded)
}

pub fn load_reader<R: Read>(reader: R) -> Result<Loaded, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut slots: Vec<Option<usize>> = vec![None; Column::STORED.len()];
    for (idx, header) in headers.iter().enumerate() {
        match header.parse::<Column>() {
            Ok(column) if !column.is_derived() => {
                if let Some(slot) = Column::STORED.iter().position(|c| *c == column) {
                    slots[slot] = Some(idx);
                }
            }
            _ => debug!("Ignoring column '{}'", header),
        }
    }
    let positions = slots
        .iter()
        .enumerate()
        .map(|(slot, pos)| pos.ok_or_else(|| LoadError::MissingColumn(Column::STORED[slot].name())))
        .collect::<Result<Vec<usize>, _>>()?;

    let mut records = Vec::new();
    let mut stats = LoadStats::default();

    for row in csv_reader.records() {
        let row = row?;
        stats.rows_read += 1;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cells: Vec<&str> = positions.iter().map(|&pos| row.get(pos).unwrap_or("")).collect();

        if let Some(slot) = cells.iter().position(|cell| is_null(cell)) {
            debug!("Line {}: skipping row with missing {}", line, Column::STORED[slot].name());
            stats.rows_skipped += 1;
            continue;
        }

        records.push(parse_record(line, &cells)?);
    }

    stats.rows_kept = records.len();
    Ok(Loaded { records, stats })
}

fn is_null(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("null")
}

/// `cells` holds one entry per `Column::STORED`, in that order.
fn parse_record(line: u64, cells: &[&str]) -> Result<SaleRecord, LoadError> {
    let bad = |column: Column, value: &str| LoadError::BadValue {
        line,
        column: column.name(),
        value: value.to_string(),
    };

    let transaction_id = cells[0].parse::<i64>().map_err(|_| bad(Column::TransactionId, cells[0]))?;
    let sale_date =
        NaiveDate::parse_from_str(cells[1], "%Y-%m-%d").map_err(|_| bad(Column::SaleDate, cells[1]))?;
    let sale_time = NaiveTime::parse_from_str(cells[2], "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(cells[2], "%H:%M"))
        .map_err(|_| bad(Column::SaleTime, cells[2]))?;
    let customer_id = cells[3].parse::<i64>().map_err(|_| bad(Column::CustomerId, cells[3]))?;
    let quantity = cells[6].parse::<u32>().map_err(|_| bad(Column::Quantity, cells[6]))?;
    let price_per_unit = parse_amount(cells[7]).ok_or_else(|| bad(Column::PricePerUnit, cells[7]))?;
    let total_sale = parse_amount(cells[8]).ok_or_else(|| bad(Column::TotalSale, cells[8]))?;

    Ok(SaleRecord {
        transaction_id,
        sale_date,
        sale_time,
        customer_id,
        gender: cells[4].to_string(),
        category: cells[5].to_string(),
        quantity,
        price_per_unit,
        total_sale,
    })
}

/// Non-negative, finite amount.
fn parse_amount(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "transactions_id,sale_date,sale_time,customer_id,gender,age,category,quantiy,price_per_unit,cogs,total_sale\n";

    fn load(body: &str) -> Result<Loaded, LoadError> {
        load_reader(format!("{}{}", HEADER, body).as_bytes())
    }

    #[test]
    fn test_load_and_ignore_extra_columns() {
        let loaded = load("180,2022-11-05,10:47:42,117,Male,41,Clothing,3,300,129,900\n").unwrap();

        assert_eq!(loaded.stats, LoadStats { rows_read: 1, rows_kept: 1, rows_skipped: 0 });
        let record = &loaded.records[0];
        assert_eq!(record.transaction_id, 180);
        assert_eq!(record.sale_date, NaiveDate::from_ymd_opt(2022, 11, 5).unwrap());
        assert_eq!(record.sale_time, NaiveTime::from_hms_opt(10, 47, 42).unwrap());
        assert_eq!(record.category, "Clothing");
        assert_eq!(record.quantity, 3);
        assert_eq!(record.total_sale, 900.0);
    }

    #[test]
    fn test_rows_with_missing_amounts_skipped() {
        let loaded = load(
            "1,2022-01-01,09:00:00,5,Female,,Beauty,,,,\n\
             2,2022-01-01,09:00:00,5,Female,30,Beauty,2,50,20,NULL\n\
             3,2022-01-01,09:00:00,5,Female,30,Beauty,2,50,20,100\n",
        )
        .unwrap();

        assert_eq!(loaded.stats, LoadStats { rows_read: 3, rows_kept: 1, rows_skipped: 2 });
        assert_eq!(loaded.records[0].transaction_id, 3);
    }

    #[test]
    fn test_missing_age_does_not_drop_row() {
        let loaded = load("7,2022-01-01,09:00,5,Male,,Electronics,1,25,10,25\n").unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].sale_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_bad_value_reports_line() {
        let err = load("1,2022-01-01,09:00:00,5,Female,30,Beauty,2,50,20,100\n2,2022-13-01,09:00:00,5,Female,30,Beauty,2,50,20,100\n")
            .unwrap_err();

        match err {
            LoadError::BadValue { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "sale_date");
                assert_eq!(value, "2022-13-01");
            }
            other => panic!("expected BadValue, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = load("1,2022-01-01,09:00:00,5,Female,30,Beauty,2,-50,20,100\n").unwrap_err();
        assert!(matches!(err, LoadError::BadValue { column: "price_per_unit", .. }));
    }

    #[test]
    fn test_missing_required_header() {
        let err = load_reader("transactions_id,sale_date\n1,2022-01-01\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("sale_time")));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path(Path::new("/nonexistent/retail_sales.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/retail_sales.csv"));
    }

    #[test]
    fn test_load_path_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}1,2022-01-01,09:00:00,5,Female,30,Beauty,2,50,20,100\n", HEADER).unwrap();

        let loaded = load_path(file.path()).unwrap();
        assert_eq!(loaded.records.len(), 1);
    }
}

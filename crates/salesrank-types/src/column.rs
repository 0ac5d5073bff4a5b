//! Column names a query may reference.
//!
//! Stored columns mirror the `retail_sales` table; derived columns are
//! computed from the sale date and time so they can be used as group keys.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    TransactionId,
    SaleDate,
    SaleTime,
    CustomerId,
    Gender,
    Category,
    Quantity,
    PricePerUnit,
    TotalSale,
    /// Calendar year of `sale_date`
    Year,
    /// Month (1-12) of `sale_date`
    Month,
    /// Hour (0-23) of `sale_time`
    Hour,
    /// Morning / Afternoon / Evening bucket of `sale_time`
    Shift,
}

impl Column {
    pub const STORED: [Column; 9] = [
        Column::TransactionId,
        Column::SaleDate,
        Column::SaleTime,
        Column::CustomerId,
        Column::Gender,
        Column::Category,
        Column::Quantity,
        Column::PricePerUnit,
        Column::TotalSale,
    ];

    pub const ALL: [Column; 13] = [
        Column::TransactionId,
        Column::SaleDate,
        Column::SaleTime,
        Column::CustomerId,
        Column::Gender,
        Column::Category,
        Column::Quantity,
        Column::PricePerUnit,
        Column::TotalSale,
        Column::Year,
        Column::Month,
        Column::Hour,
        Column::Shift,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::TransactionId => "transactions_id",
            Column::SaleDate => "sale_date",
            Column::SaleTime => "sale_time",
            Column::CustomerId => "customer_id",
            Column::Gender => "gender",
            Column::Category => "category",
            Column::Quantity => "quantity",
            Column::PricePerUnit => "price_per_unit",
            Column::TotalSale => "total_sale",
            Column::Year => "year",
            Column::Month => "month",
            Column::Hour => "hour",
            Column::Shift => "shift",
        }
    }

    /// Whether the column holds numbers that SUM and AVG can fold.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            Column::SaleDate | Column::SaleTime | Column::Gender | Column::Category | Column::Shift
        )
    }

    pub fn is_derived(self) -> bool {
        matches!(self, Column::Year | Column::Month | Column::Hour | Column::Shift)
    }

    /// Names of every column, for "available columns" diagnostics.
    pub fn names() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.name()).collect()
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "transactions_id" | "transaction_id" => Ok(Column::TransactionId),
            "sale_date" => Ok(Column::SaleDate),
            "sale_time" => Ok(Column::SaleTime),
            "customer_id" => Ok(Column::CustomerId),
            "gender" => Ok(Column::Gender),
            "category" => Ok(Column::Category),
            // The source table misspells this column
            "quantity" | "quantiy" => Ok(Column::Quantity),
            "price_per_unit" => Ok(Column::PricePerUnit),
            "total_sale" => Ok(Column::TotalSale),
            "year" => Ok(Column::Year),
            "month" => Ok(Column::Month),
            "hour" => Ok(Column::Hour),
            "shift" => Ok(Column::Shift),
            _ => Err(format!("Unknown column: '{}'", s)),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("quantiy".parse::<Column>().unwrap(), Column::Quantity);
        assert_eq!(" Category ".parse::<Column>().unwrap(), Column::Category);
    }

    #[test]
    fn test_unknown_column() {
        let err = "age".parse::<Column>().unwrap_err();
        assert!(err.contains("age"));
    }

    #[test]
    fn test_numeric_columns() {
        assert!(Column::TotalSale.is_numeric());
        assert!(Column::Hour.is_numeric());
        assert!(!Column::Category.is_numeric());
        assert!(!Column::SaleDate.is_numeric());
    }
}

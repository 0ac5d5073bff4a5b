//! Named business reports
//!
//! Each report is one `ranked_aggregate` call (or the first/last sale
//! extremum), so they can be listed, parsed from the command line and run
//! uniformly.

use std::{fmt, str::FromStr};

use salesrank_types::{Column, SaleRecord};

use crate::{
    engine::ranked_aggregate,
    errors::EngineError,
    extremum::first_last_sale,
    query::{Direction, MetricSpec, RankedAggregate},
    result::ResultSet,
};

/// Limits for the top-N reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_hours: usize,
    pub top_customers: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { top_hours: 3, top_customers: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    TotalPerCategory,
    GenderByCategory,
    TopHours,
    BestMonthPerYear,
    MonthlyAverage,
    TopCustomers,
    UniqueCustomersPerCategory,
    ShiftDistribution,
    FirstLastSale,
}

impl Report {
    pub const ALL: [Report; 9] = [
        Report::TotalPerCategory,
        Report::GenderByCategory,
        Report::TopHours,
        Report::BestMonthPerYear,
        Report::MonthlyAverage,
        Report::TopCustomers,
        Report::UniqueCustomersPerCategory,
        Report::ShiftDistribution,
        Report::FirstLastSale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Report::TotalPerCategory => "total-per-category",
            Report::GenderByCategory => "gender-by-category",
            Report::TopHours => "top-hours",
            Report::BestMonthPerYear => "best-month-per-year",
            Report::MonthlyAverage => "monthly-average",
            Report::TopCustomers => "top-customers",
            Report::UniqueCustomersPerCategory => "unique-customers-per-category",
            Report::ShiftDistribution => "shift-distribution",
            Report::FirstLastSale => "first-last-sale",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Report::TotalPerCategory => "Net sales per category",
            Report::GenderByCategory => "Transaction count per category and gender",
            Report::TopHours => "Busiest hours of the day by transaction count",
            Report::BestMonthPerYear => "Month with the highest average sale in each year (ties kept)",
            Report::MonthlyAverage => "Average sale for every month",
            Report::TopCustomers => "Customers with the highest total sales",
            Report::UniqueCustomersPerCategory => "Distinct customers who bought in each category",
            Report::ShiftDistribution => "Orders per shift (Morning, Afternoon, Evening)",
            Report::FirstLastSale => "Earliest and latest transaction by date",
        }
    }

    /// The engine request behind this report, `None` for the extremum report.
    pub fn query(self, options: &ReportOptions) -> Option<RankedAggregate> {
        let query = match self {
            Report::TotalPerCategory => {
                RankedAggregate::new(vec![Column::Category], MetricSpec::sum(Column::TotalSale)).alias("net_sale")
            }
            Report::GenderByCategory => RankedAggregate::new(
                vec![Column::Category, Column::Gender],
                MetricSpec::count(Column::TransactionId),
            )
            .alias("total_trans"),
            Report::TopHours => RankedAggregate::new(vec![Column::Hour], MetricSpec::count(Column::TransactionId))
                .direction(Direction::Desc)
                .top_n(options.top_hours)
                .alias("total_orders"),
            Report::BestMonthPerYear => {
                RankedAggregate::new(vec![Column::Year, Column::Month], MetricSpec::avg(Column::TotalSale))
                    .partition_by(vec![Column::Year])
                    .direction(Direction::Desc)
                    .top_per_partition(1)
                    .alias("avg_sale")
            }
            Report::MonthlyAverage => {
                RankedAggregate::new(vec![Column::Year, Column::Month], MetricSpec::avg(Column::TotalSale))
                    .alias("avg_sale")
            }
            Report::TopCustomers => {
                RankedAggregate::new(vec![Column::CustomerId], MetricSpec::sum(Column::TotalSale))
                    .direction(Direction::Desc)
                    .top_n(options.top_customers)
                    .alias("total_sales")
            }
            Report::UniqueCustomersPerCategory => {
                RankedAggregate::new(vec![Column::Category], MetricSpec::count_distinct(Column::CustomerId))
                    .alias("cnt_unique_cs")
            }
            Report::ShiftDistribution => {
                RankedAggregate::new(vec![Column::Shift], MetricSpec::count(Column::TransactionId))
                    .alias("total_orders")
            }
            Report::FirstLastSale => return None,
        };
        Some(query)
    }

    pub fn run(self, rows: &[SaleRecord], options: &ReportOptions) -> Result<ResultSet, EngineError> {
        match self.query(options) {
            Some(query) => ranked_aggregate(rows, &query),
            None => Ok(first_last_sale(rows)),
        }
    }
}

impl FromStr for Report {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Report::ALL.into_iter().find(|r| r.name() == normalized).ok_or_else(|| {
            EngineError::invalid_spec(format!(
                "Unknown report '{}' (expected one of: {})",
                s,
                Report::ALL.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
            ))
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

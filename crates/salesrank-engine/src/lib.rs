//! Grouped-Ranking Aggregation Engine
//!
//! This crate evaluates the reporting queries run against a sales
//! transaction dataset:
//! - Groups rows by one or more columns and folds a metric per group
//! - Ranks groups inside partitions (RANK) or globally with a hard cutoff
//! - Picks the first and last sale by date (ROW_NUMBER)
//! - Names the standard business reports as single engine calls
//!
//! Every entry point is a pure function over an immutable [`Dataset`], so a
//! single loaded dataset may be shared by concurrent callers.
//!
//! # Module Organization
//!
//! - `dataset` - Immutable, shareable row storage
//! - `query` - Metric, direction and selection specifications
//! - `grouping` - Grouping rows by key values
//! - `aggregates` - SUM, COUNT, COUNT DISTINCT, AVG accumulators
//! - `ranking` - Partition sorting plus RANK and ROW_NUMBER
//! - `engine` - `ranked_aggregate`, tying the above together
//! - `extremum` - First / last sale labelling
//! - `filters` - Plain row filters
//! - `reports` - Named business reports

mod aggregates;
mod dataset;
mod engine;
mod errors;
mod extremum;
mod filters;
mod grouping;
mod query;
mod ranking;
mod reports;
mod result;

pub use aggregates::{round_to_scale, AVG_SCALE};
pub use dataset::Dataset;
pub use engine::ranked_aggregate;
pub use errors::EngineError;
pub use extremum::{first_last_sale, FIRST_SALE, LAST_SALE};
pub use filters::{category_bulk_in_month, high_value, sales_on};
pub use query::{AggregateFunction, Direction, MetricSpec, RankedAggregate, Selection};
pub use ranking::{evaluate_rank, evaluate_row_number};
pub use reports::{Report, ReportOptions};
pub use result::{ResultRow, ResultSet};
pub use salesrank_types::{Column, SaleRecord, Shift, Value};

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests;

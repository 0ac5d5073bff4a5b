//! Report and filter jobs run by the CLI

use chrono::{Datelike, NaiveDate};
use log::debug;
use rayon::prelude::*;
use salesrank_engine::{
    category_bulk_in_month, high_value, sales_on, Dataset, EngineError, Report, ReportOptions, ResultSet,
};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Report(Report),
    SalesOn(NaiveDate),
    HighValue(f64),
    CategoryBulk { category: String, min_quantity: u32, year: i32, month: u32 },
}

impl Job {
    pub fn title(&self) -> String {
        match self {
            Job::Report(report) => format!("{}: {}", report.name(), report.description()),
            Job::SalesOn(date) => format!("sales-on: transactions on {}", date),
            Job::HighValue(threshold) => format!("high-value: transactions above {:.2}", threshold),
            Job::CategoryBulk { category, min_quantity, year, month } => format!(
                "category-bulk: {} with quantity >= {} in {:04}-{:02}",
                category, min_quantity, year, month
            ),
        }
    }

    pub fn run(&self, dataset: &Dataset, options: &ReportOptions) -> Result<ResultSet, EngineError> {
        match self {
            Job::Report(report) => report.run(dataset, options),
            Job::SalesOn(date) => Ok(sales_on(dataset, *date)),
            Job::HighValue(threshold) => Ok(high_value(dataset, *threshold)),
            Job::CategoryBulk { category, min_quantity, year, month } => {
                Ok(category_bulk_in_month(dataset, category, *min_quantity, *year, *month))
            }
        }
    }
}

/// Resolve `--report` into jobs: `all` expands to every named report.
pub fn report_jobs(name: &str) -> Result<Vec<Job>, CliError> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Report::ALL.into_iter().map(Job::Report).collect());
    }
    name.parse::<Report>().map(|r| vec![Job::Report(r)]).map_err(|e| CliError::Usage(e.to_string()))
}

/// Parse a `YYYY-MM` month.
pub fn parse_month(value: &str) -> Result<(i32, u32), CliError> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| CliError::Usage(format!("Invalid month '{}' (expected YYYY-MM)", value)))?;
    Ok((date.year(), date.month()))
}

/// Run every job against one shared dataset, in parallel. Results come back
/// in job order.
pub fn run_jobs(
    jobs: &[Job],
    dataset: &Dataset,
    options: &ReportOptions,
) -> Vec<(String, Result<ResultSet, EngineError>)> {
    debug!("Running {} jobs over {} rows", jobs.len(), dataset.len());
    jobs.par_iter().map(|job| (job.title(), job.run(dataset, options))).collect()
}

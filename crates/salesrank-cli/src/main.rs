use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use salesrank_engine::{Dataset, Report};
use tracing::{error, info};

mod commands;
mod config;
mod data_io;
mod error;
mod formatter;
mod loader;

use commands::{parse_month, report_jobs, run_jobs, Job};
use config::Config;
use data_io::DataIO;
use error::CliError;
use formatter::{OutputFormat, ResultFormatter};

#[derive(Parser, Debug)]
#[command(name = "salesrank")]
#[command(version)]
#[command(about = "Ranked sales reports over a retail transactions CSV")]
#[command(long_about = "salesrank loads a retail sales CSV, drops rows with missing values and
runs grouped-ranking reports over it.

CONFIGURATION:
  Settings can be configured in ~/.salesrankrc (TOML format):
    [display]
    format = \"table\"                  # Default output format

    [data]
    default_path = \"~/retail.csv\"     # CSV loaded when --data is omitted

    [reports]
    top_hours = 3
    top_customers = 5

    [logging]
    level = \"warn\"                    # Overridden by RUST_LOG and -v

EXAMPLES:
  # Every report as tables
  salesrank --data retail_sales.csv

  # Best month of each year as JSON
  salesrank -d retail_sales.csv -r best-month-per-year --format json

  # Transactions on one day, saved as CSV
  salesrank -d retail_sales.csv --on 2022-11-05 -o nov5.csv

  # Clothing orders of 4+ units in November 2022
  salesrank -d retail_sales.csv --category Clothing --min-quantity 4 --month 2022-11")]
struct Args {
    /// Sales CSV file (defaults to data.default_path from the config)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Report to run, or `all`
    #[arg(short, long, value_name = "REPORT", default_value = "all")]
    report: String,

    /// List available reports and exit
    #[arg(long)]
    list: bool,

    /// Output format for results
    #[arg(long, value_parser = ["table", "json", "csv"], value_name = "FORMAT")]
    format: Option<String>,

    /// Write the result to a file instead of stdout (single result only)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Rows kept by the top-hours report
    #[arg(long, value_name = "N")]
    top_hours: Option<usize>,

    /// Rows kept by the top-customers report
    #[arg(long, value_name = "N")]
    top_customers: Option<usize>,

    /// Show transactions made on this date (YYYY-MM-DD) instead of reports
    #[arg(long, value_name = "DATE")]
    on: Option<NaiveDate>,

    /// Show transactions whose total exceeds this amount instead of reports
    #[arg(long, value_name = "AMOUNT")]
    high_value: Option<f64>,

    /// Show transactions in this category (with --month) instead of reports
    #[arg(long, value_name = "CATEGORY", requires = "month")]
    category: Option<String>,

    /// Minimum quantity for --category
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_quantity: u32,

    /// Month (YYYY-MM) for --category
    #[arg(long, value_name = "MONTH", requires = "category")]
    month: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration from ~/.salesrankrc
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config file: {}", e);
        Config::default()
    });

    init_logging(args.verbose, &config.logging.level);

    if args.list {
        for report in Report::ALL {
            println!("{:<32} {}", report.name(), report.description());
        }
        return Ok(());
    }

    // Use command-line format if provided, otherwise use config default
    let format = args
        .format
        .as_deref()
        .and_then(OutputFormat::parse)
        .or_else(|| config.get_output_format())
        .unwrap_or(OutputFormat::Table);

    let mut options = config.report_options();
    if let Some(n) = args.top_hours {
        options.top_hours = n;
    }
    if let Some(n) = args.top_customers {
        options.top_customers = n;
    }

    let jobs = build_jobs(&args)?;

    // Use command-line data file if provided, otherwise use config default
    let data_path = args
        .data
        .clone()
        .or_else(|| config.default_data_path())
        .ok_or_else(|| CliError::Usage("No data file given (use --data or set data.default_path)".into()))?;

    let loaded = loader::load_path(&data_path).map_err(|e| CliError::Data(e.to_string()))?;
    let dataset = Dataset::new(loaded.records).map_err(|e| CliError::Data(e.to_string()))?;
    info!(rows = dataset.len(), skipped = loaded.stats.rows_skipped, "dataset ready");

    let formatter = ResultFormatter::new(format);
    let mut failures = 0;

    for (title, result) in run_jobs(&jobs, &dataset, &options) {
        match result {
            Ok(result) => match &args.output {
                Some(path) => DataIO::export(&result, path, format)?,
                None => formatter.print_result(&title, &result)?,
            },
            Err(e) => {
                error!("{}: {}", title, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CliError::Report(format!("{} of {} jobs failed", failures, jobs.len())).into());
    }

    Ok(())
}

/// Filters take precedence over `--report`.
fn build_jobs(args: &Args) -> Result<Vec<Job>, CliError> {
    let mut jobs = Vec::new();

    if let Some(date) = args.on {
        jobs.push(Job::SalesOn(date));
    }
    if let Some(threshold) = args.high_value {
        jobs.push(Job::HighValue(threshold));
    }
    if let (Some(category), Some(month)) = (&args.category, &args.month) {
        let (year, month) = parse_month(month)?;
        jobs.push(Job::CategoryBulk { category: category.clone(), min_quantity: args.min_quantity, year, month });
    }

    if jobs.is_empty() {
        jobs = report_jobs(&args.report)?;
    }
    if args.output.is_some() && jobs.len() > 1 {
        return Err(CliError::Usage("--output needs a single report or filter".into()));
    }
    Ok(jobs)
}

fn init_logging(verbose: bool, configured_level: &str) {
    let default_level = if verbose { "debug" } else { configured_level };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["salesrank", "--data", "sales.csv"]);
        assert_eq!(args.report, "all");
        assert_eq!(args.min_quantity, 1);
        assert_eq!(build_jobs(&args).unwrap().len(), Report::ALL.len());
    }

    #[test]
    fn test_filters_replace_reports() {
        let args = Args::parse_from([
            "salesrank",
            "--on",
            "2022-11-05",
            "--category",
            "Clothing",
            "--min-quantity",
            "4",
            "--month",
            "2022-11",
        ]);

        let jobs = build_jobs(&args).unwrap();

        assert_eq!(
            jobs,
            vec![
                Job::SalesOn(NaiveDate::from_ymd_opt(2022, 11, 5).unwrap()),
                Job::CategoryBulk { category: "Clothing".to_string(), min_quantity: 4, year: 2022, month: 11 },
            ]
        );
    }

    #[test]
    fn test_category_requires_month() {
        assert!(Args::try_parse_from(["salesrank", "--category", "Beauty"]).is_err());
    }

    #[test]
    fn test_output_requires_single_job() {
        let args = Args::parse_from(["salesrank", "--data", "missing.csv", "--output", "all.json"]);
        assert!(matches!(build_jobs(&args), Err(CliError::Usage(_))));

        let args = Args::parse_from(["salesrank", "--report", "top-hours", "--output", "hours.json"]);
        assert_eq!(build_jobs(&args).unwrap(), vec![Job::Report(Report::TopHours)]);
    }

    #[test]
    fn test_unknown_report_is_usage_error() {
        let args = Args::parse_from(["salesrank", "--report", "churn"]);
        assert!(matches!(build_jobs(&args), Err(CliError::Usage(_))));
    }
}

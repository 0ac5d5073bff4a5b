use std::{fs, path::PathBuf};

use salesrank_engine::ReportOptions;
use serde::{Deserialize, Serialize};

use crate::formatter::OutputFormat;

/// salesrank configuration loaded from ~/.salesrankrc
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub reports: ReportsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default output format: table, json, csv
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// CSV file to load when --data is not given
    #[serde(default)]
    pub default_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Rows kept by the top-hours report
    #[serde(default = "default_top_hours")]
    pub top_hours: usize,

    /// Rows kept by the top-customers report
    #[serde(default = "default_top_customers")]
    pub top_customers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is unset: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_format() -> String {
    "table".to_string()
}

fn default_top_hours() -> usize {
    ReportOptions::default().top_hours
}

fn default_top_customers() -> usize {
    ReportOptions::default().top_customers
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { format: default_format() }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        ReportsConfig { top_hours: default_top_hours(), top_customers: default_top_customers() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_log_level() }
    }
}

impl Config {
    /// Load configuration from ~/.salesrankrc
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // No config file, use defaults
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }

    /// Get the configuration file path (~/.salesrankrc)
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".salesrankrc"))
    }

    /// Get the output format as OutputFormat enum
    pub fn get_output_format(&self) -> Option<OutputFormat> {
        OutputFormat::parse(&self.display.format)
    }

    /// CSV path from `data.default_path`, with a leading `~/` expanded
    pub fn default_data_path(&self) -> Option<PathBuf> {
        self.data.default_path.as_deref().map(|path| expand_home(path, dirs::home_dir()))
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions { top_hours: self.reports.top_hours, top_customers: self.reports.top_customers }
    }
}

fn expand_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

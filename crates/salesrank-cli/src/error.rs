use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Data(String),
    Report(String),
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Data(msg) => write!(f, "Data error: {}", msg),
            CliError::Report(msg) => write!(f, "Report error: {}", msg),
            CliError::Usage(msg) => write!(f, "Usage error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

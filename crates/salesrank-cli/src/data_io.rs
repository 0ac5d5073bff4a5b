use std::{fs::File, io::Write, path::Path};

use log::info;
use salesrank_engine::ResultSet;

use crate::formatter::{OutputFormat, ResultFormatter};

/// Report export utilities
pub struct DataIO;

impl DataIO {
    /// Write a result to `file_path`, picking the format from the extension
    /// (`.json`, `.csv`) and falling back to `format` otherwise.
    pub fn export(result: &ResultSet, file_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
        let format = match file_path.extension().and_then(|e| e.to_str()) {
            Some(ext) => OutputFormat::parse(ext).unwrap_or(format),
            None => format,
        };

        let output = ResultFormatter::new(format).render(result)?;
        let mut file = File::create(file_path)
            .map_err(|e| anyhow::anyhow!("Failed to create file '{}': {}", file_path.display(), e))?;
        file.write_all(output.as_bytes())?;

        info!("Exported {} rows to '{}'", result.len(), file_path.display());
        Ok(())
    }
}

use prettytable::{Cell, Row, Table};
use salesrank_engine::ResultSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(format_str: &str) -> Option<OutputFormat> {
        match format_str.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        ResultFormatter { format }
    }

    pub fn render(&self, result: &ResultSet) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.render_table(result)),
            OutputFormat::Json => self.render_json(result),
            OutputFormat::Csv => self.render_csv(result),
        }
    }

    /// Print a titled result to stdout.
    pub fn print_result(&self, title: &str, result: &ResultSet) -> anyhow::Result<()> {
        if self.format == OutputFormat::Table {
            println!("{}", title);
        }
        print!("{}", self.render(result)?);
        if self.format == OutputFormat::Table {
            println!("{} rows\n", result.len());
        }
        Ok(())
    }

    fn render_table(&self, result: &ResultSet) -> String {
        if result.columns.is_empty() {
            return String::new();
        }

        let mut table = Table::new();

        // Add header
        let header_cells: Vec<Cell> = result.columns.iter().map(|col| Cell::new(col)).collect();
        table.set_titles(Row::new(header_cells));

        // Add rows
        for row in result.to_strings() {
            let cells: Vec<Cell> = row.iter().map(|val| Cell::new(val)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    fn render_json(&self, result: &ResultSet) -> anyhow::Result<String> {
        let mut output = serde_json::to_string_pretty(&result.to_json_records())?;
        output.push('\n');
        Ok(output)
    }

    fn render_csv(&self, result: &ResultSet) -> anyhow::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&result.columns)?;
        for row in result.to_strings() {
            writer.write_record(&row)?;
        }
        let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use salesrank_engine::Value;

    use super::*;

    fn sample() -> ResultSet {
        let mut result = ResultSet::new(vec!["category".to_string(), "net_sale".to_string()]);
        result.push(vec![Value::from("Beauty"), Value::Real(2550.0)]);
        result.push(vec![Value::from("Home, Garden"), Value::Real(10.5)]);
        result
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("markdown"), None);
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let output = ResultFormatter::new(OutputFormat::Csv).render(&sample()).unwrap();
        assert_eq!(output, "category,net_sale\nBeauty,2550.00\n\"Home, Garden\",10.50\n");
    }

    #[test]
    fn test_render_json() {
        let output = ResultFormatter::new(OutputFormat::Json).render(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["category"], "Beauty");
        assert_eq!(parsed[1]["net_sale"], 10.5);
    }

    #[test]
    fn test_render_table_contains_cells() {
        let output = ResultFormatter::new(OutputFormat::Table).render(&sample()).unwrap();
        assert!(output.contains("category"));
        assert!(output.contains("2550.00"));
        assert!(output.contains("Home, Garden"));
    }

    #[test]
    fn test_render_empty_table() {
        let empty = ResultSet::new(Vec::new());
        assert_eq!(ResultFormatter::new(OutputFormat::Table).render(&empty).unwrap(), "");
    }
}

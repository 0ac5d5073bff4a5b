use salesrank_types::Column;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Malformed grouping or ranking request
    #[error("Invalid query specification: {0}")]
    InvalidSpec(String),

    /// A query referenced a column the row schema does not have
    #[error("Column '{column}' not found (available columns: {})", .available.join(", "))]
    SchemaMismatch { column: String, available: Vec<String> },

    /// Transaction ids must be unique across a dataset
    #[error("Duplicate transaction id {0}")]
    DuplicateTransaction(i64),
}

impl EngineError {
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        EngineError::InvalidSpec(msg.into())
    }

    pub fn unknown_column(column: impl Into<String>) -> Self {
        EngineError::SchemaMismatch {
            column: column.into(),
            available: Column::names().into_iter().map(String::from).collect(),
        }
    }
}

/// Resolve a column name against the row schema.
pub(crate) fn resolve_column(name: &str) -> Result<Column, EngineError> {
    name.parse::<Column>().map_err(|_| EngineError::unknown_column(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_lists_available_columns() {
        let err = resolve_column("age").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Column 'age' not found"));
        assert!(msg.contains("total_sale"));
        assert!(msg.contains("shift"));
    }

    #[test]
    fn test_resolve_known_column() {
        assert_eq!(resolve_column("sale_date").unwrap(), Column::SaleDate);
    }
}

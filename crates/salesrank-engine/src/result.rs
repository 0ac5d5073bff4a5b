//! Tabular query output

use salesrank_types::Value;
use serde::Serialize;

/// One output row. Values line up with `ResultSet::columns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultRow {
    pub values: Vec<Value>,
}

impl ResultRow {
    pub fn new(values: Vec<Value>) -> Self {
        ResultRow { values }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        ResultSet { columns, rows: Vec::new() }
    }

    pub fn push(&mut self, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.columns.len());
        self.rows.push(ResultRow::new(values));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of column `name` in row `row`.
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column_index(name)?;
        self.rows.get(row)?.get(col)
    }

    /// All values of one column, top to bottom.
    pub fn column_values(&self, name: &str) -> Vec<Value> {
        match self.column_index(name) {
            Some(col) => self.rows.iter().filter_map(|r| r.get(col).cloned()).collect(),
            None => Vec::new(),
        }
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_json_records(&self) -> serde_json::Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (name, value) in self.columns.iter().zip(&row.values) {
                    // Non-finite reals have no JSON form and become null.
                    obj.insert(name.clone(), serde_json::to_value(value).unwrap_or(serde_json::Value::Null));
                }
                serde_json::Value::Object(obj)
            })
            .collect();
        serde_json::Value::Array(records)
    }

    /// Rows rendered with `Display`, for text output.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.values.iter().map(|v| v.to_string()).collect()).collect()
    }
}

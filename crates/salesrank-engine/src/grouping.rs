//! Grouping rows by key values

use std::collections::HashMap;

use salesrank_types::{Column, SaleRecord, Value};

/// Rows sharing one combination of group key values.
#[derive(Debug, Clone)]
pub(crate) struct Group {
    pub key: Vec<Value>,
    /// Indices into the source rows, in insertion order
    pub row_indices: Vec<usize>,
}

/// Group rows by the values of `columns`.
///
/// Groups come back in order of first appearance, which is what makes ties
/// resolve by insertion order further down the pipeline.
pub(crate) fn group_rows(rows: &[SaleRecord], columns: &[Column]) -> Vec<Group> {
    let mut positions: HashMap<Vec<Value>, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let key: Vec<Value> = columns.iter().map(|c| row.value(*c)).collect();

        match positions.get(&key) {
            Some(&pos) => groups[pos].row_indices.push(idx),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group { key, row_indices: vec![idx] });
            }
        }
    }

    groups
}

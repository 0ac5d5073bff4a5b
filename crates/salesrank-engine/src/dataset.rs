//! Immutable row storage shared by every engine call

use std::{collections::HashSet, ops::Deref, sync::Arc};

use salesrank_types::SaleRecord;

use crate::errors::EngineError;

/// An ordered, read-only sequence of sale records.
///
/// Cloning is cheap; clones share the same rows. Insertion order is kept and
/// is the tie-break of last resort for every ranking.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[SaleRecord]>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate transaction ids.
    pub fn new(rows: Vec<SaleRecord>) -> Result<Self, EngineError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.transaction_id) {
                return Err(EngineError::DuplicateTransaction(row.transaction_id));
            }
        }
        Ok(Dataset { rows: rows.into() })
    }

    pub fn empty() -> Self {
        Dataset { rows: Arc::from(Vec::new()) }
    }

    pub fn rows(&self) -> &[SaleRecord] {
        &self.rows
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::empty()
    }
}

impl Deref for Dataset {
    type Target = [SaleRecord];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

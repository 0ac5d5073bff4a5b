//! salesrank - Grouped-Ranking Analytics over Sales Transactions
//!
//! This is the root crate that re-exports all components.

pub use salesrank_engine as engine;
pub use salesrank_types as types;

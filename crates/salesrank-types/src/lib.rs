//! Sales Transaction Type System
//!
//! This crate provides the types shared by the salesrank crates:
//! - Scalar values produced by rows and aggregates (`Value`)
//! - The closed set of columns a query may reference (`Column`)
//! - The typed transaction row (`SaleRecord`)
//! - The hour-of-day shift classification (`Shift`)

mod column;
mod record;
mod shift;
mod value;

pub use column::Column;
pub use record::SaleRecord;
pub use shift::Shift;
pub use value::Value;

//! Serde serialization for Value
//!
//! Numbers serialize as JSON numbers, everything else as strings in the same
//! form `Display` produces.

use serde::{Serialize, Serializer};

use super::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(r) => serializer.serialize_f64(*r),
            Value::Varchar(s) => serializer.serialize_str(s),
            Value::Date(_) | Value::Time(_) => serializer.collect_str(self),
        }
    }
}

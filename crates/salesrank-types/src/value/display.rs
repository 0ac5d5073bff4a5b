//! Display implementation for Value

use std::fmt;

use super::Value;

/// How values are shown to users. Reals always carry two decimals, matching
/// the rounding applied to averages.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => {
                if r.is_nan() {
                    write!(f, "NaN")
                } else {
                    write!(f, "{:.2}", r)
                }
            }
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            Value::Varchar(s) => write!(f, "{}", s),
        }
    }
}

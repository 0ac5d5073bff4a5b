//! Comparison implementations for Value

use std::cmp::Ordering;

use super::Value;

/// PartialEq goes through `Ord` so that grouping and ranking agree on what
/// "equal" means (NaN == NaN, 2 == 2.0).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total ordering used for group keys and metric ranking.
///
/// - Integer and Real compare numerically with each other
/// - NaN sorts after every other number
/// - Different non-numeric types fall back to a fixed type order
///
/// Integer vs Real goes through `f64`, so equality is only transitive for
/// integers within 2^53. No stored column mixes the two.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;

        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Time(a), Time(b)) => a.cmp(b),
            (Varchar(a), Varchar(b)) => a.cmp(b),
            _ if self.is_numeric() && other.is_numeric() => {
                let a = self.as_f64().unwrap_or_default();
                let b = other.as_f64().unwrap_or_default();
                compare_f64(a, b)
            }
            _ => type_tag(self).cmp(&type_tag(other)),
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn type_tag(val: &Value) -> u8 {
    match val {
        Value::Integer(_) | Value::Real(_) => 1,
        Value::Varchar(_) => 2,
        Value::Date(_) => 3,
        Value::Time(_) => 4,
    }
}

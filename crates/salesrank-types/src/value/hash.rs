//! Hash implementation for Value

use std::hash::{Hash, Hasher};

use super::Value;

/// Hash must agree with `Eq`, which treats Integer(2) and Real(2.0) as the
/// same value, so every number is hashed through its f64 bit pattern.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Integer(_) | Value::Real(_) => {
                0u8.hash(state);
                let f = self.as_f64().unwrap_or_default();
                if f.is_nan() {
                    f64::NAN.to_bits().hash(state);
                } else if f == 0.0 {
                    // -0.0 == 0.0
                    0.0f64.to_bits().hash(state);
                } else {
                    f.to_bits().hash(state);
                }
            }
            Value::Date(d) => {
                1u8.hash(state);
                d.hash(state);
            }
            Value::Time(t) => {
                2u8.hash(state);
                t.hash(state);
            }
            Value::Varchar(s) => {
                3u8.hash(state);
                s.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equal_numbers_collapse_in_set() {
        let mut set = HashSet::new();
        set.insert(Value::Integer(7));
        set.insert(Value::Real(7.0));
        set.insert(Value::Real(-0.0));
        set.insert(Value::Integer(0));
        assert_eq!(set.len(), 2);
    }
}

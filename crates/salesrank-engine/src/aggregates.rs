//! Aggregate accumulators (SUM, COUNT, COUNT DISTINCT, AVG)

use std::collections::HashSet;

use salesrank_types::{SaleRecord, Value};

use crate::query::{AggregateFunction, MetricSpec};

/// Decimal places kept by AVG.
pub const AVG_SCALE: u32 = 2;

/// Round half away from zero to `scale` decimal places.
pub fn round_to_scale(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

#[derive(Debug, Clone)]
pub(crate) enum AggregateAccumulator {
    Count { count: i64 },
    CountDistinct { seen: HashSet<Value> },
    Sum { sum: Value },
    Avg { sum: f64, count: i64 },
}

impl AggregateAccumulator {
    pub fn new(function: AggregateFunction) -> Self {
        match function {
            AggregateFunction::Count => AggregateAccumulator::Count { count: 0 },
            AggregateFunction::CountDistinct => AggregateAccumulator::CountDistinct { seen: HashSet::new() },
            AggregateFunction::Sum => AggregateAccumulator::Sum { sum: Value::Integer(0) },
            AggregateFunction::Avg => AggregateAccumulator::Avg { sum: 0.0, count: 0 },
        }
    }

    pub fn accumulate(&mut self, value: Value) {
        match self {
            AggregateAccumulator::Count { count } => *count += 1,
            AggregateAccumulator::CountDistinct { seen } => {
                seen.insert(value);
            }
            AggregateAccumulator::Sum { sum } => {
                *sum = add_values(sum, &value);
            }
            AggregateAccumulator::Avg { sum, count } => {
                // Validation guarantees a numeric column
                if let Some(v) = value.as_f64() {
                    *sum += v;
                    *count += 1;
                }
            }
        }
    }

    pub fn finalize(self) -> Value {
        match self {
            AggregateAccumulator::Count { count } => Value::Integer(count),
            AggregateAccumulator::CountDistinct { seen } => Value::Integer(seen.len() as i64),
            AggregateAccumulator::Sum { sum } => sum,
            AggregateAccumulator::Avg { sum, count } => {
                if count == 0 {
                    Value::Real(0.0)
                } else {
                    Value::Real(round_to_scale(sum / count as f64, AVG_SCALE))
                }
            }
        }
    }
}

/// Integer + Integer stays integral unless it overflows; anything involving
/// a Real is a Real.
fn add_values(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match a.checked_add(*b) {
            Some(sum) => Value::Integer(sum),
            None => Value::Real(*a as f64 + *b as f64),
        },
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Value::Real(a + b),
            _ => left.clone(),
        },
    }
}

/// Fold `metric` over the given rows.
pub(crate) fn evaluate_metric(rows: &[SaleRecord], row_indices: &[usize], metric: &MetricSpec) -> Value {
    let mut acc = AggregateAccumulator::new(metric.function);
    for &idx in row_indices {
        acc.accumulate(rows[idx].value(metric.column));
    }
    acc.finalize()
}

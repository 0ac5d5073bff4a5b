//! Ranking over sorted partitions
//!
//! Implements ROW_NUMBER and RANK. Both expect their input already sorted by
//! [`sort_by_metric`].

use std::cmp::Ordering;

use salesrank_types::Value;

use crate::query::Direction;

/// Compare two metric values under a direction.
pub(crate) fn compare_directed(a: &Value, b: &Value, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => a.cmp(b),
        Direction::Desc => b.cmp(a),
    }
}

/// Stable sort by metric. Entries that compare equal keep their relative
/// order, so the caller's order is the tie-break.
pub(crate) fn sort_by_metric<T, F>(entries: &mut [T], direction: Direction, metric: F)
where
    F: Fn(&T) -> &Value,
{
    entries.sort_by(|a, b| compare_directed(metric(a), metric(b), direction));
}

/// Evaluate ROW_NUMBER()
///
/// Unique sequential integers starting from 1, regardless of ties.
///
/// Example: [1, 2, 3, 4, 5]
pub fn evaluate_row_number(len: usize) -> Vec<i64> {
    (1..=len as i64).collect()
}

/// Evaluate RANK() over values already sorted in ranking order
///
/// Equal values share a rank and the next distinct value's rank is its
/// 1-based position (competition ranking).
///
/// Example for scores [95, 90, 90, 85]: ranks are [1, 2, 2, 4]
pub fn evaluate_rank(sorted: &[Value]) -> Vec<i64> {
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut current_rank = 1i64;

    for (idx, value) in sorted.iter().enumerate() {
        if idx > 0 && value.cmp(&sorted[idx - 1]) != Ordering::Equal {
            current_rank = (idx + 1) as i64;
        }
        ranks.push(current_rank);
    }

    ranks
}

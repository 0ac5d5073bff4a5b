//! Grouped-ranking aggregation
//!
//! `ranked_aggregate` runs the whole pipeline for one request:
//! group rows, fold the metric per group, rank groups (globally or per
//! partition) and keep the ones the selection asks for.

use std::collections::BTreeMap;

use log::debug;
use salesrank_types::{SaleRecord, Value};

use crate::{
    aggregates::evaluate_metric,
    errors::EngineError,
    grouping::group_rows,
    query::{RankedAggregate, Selection},
    ranking::{evaluate_rank, sort_by_metric},
    result::ResultSet,
};

/// Output column carrying the partition-local rank.
pub const RANK_COLUMN: &str = "rank";

#[derive(Debug, Clone)]
struct AggregatedGroup {
    key: Vec<Value>,
    metric: Value,
}

impl AggregatedGroup {
    fn into_values(self) -> Vec<Value> {
        let mut values = self.key;
        values.push(self.metric);
        values
    }
}

/// Evaluate a grouped-ranking request over `rows`.
///
/// Output columns are the group-by columns, then the metric, then `rank`
/// for [`Selection::TopPerPartition`]. An empty input gives an empty result.
pub fn ranked_aggregate(rows: &[SaleRecord], query: &RankedAggregate) -> Result<ResultSet, EngineError> {
    query.validate()?;

    let mut columns: Vec<String> = query.group_by.iter().map(|c| c.name().to_string()).collect();
    columns.push(query.metric_label());
    if matches!(query.selection, Selection::TopPerPartition(_)) {
        columns.push(RANK_COLUMN.to_string());
    }
    let mut result = ResultSet::new(columns);

    if rows.is_empty() {
        debug!("ranked_aggregate: empty input, returning no rows");
        return Ok(result);
    }

    let mut groups: Vec<AggregatedGroup> = group_rows(rows, &query.group_by)
        .into_iter()
        .map(|group| AggregatedGroup {
            metric: evaluate_metric(rows, &group.row_indices, &query.metric),
            key: group.key,
        })
        .collect();

    debug!(
        "ranked_aggregate: {} rows -> {} groups by [{}], metric {}",
        rows.len(),
        groups.len(),
        query.group_by.iter().map(|c| c.name()).collect::<Vec<_>>().join(", "),
        query.metric.label()
    );

    match query.selection {
        Selection::All => {
            groups.sort_by(|a, b| a.key.cmp(&b.key));
            for group in groups {
                result.push(group.into_values());
            }
        }
        Selection::TopN(n) => {
            sort_by_metric(&mut groups, query.direction, |g| &g.metric);
            groups.truncate(n);
            for group in groups {
                result.push(group.into_values());
            }
        }
        Selection::TopPerPartition(k) => {
            let partition_positions: Vec<usize> = query
                .partition_by
                .iter()
                .filter_map(|column| query.group_by.iter().position(|c| c == column))
                .collect();

            // BTreeMap so partitions come out ordered by key; groups inside a
            // bucket keep first-appearance order for the stable sort.
            let mut partitions: BTreeMap<Vec<Value>, Vec<AggregatedGroup>> = BTreeMap::new();
            for group in groups {
                let partition_key = partition_positions.iter().map(|&i| group.key[i].clone()).collect();
                partitions.entry(partition_key).or_default().push(group);
            }

            debug!("ranked_aggregate: ranking within {} partitions, keeping rank <= {}", partitions.len(), k);

            for (_, mut bucket) in partitions {
                sort_by_metric(&mut bucket, query.direction, |g| &g.metric);
                let metrics: Vec<Value> = bucket.iter().map(|g| g.metric.clone()).collect();
                let ranks = evaluate_rank(&metrics);

                for (group, rank) in bucket.into_iter().zip(ranks) {
                    if rank as usize > k {
                        break;
                    }
                    let mut values = group.into_values();
                    values.push(Value::Integer(rank));
                    result.push(values);
                }
            }
        }
    }

    Ok(result)
}

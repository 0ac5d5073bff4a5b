//! Query specifications: what to group by, what to measure, how to rank and
//! which groups to keep.

use std::{fmt, str::FromStr};

use salesrank_types::Column;

use crate::errors::{resolve_column, EngineError};

/// Aggregate folded over each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Count,
    CountDistinct,
    /// Rounded to two decimals, see [`crate::AVG_SCALE`]
    Avg,
}

impl AggregateFunction {
    pub fn name(self) -> &'static str {
        match self {
            AggregateFunction::Sum => "sum",
            AggregateFunction::Count => "count",
            AggregateFunction::CountDistinct => "count_distinct",
            AggregateFunction::Avg => "avg",
        }
    }

    fn requires_numeric(self) -> bool {
        matches!(self, AggregateFunction::Sum | AggregateFunction::Avg)
    }
}

impl FromStr for AggregateFunction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sum" => Ok(AggregateFunction::Sum),
            "count" => Ok(AggregateFunction::Count),
            "count_distinct" | "distinct" => Ok(AggregateFunction::CountDistinct),
            "avg" | "average" => Ok(AggregateFunction::Avg),
            _ => Err(EngineError::invalid_spec(format!("Unknown aggregate function: {}", s))),
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aggregate applied to one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSpec {
    pub function: AggregateFunction,
    pub column: Column,
}

impl MetricSpec {
    pub fn new(function: AggregateFunction, column: Column) -> Self {
        MetricSpec { function, column }
    }

    pub fn sum(column: Column) -> Self {
        MetricSpec::new(AggregateFunction::Sum, column)
    }

    pub fn count(column: Column) -> Self {
        MetricSpec::new(AggregateFunction::Count, column)
    }

    pub fn count_distinct(column: Column) -> Self {
        MetricSpec::new(AggregateFunction::CountDistinct, column)
    }

    pub fn avg(column: Column) -> Self {
        MetricSpec::new(AggregateFunction::Avg, column)
    }

    /// Build a metric from a function name and a column name.
    pub fn parse(function: &str, column: &str) -> Result<Self, EngineError> {
        Ok(MetricSpec::new(function.parse()?, resolve_column(column)?))
    }

    /// Default output column name, e.g. `sum_total_sale`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.function.name(), self.column.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

/// Which groups survive ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Every group, ordered by group key ascending. No ranking.
    #[default]
    All,
    /// Hard cutoff at `n` rows over one global partition (LIMIT semantics).
    /// Ties straddling the cutoff are broken by first appearance.
    TopN(usize),
    /// Every group whose RANK within its partition is at most `k`, ties
    /// included.
    TopPerPartition(usize),
}

/// A complete grouped-ranking request.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedAggregate {
    pub group_by: Vec<Column>,
    pub partition_by: Vec<Column>,
    pub metric: MetricSpec,
    pub direction: Direction,
    pub selection: Selection,
    /// Output name for the metric column; `metric.label()` when unset.
    pub metric_alias: Option<String>,
}

impl RankedAggregate {
    pub fn new(group_by: impl Into<Vec<Column>>, metric: MetricSpec) -> Self {
        RankedAggregate {
            group_by: group_by.into(),
            partition_by: Vec::new(),
            metric,
            direction: Direction::default(),
            selection: Selection::default(),
            metric_alias: None,
        }
    }

    /// Build a request from column names, failing with `SchemaMismatch` on
    /// any name the row schema does not know.
    pub fn from_names(group_by: &[&str], metric: MetricSpec) -> Result<Self, EngineError> {
        let group_by = group_by.iter().map(|name| resolve_column(name)).collect::<Result<Vec<_>, _>>()?;
        Ok(RankedAggregate::new(group_by, metric))
    }

    pub fn partition_by(mut self, columns: impl Into<Vec<Column>>) -> Self {
        self.partition_by = columns.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn select(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn top_n(self, n: usize) -> Self {
        self.select(Selection::TopN(n))
    }

    pub fn top_per_partition(self, k: usize) -> Self {
        self.select(Selection::TopPerPartition(k))
    }

    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.metric_alias = Some(name.into());
        self
    }

    pub fn metric_label(&self) -> String {
        self.metric_alias.clone().unwrap_or_else(|| self.metric.label())
    }

    /// Check the request is well formed before touching any rows.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.group_by.is_empty() {
            return Err(EngineError::invalid_spec("GROUP BY requires at least one column"));
        }

        for (idx, column) in self.group_by.iter().enumerate() {
            if self.group_by[..idx].contains(column) {
                return Err(EngineError::invalid_spec(format!(
                    "Column '{}' appears more than once in GROUP BY",
                    column
                )));
            }
        }

        if self.metric.function.requires_numeric() && !self.metric.column.is_numeric() {
            return Err(EngineError::invalid_spec(format!(
                "{} requires a numeric column, '{}' is not numeric",
                self.metric.function.name().to_uppercase(),
                self.metric.column
            )));
        }

        match self.selection {
            Selection::All => {}
            Selection::TopN(0) => {
                return Err(EngineError::invalid_spec("TopN limit must be positive"));
            }
            Selection::TopN(_) => {}
            Selection::TopPerPartition(0) => {
                return Err(EngineError::invalid_spec("TopPerPartition rank must be positive"));
            }
            Selection::TopPerPartition(_) => {
                if let Some(column) =
                    self.partition_by.iter().find(|column| !self.group_by.contains(column))
                {
                    return Err(EngineError::invalid_spec(format!(
                        "PARTITION BY column '{}' is not one of the GROUP BY columns",
                        column
                    )));
                }
            }
        }

        Ok(())
    }
}

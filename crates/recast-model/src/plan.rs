//! Compiled, execution-ready form of a mapping spec.

use std::collections::BTreeSet;

/// How one output column's value is produced from an input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillStrategy {
    /// Copy the named input column; absent keys yield an empty cell and are
    /// counted as missing fields.
    Copy { source: String },
    /// Emit the value unconditionally.
    Constant { value: String },
    /// Copy the named input column when it is present and non-empty,
    /// otherwise fall back to the default.
    CopyOrDefault { source: String, default: String },
}

/// One resolved output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedColumn {
    pub name: String,
    pub fill: FillStrategy,
}

/// Resolved output column order plus a fill strategy per column.
///
/// Built once per spec and shared read-only across every table in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformPlan {
    columns: Vec<PlannedColumn>,
}

impl TransformPlan {
    pub fn new(columns: Vec<PlannedColumn>) -> Self {
        Self { columns }
    }

    /// Columns in output order.
    pub fn columns(&self) -> &[PlannedColumn] {
        &self.columns
    }

    /// Output header, in plan order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Every input column some strategy reads from.
    pub fn source_columns(&self) -> BTreeSet<&str> {
        self.columns
            .iter()
            .filter_map(|column| match &column.fill {
                FillStrategy::Copy { source } | FillStrategy::CopyOrDefault { source, .. } => {
                    Some(source.as_str())
                }
                FillStrategy::Constant { .. } => None,
            })
            .collect()
    }

    /// Number of output columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

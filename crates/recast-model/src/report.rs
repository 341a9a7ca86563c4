//! Per-table work units and batch reporting.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One unit of batch work: an input table paired with its output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TableJob {
    /// Pairs an input table with an output path of the same file name under
    /// `output_dir`.
    pub fn new(input: PathBuf, output_dir: &Path) -> Self {
        let file_name = input.file_name().map(PathBuf::from).unwrap_or_default();
        let output = output_dir.join(file_name);
        Self { input, output }
    }

    /// Table name used in logs and reports (the input file name).
    pub fn table_name(&self) -> String {
        self.input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }

    /// File stem used for per-table config resolution.
    pub fn table_stem(&self) -> String {
        self.input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string()
    }
}

/// Counters for one converted table.
///
/// Every non-fatal condition observed while processing a table lands in one
/// of these counters so callers can distinguish degraded runs from clean
/// ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Input file name.
    pub table: String,
    /// Where the converted table was written.
    pub output: PathBuf,
    /// Data rows read from the input.
    pub rows_read: usize,
    /// Rows written to the output.
    pub rows_written: usize,
    /// Malformed input records dropped by the reader.
    pub rows_skipped: usize,
    /// Copy cells emitted empty because the source column was absent.
    pub missing_fields: usize,
}

impl TableReport {
    /// True when the table converted but dropped records or filled missing
    /// fields along the way.
    pub fn is_degraded(&self) -> bool {
        self.rows_skipped > 0 || self.missing_fields > 0
    }
}

/// Result of one table job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableOutcome {
    /// The table was read, transformed, and written.
    Converted(TableReport),
    /// The table was not attempted (for example, no config matched it).
    Skipped { table: String, reason: String },
    /// Reading, transforming, or writing the table failed.
    Failed { table: String, error: String },
}

impl TableOutcome {
    pub fn table(&self) -> &str {
        match self {
            Self::Converted(report) => &report.table,
            Self::Skipped { table, .. } | Self::Failed { table, .. } => table,
        }
    }
}

/// Aggregated outcome of a batch run, one entry per discovered table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<TableOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: TableOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TableOutcome::Converted(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TableOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TableOutcome::Failed { .. }))
            .count()
    }

    /// The batch as a whole failed: nothing converted while at least one
    /// table was attempted and failed. Individual failures alongside
    /// successes do not fail the batch.
    pub fn batch_failed(&self) -> bool {
        self.converted() == 0 && self.failed() > 0
    }
}

//! The batch pipeline: read, transform, write, one table at a time.
//!
//! Failures are isolated at table granularity. A table that cannot be read
//! or written becomes a `Failed` outcome in the report and the loop moves
//! on; only precondition failures (config, output directory) abort the
//! batch, and those are raised before any row is touched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use recast_ingest::{RowReader, RowWriter};
use recast_model::{BatchReport, TableJob, TableOutcome, TableReport, TransformPlan};
use recast_transform::apply;

/// File name of the JSON batch report written next to the outputs.
pub const REPORT_FILE_NAME: &str = "batch-report.json";

/// One discovered table paired with the plan governing it, or a reason it
/// is skipped.
pub struct PlannedJob<'a> {
    pub job: TableJob,
    pub plan: Option<&'a TransformPlan>,
    pub skip_reason: Option<String>,
}

/// Runs every job and aggregates per-table outcomes into a report.
///
/// # Errors
///
/// Only when the output directory cannot be created; everything past that
/// point is recorded per table instead of raised.
pub fn run_batch(jobs: Vec<PlannedJob<'_>>, output_dir: &Path) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let batch_start = Instant::now();
    let mut report = BatchReport::default();

    for planned in jobs {
        let table = planned.job.table_name();
        let span = info_span!("convert_table", table = %table);
        let _guard = span.enter();

        let Some(plan) = planned.plan else {
            let reason = planned
                .skip_reason
                .unwrap_or_else(|| "no plan".to_string());
            warn!(reason = %reason, "table skipped");
            report.push(TableOutcome::Skipped { table, reason });
            continue;
        };

        match convert_table(&planned.job, plan) {
            Ok(table_report) => report.push(TableOutcome::Converted(table_report)),
            Err(error) => {
                let error = format!("{error:#}");
                warn!(error = %error, "table failed");
                report.push(TableOutcome::Failed { table, error });
            }
        }
    }

    info!(
        tables = report.outcomes.len(),
        converted = report.converted(),
        skipped = report.skipped(),
        failed = report.failed(),
        duration_ms = batch_start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(report)
}

/// Streams one table through the plan: header out first, then each
/// well-formed input row transformed and written in arrival order.
pub fn convert_table(job: &TableJob, plan: &TransformPlan) -> Result<TableReport> {
    let start = Instant::now();
    let mut reader = RowReader::open(&job.input)
        .with_context(|| format!("read table {}", job.input.display()))?;

    let header: BTreeSet<&str> = reader.headers().iter().map(String::as_str).collect();
    for source in plan.source_columns() {
        if !header.contains(source) {
            warn!(
                table = %job.table_name(),
                column = source,
                "expected source column absent from input header"
            );
        }
    }

    let mut writer = RowWriter::create(&job.output, &plan.column_names())
        .with_context(|| format!("write table {}", job.output.display()))?;

    let mut table_report = TableReport {
        table: job.table_name(),
        output: job.output.clone(),
        ..TableReport::default()
    };
    while let Some(row) = reader.next_row() {
        table_report.rows_read += 1;
        let outcome = apply(plan, &row);
        table_report.missing_fields += outcome.missing_fields;
        writer
            .write_row(&outcome.cells)
            .with_context(|| format!("write table {}", job.output.display()))?;
        table_report.rows_written += 1;
    }
    table_report.rows_skipped = reader.skipped();
    writer
        .finish()
        .with_context(|| format!("write table {}", job.output.display()))?;

    info!(
        rows_read = table_report.rows_read,
        rows_written = table_report.rows_written,
        rows_skipped = table_report.rows_skipped,
        missing_fields = table_report.missing_fields,
        duration_ms = start.elapsed().as_millis(),
        "table converted"
    );
    Ok(table_report)
}

/// Writes the batch report as pretty JSON into the output directory.
pub fn write_batch_report_json(output_dir: &Path, report: &BatchReport) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(report).context("serialize batch report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("write batch report {}", path.display()))?;
    Ok(path)
}

//! Streaming CSV row reader.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::warn;

use recast_model::Row;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// One-pass reader over a table file.
///
/// The header row is consumed on open; `next_row` then yields one [`Row`]
/// per data record. Malformed records (CSV parse or encoding errors, wrong
/// field count) are skipped with a warning and counted rather than aborting
/// the table. Not restartable; re-reading means reopening.
pub struct RowReader {
    path: PathBuf,
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<File>,
    skipped: usize,
}

impl RowReader {
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|source| IngestError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| IngestError::Header {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(normalize_header)
            .collect();
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records: reader.into_records(),
            skipped: 0,
        })
    }

    /// Column names from the header row, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Malformed records dropped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The next well-formed row, or `None` at end of file.
    pub fn next_row(&mut self) -> Option<Row> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(error) => {
                    warn!(
                        table = %self.path.display(),
                        %error,
                        "skipping malformed record"
                    );
                    self.skipped += 1;
                    continue;
                }
            };
            if record.len() != self.headers.len() {
                warn!(
                    table = %self.path.display(),
                    expected = self.headers.len(),
                    found = record.len(),
                    "skipping record with wrong field count"
                );
                self.skipped += 1;
                continue;
            }
            let row: Row = self
                .headers
                .iter()
                .cloned()
                .zip(record.iter().map(|cell| cell.trim().to_string()))
                .collect();
            return Some(row);
        }
    }
}

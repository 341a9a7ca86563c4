//! CSV row writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::{IngestError, Result};

/// Writes a header line from a fixed column order, then one line per row in
/// arrival order.
pub struct RowWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl RowWriter {
    pub fn create(path: &Path, columns: &[String]) -> Result<Self> {
        let mut writer =
            WriterBuilder::new()
                .from_path(path)
                .map_err(|source| IngestError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
        writer
            .write_record(columns)
            .map_err(|source| IngestError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    pub fn write_row(&mut self, cells: &[String]) -> Result<()> {
        self.writer
            .write_record(cells)
            .map_err(|source| IngestError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Flushes and closes the output.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|source| IngestError::Flush {
            path: self.path.clone(),
            source,
        })
    }
}

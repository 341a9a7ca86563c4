//! Thin streaming adapters between table files and [`recast_model::Row`]s.

pub mod discovery;
pub mod error;
pub mod reader;
pub mod writer;

pub use discovery::list_table_files;
pub use error::{IngestError, Result};
pub use reader::RowReader;
pub use writer::RowWriter;

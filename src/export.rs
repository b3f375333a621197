//! CSV export for collected file records

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::format::format_size;
use crate::record::FileRecord;

/// Failure while exporting the record set.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be opened for writing - commonly because the
    /// parent directory does not exist or the file is held open by another
    /// program.
    #[error("cannot open '{}' for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing rows failed after the destination was opened.
    #[error("failed writing CSV: {0}")]
    Write(#[from] csv::Error),
}

const HEADER: [&str; 5] = ["Name", "Path", "Size", "Last modified (TS)", "Created (TS)"];

/// One CSV row. Field order and rename attributes fix the column order and
/// header text to match [`HEADER`].
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Path")]
    path: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Last modified (TS)")]
    modified: f64,
    #[serde(rename = "Created (TS)")]
    created: f64,
}

impl<'a> From<&'a FileRecord> for CsvRow<'a> {
    fn from(record: &'a FileRecord) -> Self {
        Self {
            name: &record.name,
            path: record.directory.display().to_string(),
            size: format_size(record.size_bytes),
            modified: record.modified_at,
            created: record.created_at,
        }
    }
}

/// Serialize records to a CSV file at `path`.
///
/// The destination is only opened here, once the caller holds the complete
/// record set; aborting before this point leaves no partial output. The size
/// column carries the formatted string, timestamps stay raw numeric seconds.
pub fn write_csv(records: &[FileRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    if records.is_empty() {
        // serialize() only emits the header alongside a first row, so an empty
        // run writes it explicitly
        writer.write_record(HEADER)?;
    }
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

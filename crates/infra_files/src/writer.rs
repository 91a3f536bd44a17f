//! Record file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

use crate::error::FileError;
use crate::format::{format_line, RecordLine, LINE_ENDING};

/// Writes one `<id>,<amount>` line per record, in the given order
///
/// # Errors
///
/// Returns `FileError::Io` if the writer fails
pub fn write_records<T: RecordLine, W: Write>(mut writer: W, records: &[T]) -> Result<(), FileError> {
    for record in records {
        writer.write_all(format_line(record).as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) a file and writes the records to it
///
/// # Errors
///
/// Returns `FileError::Access` if the file cannot be created, otherwise the
/// errors of [`write_records`].
#[instrument(skip_all, fields(path = %path.as_ref().display(), records = records.len()))]
pub fn write_records_to_path<T: RecordLine>(
    path: impl AsRef<Path>,
    records: &[T],
) -> Result<(), FileError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| FileError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(BufWriter::new(file), records)?;
    info!("Wrote record file");
    Ok(())
}

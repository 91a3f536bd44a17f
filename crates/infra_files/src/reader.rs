//! Record file reader

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::error::FileError;
use crate::format::{parse_line, RecordLine};

/// Largest capacity reserved up front, whatever the header claims
const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

/// Reads a count line followed by that many `<id>,<amount>` lines
///
/// Data lines are read until the end of input or the first empty line.
///
/// # Errors
///
/// - `FileError::MalformedHeader` if the first line is missing, empty or not a count
/// - `FileError::MalformedRecord` if a data line does not parse or is not UTF-8
/// - `FileError::CountMismatch` if the number of data lines differs from the count
/// - `FileError::Io` if the underlying reader fails
pub fn read_records<T: RecordLine, R: BufRead>(reader: R) -> Result<Vec<T>, FileError> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    let declared = parse_count(&header)?;

    let mut records = Vec::with_capacity(declared.min(MAX_PREALLOCATED_RECORDS));
    for (index, line) in lines.enumerate() {
        let line_number = index + 2;
        let line = line.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => FileError::MalformedRecord {
                line: line_number,
                raw: String::new(),
                reason: "line is not valid UTF-8".to_string(),
            },
            _ => FileError::Io(err),
        })?;
        if line.is_empty() {
            break;
        }
        let (id, amount) = parse_line(&line).map_err(|reason| FileError::MalformedRecord {
            line: line_number,
            raw: line.clone(),
            reason,
        })?;
        records.push(T::from_fields(id, amount));
    }

    if records.len() != declared {
        return Err(FileError::CountMismatch {
            declared,
            actual: records.len(),
        });
    }

    debug!(records = records.len(), "Parsed record file");
    Ok(records)
}

/// Opens and reads a record file
///
/// # Arguments
///
/// * `path` - Location of the file
///
/// # Errors
///
/// Returns `FileError::Access` if the file cannot be opened, otherwise the
/// errors of [`read_records`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_records_from_path<T: RecordLine>(path: impl AsRef<Path>) -> Result<Vec<T>, FileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(BufReader::new(file))?;
    info!(records = records.len(), "Read record file");
    Ok(records)
}

fn parse_count(header: &str) -> Result<usize, FileError> {
    if header.is_empty() || !header.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FileError::MalformedHeader {
            raw: header.to_string(),
        });
    }
    header.parse().map_err(|_| FileError::MalformedHeader {
        raw: header.to_string(),
    })
}

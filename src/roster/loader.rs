use std::fs::File;
use std::io::Read;
use std::path::Path;

use idlocator_core::RecordStore;
use tracing::debug;

use super::error::LoadError;
use super::schema::Schema;

/// Parse a CSV roster from any reader.
///
/// The first row must be a header. Values are trimmed, a UTF-8 byte order
/// mark is tolerated, and every column that is not the id or name becomes a
/// record attribute in header order.
///
/// # Errors
///
/// Returns [`LoadError`] for malformed CSV, a header lacking identity
/// columns, or rows that break roster invariants.
pub fn from_reader<R: Read>(reader: R) -> Result<RecordStore, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let schema = Schema::from_headers(reader.headers()?)?;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(schema.record(&row));
    }

    debug!(rows = records.len(), "parsed roster rows");
    Ok(RecordStore::new(records)?)
}

/// Parse a CSV roster from a file on disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be opened, otherwise the
/// same errors as [`from_reader`].
pub fn from_path(path: impl AsRef<Path>) -> Result<RecordStore, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(file)
}

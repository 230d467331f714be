use std::io;
use std::path::PathBuf;

use idlocator_core::StoreError;
use thiserror::Error;

/// Errors raised while turning CSV input into a [`RecordStore`](idlocator_core::RecordStore).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The roster file could not be opened.
    #[error("failed to open roster {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV data was malformed.
    #[error("malformed roster: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks an identity column.
    #[error("roster header is missing the {column} column")]
    MissingColumn { column: &'static str },

    /// A row violated a roster invariant.
    #[error("invalid roster: {0}")]
    Store(#[from] StoreError),
}

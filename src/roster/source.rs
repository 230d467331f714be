use std::fmt;
use std::path::PathBuf;

use idlocator_core::RecordStore;
use tracing::info;

use super::error::LoadError;
use super::loader;

const SAMPLE_ROSTER: &str = include_str!("../../data/sample_people.csv");

/// Where the roster for a session comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// The 20-row sample roster compiled into the binary.
    Sample,
    /// A CSV file on disk.
    File(PathBuf),
}

impl RosterSource {
    /// Load a fresh [`RecordStore`] from this source.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the roster cannot be read or is invalid.
    pub fn load(&self) -> Result<RecordStore, LoadError> {
        let store = match self {
            RosterSource::Sample => loader::from_reader(SAMPLE_ROSTER.as_bytes())?,
            RosterSource::File(path) => loader::from_path(path)?,
        };
        info!(source = %self, records = store.len(), "loaded roster");
        Ok(store)
    }
}

impl fmt::Display for RosterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterSource::Sample => f.write_str("bundled sample"),
            RosterSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

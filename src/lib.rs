//! Library side of the `idlocator` binary.
//!
//! The matching engine lives in `idlocator-core` and is re-exported here
//! together with the CSV roster loader, so embedders can load a roster and
//! run queries without going through the command line.

pub mod app_dirs;
pub mod logging;
pub mod roster;

pub use idlocator_core::{
    Attributes, EncodeError, MatchEngine, MatchError, MatchResult, MatchStrategy, MatchedOn,
    NotFoundError, PhoneticCode, Record, RecordStore, RosterSnapshot, StoreError, encode,
    normalize_letters, sounds_alike,
};
pub use roster::{LoadError, RosterSource};

//! Loading rosters from CSV into a [`RecordStore`](idlocator_core::RecordStore).

mod error;
pub mod loader;
mod schema;
mod source;

pub use error::LoadError;
pub use loader::{from_path, from_reader};
pub use source::RosterSource;

mod record;
mod snapshot;
mod store;

pub use record::{Attributes, Record};
pub use snapshot::RosterSnapshot;
pub use store::RecordStore;

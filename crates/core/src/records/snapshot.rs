use std::sync::{Arc, PoisonError, RwLock};

use super::store::RecordStore;

/// Shared handle to the current roster.
///
/// Readers take an `Arc` to the store that is current at the time of the call
/// and keep using it for the whole query. A reload builds a fresh store and
/// swaps the pointer, so in-flight readers never see a half-updated roster.
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    current: Arc<RwLock<Arc<RecordStore>>>,
}

impl RosterSnapshot {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// The store readers should use for their next query.
    #[must_use]
    pub fn current(&self) -> Arc<RecordStore> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `store` as the current roster and return the one it replaced.
    pub fn replace(&self, store: RecordStore) -> Arc<RecordStore> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(store))
    }
}

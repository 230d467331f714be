use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use super::record::Record;
use crate::error::{NotFoundError, StoreError};

/// Ordered, immutable collection of records loaded for one session.
///
/// The store has no search logic of its own. It validates the roster once
/// when built and afterwards only hands records out in load order or by id.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from records in load order.
    ///
    /// # Errors
    ///
    /// Fails on the first record with a blank id or name, or whose id was
    /// already used by an earlier record.
    pub fn new(records: impl IntoIterator<Item = Record>) -> Result<Self, StoreError> {
        let records: Vec<Record> = records.into_iter().collect();
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let id = record.id.trim();
            if id.is_empty() {
                return Err(StoreError::EmptyId { position });
            }
            if record.name.trim().is_empty() {
                return Err(StoreError::BlankName {
                    position,
                    id: id.to_string(),
                });
            }
            match by_id.entry(id.to_string()) {
                Entry::Occupied(existing) => {
                    return Err(StoreError::DuplicateId {
                        position,
                        first: *existing.get(),
                        id: id.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        debug!(records = records.len(), "built record store");
        Ok(Self { records, by_id })
    }

    /// All records in load order.
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Look up a record by id, ignoring surrounding whitespace in `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no record carries the id.
    pub fn by_id(&self, id: &str) -> Result<&Record, NotFoundError> {
        let id = id.trim();
        self.by_id
            .get(id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| NotFoundError { id: id.to_string() })
    }

    /// Record at `position` in load order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

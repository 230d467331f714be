use serde::Serialize;

use crate::records::Record;

/// Which part of a record satisfied the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchedOn {
    /// The whole name compared equal.
    FullName,
    /// A single word of the name compared equal; `index` is the first such word.
    Token { index: usize },
    /// The record was requested by id.
    Id,
}

/// A record returned for a query, borrowed from the store it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub record: &'a Record,
    pub matched_on: MatchedOn,
}

impl<'a> MatchResult<'a> {
    #[must_use]
    pub fn new(record: &'a Record, matched_on: MatchedOn) -> Self {
        Self { record, matched_on }
    }

    /// Shortcut for the matched record's id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.record.id
    }
}

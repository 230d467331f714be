use thiserror::Error;

/// Errors raised while turning a name into a [`PhoneticCode`](crate::PhoneticCode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Nothing was left to encode once punctuation and unfoldable letters were removed.
    #[error("name contains no encodable letters")]
    EmptyInput,
}

/// Errors returned by the [`MatchEngine`](crate::MatchEngine) for unusable queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The query was blank or had no letters to compare.
    #[error("invalid query '{query}': {reason}")]
    InvalidQuery { query: String, reason: &'static str },
}

impl MatchError {
    pub(crate) fn blank(query: &str) -> Self {
        Self::InvalidQuery {
            query: query.to_string(),
            reason: "query is empty",
        }
    }

    pub(crate) fn no_letters(query: &str) -> Self {
        Self::InvalidQuery {
            query: query.to_string(),
            reason: "query contains no letters",
        }
    }
}

/// Returned when an id lookup misses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no record with id '{id}'")]
pub struct NotFoundError {
    pub id: String,
}

/// Invariant violations detected while building a [`RecordStore`](crate::RecordStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record had an id that was empty after trimming.
    #[error("record {position} has an empty id")]
    EmptyId { position: usize },

    /// A record had a name that was empty after trimming.
    #[error("record {position} (id '{id}') has a blank name")]
    BlankName { position: usize, id: String },

    /// Two records shared the same id.
    #[error("record {position} reuses id '{id}' first seen at record {first}")]
    DuplicateId {
        position: usize,
        first: usize,
        id: String,
    },
}

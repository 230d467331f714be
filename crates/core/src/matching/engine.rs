use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::result::{MatchResult, MatchedOn};
use crate::error::{MatchError, NotFoundError};
use crate::phonetic::{PhoneticCode, encode, normalize_letters};
use crate::records::{Record, RecordStore};

/// How names are compared with the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Equal Soundex codes.
    #[default]
    Phonetic,
    /// Equal letters, ignoring case, accents and punctuation.
    Literal,
}

impl MatchStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Phonetic => "phonetic",
            MatchStrategy::Literal => "literal",
        }
    }

    fn key(self, text: &str) -> Option<Key> {
        match self {
            MatchStrategy::Phonetic => encode(text).ok().map(Key::Code),
            MatchStrategy::Literal => {
                let letters = normalize_letters(text);
                (!letters.is_empty()).then_some(Key::Letters(letters))
            }
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown strategy name.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown match strategy '{0}' (expected 'phonetic' or 'literal')")]
pub struct ParseStrategyError(String);

impl FromStr for MatchStrategy {
    type Err = ParseStrategyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "phonetic" | "soundex" => Ok(MatchStrategy::Phonetic),
            "literal" | "exact" => Ok(MatchStrategy::Literal),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Comparison key derived from a query or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Key {
    Code(PhoneticCode),
    Letters(String),
}

/// Resolves name queries against a [`RecordStore`].
///
/// A record matches when the key of its whole name, or of any single word in
/// it, equals the key of the query. Matches come back in store order and the
/// engine never caps how many are returned. The engine holds no state beyond
/// its strategy, so one instance can serve any number of stores and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchEngine {
    strategy: MatchStrategy,
}

impl MatchEngine {
    #[must_use]
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    /// Engine comparing Soundex codes.
    #[must_use]
    pub fn phonetic() -> Self {
        Self::new(MatchStrategy::Phonetic)
    }

    /// Engine comparing folded letters.
    #[must_use]
    pub fn literal() -> Self {
        Self::new(MatchStrategy::Literal)
    }

    #[must_use]
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Return every record whose name matches `query`, in store order.
    ///
    /// An empty vector means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidQuery`] when `query` is blank or has no
    /// letters to compare.
    pub fn find_by_name<'s>(
        &self,
        query: &str,
        store: &'s RecordStore,
    ) -> Result<Vec<MatchResult<'s>>, MatchError> {
        if query.trim().is_empty() {
            return Err(MatchError::blank(query));
        }
        let wanted = self
            .strategy
            .key(query)
            .ok_or_else(|| MatchError::no_letters(query))?;

        let matches: Vec<MatchResult<'s>> = store
            .iter()
            .filter_map(|record| {
                self.matched_on(record, &wanted)
                    .map(|matched_on| MatchResult::new(record, matched_on))
            })
            .collect();

        debug!(
            query,
            strategy = %self.strategy,
            scanned = store.len(),
            matched = matches.len(),
            "resolved name query"
        );
        Ok(matches)
    }

    /// Return the record with `id` as a match.
    ///
    /// # Errors
    ///
    /// Propagates [`NotFoundError`] from the store.
    pub fn find_by_id<'s>(
        &self,
        id: &str,
        store: &'s RecordStore,
    ) -> Result<MatchResult<'s>, NotFoundError> {
        store
            .by_id(id)
            .map(|record| MatchResult::new(record, MatchedOn::Id))
    }

    fn matched_on(&self, record: &Record, wanted: &Key) -> Option<MatchedOn> {
        if self.strategy.key(&record.name).as_ref() == Some(wanted) {
            return Some(MatchedOn::FullName);
        }
        record
            .name_tokens()
            .position(|token| self.strategy.key(token).as_ref() == Some(wanted))
            .map(|index| MatchedOn::Token { index })
    }
}

//! Phonetic name resolution over an in-memory roster.
//!
//! [`encode`] turns a name into a four character Soundex code, a
//! [`RecordStore`] holds a validated roster in load order, and a
//! [`MatchEngine`] scans the store for records whose name, or a word of it,
//! shares the query's code.

pub mod error;
pub mod matching;
pub mod phonetic;
pub mod records;

pub use error::{EncodeError, MatchError, NotFoundError, StoreError};
pub use matching::{MatchEngine, MatchResult, MatchStrategy, MatchedOn, ParseStrategyError};
pub use phonetic::{PhoneticCode, encode, normalize_letters, sounds_alike};
pub use records::{Attributes, Record, RecordStore, RosterSnapshot};

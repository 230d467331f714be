//! Query resolution over a record store.

mod engine;
mod result;

pub use engine::{MatchEngine, MatchStrategy, ParseStrategyError};
pub use result::{MatchResult, MatchedOn};

#[cfg(test)]
mod tests;

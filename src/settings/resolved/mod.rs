use idlocator::{MatchStrategy, RosterSource};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(super) use validation::{parse_format, parse_strategy};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub roster: RosterSource,
    pub strategy: MatchStrategy,
    pub output: OutputFormat,
    pub limit: Option<usize>,
    pub log_level: String,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration to stderr.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}

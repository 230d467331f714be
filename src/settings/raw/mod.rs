use std::env;

use anyhow::{Error, Result};
use idlocator::{MatchStrategy, RosterSource, logging};
use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{
    ConfigSources, ResolvedConfig, SettingSource, parse_format, parse_strategy,
};

mod sections;

use sections::{LoggingSection, MatchingSection, OutputSection, RosterSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    roster: RosterSection,
    matching: MatchingSection,
    output: OutputSection,
    logging: LoggingSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.roster.apply_cli_overrides(cli);
        self.matching.apply_cli_overrides(cli);
        self.output.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            matching_strategy: detect_source(
                cli.no_soundex,
                self.matching.strategy.is_some(),
                "IDLOCATOR__MATCHING__STRATEGY",
                "--no-soundex",
                "matching.strategy",
            ),
            output_format: detect_source(
                cli.output.is_some(),
                self.output.format.is_some(),
                "IDLOCATOR__OUTPUT__FORMAT",
                "--output",
                "output.format",
            ),
            output_limit: detect_source(
                cli.limit.is_some(),
                self.output.limit.is_some(),
                "IDLOCATOR__OUTPUT__LIMIT",
                "--limit",
                "output.limit",
            ),
            logging_level: detect_source(
                cli.verbose > 0,
                true,
                "IDLOCATOR__LOGGING__LEVEL",
                "--verbose",
                "logging.level",
            ),
        };

        let strategy = match self.matching.strategy.as_deref() {
            Some(raw) => parse_strategy(raw, sources.source_for_strategy())?,
            None => MatchStrategy::default(),
        };
        let output = match self.output.format.as_deref() {
            Some(raw) => parse_format(raw, sources.source_for_format())?,
            None => OutputFormat::default(),
        };
        let roster = match self.roster.path {
            Some(path) => RosterSource::File(path),
            None => RosterSource::Sample,
        };

        let config = ResolvedConfig {
            roster,
            strategy,
            output,
            limit: self.output.limit,
            log_level: logging::level_for(cli.verbose, self.logging.level.as_deref())
                .trim()
                .to_ascii_lowercase(),
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

use idlocator::MatchStrategy;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::OutputFormat;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if let Some(limit) = config.limit
        && limit == 0
    {
        return Err(ConfigError::invalid(
            "output.limit",
            limit.to_string(),
            sources.source_for_limit(),
            "must be greater than zero",
        ));
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ConfigError::invalid(
            "logging.level",
            config.log_level.clone(),
            sources.source_for_level(),
            format!("expected one of {}", LOG_LEVELS.join(", ")),
        ));
    }

    Ok(())
}

pub(in crate::settings) fn parse_strategy(
    value: &str,
    origin: SettingSource,
) -> Result<MatchStrategy, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::invalid(
            "matching.strategy",
            value,
            origin,
            "expected 'phonetic' or 'literal'",
        )
    })
}

pub(in crate::settings) fn parse_format(
    value: &str,
    origin: SettingSource,
) -> Result<OutputFormat, ConfigError> {
    OutputFormat::parse(value).ok_or_else(|| {
        ConfigError::invalid("output.format", value, origin, "expected 'plain' or 'json'")
    })
}

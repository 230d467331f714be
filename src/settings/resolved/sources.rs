use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) matching_strategy: Option<SettingSource>,
    pub(crate) output_format: Option<SettingSource>,
    pub(crate) output_limit: Option<SettingSource>,
    pub(crate) logging_level: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_strategy(&self) -> SettingSource {
        self.matching_strategy
            .clone()
            .unwrap_or(SettingSource::ConfigKey("matching.strategy"))
    }

    pub(crate) fn source_for_format(&self) -> SettingSource {
        self.output_format
            .clone()
            .unwrap_or(SettingSource::ConfigKey("output.format"))
    }

    pub(crate) fn source_for_limit(&self) -> SettingSource {
        self.output_limit
            .clone()
            .unwrap_or(SettingSource::ConfigKey("output.limit"))
    }

    pub(crate) fn source_for_level(&self) -> SettingSource {
        self.logging_level
            .clone()
            .unwrap_or(SettingSource::ConfigKey("logging.level"))
    }
}

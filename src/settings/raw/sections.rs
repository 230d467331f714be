use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct RosterSection {
    pub(in crate::settings) path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct MatchingSection {
    pub(in crate::settings) strategy: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct OutputSection {
    pub(in crate::settings) format: Option<String>,
    pub(in crate::settings) limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct LoggingSection {
    pub(in crate::settings) level: Option<String>,
}

impl RosterSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.csv.clone() {
            self.path = Some(path);
        }
    }
}

impl MatchingSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.no_soundex {
            self.strategy = Some("literal".to_string());
        }
    }
}

impl OutputSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(format) = cli.output {
            self.format = Some(format.as_str().to_string());
        }
        if let Some(limit) = cli.limit {
            self.limit = Some(limit);
        }
    }
}

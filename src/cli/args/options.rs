use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    /// Return the identifier used in configuration files.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }

    /// Parse a configuration value, ignoring case and surrounding whitespace.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }
}

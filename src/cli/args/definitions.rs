use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `idlocator` binary.
#[derive(Parser, Debug)]
#[command(
    name = "idlocator",
    version,
    long_version = long_version(),
    about = "Find people in a roster by how their name sounds",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
#[command(group(ArgGroup::new("lookup").required(true).args(["query", "id"])))]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "QUERY",
        help = "Name to resolve; spelling variants with the same Soundex code match"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long = "id",
        value_name = "ID",
        help = "Look up a single record by its exact id instead of by name"
    )]
    pub(crate) id: Option<String>,
    #[arg(
        long = "csv",
        value_name = "FILE",
        env = "IDLOCATOR_CSV",
        help = "Roster CSV with id and name columns (default: bundled sample roster)"
    )]
    pub(crate) csv: Option<PathBuf>,
    #[arg(
        long = "no-soundex",
        help = "Compare letters literally instead of by Soundex code (default: disabled)"
    )]
    pub(crate) no_soundex: bool,
    #[arg(
        short = 'l',
        long,
        value_name = "NUM",
        help = "Show at most this many matches (default: unlimited)"
    )]
    pub(crate) limit: Option<usize>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Choose how to print the matches (default: plain)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "IDLOCATOR_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before searching (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity; repeat for more detail (default: warnings only)"
    )]
    pub(crate) verbose: u8,
}

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn positional_query_uses_defaults() {
    let command = CliArgs::command();
    let mut matches = command.get_matches_from(vec!["idlocator", "Robbert"]);
    let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
    assert_eq!(parsed.query.as_deref(), Some("Robbert"));
    assert_eq!(parsed.output, None);
    assert!(!parsed.no_soundex);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn id_lookup_and_flags_parse() {
    let parsed = CliArgs::try_parse_from([
        "idlocator",
        "--id",
        "200000001",
        "--no-soundex",
        "-o",
        "json",
        "-l",
        "5",
        "-vv",
    ])
    .expect("parses");
    assert_eq!(parsed.id.as_deref(), Some("200000001"));
    assert!(parsed.query.is_none());
    assert!(parsed.no_soundex);
    assert_eq!(parsed.output, Some(OutputFormat::Json));
    assert_eq!(parsed.limit, Some(5));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn a_query_or_an_id_is_required() {
    assert!(CliArgs::try_parse_from(["idlocator"]).is_err());
}

#[test]
fn query_and_id_conflict() {
    assert!(CliArgs::try_parse_from(["idlocator", "Dana", "--id", "3"]).is_err());
}

#[test]
fn output_format_parses_config_values() {
    assert_eq!(OutputFormat::parse(" JSON "), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse("plain"), Some(OutputFormat::Plain));
    assert_eq!(OutputFormat::parse("yaml"), None);
    assert_eq!(OutputFormat::Json.as_str(), "json");
}

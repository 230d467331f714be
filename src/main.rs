mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use idlocator::logging;
use settings::ResolvedConfig;
use tracing::info;
use workflow::{Lookup, LookupWorkflow};

fn main() -> ExitCode {
    let cli = parse_cli();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve configuration, run the lookup and print the outcome. Returns
/// whether anything matched.
fn run(cli: &CliArgs) -> Result<bool> {
    let resolved = settings::load(cli)?;
    logging::initialize(&resolved.log_level);

    if cli.print_config {
        resolved.print_summary();
    }

    let lookup = Lookup::from_cli(cli)?;
    run_lookup(&lookup, &resolved)
}

/// Execute the lookup workflow and print output in the chosen format.
fn run_lookup(lookup: &Lookup, settings: &ResolvedConfig) -> Result<bool> {
    let workflow = LookupWorkflow::from_config(settings)?;
    let matches = workflow.run(lookup)?;

    let shown = match settings.output {
        OutputFormat::Plain => print_plain(lookup, &matches, settings.limit)?,
        OutputFormat::Json => print_json(
            lookup,
            workflow.engine().strategy(),
            &matches,
            settings.limit,
        )?,
    };
    info!(%lookup, total = matches.len(), shown, "lookup finished");

    Ok(!matches.is_empty())
}

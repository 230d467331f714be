use std::io::{self, Write};

use super::ResolvedConfig;

/// Print the summary to stderr so stdout only carries lookup results.
pub(super) fn print_summary(config: &ResolvedConfig) {
    let stderr = io::stderr();
    let _ = write_summary(&mut stderr.lock(), config);
}

pub(super) fn write_summary(out: &mut impl Write, config: &ResolvedConfig) -> io::Result<()> {
    writeln!(out, "Effective configuration:")?;
    writeln!(out, "  Roster: {}", config.roster)?;
    writeln!(out, "  Strategy: {}", config.strategy)?;
    writeln!(out, "  Output: {}", config.output.as_str())?;
    match config.limit {
        Some(limit) => writeln!(out, "  Limit: {limit}")?,
        None => writeln!(out, "  Limit: unlimited")?,
    }
    writeln!(out, "  Log level: {}", config.log_level)
}

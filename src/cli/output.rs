use std::io::{self, Write};

use anyhow::Result;
use idlocator::{MatchResult, MatchStrategy, MatchedOn};
use serde_json::json;

use crate::workflow::Lookup;

const SEPARATOR: &str = "----------------------------------------";

/// Print matches as labelled blocks. Returns the number of records shown.
pub(crate) fn print_plain(
    lookup: &Lookup,
    matches: &[MatchResult<'_>],
    limit: Option<usize>,
) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let shown = write_plain(&mut out, lookup, matches, limit)?;
    out.flush()?;
    Ok(shown)
}

pub(crate) fn write_plain(
    out: &mut impl Write,
    lookup: &Lookup,
    matches: &[MatchResult<'_>],
    limit: Option<usize>,
) -> io::Result<usize> {
    if matches.is_empty() {
        writeln!(out, "No matches for {lookup}")?;
        return Ok(0);
    }

    let visible = visible(matches, limit);
    for result in visible {
        let record = result.record;
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "id: {}", record.id)?;
        writeln!(out, "name: {}", record.name)?;
        for (key, value) in &record.attributes {
            writeln!(out, "{key}: {value}")?;
        }
        writeln!(out, "matched on: {}", describe(result.matched_on))?;
    }

    let hidden = matches.len() - visible.len();
    if hidden > 0 {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "{hidden} more match(es) not shown")?;
    }
    Ok(visible.len())
}

/// Format the matches as a JSON document.
pub(crate) fn format_matches_json(
    lookup: &Lookup,
    strategy: MatchStrategy,
    matches: &[MatchResult<'_>],
    limit: Option<usize>,
) -> Result<String> {
    let (kind, value) = match lookup {
        Lookup::Name(query) => ("name", query.as_str()),
        Lookup::Id(id) => ("id", id.as_str()),
    };
    let payload = json!({
        "lookup": { "kind": kind, "value": value },
        "strategy": strategy.as_str(),
        "total": matches.len(),
        "matches": visible(matches, limit),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the matches. Returns the number shown.
pub(crate) fn print_json(
    lookup: &Lookup,
    strategy: MatchStrategy,
    matches: &[MatchResult<'_>],
    limit: Option<usize>,
) -> Result<usize> {
    println!("{}", format_matches_json(lookup, strategy, matches, limit)?);
    Ok(visible(matches, limit).len())
}

fn visible<'m, 'r>(
    matches: &'m [MatchResult<'r>],
    limit: Option<usize>,
) -> &'m [MatchResult<'r>] {
    match limit {
        Some(limit) => &matches[..matches.len().min(limit)],
        None => matches,
    }
}

fn describe(matched_on: MatchedOn) -> String {
    match matched_on {
        MatchedOn::FullName => "full name".to_string(),
        MatchedOn::Token { index } => format!("name word {}", index + 1),
        MatchedOn::Id => "id".to_string(),
    }
}

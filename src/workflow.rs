use std::fmt;

use anyhow::{Context, Result, bail};
use idlocator::{MatchEngine, MatchResult, RecordStore};
use tracing::debug;

use crate::cli::CliArgs;
use crate::settings::ResolvedConfig;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookup {
    Name(String),
    Id(String),
}

impl Lookup {
    pub(crate) fn from_cli(cli: &CliArgs) -> Result<Self> {
        match (&cli.query, &cli.id) {
            (_, Some(id)) => Ok(Lookup::Id(id.clone())),
            (Some(query), None) => Ok(Lookup::Name(query.clone())),
            (None, None) => bail!("either a QUERY or --id is required"),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Name(query) => write!(f, "'{query}'"),
            Lookup::Id(id) => write!(f, "id '{id}'"),
        }
    }
}

/// Owns the roster and engine for one invocation.
pub(crate) struct LookupWorkflow {
    store: RecordStore,
    engine: MatchEngine,
}

impl LookupWorkflow {
    pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let store = config
            .roster
            .load()
            .with_context(|| format!("failed to load roster from {}", config.roster))?;
        Ok(Self::new(store, MatchEngine::new(config.strategy)))
    }

    pub(crate) fn new(store: RecordStore, engine: MatchEngine) -> Self {
        Self { store, engine }
    }

    pub(crate) fn engine(&self) -> MatchEngine {
        self.engine
    }

    /// Resolve `lookup`. An unknown id yields no matches rather than an error.
    pub(crate) fn run(&self, lookup: &Lookup) -> Result<Vec<MatchResult<'_>>> {
        match lookup {
            Lookup::Name(query) => Ok(self.engine.find_by_name(query, &self.store)?),
            Lookup::Id(id) => match self.engine.find_by_id(id, &self.store) {
                Ok(found) => Ok(vec![found]),
                Err(missing) => {
                    debug!(%missing, "id lookup missed");
                    Ok(Vec::new())
                }
            },
        }
    }
}

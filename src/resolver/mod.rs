//! Strategy chain that turns a query into a capital name.
//!
//! `Resolver` owns a directory, a capital table, and a memo of successful
//! answers keyed by `(query, fuzzy)`. Text queries try the ISO code strategy,
//! then names, then (when `fuzzy` is set) approximate names; record queries go
//! straight to the capital join. The first success wins.

pub mod error;
pub mod query;
pub mod strategy;

pub use error::ResolveError;
pub use query::Query;
pub use strategy::{
    Strategy, by_alpha2, by_alpha3, by_fuzzy_name, by_iso_code, by_name, by_numeric, by_record,
};

use crate::capitals::CapitalTable;
use crate::directory::{CountryDirectory, CountryRecord, IsoDirectory};
use crate::runtime::RuntimeConfig;
use anyhow::Result;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;

/// One strategy's failure, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFailure {
    pub strategy: Strategy,
    pub error: ResolveError,
}

/// Full outcome of running the chain once.
///
/// `failures` lists every strategy attempted before the chain stopped, in
/// order. On success the winning strategy is not in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub capital: Option<String>,
    pub failures: Vec<StrategyFailure>,
}

impl Resolution {
    /// The most specific failure seen: a missing capital outranks a missing
    /// country, which outranks a malformed code.
    pub fn most_specific_failure(&self) -> Option<&ResolveError> {
        self.failures
            .iter()
            .map(|failure| &failure.error)
            .max_by_key(|error| match error {
                ResolveError::CapitalNotFound { .. } => 3,
                ResolveError::CountryNotFound { .. } => 2,
                ResolveError::InvalidFormat { .. } => 1,
                _ => 0,
            })
    }
}

/// Memoizing resolver over a country directory and a capital table.
pub struct Resolver<D> {
    directory: D,
    capitals: Arc<CapitalTable>,
    cache: DashMap<(Query, bool), String>,
}

impl Resolver<IsoDirectory> {
    /// Resolver over the bundled ISO dataset and capital table.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(IsoDirectory::bundled()?, CapitalTable::bundled()?))
    }

    /// Resolver over the data files named in `config`, falling back to the
    /// bundled data for anything left unset.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let directory = match &config.directory_path {
            Some(path) => IsoDirectory::load(path)?,
            None => IsoDirectory::bundled()?,
        };
        let capitals = match &config.capitals_path {
            Some(path) => Arc::new(CapitalTable::load(path)?),
            None => CapitalTable::bundled()?,
        };
        Ok(Self::new(directory, capitals))
    }
}

impl<D: CountryDirectory> Resolver<D> {
    pub fn new(directory: D, capitals: Arc<CapitalTable>) -> Self {
        Self {
            directory,
            capitals,
            cache: DashMap::new(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn capitals(&self) -> &CapitalTable {
        &self.capitals
    }

    /// Resolve `query` to a capital, consulting the memo first.
    ///
    /// Only successes are memoized. Failures collapse to `NotFound`; use
    /// `resolve_with_diagnostics` to see why each strategy failed.
    pub fn resolve(&self, query: &Query, fuzzy: bool) -> Result<String, ResolveError> {
        let key = (query.clone(), fuzzy);
        if let Some(hit) = self.cache.get(&key) {
            debug!("cache hit for '{query}' (fuzzy={fuzzy})");
            return Ok(hit.value().clone());
        }

        match self.resolve_with_diagnostics(query, fuzzy).capital {
            Some(capital) => {
                let entry = self.cache.entry(key).or_insert(capital);
                Ok(entry.value().clone())
            }
            None => Err(ResolveError::NotFound {
                query: query.to_string(),
            }),
        }
    }

    /// Run the strategy chain without the memo, recording every failure.
    pub fn resolve_with_diagnostics(&self, query: &Query, fuzzy: bool) -> Resolution {
        let mut resolution = Resolution::default();
        for step in steps_for(query, fuzzy) {
            let strategy = step.strategy();
            match self.run(step) {
                Ok(capital) => {
                    debug!("'{query}' resolved by {} strategy", strategy.as_str());
                    resolution.capital = Some(capital);
                    break;
                }
                Err(error) => {
                    debug!("{} strategy failed for '{query}': {error}", strategy.as_str());
                    resolution.failures.push(StrategyFailure {
                        strategy,
                        error,
                    });
                }
            }
        }
        resolution
    }

    /// Number of memoized answers.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn by_iso_code(&self, code: &str) -> Result<String, ResolveError> {
        by_iso_code(&self.directory, &self.capitals, code)
    }

    pub fn by_alpha2(&self, code: &str) -> Result<String, ResolveError> {
        by_alpha2(&self.directory, &self.capitals, code)
    }

    pub fn by_alpha3(&self, code: &str) -> Result<String, ResolveError> {
        by_alpha3(&self.directory, &self.capitals, code)
    }

    pub fn by_numeric(&self, code: &str) -> Result<String, ResolveError> {
        by_numeric(&self.directory, &self.capitals, code)
    }

    pub fn by_name(&self, name: &str) -> Result<String, ResolveError> {
        by_name(&self.directory, &self.capitals, name)
    }

    pub fn by_record(&self, record: &CountryRecord) -> Result<String, ResolveError> {
        by_record(&self.capitals, record)
    }

    pub fn by_fuzzy_name(&self, name: &str) -> Result<String, ResolveError> {
        by_fuzzy_name(&self.directory, &self.capitals, name)
    }

    fn run(&self, step: Step<'_>) -> Result<String, ResolveError> {
        match step {
            Step::IsoCode(text) => self.by_iso_code(text),
            Step::Name(text) => self.by_name(text),
            Step::FuzzyName(text) => self.by_fuzzy_name(text),
            Step::Record(record) => self.by_record(record),
        }
    }
}

/// A strategy paired with the part of the query it reads.
#[derive(Clone, Copy, Debug)]
enum Step<'q> {
    IsoCode(&'q str),
    Name(&'q str),
    Record(&'q CountryRecord),
    FuzzyName(&'q str),
}

impl Step<'_> {
    fn strategy(&self) -> Strategy {
        match self {
            Step::IsoCode(_) => Strategy::IsoCode,
            Step::Name(_) => Strategy::Name,
            Step::Record(_) => Strategy::Record,
            Step::FuzzyName(_) => Strategy::FuzzyName,
        }
    }
}

fn steps_for(query: &Query, fuzzy: bool) -> Vec<Step<'_>> {
    match query {
        Query::Text(text) => {
            let mut steps = vec![Step::IsoCode(text), Step::Name(text)];
            if fuzzy {
                steps.push(Step::FuzzyName(text));
            }
            steps
        }
        Query::Record(record) => vec![Step::Record(record)],
    }
}

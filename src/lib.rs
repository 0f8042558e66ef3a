//! Country capital lookup.
//!
//! Resolves an ISO 3166-1 code (alpha-2, alpha-3, numeric), a country name, or
//! with `fuzzy` set a misspelled name, to the country's capital city. The
//! crate ships an ISO country dataset and a capital table under `data/`;
//! `get_capital` resolves against those through a process-wide memoizing
//! `Resolver`. Embedders that need their own data build a `Resolver` directly.

use log::info;
use std::sync::OnceLock;

pub mod capitals;
pub mod directory;
pub mod resolver;
pub mod runtime;

pub use capitals::CapitalTable;
pub use directory::{
    CountryDataset, CountryDirectory, CountryRecord, IsoDirectory, NameField,
    load_dataset_from_path,
};
pub use resolver::{
    Query, Resolution, ResolveError, Resolver, Strategy, StrategyFailure, by_alpha2, by_alpha3,
    by_fuzzy_name, by_iso_code, by_name, by_numeric, by_record,
};
pub use runtime::RuntimeConfig;

static DEFAULT_RESOLVER: OnceLock<Resolver<IsoDirectory>> = OnceLock::new();

/// Resolve `query` to a capital using the process-wide resolver.
///
/// The resolver is built on first use from the bundled data, or from the files
/// named by `COUNTRY_CAPITALS_TABLE` / `COUNTRY_CAPITALS_DIRECTORY`. A load
/// failure is reported as `ResolveError::Data` and retried on the next call.
pub fn get_capital(query: impl Into<Query>, fuzzy: bool) -> Result<String, ResolveError> {
    default_resolver()?.resolve(&query.into(), fuzzy)
}

/// The process-wide resolver behind `get_capital`.
pub fn default_resolver() -> Result<&'static Resolver<IsoDirectory>, ResolveError> {
    if let Some(resolver) = DEFAULT_RESOLVER.get() {
        return Ok(resolver);
    }
    let resolver = load_resolver(&RuntimeConfig::from_env())?;
    Ok(DEFAULT_RESOLVER.get_or_init(|| resolver))
}

/// Build a resolver from `config`, reporting load failures as
/// `ResolveError::Data` with the full context chain.
fn load_resolver(config: &RuntimeConfig) -> Result<Resolver<IsoDirectory>, ResolveError> {
    if config.is_bundled() {
        info!("building capital resolver from bundled data");
    } else {
        info!("building capital resolver from {config:?}");
    }
    Resolver::from_config(config).map_err(|err| ResolveError::Data(format!("{err:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn load_failures_surface_as_data_errors() {
        let missing = PathBuf::from("/nonexistent/country-capitals/capitals.json");
        let config = RuntimeConfig {
            capitals_path: Some(missing.clone()),
            directory_path: None,
        };
        match load_resolver(&config) {
            Err(ResolveError::Data(message)) => {
                assert!(message.contains(&missing.display().to_string()), "{message}");
            }
            Err(other) => panic!("expected a data error, got {other}"),
            Ok(_) => panic!("expected a data error for {}", missing.display()),
        }
    }

    #[test]
    fn failed_load_can_be_retried_with_valid_config() {
        let broken = RuntimeConfig {
            capitals_path: None,
            directory_path: Some(PathBuf::from("/nonexistent/iso3166-1.json")),
        };
        assert!(load_resolver(&broken).is_err());

        let resolver = load_resolver(&RuntimeConfig::default()).expect("bundled data loads");
        assert_eq!(resolver.resolve(&Query::from("FR"), false).as_deref(), Ok("Paris"));
    }
}

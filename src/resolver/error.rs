use thiserror::Error;

/// Errors produced while resolving a query to a capital.
///
/// Strategy functions return the specific kinds; `Resolver::resolve` collapses
/// every strategy failure into `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Query shape does not match any recognized code pattern.
    #[error("invalid ISO code '{query}'")]
    InvalidFormat { query: String },

    /// No country matched the query.
    #[error("could not find a country for '{query}'")]
    CountryNotFound { query: String },

    /// A country matched but the capital table has no entry for it.
    #[error("could not find a capital for country with alpha_3 code {alpha_3}")]
    CapitalNotFound { alpha_3: String },

    /// Every attempted strategy failed.
    #[error("could not find a capital for '{query}'")]
    NotFound { query: String },

    /// Bundled or configured data could not be loaded.
    #[error("country data unavailable: {0}")]
    Data(String),
}

impl ResolveError {
    pub(crate) fn invalid_format(query: &str) -> Self {
        ResolveError::InvalidFormat {
            query: query.to_string(),
        }
    }

    pub(crate) fn country_not_found(query: &str) -> Self {
        ResolveError::CountryNotFound {
            query: query.to_string(),
        }
    }
}

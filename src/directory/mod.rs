//! Country directory wiring.
//!
//! The resolver talks to countries only through the `CountryDirectory` trait:
//! code lookups, name lookups per name field, and an approximate name search.
//! `IsoDirectory` is the bundled implementation over the ISO 3166-1 dataset in
//! `data/iso3166-1.json`; tests and embedders can supply their own.

pub mod fuzzy;
pub mod index;
pub mod model;

pub use index::IsoDirectory;
pub use model::{
    CountryDataset, CountryRecord, NameField, load_dataset_from_path, parse_dataset,
};

/// Source of country records keyed by ISO code or name.
///
/// Lookups return `None` when nothing matches; callers decide how to report
/// the miss. Implementations must be shareable across threads because the
/// process-wide resolver is.
pub trait CountryDirectory: Send + Sync {
    fn find_by_alpha2(&self, code: &str) -> Option<&CountryRecord>;

    fn find_by_alpha3(&self, code: &str) -> Option<&CountryRecord>;

    /// `code` is expected to be zero-padded to three digits already.
    fn find_by_numeric(&self, code: &str) -> Option<&CountryRecord>;

    fn find_by_name(&self, field: NameField, name: &str) -> Option<&CountryRecord>;

    /// Approximate name search, best match first. May be empty.
    fn fuzzy_search(&self, text: &str) -> Vec<&CountryRecord>;
}

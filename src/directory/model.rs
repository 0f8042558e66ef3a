//! Deserializable representation of `data/iso3166-1.json`.
//!
//! The types mirror the ISO 3166-1 dataset layout shared by most country
//! databases: a single `3166-1` array of country entries. Use `IsoDirectory`
//! for validation and lookup; use these structs when the raw entries are
//! required.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ISO 3166-1 dataset compiled into the crate.
pub(crate) const BUNDLED_DATASET: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/iso3166-1.json"));

#[derive(Clone, Debug, Deserialize)]
/// Full country dataset as stored on disk.
pub struct CountryDataset {
    #[serde(rename = "3166-1")]
    pub countries: Vec<CountryRecord>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
/// One country (or territory) entry.
///
/// `alpha_3` is the canonical code used to join against the capital table.
pub struct CountryRecord {
    pub alpha_2: String,
    pub alpha_3: String,
    pub numeric: String,
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub official_name: Option<String>,
}

/// Which name field a name lookup matches against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NameField {
    Name,
    CommonName,
    OfficialName,
}

impl NameField {
    /// Lookup order used when resolving by name.
    pub const ALL: [NameField; 3] = [
        NameField::Name,
        NameField::CommonName,
        NameField::OfficialName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameField::Name => "name",
            NameField::CommonName => "common_name",
            NameField::OfficialName => "official_name",
        }
    }
}

impl CountryRecord {
    /// The value of one name field, if the record carries it.
    pub fn field(&self, field: NameField) -> Option<&str> {
        match field {
            NameField::Name => Some(self.name.as_str()),
            NameField::CommonName => self.common_name.as_deref(),
            NameField::OfficialName => self.official_name.as_deref(),
        }
    }

    /// Every name the record carries, formal name first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        NameField::ALL
            .into_iter()
            .filter_map(move |field| self.field(field))
    }

    /// Common name when present, otherwise the formal name.
    pub fn display_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or(&self.name)
    }
}

/// Parse a country dataset from JSON text without additional validation.
pub fn parse_dataset(data: &str) -> Result<CountryDataset> {
    let dataset: CountryDataset = serde_json::from_str(data)?;
    Ok(dataset)
}

/// Read and parse a country dataset from disk without additional validation.
pub fn load_dataset_from_path(path: &Path) -> Result<CountryDataset> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_dataset(&data).with_context(|| format!("parsing {}", path.display()))
}

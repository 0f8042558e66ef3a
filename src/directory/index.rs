//! Indexed view of the ISO 3166-1 dataset.
//!
//! The index validates code shapes and rejects duplicate codes so a corrupt
//! dataset fails at load time instead of producing wrong capitals later.
//! Keys are normalized (codes uppercased, names lowercased) so lookups are
//! case-insensitive.

use crate::directory::CountryDirectory;
use crate::directory::fuzzy;
use crate::directory::model::{
    BUNDLED_DATASET, CountryDataset, CountryRecord, NameField, load_dataset_from_path,
    parse_dataset,
};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
/// Country records plus derived indexes keyed by each code and name field.
pub struct IsoDirectory {
    records: Vec<CountryRecord>,
    by_alpha2: BTreeMap<String, usize>,
    by_alpha3: BTreeMap<String, usize>,
    by_numeric: BTreeMap<String, usize>,
    by_name: BTreeMap<(NameField, String), usize>,
}

impl IsoDirectory {
    /// Build the directory from the dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let dataset = parse_dataset(BUNDLED_DATASET).context("parsing bundled ISO 3166-1 data")?;
        Self::from_dataset(dataset)
    }

    /// Load and validate a dataset from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let dataset = load_dataset_from_path(path)?;
        Self::from_dataset(dataset).with_context(|| format!("validating {}", path.display()))
    }

    /// Validate an already parsed dataset and build the indexes.
    pub fn from_dataset(dataset: CountryDataset) -> Result<Self> {
        let records = dataset.countries;
        if records.is_empty() {
            bail!("country dataset contains no countries");
        }

        let mut by_alpha2 = BTreeMap::new();
        let mut by_alpha3 = BTreeMap::new();
        let mut by_numeric = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            validate_record(record)?;

            insert_unique(&mut by_alpha2, record.alpha_2.to_ascii_uppercase(), idx, "alpha_2")?;
            insert_unique(&mut by_alpha3, record.alpha_3.to_ascii_uppercase(), idx, "alpha_3")?;
            insert_unique(&mut by_numeric, record.numeric.clone(), idx, "numeric")?;

            for field in NameField::ALL {
                if let Some(name) = record.field(field) {
                    // Duplicate names within one field keep the first entry.
                    by_name.entry((field, name.to_lowercase())).or_insert(idx);
                }
            }
        }

        Ok(Self {
            records,
            by_alpha2,
            by_alpha3,
            by_numeric,
            by_name,
        })
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get(&self, idx: Option<&usize>) -> Option<&CountryRecord> {
        idx.and_then(|idx| self.records.get(*idx))
    }
}

impl CountryDirectory for IsoDirectory {
    fn find_by_alpha2(&self, code: &str) -> Option<&CountryRecord> {
        self.get(self.by_alpha2.get(&code.to_ascii_uppercase()))
    }

    fn find_by_alpha3(&self, code: &str) -> Option<&CountryRecord> {
        self.get(self.by_alpha3.get(&code.to_ascii_uppercase()))
    }

    fn find_by_numeric(&self, code: &str) -> Option<&CountryRecord> {
        self.get(self.by_numeric.get(code))
    }

    fn find_by_name(&self, field: NameField, name: &str) -> Option<&CountryRecord> {
        self.get(self.by_name.get(&(field, name.to_lowercase())))
    }

    fn fuzzy_search(&self, text: &str) -> Vec<&CountryRecord> {
        fuzzy::rank(&self.records, text)
            .into_iter()
            .filter_map(|idx| self.records.get(idx))
            .collect()
    }
}

fn validate_record(record: &CountryRecord) -> Result<()> {
    if !is_ascii_letters(&record.alpha_2, 2) {
        bail!("alpha_2 must be two ASCII letters, got '{}'", record.alpha_2);
    }
    if !is_ascii_letters(&record.alpha_3, 3) {
        bail!(
            "alpha_3 must be three ASCII letters, got '{}' ({})",
            record.alpha_3,
            record.alpha_2
        );
    }
    if record.numeric.len() != 3 || !record.numeric.chars().all(|c| c.is_ascii_digit()) {
        bail!(
            "numeric must be three digits, got '{}' ({})",
            record.numeric,
            record.alpha_3
        );
    }
    if record.name.trim().is_empty() {
        bail!("country {} has an empty name", record.alpha_3);
    }
    Ok(())
}

fn is_ascii_letters(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_alphabetic())
}

fn insert_unique(
    map: &mut BTreeMap<String, usize>,
    key: String,
    idx: usize,
    label: &str,
) -> Result<()> {
    if map.contains_key(&key) {
        bail!("duplicate {label} code {key}");
    }
    map.insert(key, idx);
    Ok(())
}

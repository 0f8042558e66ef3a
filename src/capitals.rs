//! Capital city table keyed by alpha-3 country code.
//!
//! The table is a flat JSON object (`{"FRA": "Paris", ...}`) loaded verbatim.
//! The only check beyond "is it a mapping of strings" is that no capital is
//! empty, since an empty string would read as a successful lookup.

use anyhow::{Context, Result, anyhow, bail};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Capital table compiled into the crate.
const BUNDLED_CAPITALS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/capitals.json"));

static BUNDLED: OnceLock<Arc<CapitalTable>> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Immutable alpha-3 → capital mapping.
pub struct CapitalTable {
    by_code: BTreeMap<String, String>,
}

impl CapitalTable {
    /// Shared instance of the bundled table, parsed on first use.
    ///
    /// Concurrent first calls may each parse the table; only one result is
    /// kept and every caller observes that one.
    pub fn bundled() -> Result<Arc<CapitalTable>> {
        if let Some(table) = BUNDLED.get() {
            return Ok(Arc::clone(table));
        }
        let table = Self::from_json_str(BUNDLED_CAPITALS).context("parsing bundled capitals")?;
        info!("loaded {} bundled capitals", table.len());
        Ok(Arc::clone(BUNDLED.get_or_init(|| Arc::new(table))))
    }

    /// Read a capital table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a capital table from JSON text.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let by_code: BTreeMap<String, String> = serde_json::from_str(data)
            .map_err(|err| anyhow!("capital table must be a JSON object of strings: {err}"))?;
        Self::from_map(by_code)
    }

    /// Build a table from an in-memory mapping.
    pub fn from_map(by_code: BTreeMap<String, String>) -> Result<Self> {
        if let Some((code, _)) = by_code.iter().find(|(_, capital)| capital.trim().is_empty()) {
            bail!("capital for {code} must not be empty");
        }
        Ok(Self { by_code })
    }

    /// Capital for an alpha-3 code. Keys are matched exactly.
    pub fn get(&self, alpha_3: &str) -> Option<&str> {
        self.by_code.get(alpha_3).map(String::as_str)
    }

    pub fn contains(&self, alpha_3: &str) -> bool {
        self.by_code.contains_key(alpha_3)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

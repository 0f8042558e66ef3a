// Shared by several integration test binaries; not every helper is used by each.
#![allow(dead_code)]

use anyhow::Result;
use country_capitals::{
    CapitalTable, CountryDirectory, CountryRecord, IsoDirectory, NameField, Resolver,
};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// Bundled directory that counts every lookup made through it.
pub struct CountingDirectory {
    inner: IsoDirectory,
    calls: AtomicUsize,
}

impl CountingDirectory {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            inner: IsoDirectory::bundled()?,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountryDirectory for CountingDirectory {
    fn find_by_alpha2(&self, code: &str) -> Option<&CountryRecord> {
        self.tick();
        self.inner.find_by_alpha2(code)
    }

    fn find_by_alpha3(&self, code: &str) -> Option<&CountryRecord> {
        self.tick();
        self.inner.find_by_alpha3(code)
    }

    fn find_by_numeric(&self, code: &str) -> Option<&CountryRecord> {
        self.tick();
        self.inner.find_by_numeric(code)
    }

    fn find_by_name(&self, field: NameField, name: &str) -> Option<&CountryRecord> {
        self.tick();
        self.inner.find_by_name(field, name)
    }

    fn fuzzy_search(&self, text: &str) -> Vec<&CountryRecord> {
        self.tick();
        self.inner.fuzzy_search(text)
    }
}

pub fn counting_resolver() -> Result<Resolver<CountingDirectory>> {
    Ok(Resolver::new(
        CountingDirectory::bundled()?,
        CapitalTable::bundled()?,
    ))
}

pub fn bundled_resolver() -> Resolver<IsoDirectory> {
    Resolver::bundled().expect("bundled data loads")
}

/// Write `value` as JSON into a temp file that lives as long as the handle.
pub fn json_file(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn capitals(entries: &[(&str, &str)]) -> Result<Arc<CapitalTable>> {
    let map = entries
        .iter()
        .map(|(code, capital)| (code.to_string(), capital.to_string()))
        .collect();
    Ok(Arc::new(CapitalTable::from_map(map)?))
}

//! Runtime configuration read from the environment.
//!
//! Both data files ship inside the crate. `COUNTRY_CAPITALS_TABLE` and
//! `COUNTRY_CAPITALS_DIRECTORY` point the process-wide resolver at files on
//! disk instead; empty or whitespace-only values are ignored.

use std::env;
use std::path::PathBuf;

pub const CAPITALS_TABLE_ENV: &str = "COUNTRY_CAPITALS_TABLE";
pub const DIRECTORY_ENV: &str = "COUNTRY_CAPITALS_DIRECTORY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional overrides for the bundled data files.
pub struct RuntimeConfig {
    pub capitals_path: Option<PathBuf>,
    pub directory_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self {
            capitals_path: path_from_env(CAPITALS_TABLE_ENV),
            directory_path: path_from_env(DIRECTORY_ENV),
        }
    }

    /// True when both data files come from the crate itself.
    pub fn is_bundled(&self) -> bool {
        self.capitals_path.is_none() && self.directory_path.is_none()
    }
}

fn path_from_env(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

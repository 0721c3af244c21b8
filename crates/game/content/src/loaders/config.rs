//! Realm configuration loader.

use std::path::Path;

use realm_core::RealmConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for realm configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RealmConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<RealmConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<RealmConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

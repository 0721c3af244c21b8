//! Content factory for building the equipment registry from data files.

use std::path::{Path, PathBuf};

use realm_core::{EquipmentRegistry, RealmConfig};
use tracing::info;

use crate::loaders::{ConfigLoader, EquipmentLoader, LoadResult};

/// Content factory that loads all realm content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── equipment.ron
/// └── equipment/       (optional, extra catalogs loaded in name order)
///     ├── capes.ron
///     └── rings.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load realm configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<RealmConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(RealmConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load every equipment catalog and freeze the registry.
    ///
    /// `equipment.ron` is loaded first, then each `equipment/*.ron` file in
    /// file-name order. Any invalid definition or duplicate id aborts the
    /// whole load.
    pub fn load_equipment(&self, config: &RealmConfig) -> LoadResult<EquipmentRegistry> {
        let mut builder = EquipmentRegistry::builder();

        for path in self.equipment_catalogs()? {
            let definitions = EquipmentLoader::load(&path, config)?;
            let added = builder.load(definitions).map_err(|e| {
                anyhow::Error::new(e).context(format!("Failed to register {}", path.display()))
            })?;
            info!(path = %path.display(), added, "equipment catalog loaded");
        }

        Ok(builder.freeze())
    }

    /// Load configuration, then equipment.
    pub fn load_all(&self) -> LoadResult<(RealmConfig, EquipmentRegistry)> {
        let config = self.load_config()?;
        let registry = self.load_equipment(&config)?;
        Ok((config, registry))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn equipment_catalogs(&self) -> LoadResult<Vec<PathBuf>> {
        let mut catalogs = vec![self.data_dir.join("equipment.ron")];

        let extra_dir = self.data_dir.join("equipment");
        if extra_dir.is_dir() {
            let entries = std::fs::read_dir(&extra_dir).map_err(|e| {
                anyhow::anyhow!("Failed to read directory {}: {}", extra_dir.display(), e)
            })?;

            let mut extra = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "ron") {
                    extra.push(path);
                }
            }
            extra.sort();
            catalogs.extend(extra);
        }

        Ok(catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_equipment(&RealmConfig::default()).is_err());
    }
}

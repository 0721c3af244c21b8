//! Equipment catalog loader.
//!
//! File format:
//! ```ron
//! (
//!     equipment: [
//!         (
//!             id: 1321,
//!             index: 3,
//!             requirements: [(name: "attack", level: 20)],
//!             bonuses: [4, 26, -2, 0, 0, 0, 2, 1, 0, 0, 28, 0],
//!         ),
//!     ],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use realm_core::{EquipmentDefinition, RawEquipmentDefinition, RealmConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub equipment: Vec<RawEquipmentDefinition>,
}

/// Loader for equipment catalogs from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load and validate an equipment catalog from a RON file.
    ///
    /// The first invalid entry aborts the load; its error is kept as the root
    /// cause so callers can downcast to [`realm_core::DefinitionError`].
    pub fn load(path: &Path, config: &RealmConfig) -> LoadResult<Vec<EquipmentDefinition>> {
        debug!(path = %path.display(), "reading equipment catalog");
        let content = read_file(path)?;
        Self::parse(&content, config)
            .with_context(|| format!("Invalid equipment catalog {}", path.display()))
    }

    /// Parse and validate an equipment catalog from RON text.
    pub fn parse(content: &str, config: &RealmConfig) -> LoadResult<Vec<EquipmentDefinition>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        catalog
            .equipment
            .into_iter()
            .map(|raw| {
                let id = raw.id;
                EquipmentDefinition::from_raw(raw, config)
                    .with_context(|| format!("Invalid equipment definition for item {}", id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::{DefinitionError, EquipmentSlot, ItemId, Skill};

    const CATALOG: &str = r#"(
        equipment: [
            (
                id: 1163,
                index: 0,
                full_helmet: true,
                requirements: [(name: "defence", level: 40)],
                bonuses: [0, 0, 0, -6, -2, 30, 32, 27, -1, 30, 0, 0],
            ),
            (
                id: 1319,
                index: 3,
                two_handed: true,
                requirements: [(name: "attack", level: 40), (name: "strength", level: 40)],
                bonuses: [-4, 27, 21, -4, 0, 0, 0, 0, 0, -1, 26, 0],
            ),
        ],
    )"#;

    #[test]
    fn parses_catalog_in_file_order() {
        let defs = EquipmentLoader::parse(CATALOG, &RealmConfig::default()).unwrap();
        assert_eq!(defs.len(), 2);

        let helm = &defs[0];
        assert_eq!(helm.id(), ItemId(1163));
        assert_eq!(helm.slot(), EquipmentSlot::Head);
        assert!(helm.is_full_helmet());
        assert!(!helm.is_two_handed());

        let sword = &defs[1];
        assert!(sword.is_two_handed());
        let skills: Vec<_> = sword.requirements().iter().map(|r| r.skill()).collect();
        assert_eq!(skills, vec![Skill::Attack, Skill::Strength]);
        assert_eq!(sword.bonuses().as_slice()[0], -4);
    }

    #[test]
    fn unknown_skill_aborts_load() {
        let catalog = CATALOG.replace("\"defence\"", "\"defense\"");
        let err = EquipmentLoader::parse(&catalog, &RealmConfig::default()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DefinitionError>(),
            Some(&DefinitionError::UnknownSkill("defense".into()))
        );
        assert!(format!("{err:#}").contains("item 1163"));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(EquipmentLoader::parse("(equipment: [", &RealmConfig::default()).is_err());
    }
}

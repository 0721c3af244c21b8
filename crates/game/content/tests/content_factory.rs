use std::fs;
use std::path::Path;
use std::thread;

use realm_content::ContentFactory;
use realm_core::{DefinitionError, EquipmentSlot, ItemId, RegistryError, Skill, SkillLevels};

const BASE_CATALOG: &str = r#"(
    equipment: [
        (
            id: 1127,
            index: 4,
            full_body: true,
            requirements: [(name: "defence", level: 40)],
            bonuses: [0, 0, 0, -30, -10, 65, 63, 55, -6, 63, 0, 0],
        ),
        (
            id: 1333,
            index: 3,
            requirements: [(name: "attack", level: 40)],
            bonuses: [7, 45, -2, 0, 0, 0, 3, 2, 0, 0, 44, 0],
        ),
        (
            id: 882,
            index: 13,
            bonuses: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ),
    ],
)"#;

const CAPES_CATALOG: &str = r#"(
    equipment: [
        (
            id: 1007,
            index: 1,
            bonuses: [0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
        ),
    ],
)"#;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn loads_config_and_all_catalogs_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("config.toml"), "max_requirement_level = 99\n");
    write(&dir.path().join("equipment.ron"), BASE_CATALOG);
    write(&dir.path().join("equipment/capes.ron"), CAPES_CATALOG);
    write(&dir.path().join("equipment/notes.txt"), "ignored");

    let (config, registry) = ContentFactory::new(dir.path()).load_all().unwrap();
    assert_eq!(config.max_requirement_level, 99);

    let ids: Vec<u32> = registry.all().map(|d| d.id().0).collect();
    assert_eq!(ids, vec![1127, 1333, 882, 1007]);
    assert_eq!(ids, registry.all().map(|d| d.id().0).collect::<Vec<_>>());

    let platebody = registry.get(ItemId(1127)).unwrap();
    assert_eq!(platebody.slot(), EquipmentSlot::Body);
    assert!(platebody.is_full_body());
    assert_eq!(platebody.bonuses().as_slice()[3], -30);

    assert_eq!(
        registry.get(ItemId(4151)).unwrap_err(),
        RegistryError::NotFound(ItemId(4151))
    );
}

#[test]
fn config_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("equipment.ron"), BASE_CATALOG);

    let (config, registry) = ContentFactory::new(dir.path()).load_all().unwrap();
    assert_eq!(config, Default::default());
    assert_eq!(registry.len(), 3);
}

#[test]
fn requirement_cap_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("config.toml"), "max_requirement_level = 30\n");
    write(&dir.path().join("equipment.ron"), BASE_CATALOG);

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    assert_eq!(
        err.downcast_ref::<DefinitionError>(),
        Some(&DefinitionError::RequirementLevel {
            skill: Skill::Defence,
            level: 40,
            max: 30,
        })
    );
}

#[test]
fn duplicate_id_across_catalogs_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("equipment.ron"), BASE_CATALOG);
    write(
        &dir.path().join("equipment/arrows.ron"),
        "(equipment: [(id: 882, index: 13, bonuses: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])])",
    );

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::DuplicateDefinition(ItemId(882)))
    );
}

#[test]
fn frozen_registry_serves_concurrent_readers() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("equipment.ron"), BASE_CATALOG);
    let (_, registry) = ContentFactory::new(dir.path()).load_all().unwrap();

    let mut levels = [1u8; Skill::COUNT];
    levels[Skill::Attack.as_index()] = 40;
    assert_eq!(levels.level(Skill::Attack), 40);

    thread::scope(|scope| {
        for _ in 0..4 {
            let registry = registry.clone();
            scope.spawn(move || {
                let scimitar = registry.get(ItemId(1333)).unwrap();
                assert!(scimitar.meets_requirements(&levels));
                assert_eq!(registry.all().count(), 3);
            });
        }
    });
}

#[test]
fn bundled_data_directory_loads() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    let (_, registry) = ContentFactory::new(data_dir).load_all().unwrap();

    let two_handers: Vec<u32> = registry
        .all()
        .filter(|def| def.is_two_handed())
        .map(|def| def.id().0)
        .collect();
    assert_eq!(two_handers, vec![1319, 861]);
    assert!(registry
        .all()
        .all(|def| def.bonuses().as_slice().len() == 12));
}

//! Equipment and authority data model shared across server systems.
//!
//! `realm-core` defines the immutable equipment definitions and the registry
//! that serves them, the ordered authority levels used for permission checks,
//! and the event value announcing equipment slot changes. It performs no I/O;
//! content loading lives in `realm-content`.
pub mod authority;
pub mod config;
pub mod equipment;
pub mod error;
pub mod event;
pub mod ids;
pub mod registry;
pub mod skill;

pub use authority::{AuthorityError, AuthorityLevel, RankPair};
pub use config::RealmConfig;
pub use equipment::{
    BonusKind, Bonuses, DefinitionError, EquipmentDefinition, EquipmentFlags,
    EquipmentRequirement, EquipmentSlot, RawEquipmentDefinition, RawRequirement,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{EquipmentChangeEvent, SlotChange};
pub use ids::{EntityId, Item, ItemId};
pub use registry::{EquipmentOracle, EquipmentRegistry, EquipmentRegistryBuilder, RegistryError};
pub use skill::{Skill, SkillLevels};

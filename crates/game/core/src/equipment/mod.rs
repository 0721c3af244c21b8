//! Equipment data model.
//!
//! Defines which slot an item occupies, what it takes to wear it and what
//! combat bonuses it grants. Swapping items in and out of a container is the
//! caller's job; this module only describes the items.

mod definition;
mod error;
mod slot;

pub use definition::{
    BonusKind, Bonuses, EquipmentDefinition, EquipmentFlags, EquipmentRequirement,
    RawEquipmentDefinition, RawRequirement,
};
pub use error::DefinitionError;
pub use slot::EquipmentSlot;

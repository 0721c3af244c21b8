use crate::config::RealmConfig;

/// Body slot an equippable item occupies.
///
/// Discriminants are the container indices used by the client protocol.
/// Indices 6, 8 and 11 exist in the container but are never equippable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum EquipmentSlot {
    Head = 0,
    Cape = 1,
    Amulet = 2,
    Weapon = 3,
    Body = 4,
    Shield = 5,
    Legs = 7,
    Hands = 9,
    Feet = 10,
    Ring = 12,
    Ammo = 13,
}

impl EquipmentSlot {
    /// Number of indices in an equipment container.
    pub const CONTAINER_SIZE: usize = RealmConfig::EQUIPMENT_SLOTS;

    /// All equippable slots ordered by index.
    pub const ALL: [EquipmentSlot; 11] = [
        EquipmentSlot::Head,
        EquipmentSlot::Cape,
        EquipmentSlot::Amulet,
        EquipmentSlot::Weapon,
        EquipmentSlot::Body,
        EquipmentSlot::Shield,
        EquipmentSlot::Legs,
        EquipmentSlot::Hands,
        EquipmentSlot::Feet,
        EquipmentSlot::Ring,
        EquipmentSlot::Ammo,
    ];

    /// Resolves a container index to a slot, `None` for unused or out-of-range indices.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.index() == index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_indices_are_not_slots() {
        for index in [6, 8, 11, 14, 99] {
            assert_eq!(EquipmentSlot::from_index(index), None, "index {index}");
        }
    }

    #[test]
    fn every_slot_round_trips_through_index() {
        for slot in EquipmentSlot::ALL {
            assert!(slot.index() < EquipmentSlot::CONTAINER_SIZE);
            assert_eq!(EquipmentSlot::from_index(slot.index()), Some(slot));
        }
    }
}

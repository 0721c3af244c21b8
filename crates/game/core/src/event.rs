//! Equipment change notification.

use crate::equipment::EquipmentSlot;
use crate::ids::{EntityId, Item, ItemId};

/// Kind of transition an [`EquipmentChangeEvent`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotChange {
    /// An empty slot received an item.
    Equipped,
    /// An item left the slot, leaving it empty.
    Unequipped,
    /// One item was swapped for another.
    Replaced,
    /// The slot was empty before and after.
    Unchanged,
}

/// Sent after an equipment slot of a player changes.
///
/// Produced by the equipment container once per slot mutation and consumed
/// synchronously by listeners. Fields are recorded as given; the producer is
/// responsible for both items actually fitting the slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentChangeEvent {
    player: EntityId,
    index: usize,
    old_item: Option<Item>,
    new_item: Option<Item>,
}

impl EquipmentChangeEvent {
    pub fn new(
        player: EntityId,
        index: usize,
        old_item: Option<Item>,
        new_item: Option<Item>,
    ) -> Self {
        Self {
            player,
            index,
            old_item,
            new_item,
        }
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    /// Container index of the slot that changed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Typed slot, if the index names an equippable slot.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        EquipmentSlot::from_index(self.index)
    }

    /// Item removed from the slot.
    pub fn old_item(&self) -> Option<&Item> {
        self.old_item.as_ref()
    }

    /// Item placed in the slot.
    pub fn new_item(&self) -> Option<&Item> {
        self.new_item.as_ref()
    }

    pub fn old_id(&self) -> Option<ItemId> {
        self.old_item.map(|item| item.id)
    }

    pub fn new_id(&self) -> Option<ItemId> {
        self.new_item.map(|item| item.id)
    }

    pub fn change(&self) -> SlotChange {
        match (&self.old_item, &self.new_item) {
            (None, Some(_)) => SlotChange::Equipped,
            (Some(_), None) => SlotChange::Unequipped,
            (Some(_), Some(_)) => SlotChange::Replaced,
            (None, None) => SlotChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_into_empty_slot() {
        let new = Item::single(ItemId(1163));
        let event = EquipmentChangeEvent::new(EntityId(12), 0, None, Some(new));

        assert_eq!(event.player(), EntityId(12));
        assert_eq!(event.index(), 0);
        assert_eq!(event.slot(), Some(EquipmentSlot::Head));
        assert_eq!(event.old_id(), None);
        assert_eq!(event.new_id(), Some(ItemId(1163)));
        assert_eq!(event.new_item(), Some(&new));
        assert_eq!(event.change(), SlotChange::Equipped);
    }

    #[test]
    fn replace_exposes_both_ids() {
        let event = EquipmentChangeEvent::new(
            EntityId::PLAYER,
            EquipmentSlot::Ammo.index(),
            Some(Item::new(ItemId(882), 150)),
            Some(Item::new(ItemId(884), 75)),
        );

        assert_eq!(event.index(), 13);
        assert_eq!(event.old_id(), Some(ItemId(882)));
        assert_eq!(event.new_id(), Some(ItemId(884)));
        assert_eq!(event.old_item().map(|item| item.amount), Some(150));
        assert_eq!(event.change(), SlotChange::Replaced);
    }

    #[test]
    fn unequip_and_unknown_index_are_recorded_verbatim() {
        let event = EquipmentChangeEvent::new(EntityId(3), 8, Some(Item::single(ItemId(1))), None);

        assert_eq!(event.index(), 8);
        assert_eq!(event.slot(), None);
        assert_eq!(event.new_id(), None);
        assert_eq!(event.change(), SlotChange::Unequipped);
    }
}

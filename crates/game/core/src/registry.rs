//! Equipment definition registry.
//!
//! The registry has two phases, each with its own type:
//!
//! ```text
//! EquipmentRegistryBuilder  ── load()* ──▶ freeze() ──▶ EquipmentRegistry
//!   (single owner, &mut)                              (shared, read-only)
//! ```
//!
//! Loading happens through `&mut` on a single builder, so no reader can see a
//! half-filled table. [`EquipmentRegistryBuilder::freeze`] moves everything into
//! `Arc` storage; the frozen registry has no mutating methods, so loading after
//! the freeze point cannot be expressed.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::equipment::EquipmentDefinition;
use crate::error::{ErrorSeverity, GameError};
use crate::ids::ItemId;

/// Errors returned by registry loading and lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No definition was loaded for the requested id.
    #[error("no equipment definition for {0}")]
    NotFound(ItemId),

    /// A definition with this id was already loaded (or appears twice in one batch).
    #[error("duplicate equipment definition for {0}")]
    DuplicateDefinition(ItemId),
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Validation,
            Self::DuplicateDefinition(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "REGISTRY_NOT_FOUND",
            Self::DuplicateDefinition(_) => "REGISTRY_DUPLICATE_DEFINITION",
        }
    }
}

/// Read access to equipment definitions.
///
/// Consumers that only need lookups should depend on this trait rather than
/// on [`EquipmentRegistry`] directly.
pub trait EquipmentOracle: Send + Sync {
    /// Returns the definition for `id`, or [`RegistryError::NotFound`].
    fn equipment(&self, id: ItemId) -> Result<&EquipmentDefinition, RegistryError>;
}

/// Write-phase registry. Collects definitions until [`freeze`](Self::freeze).
#[derive(Debug, Default)]
pub struct EquipmentRegistryBuilder {
    definitions: Vec<EquipmentDefinition>,
    index: HashMap<ItemId, usize>,
}

impl EquipmentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-inserts a batch of definitions, preserving batch order.
    ///
    /// May be called several times before freezing. A batch containing an id
    /// that is already loaded, or the same id twice, is rejected as a whole.
    ///
    /// Returns the number of definitions added.
    pub fn load(
        &mut self,
        definitions: impl IntoIterator<Item = EquipmentDefinition>,
    ) -> Result<usize, RegistryError> {
        let batch: Vec<EquipmentDefinition> = definitions.into_iter().collect();

        let mut seen = HashSet::with_capacity(batch.len());
        for def in &batch {
            if self.index.contains_key(&def.id()) || !seen.insert(def.id()) {
                return Err(RegistryError::DuplicateDefinition(def.id()));
            }
        }

        let added = batch.len();
        self.definitions.reserve(added);
        for def in batch {
            self.index.insert(def.id(), self.definitions.len());
            self.definitions.push(def);
        }

        debug!(
            added,
            total = self.definitions.len(),
            "loaded equipment definitions"
        );
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Ends the write phase and publishes the read-only registry.
    pub fn freeze(self) -> EquipmentRegistry {
        info!(
            definitions = self.definitions.len(),
            "equipment registry frozen"
        );
        EquipmentRegistry {
            inner: Arc::new(RegistryInner {
                definitions: self.definitions.into_boxed_slice(),
                index: self.index,
            }),
        }
    }
}

#[derive(Debug)]
struct RegistryInner {
    definitions: Box<[EquipmentDefinition]>,
    index: HashMap<ItemId, usize>,
}

/// Read-phase registry of equipment definitions.
///
/// Cloning is cheap and shares the same storage, so the registry can be handed
/// to every system (and thread) that needs it.
#[derive(Clone, Debug)]
pub struct EquipmentRegistry {
    inner: Arc<RegistryInner>,
}

impl EquipmentRegistry {
    /// Starts a write phase.
    pub fn builder() -> EquipmentRegistryBuilder {
        EquipmentRegistryBuilder::new()
    }

    /// Builds a frozen registry from a single batch.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EquipmentDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        builder.load(definitions)?;
        Ok(builder.freeze())
    }

    /// Returns the definition for `id`.
    ///
    /// Unknown ids are an error, never a default definition.
    pub fn get(&self, id: ItemId) -> Result<&EquipmentDefinition, RegistryError> {
        self.inner
            .index
            .get(&id)
            .map(|&position| &self.inner.definitions[position])
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.inner.index.contains_key(&id)
    }

    /// Iterates every definition in load order.
    ///
    /// Each call starts a fresh pass; the iterator itself is `Clone`.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &EquipmentDefinition> + Clone + '_ {
        self.inner.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.definitions.is_empty()
    }
}

impl EquipmentOracle for EquipmentRegistry {
    fn equipment(&self, id: ItemId) -> Result<&EquipmentDefinition, RegistryError> {
        self.get(id)
    }
}

impl<'a> IntoIterator for &'a EquipmentRegistry {
    type Item = &'a EquipmentDefinition;
    type IntoIter = core::slice::Iter<'a, EquipmentDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{Bonuses, EquipmentFlags, EquipmentSlot};

    fn def(id: u32, slot: EquipmentSlot) -> EquipmentDefinition {
        EquipmentDefinition::new(
            ItemId(id),
            slot.index(),
            EquipmentFlags::empty(),
            Vec::new(),
            Bonuses::default(),
        )
        .unwrap()
    }

    #[test]
    fn get_returns_loaded_definition() {
        let registry = EquipmentRegistry::from_definitions([
            def(1155, EquipmentSlot::Head),
            def(1117, EquipmentSlot::Body),
        ])
        .unwrap();

        assert_eq!(registry.get(ItemId(1117)).unwrap().id(), ItemId(1117));
        assert_eq!(
            registry.get(ItemId(1155)).unwrap().slot(),
            EquipmentSlot::Head
        );
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let registry = EquipmentRegistry::from_definitions([def(1, EquipmentSlot::Ring)]).unwrap();
        assert_eq!(
            registry.get(ItemId(2)),
            Err(RegistryError::NotFound(ItemId(2)))
        );
        assert_eq!(registry.get(ItemId(2)).unwrap_err().severity(), ErrorSeverity::Validation);
        assert!(!registry.contains(ItemId(2)));
    }

    #[test]
    fn all_is_restartable_and_in_load_order() {
        let mut builder = EquipmentRegistry::builder();
        builder
            .load([def(30, EquipmentSlot::Feet), def(10, EquipmentSlot::Hands)])
            .unwrap();
        builder.load([def(20, EquipmentSlot::Cape)]).unwrap();
        let registry = builder.freeze();

        let first: Vec<_> = registry.all().map(|d| d.id().0).collect();
        let second: Vec<_> = registry.all().map(|d| d.id().0).collect();
        assert_eq!(first, vec![30, 10, 20]);
        assert_eq!(first, second);

        let pass = registry.all();
        assert_eq!(pass.clone().count(), pass.len());
        assert_eq!((&registry).into_iter().count(), 3);
    }

    #[test]
    fn duplicate_batch_is_rejected_whole() {
        let mut builder = EquipmentRegistry::builder();
        builder.load([def(1, EquipmentSlot::Head)]).unwrap();

        let err = builder
            .load([def(2, EquipmentSlot::Legs), def(1, EquipmentSlot::Head)])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDefinition(ItemId(1)));
        assert_eq!(builder.len(), 1);

        let err = builder
            .load([def(3, EquipmentSlot::Ammo), def(3, EquipmentSlot::Ammo)])
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateDefinition(ItemId(3)));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn clones_share_storage() {
        let registry = EquipmentRegistry::from_definitions([def(7, EquipmentSlot::Amulet)]).unwrap();
        let shared = registry.clone();
        assert!(core::ptr::eq(
            registry.get(ItemId(7)).unwrap(),
            shared.get(ItemId(7)).unwrap()
        ));
    }

    #[test]
    fn oracle_lookups_match_registry() {
        fn lookup(oracle: &dyn EquipmentOracle, id: u32) -> Option<EquipmentSlot> {
            oracle.equipment(ItemId(id)).ok().map(|d| d.slot())
        }

        let registry = EquipmentRegistry::from_definitions([def(5, EquipmentSlot::Shield)]).unwrap();
        assert_eq!(lookup(&registry, 5), Some(EquipmentSlot::Shield));
        assert_eq!(lookup(&registry, 6), None);
    }
}

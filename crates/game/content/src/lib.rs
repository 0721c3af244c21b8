//! Data-driven content loaders.
//!
//! This crate reads static content files and turns them into `realm-core`
//! values:
//! - Equipment catalogs (data-driven via RON)
//! - Realm configuration (data-driven via TOML)
//!
//! Loading runs once during server initialization; the resulting
//! [`realm_core::EquipmentRegistry`] is frozen before any game logic starts.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EquipmentCatalog, EquipmentLoader};

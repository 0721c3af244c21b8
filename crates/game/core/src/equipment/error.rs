//! Definition construction errors.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::Skill;

/// Errors raised while turning raw definition data into [`EquipmentDefinition`]s.
///
/// All of them point at corrupt or mismatched content files, so they are
/// fatal: the bulk load that hit one must be aborted.
///
/// [`EquipmentDefinition`]: super::EquipmentDefinition
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// A requirement names a skill that does not exist.
    #[error("no such skill '{0}'")]
    UnknownSkill(String),

    /// The slot index does not name an equippable slot.
    #[error("equipment index {0} is not a valid slot")]
    InvalidSlot(usize),

    /// The bonus list has the wrong width.
    #[error("expected {expected} bonuses, found {found}")]
    BonusCount { expected: usize, found: usize },

    /// A requirement asks for a level above the configured maximum.
    #[error("{skill} requirement of level {level} exceeds maximum {max}")]
    RequirementLevel { skill: Skill, level: u8, max: u8 },
}

impl GameError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use DefinitionError::*;
        match self {
            UnknownSkill(_) => "DEFINITION_UNKNOWN_SKILL",
            InvalidSlot(_) => "DEFINITION_INVALID_SLOT",
            BonusCount { .. } => "DEFINITION_BONUS_COUNT",
            RequirementLevel { .. } => "DEFINITION_REQUIREMENT_LEVEL",
        }
    }
}

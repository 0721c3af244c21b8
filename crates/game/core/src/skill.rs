//! Trainable skills and the skill-level lookup seam.
//!
//! Content files name skills by their human-readable names; everything past
//! loading refers to them by a stable numeric id.

use core::str::FromStr;

use crate::config::RealmConfig;
use crate::equipment::DefinitionError;

/// Trainable skill with a stable protocol id.
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
pub enum Skill {
    Attack = 0,
    Defence = 1,
    Strength = 2,
    Hitpoints = 3,
    Ranged = 4,
    Prayer = 5,
    Magic = 6,
    Cooking = 7,
    Woodcutting = 8,
    Fletching = 9,
    Fishing = 10,
    Firemaking = 11,
    Crafting = 12,
    Smithing = 13,
    Mining = 14,
    Herblore = 15,
    Agility = 16,
    Thieving = 17,
    Slayer = 18,
    Farming = 19,
    Runecrafting = 20,
}

impl Skill {
    pub const COUNT: usize = RealmConfig::SKILL_COUNT;

    /// All skills ordered by id.
    pub const ALL: [Skill; Self::COUNT] = [
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecrafting,
    ];

    /// Resolves a human-readable skill name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, DefinitionError> {
        Self::from_str(name.trim()).map_err(|_| DefinitionError::UnknownSkill(name.to_owned()))
    }

    /// Looks a skill up by its stable id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Read access to an entity's current skill levels.
///
/// Implemented by whatever stores skills (the player model on the server,
/// plain arrays in tests).
pub trait SkillLevels {
    fn level(&self, skill: Skill) -> u8;
}

impl SkillLevels for [u8; Skill::COUNT] {
    fn level(&self, skill: Skill) -> u8 {
        self[skill.as_index()]
    }
}

impl<T: SkillLevels + ?Sized> SkillLevels for &T {
    fn level(&self, skill: Skill) -> u8 {
        (**self).level(skill)
    }
}

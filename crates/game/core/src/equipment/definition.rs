//! Equipment item definitions.
//!
//! Definitions are built once per item id by a loader, validated on
//! construction and never mutated afterwards. Readers only get shared
//! slices, so a definition handed out by the registry can be read from any
//! number of threads.

use bitflags::bitflags;

use super::{DefinitionError, EquipmentSlot};
use crate::config::RealmConfig;
use crate::ids::ItemId;
use crate::skill::{Skill, SkillLevels};

/// Minimum skill level required to equip an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EquipmentRequirement {
    skill: Skill,
    level: u8,
}

impl EquipmentRequirement {
    /// Creates a requirement, resolving `name` to a skill.
    ///
    /// Fails with [`DefinitionError::UnknownSkill`] if no skill has that name.
    pub fn new(name: &str, level: u8) -> Result<Self, DefinitionError> {
        Ok(Self::for_skill(Skill::from_name(name)?, level))
    }

    pub const fn for_skill(skill: Skill, level: u8) -> Self {
        Self { skill, level }
    }

    /// The resolved skill id.
    #[inline]
    pub const fn id(&self) -> u8 {
        self.skill.id()
    }

    #[inline]
    pub const fn skill(&self) -> Skill {
        self.skill
    }

    #[inline]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Returns true if `skills` reaches the required level.
    pub fn is_met_by(&self, skills: &impl SkillLevels) -> bool {
        skills.level(self.skill) >= self.level
    }
}

/// Combat bonus categories, in the order they are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum BonusKind {
    StabAttack,
    SlashAttack,
    CrushAttack,
    MagicAttack,
    RangedAttack,
    StabDefence,
    SlashDefence,
    CrushDefence,
    MagicDefence,
    RangedDefence,
    Strength,
    Prayer,
}

impl BonusKind {
    pub const COUNT: usize = RealmConfig::BONUS_COUNT;

    pub const ALL: [BonusKind; Self::COUNT] = [
        BonusKind::StabAttack,
        BonusKind::SlashAttack,
        BonusKind::CrushAttack,
        BonusKind::MagicAttack,
        BonusKind::RangedAttack,
        BonusKind::StabDefence,
        BonusKind::SlashDefence,
        BonusKind::CrushDefence,
        BonusKind::MagicDefence,
        BonusKind::RangedDefence,
        BonusKind::Strength,
        BonusKind::Prayer,
    ];

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Fixed-width, signed combat bonuses of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bonuses([i32; BonusKind::COUNT]);

impl Bonuses {
    pub const fn new(values: [i32; BonusKind::COUNT]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn get(&self, kind: BonusKind) -> i32 {
        self.0[kind.as_index()]
    }

    /// Bonuses in [`BonusKind::ALL`] order.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Iterates `(kind, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (BonusKind, i32)> + '_ {
        BonusKind::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl TryFrom<&[i32]> for Bonuses {
    type Error = DefinitionError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        <[i32; BonusKind::COUNT]>::try_from(values)
            .map(Self)
            .map_err(|_| DefinitionError::BonusCount {
                expected: BonusKind::COUNT,
                found: values.len(),
            })
    }
}

bitflags! {
    /// Coverage and handedness of an equippable item.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EquipmentFlags: u8 {
        /// Occupies the shield hand as well as the weapon slot.
        const TWO_HANDED  = 1 << 0;
        /// Covers the arms and torso.
        const FULL_BODY   = 1 << 1;
        /// Covers the head and face.
        const FULL_HELMET = 1 << 2;
    }
}

/// Requirement as written in content files: skill name plus level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRequirement {
    pub name: String,
    pub level: u8,
}

/// Unvalidated definition fields as produced by a content loader.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEquipmentDefinition {
    pub id: u32,
    pub index: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub two_handed: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_body: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_helmet: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Vec<RawRequirement>,
    pub bonuses: Vec<i32>,
}

/// Equippable item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentDefinition {
    id: ItemId,
    slot: EquipmentSlot,
    flags: EquipmentFlags,
    requirements: Box<[EquipmentRequirement]>,
    bonuses: Bonuses,
}

impl EquipmentDefinition {
    /// Creates a definition, validating the slot index.
    pub fn new(
        id: ItemId,
        index: usize,
        flags: EquipmentFlags,
        requirements: Vec<EquipmentRequirement>,
        bonuses: Bonuses,
    ) -> Result<Self, DefinitionError> {
        let slot = EquipmentSlot::from_index(index).ok_or(DefinitionError::InvalidSlot(index))?;
        Ok(Self {
            id,
            slot,
            flags,
            requirements: requirements.into_boxed_slice(),
            bonuses,
        })
    }

    /// Validates raw loader output against `config`.
    ///
    /// Stops at the first problem; no partially-valid definition is produced.
    pub fn from_raw(
        raw: RawEquipmentDefinition,
        config: &RealmConfig,
    ) -> Result<Self, DefinitionError> {
        let requirements = raw
            .requirements
            .iter()
            .map(|req| {
                let requirement = EquipmentRequirement::new(&req.name, req.level)?;
                if requirement.level() > config.max_requirement_level {
                    return Err(DefinitionError::RequirementLevel {
                        skill: requirement.skill(),
                        level: requirement.level(),
                        max: config.max_requirement_level,
                    });
                }
                Ok(requirement)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut flags = EquipmentFlags::empty();
        flags.set(EquipmentFlags::TWO_HANDED, raw.two_handed);
        flags.set(EquipmentFlags::FULL_BODY, raw.full_body);
        flags.set(EquipmentFlags::FULL_HELMET, raw.full_helmet);

        let bonuses = Bonuses::try_from(raw.bonuses.as_slice())?;

        Self::new(ItemId(raw.id), raw.index, flags, requirements, bonuses)
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Container index of the occupied slot.
    #[inline]
    pub fn index(&self) -> usize {
        self.slot.index()
    }

    #[inline]
    pub fn slot(&self) -> EquipmentSlot {
        self.slot
    }

    #[inline]
    pub fn flags(&self) -> EquipmentFlags {
        self.flags
    }

    pub fn is_two_handed(&self) -> bool {
        self.flags.contains(EquipmentFlags::TWO_HANDED)
    }

    pub fn is_full_body(&self) -> bool {
        self.flags.contains(EquipmentFlags::FULL_BODY)
    }

    pub fn is_full_helmet(&self) -> bool {
        self.flags.contains(EquipmentFlags::FULL_HELMET)
    }

    /// Requirements in content-file order.
    #[inline]
    pub fn requirements(&self) -> &[EquipmentRequirement] {
        &self.requirements
    }

    #[inline]
    pub fn bonuses(&self) -> &Bonuses {
        &self.bonuses
    }

    /// Requirements `skills` does not meet, in content-file order.
    pub fn unmet_requirements<'a, S: SkillLevels>(
        &'a self,
        skills: &'a S,
    ) -> impl Iterator<Item = &'a EquipmentRequirement> + 'a {
        self.requirements
            .iter()
            .filter(move |req| !req.is_met_by(skills))
    }

    pub fn meets_requirements(&self, skills: &impl SkillLevels) -> bool {
        self.requirements.iter().all(|req| req.is_met_by(skills))
    }
}

impl TryFrom<RawEquipmentDefinition> for EquipmentDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawEquipmentDefinition) -> Result<Self, Self::Error> {
        Self::from_raw(raw, &RealmConfig::default())
    }
}

/// Equipment configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealmConfig {
    /// Highest skill level a requirement may ask for.
    /// Definitions exceeding it are rejected at load time.
    pub max_requirement_level: u8,
}

impl RealmConfig {
    // ===== compile-time constants =====
    /// Size of the equipment container (including unused protocol indices).
    pub const EQUIPMENT_SLOTS: usize = 14;
    /// Number of combat bonus categories carried by every definition.
    pub const BONUS_COUNT: usize = 12;
    /// Number of trainable skills.
    pub const SKILL_COUNT: usize = 21;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_REQUIREMENT_LEVEL: u8 = 99;

    pub fn new() -> Self {
        Self {
            max_requirement_level: Self::DEFAULT_MAX_REQUIREMENT_LEVEL,
        }
    }

    pub fn with_max_requirement_level(max_requirement_level: u8) -> Self {
        Self {
            max_requirement_level,
        }
    }
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self::new()
    }
}

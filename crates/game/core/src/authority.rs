//! Authority levels used for permission checks.
//!
//! Every level carries two ranks:
//! - an **external rank** (0..=2) sent to clients, whose protocol only knows
//!   player, moderator and administrator crowns
//! - an **internal rank** used for every in-process comparison
//!
//! The external rank is a lossy projection: several levels may share one
//! external rank. Authorization must only ever look at the internal rank.

use core::cmp::Ordering;

use crate::error::{ErrorSeverity, GameError};

/// Highest external rank the client protocol can represent.
pub const MAX_EXTERNAL_RANK: u8 = 2;

/// Errors raised when building rank pairs from untrusted numbers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthorityError {
    #[error("external rank {0} is out of range (expected 0..=2)")]
    ExternalRankOutOfRange(i32),
}

impl GameError for AuthorityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ExternalRankOutOfRange(_) => "AUTHORITY_EXTERNAL_RANK_OUT_OF_RANGE",
        }
    }
}

/// External/internal rank pair backing an [`AuthorityLevel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RankPair {
    external: u8,
    internal: u32,
}

impl RankPair {
    /// Creates a rank pair for the static level table.
    ///
    /// # Panics
    ///
    /// Panics if `external` exceeds [`MAX_EXTERNAL_RANK`]. Used in `const`
    /// context, this turns a bad table entry into a compile error.
    pub const fn new(external: u8, internal: u32) -> Self {
        assert!(
            external <= MAX_EXTERNAL_RANK,
            "external rank must be within 0..=2"
        );
        Self { external, internal }
    }

    /// Creates a rank pair from unchecked numbers.
    pub fn try_new(external: i32, internal: u32) -> Result<Self, AuthorityError> {
        match u8::try_from(external) {
            Ok(rank) if rank <= MAX_EXTERNAL_RANK => Ok(Self {
                external: rank,
                internal,
            }),
            _ => Err(AuthorityError::ExternalRankOutOfRange(external)),
        }
    }

    #[inline]
    pub const fn external(&self) -> u8 {
        self.external
    }

    #[inline]
    pub const fn internal(&self) -> u32 {
        self.internal
    }
}

const PLAYER_RANKS: RankPair = RankPair::new(0, 0);
const MODERATOR_RANKS: RankPair = RankPair::new(1, 1);
const ADMINISTRATOR_RANKS: RankPair = RankPair::new(2, 2);
const DEVELOPER_RANKS: RankPair = RankPair::new(2, 3);

/// Authority level of a player account.
///
/// Ordering (`<`, `max`, sorting) follows the internal rank, the same as the
/// named comparison methods.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuthorityLevel {
    #[default]
    Player,
    Moderator,
    Administrator,
    /// Shares the administrator crown on the client, outranks it on the server.
    Developer,
}

impl AuthorityLevel {
    /// All levels, ascending by internal rank.
    pub const ALL: [AuthorityLevel; 4] = [
        AuthorityLevel::Player,
        AuthorityLevel::Moderator,
        AuthorityLevel::Administrator,
        AuthorityLevel::Developer,
    ];

    /// Returns both ranks of this level.
    pub const fn ranks(self) -> RankPair {
        match self {
            Self::Player => PLAYER_RANKS,
            Self::Moderator => MODERATOR_RANKS,
            Self::Administrator => ADMINISTRATOR_RANKS,
            Self::Developer => DEVELOPER_RANKS,
        }
    }

    /// Rank sent to clients (0..=2).
    #[inline]
    pub const fn external_rank(self) -> u8 {
        self.ranks().external()
    }

    /// Rank used for all server-side comparisons.
    #[inline]
    pub const fn internal_rank(self) -> u32 {
        self.ranks().internal()
    }

    /// Lowest level that projects onto `rank`.
    ///
    /// Only meant for decoding protocol values; never authorize with the result,
    /// since the projection cannot tell administrators and developers apart.
    pub fn from_external_rank(rank: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.external_rank() == rank)
    }

    /// Determines if this level is greater than `other`.
    #[inline]
    pub const fn greater(self, other: Self) -> bool {
        self.internal_rank() > other.internal_rank()
    }

    /// Determines if this level is equal to or greater than `other`.
    #[inline]
    pub const fn equal_or_greater(self, other: Self) -> bool {
        self.internal_rank() >= other.internal_rank()
    }

    /// Determines if this level is less than `other`.
    #[inline]
    pub const fn less(self, other: Self) -> bool {
        self.internal_rank() < other.internal_rank()
    }

    /// Determines if this level is equal to or less than `other`.
    #[inline]
    pub const fn equal_or_less(self, other: Self) -> bool {
        self.internal_rank() <= other.internal_rank()
    }

    /// Determines if this level is equal to `other`.
    #[inline]
    pub const fn equal(self, other: Self) -> bool {
        self.internal_rank() == other.internal_rank()
    }
}

impl PartialOrd for AuthorityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AuthorityLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.internal_rank().cmp(&other.internal_rank())
    }
}

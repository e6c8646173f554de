//! # Domain Models
//!
//! These structs represent the inputs and outputs of the gamification core.
//! All of them are plain data; the rules that operate on them live in the
//! `services` crate.

mod badge;
mod content;
mod score;
mod tier;
mod weights;

pub use badge::{AuthorStats, BadgeDescriptor, BadgeId, StatKind, UnlockedBadgeSet};
pub use content::{AuthorKey, Post, Reply};
pub use score::{Leaderboard, LeaderboardCategory, RankedEntry, ScoreRecord};
pub use tier::{Tier, TierDescriptor};
pub use weights::{LeaderboardLimits, ReputationWeights};

use serde::{Deserialize, Deserializer};

/// Treats a missing or `null` count as zero.
pub(crate) fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! # Ports
//!
//! Boundaries between the pure scoring core and the outside world.
//! Adapters in `storage-adapters` implement these; services only ever see
//! the traits.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{AuthorKey, BadgeId, Post, Reply, ScoreRecord, UnlockedBadgeSet};

/// Per-author persistence of unlocked badges.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BadgeStore: Send + Sync {
    /// Current set for `author`. Missing or unreadable data is an empty set.
    async fn load(&self, author: &AuthorKey) -> Result<UnlockedBadgeSet>;

    /// Unions `ids` into the stored set and returns the ids that were not
    /// already present, in input order.
    ///
    /// Implementations must merge rather than overwrite, so two concurrent
    /// callers for the same author never lose each other's badges.
    async fn merge(&self, author: &AuthorKey, ids: &[BadgeId]) -> Result<Vec<BadgeId>>;
}

/// Read-only source of completed play-session scores.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ScoreRecordSource: Send + Sync {
    /// Up to `limit` records ordered by total score, highest first.
    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>>;
}

/// Read-only source of community content.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn posts(&self) -> Result<Vec<Post>>;
    async fn replies(&self) -> Result<Vec<Reply>>;
}

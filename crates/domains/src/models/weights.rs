//! Tunable constants of the scoring rules.

use serde::{Deserialize, Serialize};

/// Points awarded per interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationWeights {
    pub post_liked: u64,
    pub reply_liked: u64,
    pub post_marked_useful: u64,
    pub reply_marked_helpful: u64,
    /// Not consumed by the aggregator yet; no record type carries an
    /// accepted-suggestion count.
    pub suggestion_accepted: u64,
}

impl Default for ReputationWeights {
    fn default() -> Self {
        Self {
            post_liked: 2,
            reply_liked: 2,
            post_marked_useful: 10,
            reply_marked_helpful: 15,
            suggestion_accepted: 20,
        }
    }
}

/// How many score records are fetched and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardLimits {
    /// Upper bound on records requested from the score source
    pub fetch_limit: usize,
    pub compact_limit: usize,
    pub full_limit: usize,
}

impl Default for LeaderboardLimits {
    fn default() -> Self {
        Self {
            fetch_limit: 100,
            compact_limit: 5,
            full_limit: 20,
        }
    }
}

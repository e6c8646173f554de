//! crates/services/src/lib.rs
//!
//! The gamification scoring core.
//!
//! ```text
//! posts/replies ──► ScoreAggregator ──► reputation ──► TierClassifier
//!               └─► BadgeEvaluator (stats + rule table) ──► new badges
//! score records ──► LeaderboardRanker ──► ranked entries + viewer rank
//! ```
//!
//! The four components are pure and synchronous. `GamificationService` is
//! the thin async shell that feeds them from the ports in `domains`.

pub mod badges;
pub mod gamification;
pub mod leaderboard;
pub mod reputation;
pub mod tier;

pub use badges::{BadgeEvaluator, BadgeProgress, BadgeRule, COMMUNITY_RULES};
pub use gamification::{AuthorProfile, GamificationService, LeaderboardView};
pub use leaderboard::LeaderboardRanker;
pub use reputation::ScoreAggregator;
pub use tier::{TierClassifier, TierProgress};

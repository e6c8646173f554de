//! Badge unlocking.
//!
//! Rules are data: each [`BadgeRule`] names a badge, the statistic it reads
//! and the threshold that statistic must reach. Adding a badge means adding
//! a row to [`COMMUNITY_RULES`]; the evaluation loop never changes.
//!
//! Unlocking is one-way. The evaluator only ever reports ids that are not in
//! the caller's current set, so feeding its output back in yields nothing.

use domains::{AuthorKey, AuthorStats, BadgeId, Post, Reply, StatKind, UnlockedBadgeSet};
use serde::Serialize;

use crate::reputation::ScoreAggregator;

/// `stat >= threshold` unlocks `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeRule {
    pub id: BadgeId,
    pub stat: StatKind,
    pub threshold: u64,
}

impl BadgeRule {
    pub const fn new(id: BadgeId, stat: StatKind, threshold: u64) -> Self {
        Self { id, stat, threshold }
    }

    pub fn is_satisfied(&self, stats: &AuthorStats) -> bool {
        stats.get(self.stat) >= self.threshold
    }
}

/// The rule table for community badges.
pub const COMMUNITY_RULES: [BadgeRule; 5] = [
    BadgeRule::new(BadgeId::MentorNird, StatKind::HelpfulReplyCount, 10),
    BadgeRule::new(BadgeId::IdeaFactory, StatKind::SuggestionCount, 5),
    BadgeRule::new(BadgeId::ReputationStar, StatKind::Reputation, 100),
    BadgeRule::new(BadgeId::TrustedVoice, StatKind::UsefulPostCount, 3),
    BadgeRule::new(BadgeId::Helpful, StatKind::HelpfulReplyCount, 5),
];

/// Progress of one author towards one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeProgress {
    pub id: BadgeId,
    pub current: u64,
    pub threshold: u64,
    pub unlocked: bool,
}

#[derive(Debug, Clone)]
pub struct BadgeEvaluator {
    aggregator: ScoreAggregator,
    rules: Vec<BadgeRule>,
}

impl Default for BadgeEvaluator {
    fn default() -> Self {
        Self::new(ScoreAggregator::default())
    }
}

impl BadgeEvaluator {
    /// Evaluator over [`COMMUNITY_RULES`].
    pub fn new(aggregator: ScoreAggregator) -> Self {
        Self::with_rules(aggregator, COMMUNITY_RULES.to_vec())
    }

    pub fn with_rules(aggregator: ScoreAggregator, rules: Vec<BadgeRule>) -> Self {
        Self { aggregator, rules }
    }

    pub fn rules(&self) -> &[BadgeRule] {
        &self.rules
    }

    pub fn aggregator(&self) -> &ScoreAggregator {
        &self.aggregator
    }

    /// Derives every statistic the rule table can read, in one pass.
    pub fn author_stats(&self, author: &AuthorKey, posts: &[Post], replies: &[Reply]) -> AuthorStats {
        let mut stats = AuthorStats {
            reputation: self.aggregator.compute_reputation(author, posts, replies),
            ..AuthorStats::default()
        };

        for post in posts.iter().filter(|post| post.is_by(author)) {
            if post.is_suggestion() {
                stats.suggestion_count += 1;
            }
            if post.useful_count >= 1 {
                stats.useful_post_count += 1;
            }
        }
        stats.helpful_reply_count = replies
            .iter()
            .filter(|reply| reply.is_by(author) && reply.useful_count >= 1)
            .count() as u64;

        stats
    }

    /// Badges whose rule now holds and which are not yet in `unlocked`,
    /// in rule-table order.
    pub fn evaluate_new_badges(
        &self,
        author: &AuthorKey,
        posts: &[Post],
        replies: &[Reply],
        unlocked: &UnlockedBadgeSet,
    ) -> Vec<BadgeId> {
        let stats = self.author_stats(author, posts, replies);
        self.evaluate_stats(&stats, unlocked)
    }

    /// Same as [`evaluate_new_badges`](Self::evaluate_new_badges) over
    /// precomputed statistics.
    pub fn evaluate_stats(&self, stats: &AuthorStats, unlocked: &UnlockedBadgeSet) -> Vec<BadgeId> {
        let mut newly_unlocked = Vec::new();
        for rule in &self.rules {
            if rule.is_satisfied(stats)
                && !unlocked.contains(rule.id)
                && !newly_unlocked.contains(&rule.id)
            {
                newly_unlocked.push(rule.id);
            }
        }
        newly_unlocked
    }

    pub fn progress(&self, stats: &AuthorStats, unlocked: &UnlockedBadgeSet) -> Vec<BadgeProgress> {
        self.rules
            .iter()
            .map(|rule| BadgeProgress {
                id: rule.id,
                current: stats.get(rule.stat),
                threshold: rule.threshold,
                unlocked: unlocked.contains(rule.id),
            })
            .collect()
    }
}

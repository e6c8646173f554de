//! # GamificationService
//!
//! Async shell around the pure scoring components. It fetches inputs from
//! the ports, runs the rules and persists newly unlocked badges through the
//! badge store's merge operation.

use std::sync::Arc;

use domains::{
    AuthorKey, AuthorStats, BadgeId, BadgeStore, ContentSource, DomainError, Leaderboard,
    LeaderboardCategory, LeaderboardLimits, ScoreRecordSource, UnlockedBadgeSet,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::badges::{BadgeEvaluator, BadgeProgress};
use crate::leaderboard::LeaderboardRanker;
use crate::tier::{TierClassifier, TierProgress};

/// Which leaderboard size the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardView {
    Compact,
    Full,
}

/// Everything the profile page shows about one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfile {
    pub author: AuthorKey,
    pub stats: AuthorStats,
    pub tier: TierProgress,
    pub unlocked: UnlockedBadgeSet,
    pub badge_progress: Vec<BadgeProgress>,
}

/// Feeds the scoring components from the ports and persists badge unlocks.
pub struct GamificationService {
    badges: Arc<dyn BadgeStore>,
    scores: Arc<dyn ScoreRecordSource>,
    content: Arc<dyn ContentSource>,
    evaluator: BadgeEvaluator,
    classifier: TierClassifier,
    ranker: LeaderboardRanker,
    limits: LeaderboardLimits,
}

impl GamificationService {
    pub fn new(
        badges: Arc<dyn BadgeStore>,
        scores: Arc<dyn ScoreRecordSource>,
        content: Arc<dyn ContentSource>,
        evaluator: BadgeEvaluator,
        limits: LeaderboardLimits,
    ) -> Self {
        Self {
            badges,
            scores,
            content,
            evaluator,
            classifier: TierClassifier,
            ranker: LeaderboardRanker,
            limits,
        }
    }

    async fn author_stats(&self, author: &AuthorKey) -> Result<AuthorStats, DomainError> {
        let posts = self.content.posts().await?;
        let replies = self.content.replies().await?;
        Ok(self.evaluator.author_stats(author, &posts, &replies))
    }

    /// Reputation, tier and badge state for `author`. Read-only.
    pub async fn profile(&self, author: &AuthorKey) -> Result<AuthorProfile, DomainError> {
        let stats = self.author_stats(author).await?;
        let unlocked = self.badges.load(author).await?;

        Ok(AuthorProfile {
            author: author.clone(),
            tier: self.classifier.progress(stats.reputation),
            badge_progress: self.evaluator.progress(&stats, &unlocked),
            stats,
            unlocked,
        })
    }

    /// Evaluates the rule table for `author` and persists what is new.
    ///
    /// Returns the ids this call actually added to the store; a second call
    /// with unchanged content returns an empty list.
    pub async fn refresh_badges(&self, author: &AuthorKey) -> Result<Vec<BadgeId>, DomainError> {
        let stats = self.author_stats(author).await?;
        let unlocked = self.badges.load(author).await?;

        let candidates = self.evaluator.evaluate_stats(&stats, &unlocked);
        if candidates.is_empty() {
            debug!(%author, reputation = stats.reputation, "no new badges");
            return Ok(candidates);
        }

        let added = self.badges.merge(author, &candidates).await?;
        for badge in &added {
            info!(%author, %badge, "badge unlocked");
        }
        Ok(added)
    }

    pub async fn leaderboard(
        &self,
        category: LeaderboardCategory,
        viewer: Option<&str>,
        view: LeaderboardView,
    ) -> Result<Leaderboard, DomainError> {
        let limit = match view {
            LeaderboardView::Compact => self.limits.compact_limit,
            LeaderboardView::Full => self.limits.full_limit,
        };
        let records = self.scores.top_scores(self.limits.fetch_limit).await?;
        debug!(%category, records = records.len(), limit, "ranking leaderboard");

        Ok(self.ranker.rank(&records, category, viewer, limit))
    }

    /// Parses `category` before touching the score source.
    pub async fn leaderboard_by_key(
        &self,
        category: &str,
        viewer: Option<&str>,
        view: LeaderboardView,
    ) -> Result<Leaderboard, DomainError> {
        let category = category.parse::<LeaderboardCategory>()?;
        self.leaderboard(category, viewer, view).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{MockBadgeStore, MockContentSource, MockScoreRecordSource, Post, Reply, ScoreRecord, Tier};
    use mockall::predicate::eq;

    fn content(posts: Vec<Post>, replies: Vec<Reply>) -> MockContentSource {
        let mut source = MockContentSource::new();
        source.expect_posts().returning(move || Ok(posts.clone()));
        source.expect_replies().returning(move || Ok(replies.clone()));
        source
    }

    fn service(
        badges: MockBadgeStore,
        scores: MockScoreRecordSource,
        content: MockContentSource,
    ) -> GamificationService {
        GamificationService::new(
            Arc::new(badges),
            Arc::new(scores),
            Arc::new(content),
            BadgeEvaluator::default(),
            LeaderboardLimits::default(),
        )
    }

    #[tokio::test]
    async fn refresh_merges_only_new_badges() {
        let alice = AuthorKey::from("alice");
        let replies: Vec<Reply> = (0..5).map(|_| Reply::new("alice", 0, 1)).collect();

        let mut badges = MockBadgeStore::new();
        badges
            .expect_load()
            .returning(|_| Ok([BadgeId::Scanner].into_iter().collect()));
        badges
            .expect_merge()
            .withf(|author, ids| author.as_str() == "alice" && ids == [BadgeId::Helpful])
            .times(1)
            .returning(|_, ids| Ok(ids.to_vec()));

        let svc = service(badges, MockScoreRecordSource::new(), content(vec![], replies));
        assert_eq!(svc.refresh_badges(&alice).await.unwrap(), vec![BadgeId::Helpful]);
    }

    #[tokio::test]
    async fn refresh_skips_store_write_when_nothing_is_new() {
        let mut badges = MockBadgeStore::new();
        badges.expect_load().returning(|_| Ok(UnlockedBadgeSet::new()));
        badges.expect_merge().never();

        let svc = service(badges, MockScoreRecordSource::new(), content(vec![], vec![]));
        assert!(svc.refresh_badges(&AuthorKey::from("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let mut badges = MockBadgeStore::new();
        badges
            .expect_load()
            .returning(|_| Err(DomainError::Storage("offline".into())));

        let svc = service(badges, MockScoreRecordSource::new(), content(vec![], vec![]));
        assert_eq!(
            svc.refresh_badges(&AuthorKey::from("alice")).await,
            Err(DomainError::Storage("offline".into()))
        );
    }

    #[tokio::test]
    async fn profile_combines_tier_and_badges() {
        let posts = vec![Post::new("alice", 30, 5)];
        let mut badges = MockBadgeStore::new();
        badges
            .expect_load()
            .returning(|_| Ok([BadgeId::ReputationStar].into_iter().collect()));

        let svc = service(badges, MockScoreRecordSource::new(), content(posts, vec![]));
        let profile = svc.profile(&AuthorKey::from("alice")).await.unwrap();

        assert_eq!(profile.stats.reputation, 110);
        assert_eq!(profile.tier.tier, Tier::Confirmed);
        assert_eq!(profile.tier.points_to_next, 90);
        assert!(profile.unlocked.contains(BadgeId::ReputationStar));
        assert_eq!(profile.badge_progress.len(), 5);
    }

    #[tokio::test]
    async fn leaderboard_uses_configured_limits() {
        let mut scores = MockScoreRecordSource::new();
        scores
            .expect_top_scores()
            .with(eq(100))
            .times(2)
            .returning(|_| {
                Ok((0..30)
                    .map(|i| ScoreRecord::new(format!("p{i}")).with_scores(300 - i, 0, 0, 0))
                    .collect())
            });

        let svc = service(MockBadgeStore::new(), scores, MockContentSource::new());
        let compact = svc
            .leaderboard(LeaderboardCategory::Total, Some("p25"), LeaderboardView::Compact)
            .await
            .unwrap();
        assert_eq!(compact.entries.len(), 5);
        assert_eq!(compact.viewer_rank, Some(26));

        let full = svc
            .leaderboard(LeaderboardCategory::Total, None, LeaderboardView::Full)
            .await
            .unwrap();
        assert_eq!(full.entries.len(), 20);
    }

    #[tokio::test]
    async fn invalid_category_never_hits_the_source() {
        let mut scores = MockScoreRecordSource::new();
        scores.expect_top_scores().never();

        let svc = service(MockBadgeStore::new(), scores, MockContentSource::new());
        assert_eq!(
            svc.leaderboard_by_key("fastest", None, LeaderboardView::Full).await,
            Err(DomainError::InvalidCategory("fastest".into()))
        );
    }
}

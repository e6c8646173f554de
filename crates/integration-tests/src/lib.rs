//! Shared fixtures for the integration test binaries.

use std::sync::Arc;

use configs::Settings;
use domains::{Post, Reply, ScoreRecord};
use services::{BadgeEvaluator, GamificationService, ScoreAggregator};
use storage_adapters::{InMemoryContent, InMemoryScoreRecords, KeyValueBadgeStore};

/// Adapters behind a service, kept so tests can inspect or mutate them.
pub struct Harness {
    pub badges: Arc<KeyValueBadgeStore>,
    pub scores: Arc<InMemoryScoreRecords>,
    pub content: Arc<InMemoryContent>,
    pub service: GamificationService,
}

impl Harness {
    pub fn new(posts: Vec<Post>, replies: Vec<Reply>, records: Vec<ScoreRecord>) -> Self {
        Self::with_settings(Settings::default(), posts, replies, records)
    }

    pub fn with_settings(
        settings: Settings,
        posts: Vec<Post>,
        replies: Vec<Reply>,
        records: Vec<ScoreRecord>,
    ) -> Self {
        let badges = Arc::new(KeyValueBadgeStore::new());
        let scores = Arc::new(InMemoryScoreRecords::new(records));
        let content = Arc::new(InMemoryContent::new(posts, replies));

        let service = GamificationService::new(
            badges.clone(),
            scores.clone(),
            content.clone(),
            BadgeEvaluator::new(ScoreAggregator::new(settings.weights)),
            settings.leaderboard,
        );

        Self {
            badges,
            scores,
            content,
            service,
        }
    }
}

pub fn session(player: &str, total: i64, ecology: i64, autonomy: i64, satisfaction: i64) -> ScoreRecord {
    ScoreRecord::new(player).with_scores(total, ecology, autonomy, satisfaction)
}

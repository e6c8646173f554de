//! In-memory record sources, used for tests and local demos.

use async_trait::async_trait;
use domains::{ContentSource, DomainError, Post, Reply, ScoreRecord, ScoreRecordSource};
use tokio::sync::RwLock;

/// Completed play sessions kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryScoreRecords {
    records: RwLock<Vec<ScoreRecord>>,
}

impl InMemoryScoreRecords {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn record(&self, record: ScoreRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl ScoreRecordSource for InMemoryScoreRecords {
    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRecord>, DomainError> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        records.truncate(limit);
        Ok(records)
    }
}

/// Fixed community content.
#[derive(Debug, Default)]
pub struct InMemoryContent {
    posts: RwLock<Vec<Post>>,
    replies: RwLock<Vec<Reply>>,
}

impl InMemoryContent {
    pub fn new(posts: Vec<Post>, replies: Vec<Reply>) -> Self {
        Self {
            posts: RwLock::new(posts),
            replies: RwLock::new(replies),
        }
    }

    pub async fn add_post(&self, post: Post) {
        self.posts.write().await.push(post);
    }

    pub async fn add_reply(&self, reply: Reply) {
        self.replies.write().await.push(reply);
    }
}

#[async_trait]
impl ContentSource for InMemoryContent {
    async fn posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn replies(&self) -> Result<Vec<Reply>, DomainError> {
        Ok(self.replies.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_scores_orders_by_total_and_truncates() {
        let source = InMemoryScoreRecords::new(vec![
            ScoreRecord::new("a").with_scores(10, 0, 0, 0),
            ScoreRecord::new("b").with_scores(30, 0, 0, 0),
            ScoreRecord::new("c").with_scores(20, 0, 0, 0),
        ]);

        let top = tokio_test::block_on(source.top_scores(2)).unwrap();
        let players: Vec<&str> = top.iter().map(|r| r.player_id.as_str()).collect();
        assert_eq!(players, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn content_reflects_additions() {
        let content = InMemoryContent::default();
        content.add_post(Post::new("alice", 1, 0)).await;
        content.add_reply(Reply::new("bob", 0, 1)).await;

        assert_eq!(content.posts().await.unwrap().len(), 1);
        assert_eq!(content.replies().await.unwrap().len(), 1);
    }
}

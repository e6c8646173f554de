//! Reputation aggregation.
//!
//! Reputation is never stored; it is recomputed from an author's content
//! every time. Arithmetic saturates so the fold is total.

use domains::{AuthorKey, Post, Reply, ReputationWeights};

/// Folds content records into a single reputation value per author.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAggregator {
    weights: ReputationWeights,
}

impl ScoreAggregator {
    pub fn new(weights: ReputationWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ReputationWeights {
        &self.weights
    }

    /// Sum of weighted likes and useful/helpful marks over `author`'s posts
    /// and replies. Records by other authors are ignored.
    pub fn compute_reputation(&self, author: &AuthorKey, posts: &[Post], replies: &[Reply]) -> u64 {
        let from_posts = posts
            .iter()
            .filter(|post| post.is_by(author))
            .fold(0u64, |acc, post| acc.saturating_add(self.post_points(post)));

        replies
            .iter()
            .filter(|reply| reply.is_by(author))
            .fold(from_posts, |acc, reply| acc.saturating_add(self.reply_points(reply)))
    }

    fn post_points(&self, post: &Post) -> u64 {
        post.like_count
            .saturating_mul(self.weights.post_liked)
            .saturating_add(post.useful_count.saturating_mul(self.weights.post_marked_useful))
    }

    fn reply_points(&self, reply: &Reply) -> u64 {
        reply
            .like_count
            .saturating_mul(self.weights.reply_liked)
            .saturating_add(reply.useful_count.saturating_mul(self.weights.reply_marked_helpful))
    }
}

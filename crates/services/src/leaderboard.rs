//! Leaderboard ranking.
//!
//! Records are sorted by the selected category, highest first. Equal scores
//! keep their input order (the sort is stable and there is no secondary
//! key), so the same input always produces the same ranks.

use domains::{DomainError, Leaderboard, LeaderboardCategory, RankedEntry, ScoreRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct LeaderboardRanker;

impl LeaderboardRanker {
    /// Ranks `records` by `category` and keeps the first `limit` entries.
    ///
    /// `viewer_rank` is the 1-based position of the viewer's first record
    /// in the full ordering, regardless of `limit`.
    pub fn rank(
        &self,
        records: &[ScoreRecord],
        category: LeaderboardCategory,
        viewer: Option<&str>,
        limit: usize,
    ) -> Leaderboard {
        let mut ordered: Vec<&ScoreRecord> = records.iter().collect();
        ordered.sort_by(|a, b| b.score(category).cmp(&a.score(category)));

        let viewer_rank = viewer.and_then(|viewer| {
            ordered
                .iter()
                .position(|record| record.player_id == viewer)
                .map(|index| index + 1)
        });

        let entries = ordered
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, record)| RankedEntry {
                rank: index + 1,
                record: record.clone(),
            })
            .collect();

        Leaderboard {
            category,
            entries,
            viewer_rank,
        }
    }

    /// Like [`rank`](Self::rank) but with the category given as a string key.
    pub fn rank_by_key(
        &self,
        records: &[ScoreRecord],
        category: &str,
        viewer: Option<&str>,
        limit: usize,
    ) -> Result<Leaderboard, DomainError> {
        let category = category.parse::<LeaderboardCategory>()?;
        Ok(self.rank(records, category, viewer, limit))
    }
}

//! Play-session score records and leaderboard output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::null_as_zero;
use crate::errors::DomainError;

/// One completed play session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    #[serde(default)]
    pub id: Uuid,
    pub player_id: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_score: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub ecology_score: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub autonomy_score: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub satisfaction_score: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub scenarios_completed: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub play_duration_seconds: u64,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// A fresh record with all scores at zero.
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id: player_id.into(),
            total_score: 0,
            ecology_score: 0,
            autonomy_score: 0,
            satisfaction_score: 0,
            scenarios_completed: 0,
            play_duration_seconds: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_scores(mut self, total: i64, ecology: i64, autonomy: i64, satisfaction: i64) -> Self {
        self.total_score = total;
        self.ecology_score = ecology;
        self.autonomy_score = autonomy;
        self.satisfaction_score = satisfaction;
        self
    }

    pub fn score(&self, category: LeaderboardCategory) -> i64 {
        match category {
            LeaderboardCategory::Total => self.total_score,
            LeaderboardCategory::Ecology => self.ecology_score,
            LeaderboardCategory::Autonomy => self.autonomy_score,
            LeaderboardCategory::Satisfaction => self.satisfaction_score,
        }
    }
}

/// The score field a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardCategory {
    #[default]
    Total,
    Ecology,
    Autonomy,
    Satisfaction,
}

impl LeaderboardCategory {
    pub const ALL: [LeaderboardCategory; 4] = [
        LeaderboardCategory::Total,
        LeaderboardCategory::Ecology,
        LeaderboardCategory::Autonomy,
        LeaderboardCategory::Satisfaction,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LeaderboardCategory::Total => "total",
            LeaderboardCategory::Ecology => "ecology",
            LeaderboardCategory::Autonomy => "autonomy",
            LeaderboardCategory::Satisfaction => "satisfaction",
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeaderboardCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

/// A record together with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub record: ScoreRecord,
}

/// Ranked view over a set of score records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub category: LeaderboardCategory,
    /// Truncated to the requested limit
    pub entries: Vec<RankedEntry>,
    /// Viewer's rank in the full, untruncated ordering
    pub viewer_rank: Option<usize>,
}

impl Leaderboard {
    pub fn empty(category: LeaderboardCategory) -> Self {
        Self {
            category,
            entries: Vec::new(),
            viewer_rank: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing_fails_fast_on_unknown_keys() {
        for category in LeaderboardCategory::ALL {
            assert_eq!(category.as_str().parse::<LeaderboardCategory>(), Ok(category));
        }
        assert_eq!(
            "speed".parse::<LeaderboardCategory>(),
            Err(DomainError::InvalidCategory("speed".into()))
        );
        assert!("Total".parse::<LeaderboardCategory>().is_err());
    }

    #[test]
    fn absent_score_fields_deserialize_as_zero() {
        let record: ScoreRecord =
            serde_json::from_str(r#"{"playerId":"p1","totalScore":40,"ecologyScore":null}"#)
                .unwrap();
        assert_eq!(record.score(LeaderboardCategory::Total), 40);
        assert_eq!(record.score(LeaderboardCategory::Ecology), 0);
        assert_eq!(record.score(LeaderboardCategory::Autonomy), 0);
        assert_eq!(record.score(LeaderboardCategory::Satisfaction), 0);
    }
}

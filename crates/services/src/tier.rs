//! Score → tier classification.

use domains::{Tier, TierDescriptor};
use serde::Serialize;

/// Where a score sits relative to the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    pub tier: Tier,
    pub next: Option<Tier>,
    /// Points still missing to reach `next`; zero at the top tier
    pub points_to_next: u64,
}

/// Maps a reputation score to its tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierClassifier;

impl TierClassifier {
    /// Highest tier whose inclusive lower bound `score` meets.
    pub fn tier_for(&self, score: u64) -> Tier {
        Tier::ALL
            .into_iter()
            .rev()
            .find(|tier| score >= tier.min_score())
            .unwrap_or(Tier::Newcomer)
    }

    pub fn classify(&self, score: u64) -> TierDescriptor {
        self.tier_for(score).descriptor()
    }

    pub fn progress(&self, score: u64) -> TierProgress {
        let tier = self.tier_for(score);
        let next = tier.next();
        TierProgress {
            tier,
            next,
            points_to_next: next.map_or(0, |next| next.min_score().saturating_sub(score)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive_and_contiguous() {
        let classifier = TierClassifier;
        let cases = [
            (0, Tier::Newcomer),
            (49, Tier::Newcomer),
            (50, Tier::Active),
            (99, Tier::Active),
            (100, Tier::Confirmed),
            (199, Tier::Confirmed),
            (200, Tier::Expert),
            (499, Tier::Expert),
            (500, Tier::Legend),
            (u64::MAX, Tier::Legend),
        ];
        for (score, expected) in cases {
            assert_eq!(classifier.classify(score).tier, expected, "score {score}");
        }
    }

    #[test]
    fn every_score_up_to_legend_has_exactly_one_tier() {
        let classifier = TierClassifier;
        let mut previous = Tier::Newcomer;
        for score in 0..=600u64 {
            let tier = classifier.tier_for(score);
            assert!(tier >= previous, "tiers must not go backwards at {score}");
            assert!(score >= tier.min_score());
            if let Some(next) = tier.next() {
                assert!(score < next.min_score());
            }
            previous = tier;
        }
    }

    #[test]
    fn progress_counts_down_to_next_tier() {
        let classifier = TierClassifier;
        assert_eq!(
            classifier.progress(42),
            TierProgress {
                tier: Tier::Newcomer,
                next: Some(Tier::Active),
                points_to_next: 8,
            }
        );
        assert_eq!(classifier.progress(200).points_to_next, 300);
        assert_eq!(
            classifier.progress(900),
            TierProgress {
                tier: Tier::Legend,
                next: None,
                points_to_next: 0,
            }
        );
    }
}

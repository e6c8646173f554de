//! Reputation tiers.
//!
//! Tiers partition `[0, ∞)`: each tier starts at its `min_score` and ends
//! right before the next tier's `min_score`. `Legend` is unbounded.

use serde::{Deserialize, Serialize};

/// Ordered achievement tier. The derived `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Newcomer,
    Active,
    Confirmed,
    Expert,
    Legend,
}

/// Display information for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub tier: Tier,
    pub label: &'static str,
    pub icon: &'static str,
    /// Hex color used by badges and progress bars
    pub color: &'static str,
    pub min_score: u64,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 5] = [
        Tier::Newcomer,
        Tier::Active,
        Tier::Confirmed,
        Tier::Expert,
        Tier::Legend,
    ];

    /// Inclusive lower bound of the tier.
    pub const fn min_score(self) -> u64 {
        match self {
            Tier::Newcomer => 0,
            Tier::Active => 50,
            Tier::Confirmed => 100,
            Tier::Expert => 200,
            Tier::Legend => 500,
        }
    }

    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::Newcomer => Some(Tier::Active),
            Tier::Active => Some(Tier::Confirmed),
            Tier::Confirmed => Some(Tier::Expert),
            Tier::Expert => Some(Tier::Legend),
            Tier::Legend => None,
        }
    }

    pub const fn descriptor(self) -> TierDescriptor {
        let (label, icon, color) = match self {
            Tier::Newcomer => ("Newcomer", "🌱", "#9ca3af"),
            Tier::Active => ("Active", "⚡", "#3b82f6"),
            Tier::Confirmed => ("Confirmed", "✅", "#10b981"),
            Tier::Expert => ("Expert", "🎓", "#8b5cf6"),
            Tier::Legend => ("Legend", "👑", "#f59e0b"),
        };
        TierDescriptor {
            tier: self,
            label,
            icon,
            color,
            min_score: self.min_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_strictly_increasing_from_zero() {
        assert_eq!(Tier::ALL[0].min_score(), 0);
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].min_score() < pair[1].min_score());
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Tier::Legend.next(), None);
    }

    #[test]
    fn descriptor_carries_bound() {
        let legend = Tier::Legend.descriptor();
        assert_eq!(legend.label, "Legend");
        assert_eq!(legend.min_score, 500);
    }
}

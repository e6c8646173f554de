//! Badge identifiers, per-author statistics and the unlocked badge set.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::errors::DomainError;

/// Every badge the application knows about.
///
/// The first nine are display-only achievements unlocked by other parts of
/// the application; the last five are driven by the badge rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeId {
    Scanner,
    PillarInclusion,
    PillarResponsability,
    PillarDurability,
    LinuxMaster,
    Autonomy,
    Transformer,
    NirdHero,
    EcoChampion,
    MentorNird,
    IdeaFactory,
    ReputationStar,
    TrustedVoice,
    Helpful,
}

/// Human-readable badge information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDescriptor {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl BadgeId {
    pub const ALL: [BadgeId; 14] = [
        BadgeId::Scanner,
        BadgeId::PillarInclusion,
        BadgeId::PillarResponsability,
        BadgeId::PillarDurability,
        BadgeId::LinuxMaster,
        BadgeId::Autonomy,
        BadgeId::Transformer,
        BadgeId::NirdHero,
        BadgeId::EcoChampion,
        BadgeId::MentorNird,
        BadgeId::IdeaFactory,
        BadgeId::ReputationStar,
        BadgeId::TrustedVoice,
        BadgeId::Helpful,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BadgeId::Scanner => "scanner",
            BadgeId::PillarInclusion => "pillar-inclusion",
            BadgeId::PillarResponsability => "pillar-responsability",
            BadgeId::PillarDurability => "pillar-durability",
            BadgeId::LinuxMaster => "linux-master",
            BadgeId::Autonomy => "autonomy",
            BadgeId::Transformer => "transformer",
            BadgeId::NirdHero => "nird-hero",
            BadgeId::EcoChampion => "eco-champion",
            BadgeId::MentorNird => "mentor-nird",
            BadgeId::IdeaFactory => "idea-factory",
            BadgeId::ReputationStar => "reputation-star",
            BadgeId::TrustedVoice => "trusted-voice",
            BadgeId::Helpful => "helpful",
        }
    }

    /// True for badges unlocked by the community rule table.
    pub const fn is_rule_driven(self) -> bool {
        matches!(
            self,
            BadgeId::MentorNird
                | BadgeId::IdeaFactory
                | BadgeId::ReputationStar
                | BadgeId::TrustedVoice
                | BadgeId::Helpful
        )
    }

    pub const fn descriptor(self) -> BadgeDescriptor {
        let (name, description, icon) = match self {
            BadgeId::Scanner => ("Scanner", "Completed a first device diagnostic", "🔍"),
            BadgeId::PillarInclusion => ("Inclusion Pillar", "Mastered the inclusion pillar", "🤝"),
            BadgeId::PillarResponsability => {
                ("Responsibility Pillar", "Mastered the responsibility pillar", "⚖️")
            }
            BadgeId::PillarDurability => ("Durability Pillar", "Mastered the durability pillar", "♻️"),
            BadgeId::LinuxMaster => ("Linux Master", "Completed every Linux challenge", "🐧"),
            BadgeId::Autonomy => ("Autonomy", "Reached full digital autonomy", "🗽"),
            BadgeId::Transformer => ("Transformer", "Transformed a school's IT setup", "🔧"),
            BadgeId::NirdHero => ("NIRD Hero", "Unlocked every pillar badge", "🦸"),
            BadgeId::EcoChampion => ("Eco Champion", "Top ecology score in a session", "🌍"),
            BadgeId::MentorNird => ("NIRD Mentor", "10 replies marked helpful", "🧑‍🏫"),
            BadgeId::IdeaFactory => ("Idea Factory", "Posted 5 suggestions", "💡"),
            BadgeId::ReputationStar => ("Reputation Star", "Reached 100 reputation points", "⭐"),
            BadgeId::TrustedVoice => ("Trusted Voice", "3 posts marked useful", "📣"),
            BadgeId::Helpful => ("Helpful", "5 replies marked helpful", "🙌"),
        };
        BadgeDescriptor {
            id: self,
            name,
            description,
            icon,
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnknownBadge(s.to_string()))
    }
}

/// Selects one field of [`AuthorStats`]. Badge rules are keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    HelpfulReplyCount,
    SuggestionCount,
    UsefulPostCount,
    Reputation,
}

/// Per-author statistics derived from content records in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    /// Replies with at least one helpful mark
    pub helpful_reply_count: u64,
    /// Posts in the "suggestion" category
    pub suggestion_count: u64,
    /// Posts with at least one useful mark
    pub useful_post_count: u64,
    pub reputation: u64,
}

impl AuthorStats {
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::HelpfulReplyCount => self.helpful_reply_count,
            StatKind::SuggestionCount => self.suggestion_count,
            StatKind::UsefulPostCount => self.useful_post_count,
            StatKind::Reputation => self.reputation,
        }
    }
}

/// Monotonic, insertion-ordered set of badges an author has earned.
///
/// Serialized as a plain JSON array of id strings. Decoding drops
/// duplicates and skips elements that are not a known badge id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnlockedBadgeSet(Vec<BadgeId>);

/// One element of a persisted badge array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBadge {
    Known(BadgeId),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for UnlockedBadgeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = Vec::<StoredBadge>::deserialize(deserializer)?;
        let total = stored.len();
        let set: UnlockedBadgeSet = stored
            .into_iter()
            .filter_map(|entry| match entry {
                StoredBadge::Known(id) => Some(id),
                StoredBadge::Other(IgnoredAny) => None,
            })
            .collect();
        if set.len() < total {
            debug!(kept = set.len(), total, "skipped duplicate or unrecognized badge entries");
        }
        Ok(set)
    }
}

impl UnlockedBadgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a persisted badge list.
    ///
    /// Missing data, or a value that is not a JSON array, yields an empty
    /// set. Inside an array, unrecognized or non-string entries are skipped;
    /// they stay in storage untouched.
    pub fn from_json_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(error = %err, "malformed persisted badge list, treating as empty");
            Self::default()
        })
    }

    pub fn contains(&self, id: BadgeId) -> bool {
        self.0.contains(&id)
    }

    /// Adds `id` if absent. Returns `true` when the set grew.
    pub fn insert(&mut self, id: BadgeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Unions `ids` into the set and returns the ones that were new, in order.
    pub fn merge<I>(&mut self, ids: I) -> Vec<BadgeId>
    where
        I: IntoIterator<Item = BadgeId>,
    {
        ids.into_iter().filter(|id| self.insert(*id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = BadgeId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[BadgeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<BadgeId> for UnlockedBadgeSet {
    fn from_iter<I: IntoIterator<Item = BadgeId>>(iter: I) -> Self {
        let mut set = Self::default();
        set.merge(iter);
        set
    }
}

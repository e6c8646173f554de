//! # KeyValueBadgeStore
//!
//! Badge persistence over a string key-value map. Each author gets its own
//! key (`badges:{author}`) holding a JSON array of badge id strings.
//!
//! Merges run while holding the map entry, so concurrent merges for one
//! author serialize and never drop each other's ids. Ids this build does
//! not recognize are left in the stored array.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use domains::{AuthorKey, BadgeId, BadgeStore, DomainError, UnlockedBadgeSet};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct KeyValueBadgeStore {
    entries: DashMap<String, String>,
}

impl KeyValueBadgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(author: &AuthorKey) -> String {
        format!("badges:{author}")
    }

    /// Raw stored value for `author`, exactly as persisted.
    pub fn raw(&self, author: &AuthorKey) -> Option<String> {
        self.entries.get(&Self::key(author)).map(|value| value.clone())
    }

    /// Overwrites the raw value for `author`. Used to import existing data.
    pub fn put_raw(&self, author: &AuthorKey, value: impl Into<String>) {
        self.entries.insert(Self::key(author), value.into());
    }

    fn merge_locked(&self, author: &AuthorKey, ids: &[BadgeId]) -> Result<Vec<BadgeId>, DomainError> {
        let mut entry = self
            .entries
            .entry(Self::key(author))
            .or_insert_with(|| "[]".to_string());

        // Every existing element is kept, including ones that are not badge
        // ids. Only a value that is not a JSON array is replaced.
        let mut stored: Vec<Value> = serde_json::from_str(entry.value()).unwrap_or_else(|err| {
            warn!(%author, error = %err, "malformed badge list replaced on merge");
            Vec::new()
        });

        let mut added = Vec::new();
        for id in ids {
            if !stored.iter().any(|existing| existing.as_str() == Some(id.as_str())) {
                stored.push(Value::String(id.as_str().to_string()));
                added.push(*id);
            }
        }

        if !added.is_empty() {
            *entry.value_mut() = serde_json::to_string(&stored)?;
            debug!(%author, added = added.len(), total = stored.len(), "badge list merged");
        }
        Ok(added)
    }
}

#[async_trait]
impl BadgeStore for KeyValueBadgeStore {
    async fn load(&self, author: &AuthorKey) -> Result<UnlockedBadgeSet, DomainError> {
        Ok(UnlockedBadgeSet::from_json_lenient(self.raw(author).as_deref()))
    }

    async fn merge(&self, author: &AuthorKey, ids: &[BadgeId]) -> Result<Vec<BadgeId>, DomainError> {
        self.merge_locked(author, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_loads_as_empty() {
        let store = KeyValueBadgeStore::new();
        assert!(store.load(&AuthorKey::from("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn merge_adds_once_and_reports_new_ids() {
        let store = KeyValueBadgeStore::new();
        let alice = AuthorKey::from("alice");

        let first = store.merge(&alice, &[BadgeId::Helpful, BadgeId::TrustedVoice]).await.unwrap();
        assert_eq!(first, vec![BadgeId::Helpful, BadgeId::TrustedVoice]);

        let second = store.merge(&alice, &[BadgeId::Helpful]).await.unwrap();
        assert!(second.is_empty());
        assert_eq!(store.raw(&alice).unwrap(), r#"["helpful","trusted-voice"]"#);
    }

    #[tokio::test]
    async fn authors_are_isolated() {
        let store = KeyValueBadgeStore::new();
        store.merge(&AuthorKey::from("alice"), &[BadgeId::Helpful]).await.unwrap();

        let bob = store.load(&AuthorKey::from("bob")).await.unwrap();
        assert!(bob.is_empty());
    }

    #[tokio::test]
    async fn unknown_persisted_ids_survive_a_merge() {
        let store = KeyValueBadgeStore::new();
        let alice = AuthorKey::from("alice");
        store.put_raw(&alice, r#"["legacy-badge","scanner"]"#);

        let loaded = store.load(&alice).await.unwrap();
        assert_eq!(loaded.as_slice(), &[BadgeId::Scanner]);

        store.merge(&alice, &[BadgeId::Helpful]).await.unwrap();
        assert_eq!(
            store.raw(&alice).unwrap(),
            r#"["legacy-badge","scanner","helpful"]"#
        );
    }

    #[tokio::test]
    async fn non_string_entries_do_not_cost_stored_badges() {
        let store = KeyValueBadgeStore::new();
        let alice = AuthorKey::from("alice");
        store.put_raw(&alice, r#"["scanner",null]"#);

        let loaded = store.load(&alice).await.unwrap();
        assert_eq!(loaded.as_slice(), &[BadgeId::Scanner]);

        let added = store.merge(&alice, &[BadgeId::Helpful, BadgeId::Scanner]).await.unwrap();
        assert_eq!(added, vec![BadgeId::Helpful]);
        assert_eq!(store.raw(&alice).unwrap(), r#"["scanner",null,"helpful"]"#);

        let reloaded = store.load(&alice).await.unwrap();
        assert_eq!(reloaded.as_slice(), &[BadgeId::Scanner, BadgeId::Helpful]);
    }

    #[tokio::test]
    async fn malformed_value_loads_as_empty_and_is_replaced_on_merge() {
        let store = KeyValueBadgeStore::new();
        let alice = AuthorKey::from("alice");
        store.put_raw(&alice, "{oops");

        assert!(store.load(&alice).await.unwrap().is_empty());
        let added = store.merge(&alice, &[BadgeId::IdeaFactory]).await.unwrap();
        assert_eq!(added, vec![BadgeId::IdeaFactory]);
        assert_eq!(store.raw(&alice).unwrap(), r#"["idea-factory"]"#);
    }
}

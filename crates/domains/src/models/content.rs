//! Content records (posts and replies) as supplied by the data layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::null_as_zero;

/// Opaque author identity. The core only ever compares it for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorKey(String);

impl AuthorKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AuthorKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for AuthorKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A forum post. Only posts carry a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub author_key: AuthorKey,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub like_count: u64,
    /// Number of "useful" marks
    #[serde(default, deserialize_with = "null_as_zero")]
    pub useful_count: u64,
    #[serde(default)]
    pub category: Option<String>,
}

impl Post {
    /// Category value that counts towards the idea-factory badge.
    pub const SUGGESTION_CATEGORY: &'static str = "suggestion";

    pub fn new(author_key: impl Into<AuthorKey>, like_count: u64, useful_count: u64) -> Self {
        Self {
            author_key: author_key.into(),
            like_count,
            useful_count,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_by(&self, author: &AuthorKey) -> bool {
        &self.author_key == author
    }

    pub fn is_suggestion(&self) -> bool {
        self.category.as_deref() == Some(Self::SUGGESTION_CATEGORY)
    }
}

/// A reply to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub author_key: AuthorKey,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub like_count: u64,
    /// Number of "helpful" marks
    #[serde(default, deserialize_with = "null_as_zero")]
    pub useful_count: u64,
}

impl Reply {
    pub fn new(author_key: impl Into<AuthorKey>, like_count: u64, useful_count: u64) -> Self {
        Self {
            author_key: author_key.into(),
            like_count,
            useful_count,
        }
    }

    pub fn is_by(&self, author: &AuthorKey) -> bool {
        &self.author_key == author
    }
}

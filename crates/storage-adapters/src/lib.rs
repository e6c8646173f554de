//! crates/storage-adapters/src/lib.rs
//!
//! In-process implementations of the `domains` ports.

pub mod badges;
pub mod memory;

pub use badges::KeyValueBadgeStore;
pub use memory::{InMemoryContent, InMemoryScoreRecords};

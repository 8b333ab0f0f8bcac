//! # Storage Layer
//!
//! The post store is a single JSON array. The [`PostStore`] trait exposes it the way
//! every command uses it: read the whole array, change it in memory, write the whole
//! array back.
//!
//! There is no partial update and no locking. Two commands running against the same
//! garden at once race, and the last one to save wins.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production store, a pretty-printed `posts.json`
//!   - A missing file reads as an empty store
//!
//! - [`memory::InMemoryStore`]: in-memory store for testing
//!   - No persistence

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Whole-array access to the post store.
pub trait PostStore {
    /// Read every post, in store order.
    fn load(&self) -> Result<Vec<Post>>;

    /// Replace the stored array with `posts`.
    fn save(&mut self, posts: &[Post]) -> Result<()>;
}

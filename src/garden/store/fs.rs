use super::PostStore;
use crate::error::Result;
use crate::model::Post;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Post>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let posts: Vec<Post> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = posts.len(), "loaded posts");
        Ok(posts)
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), count = posts.len(), "saved posts");
        Ok(())
    }
}

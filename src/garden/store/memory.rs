use super::PostStore;
use crate::error::Result;
use crate::model::Post;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        self.posts = posts.to_vec();
        Ok(())
    }
}

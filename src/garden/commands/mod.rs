//! # Command Layer
//!
//! Each module here is one garden operation. Commands take a [`PostStore`] and a
//! [`GardenLayout`], do their filesystem work and return a [`CmdResult`]; they never
//! print. Every mutating command follows the same cycle: load the whole store,
//! change it in memory, save the whole store.
//!
//! [`PostStore`]: crate::store::PostStore
//! [`GardenLayout`]: crate::layout::GardenLayout

use crate::model::Post;
use std::fmt;
use std::path::PathBuf;

pub mod helpers;
pub mod init;
pub mod list;
pub mod plant;
pub mod sync;
pub mod transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A post together with its 1-based position in a listing.
#[derive(Debug, Clone)]
pub struct ListedPost {
    pub index: usize,
    pub post: Post,
}

/// Why sync passed over a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Unreadable(String),
    NoContainer(String),
    EmptyContent(String),
    NoMatchingPost(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(err) => write!(f, "could not be read: {}", err),
            SkipReason::NoContainer(id) => write!(f, "has no element with id=\"{}\"", id),
            SkipReason::EmptyContent(id) => write!(f, "has an empty id=\"{}\" element", id),
            SkipReason::NoMatchingPost(title) => {
                write!(f, "has title \"{}\" which matches no post", title)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<ListedPost>,
    pub skipped_files: Vec<SkippedFile>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<ListedPost>) -> Self {
        self.listed_posts = posts;
        self
    }
}

/// Input for planting a seed.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }
}

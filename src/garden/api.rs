//! # API Facade
//!
//! A thin layer over the commands. UI code (the subcommand CLI and the interactive
//! menu) talks to [`GardenApi`] only; it turns raw user input into selectors and
//! hands the store and layout to the right command.
//!
//! `GardenApi<S: PostStore>` is generic over the store so the facade can be driven
//! by [`InMemoryStore`](crate::store::memory::InMemoryStore) in tests.

use crate::commands;
use crate::error::Result;
use crate::layout::GardenLayout;
use crate::model::Stage;
use crate::store::PostStore;

pub use crate::commands::helpers::PostSelector;
pub use crate::commands::{
    CmdMessage, CmdResult, ListedPost, MessageLevel, NewPost, SkipReason, SkippedFile,
};

pub struct GardenApi<S: PostStore> {
    store: S,
    layout: GardenLayout,
}

impl<S: PostStore> GardenApi<S> {
    pub fn new(store: S, layout: GardenLayout) -> Self {
        Self { store, layout }
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.layout)
    }

    pub fn plant(&mut self, new_post: NewPost) -> Result<CmdResult> {
        commands::plant::run(&mut self.store, &self.layout, new_post)
    }

    pub fn grow<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = PostSelector::parse(inputs)?;
        commands::transition::grow(&mut self.store, &self.layout, &selector)
    }

    pub fn harvest<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = PostSelector::parse(inputs)?;
        commands::transition::harvest(&mut self.store, &self.layout, &selector)
    }

    pub fn abandon<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = PostSelector::parse(inputs)?;
        commands::transition::abandon(&mut self.store, &self.layout, &selector)
    }

    /// Moves the post titled exactly `title` to `target`.
    pub fn transition(&mut self, title: &str, target: Stage) -> Result<CmdResult> {
        commands::transition::run(&mut self.store, &self.layout, title, target)
    }

    pub fn sync(&mut self) -> Result<CmdResult> {
        commands::sync::run(&mut self.store, &self.layout)
    }

    pub fn list(&self, stages: &[Stage]) -> Result<CmdResult> {
        commands::list::run(&self.store, stages)
    }

    /// Numbered posts in `stages`, as offered for selection.
    pub fn candidates(&self, stages: &[Stage]) -> Result<Vec<ListedPost>> {
        Ok(self.list(stages)?.listed_posts)
    }
}

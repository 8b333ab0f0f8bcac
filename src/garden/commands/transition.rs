//! # Stage Transitions
//!
//! ```text
//!   seed ──► growing ──► harvested
//!     │         │
//!     └────┬────┘
//!          ▼
//!      abandoned
//! ```
//!
//! A move stamps the target stage's date and `lastUpdated` with one instant, writes
//! the page into the target stage's directory, removes the page from the old one
//! and saves the whole store. The steps are not transactional: if a later step
//! fails, the earlier ones stay done.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GardenError, Result};
use crate::layout::GardenLayout;
use crate::model::{timestamp_now, DateField, Stage};
use crate::render::write_post_page;
use crate::store::PostStore;
use std::fs;

use super::helpers::{position_by_title, resolve_title, PostSelector};

/// Moves the post titled exactly `title` to `target`.
pub fn run<S: PostStore>(
    store: &mut S,
    layout: &GardenLayout,
    title: &str,
    target: Stage,
) -> Result<CmdResult> {
    let mut posts = store.load()?;
    let position = position_by_title(&posts, title)
        .ok_or_else(|| GardenError::PostNotFound(title.to_string()))?;

    let mut post = posts[position].clone();
    let from = post.stage;
    if !from.can_move_to(target) {
        return Err(GardenError::InvalidTransition {
            title: post.title,
            from,
            to: target,
        });
    }

    let now = timestamp_now();
    post.stage = target;
    post.dates.set(target.entry_date_field(), now.clone());
    post.dates.set(DateField::LastUpdated, now);

    let link = write_post_page(layout, &post, target)?;

    let old_page = layout.page_path(from, &post.title);
    if old_page != layout.page_path(target, &post.title) && old_page.exists() {
        fs::remove_file(&old_page)?;
        tracing::debug!(path = %old_page.display(), "removed old page");
    }

    post.link = link;
    posts[position] = post.clone();
    store.save(&posts)?;

    tracing::info!(
        title = %post.title,
        %from,
        to = %target,
        stamped = target.entry_date_field().key(),
        "moved post"
    );
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post \"{}\" moved to {} stage: {}",
        post.title, target, post.link
    )));
    result.affected_posts.push(post);
    Ok(result)
}

fn select_and_move<S: PostStore>(
    store: &mut S,
    layout: &GardenLayout,
    selector: &PostSelector,
    eligible: &[Stage],
    target: Stage,
) -> Result<CmdResult> {
    let posts = store.load()?;
    let title = resolve_title(&posts, eligible, selector)?;
    run(store, layout, &title, target)
}

/// seed → growing
pub fn grow<S: PostStore>(
    store: &mut S,
    layout: &GardenLayout,
    selector: &PostSelector,
) -> Result<CmdResult> {
    select_and_move(store, layout, selector, &[Stage::Seed], Stage::Growing)
}

/// growing → harvested
pub fn harvest<S: PostStore>(
    store: &mut S,
    layout: &GardenLayout,
    selector: &PostSelector,
) -> Result<CmdResult> {
    select_and_move(store, layout, selector, &[Stage::Growing], Stage::Harvested)
}

/// seed or growing → abandoned
pub fn abandon<S: PostStore>(
    store: &mut S,
    layout: &GardenLayout,
    selector: &PostSelector,
) -> Result<CmdResult> {
    select_and_move(
        store,
        layout,
        selector,
        &[Stage::Seed, Stage::Growing],
        Stage::Abandoned,
    )
}

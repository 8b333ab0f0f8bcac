//! # HTML → Store Sync
//!
//! Pages are meant to be edited by hand. Sync walks every stage directory, reads
//! each page's `<title>` and content container, and copies the container's inner
//! HTML back into the post with exactly that title.
//!
//! Each page stands alone: an unreadable page, a page without a content container
//! or a page whose title matches no post is reported and passed over, and the walk
//! carries on. The store is saved once, after the walk.
//!
//! When a synced page has an "updated" marker element, its text is replaced with
//! today's date and the page is written back. Every other byte of the page is kept.

use crate::commands::{CmdMessage, CmdResult, SkipReason, SkippedFile};
use crate::error::Result;
use crate::html::{find_by_id, inner_html_by_id, page_title, replace_inner};
use crate::layout::GardenLayout;
use crate::model::{date_part, timestamp_now, DateField, Post, Stage};
use crate::store::PostStore;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::position_by_title;

pub fn run<S: PostStore>(store: &mut S, layout: &GardenLayout) -> Result<CmdResult> {
    let mut posts = store.load()?;
    let mut result = CmdResult::default();

    for stage in Stage::ALL {
        let dir = layout.stage_dir(stage);
        if !dir.exists() {
            continue;
        }
        let pages = match list_pages(&dir) {
            Ok(pages) => pages,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot list stage directory");
                result.add_message(CmdMessage::warning(format!(
                    "Could not list {}: {}",
                    dir.display(),
                    e
                )));
                continue;
            }
        };

        for page in pages {
            match sync_page(&page, layout, &mut posts) {
                Ok(synced) => {
                    for note in synced.notes {
                        result.add_message(note);
                    }
                    result.add_message(CmdMessage::success(format!(
                        "Synced content for: {}",
                        synced.post.title
                    )));
                    result.affected_posts.push(synced.post);
                }
                Err(reason) => {
                    tracing::debug!(path = %page.display(), %reason, "skipped page");
                    result.add_message(CmdMessage::warning(format!(
                        "Skipped {}: {}",
                        page.display(),
                        reason
                    )));
                    result.skipped_files.push(SkippedFile { path: page, reason });
                }
            }
        }
    }

    store.save(&posts)?;
    result.add_message(CmdMessage::info(format!(
        "{} updated ({} synced, {} skipped)",
        layout.config().store_file,
        result.affected_posts.len(),
        result.skipped_files.len()
    )));
    Ok(result)
}

/// `*.html` files in `dir`, sorted by name.
fn list_pages(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}

struct SyncedPage {
    post: Post,
    notes: Vec<CmdMessage>,
}

fn sync_page(
    path: &Path,
    layout: &GardenLayout,
    posts: &mut [Post],
) -> std::result::Result<SyncedPage, SkipReason> {
    let config = layout.config();
    let html = fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;

    let content = inner_html_by_id(&html, &config.content_id)
        .ok_or_else(|| SkipReason::NoContainer(config.content_id.clone()))?;
    if content.is_empty() {
        return Err(SkipReason::EmptyContent(config.content_id.clone()));
    }

    let title = page_title(&html).unwrap_or_default();
    let position = position_by_title(posts, title)
        .ok_or_else(|| SkipReason::NoMatchingPost(title.to_string()))?;

    let now = timestamp_now();
    let post = &mut posts[position];
    post.content = content.to_string();
    post.dates.set(DateField::LastUpdated, now.clone());

    let mut notes = Vec::new();
    match find_by_id(&html, &config.updated_marker_id) {
        Some(inner) => {
            let marker = format!("{} {}", config.updated_marker_label, date_part(&now));
            let updated = replace_inner(&html, &inner, &marker);
            if updated != html {
                if let Err(e) = fs::write(path, updated) {
                    tracing::warn!(path = %path.display(), error = %e, "cannot rewrite page");
                    notes.push(CmdMessage::error(format!(
                        "Could not update date in {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
        None => notes.push(CmdMessage::info(format!(
            "No id=\"{}\" marker in {}",
            config.updated_marker_id,
            path.display()
        ))),
    }

    Ok(SyncedPage {
        post: post.clone(),
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{plant, transition, NewPost};
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestGarden;

    fn plant_post(garden: &mut TestGarden, title: &str, content: &str) {
        let layout = garden.layout.clone();
        plant::run(&mut garden.store, &layout, NewPost::new(title, content)).unwrap();
    }

    #[test]
    fn render_then_sync_round_trips_content() {
        let mut garden = TestGarden::new();
        let content = "<p>Line one &amp; <em>two</em></p>\n  <ul>\n<li>x</li></ul>\n<div class=\"box\"><div>deep</div></div>";
        plant_post(&mut garden, "Idea A", content);
        let layout = garden.layout.clone();
        transition::run(&mut garden.store, &layout, "Idea A", Stage::Growing).unwrap();
        plant_post(&mut garden, "Idea B", "<p>b</p>");

        let result = run(&mut garden.store, &layout).unwrap();

        assert!(result.skipped_files.is_empty());
        assert_eq!(result.affected_posts.len(), 2);
        let posts = garden.store.load().unwrap();
        assert_eq!(posts[0].content, content);
        assert_eq!(posts[1].content, "<p>b</p>");
    }

    #[test]
    fn commented_markup_in_content_round_trips() {
        let mut garden = TestGarden::new();
        let closing = "<p>a</p><!-- </div> -->\n<p>b</p>";
        let opening = "<p>a</p><!-- old <div> wrapper -->\n<p>b</p>";
        plant_post(&mut garden, "Closing", closing);
        plant_post(&mut garden, "Opening", opening);

        let layout = garden.layout.clone();
        let result = run(&mut garden.store, &layout).unwrap();

        assert!(result.skipped_files.is_empty());
        assert_eq!(result.affected_posts.len(), 2);
        let posts = garden.store.load().unwrap();
        assert_eq!(posts[0].content, closing);
        assert_eq!(posts[1].content, opening);
    }

    #[test]
    fn edited_page_updates_store_and_marker() {
        let mut garden = TestGarden::new();
        plant_post(&mut garden, "Idea A", "<p>old</p>");
        let before = garden.store.load().unwrap()[0].clone();

        let page_path = garden.page("seeds/idea-a.html");
        let edited = garden
            .read_page("seeds/idea-a.html")
            .replace("<p>old</p>", "<p>new</p>")
            .replace(
                r#"<span id="updated_date"><b>Data Updated:</b> "#,
                r#"<span id="updated_date"><b>Data Updated:</b> 1999-01-01 "#,
            );
        fs::write(&page_path, &edited).unwrap();

        let layout = garden.layout.clone();
        run(&mut garden.store, &layout).unwrap();

        let after = garden.store.load().unwrap()[0].clone();
        assert_eq!(after.content, "<p>new</p>");
        assert_eq!(after.title, before.title);
        assert_eq!(after.dates.planted, before.dates.planted);
        assert!(after.dates.last_updated.is_some());

        let today = date_part(after.dates.last_updated.as_deref().unwrap()).to_string();
        let page = fs::read_to_string(&page_path).unwrap();
        assert!(page.contains(&format!(
            r#"<span id="updated_date"><b>Data Updated:</b> {}</span>"#,
            today
        )));
        assert!(!page.contains("1999-01-01"));
        assert!(page.contains(r#"<div id="content"><p>new</p></div>"#));
    }

    #[test]
    fn page_without_marker_is_synced_and_left_alone() {
        let mut garden = TestGarden::new().with_template(
            Stage::Seed,
            "<title>{{title}}</title><div id=\"content\">{{content}}</div>",
        );
        plant_post(&mut garden, "Idea A", "<p>x</p>");
        let page_before = garden.read_page("seeds/idea-a.html");

        let layout = garden.layout.clone();
        let result = run(&mut garden.store, &layout).unwrap();

        assert_eq!(result.affected_posts.len(), 1);
        assert_eq!(garden.read_page("seeds/idea-a.html"), page_before);
    }

    #[test]
    fn skips_pages_without_container_or_match() {
        let mut garden = TestGarden::new();
        plant_post(&mut garden, "Idea A", "<p>keep</p>");
        let before = garden.store.load().unwrap();

        fs::write(
            garden.page("seeds/no-container.html"),
            "<html><head><title>Idea A</title></head><body><p>edited</p></body></html>",
        )
        .unwrap();
        fs::create_dir_all(garden.page("harvested")).unwrap();
        fs::write(
            garden.page("harvested/stranger.html"),
            "<title>Stranger</title><div id=\"content\"><p>who?</p></div>",
        )
        .unwrap();
        fs::write(garden.page("seeds/notes.txt"), "not a page").unwrap();

        let layout = garden.layout.clone();
        let result = run(&mut garden.store, &layout).unwrap();

        let reasons: Vec<_> = result.skipped_files.iter().map(|s| &s.reason).collect();
        assert_eq!(reasons.len(), 2);
        assert!(reasons.contains(&&SkipReason::NoContainer("content".into())));
        assert!(reasons.contains(&&SkipReason::NoMatchingPost("Stranger".into())));

        let after = garden.store.load().unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].content, "<p>keep</p>");
        assert_eq!(after[0].title, before[0].title);
        assert_eq!(after[0].stage, before[0].stage);
    }

    #[test]
    fn title_match_is_exact() {
        let mut garden = TestGarden::new();
        plant_post(&mut garden, "Idea A", "<p>x</p>");
        let page = garden.page("seeds/idea-a.html");
        let html = fs::read_to_string(&page)
            .unwrap()
            .replace("<title>Idea A</title>", "<title>idea a</title>");
        fs::write(&page, html).unwrap();

        let layout = garden.layout.clone();
        let result = run(&mut garden.store, &layout).unwrap();
        assert!(result.affected_posts.is_empty());
        assert_eq!(
            result.skipped_files[0].reason,
            SkipReason::NoMatchingPost("idea a".into())
        );
    }

    #[test]
    fn empty_container_is_skipped() {
        let mut garden = TestGarden::new();
        plant_post(&mut garden, "Idea A", "");

        let layout = garden.layout.clone();
        let result = run(&mut garden.store, &layout).unwrap();
        assert!(matches!(
            result.skipped_files[0].reason,
            SkipReason::EmptyContent(_)
        ));
    }

    #[test]
    fn missing_stage_dirs_are_fine() {
        let garden = TestGarden::new();
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &garden.layout).unwrap();
        assert!(result.affected_posts.is_empty());
        assert!(result.skipped_files.is_empty());
    }
}

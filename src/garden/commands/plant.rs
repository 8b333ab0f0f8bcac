use crate::commands::{CmdMessage, CmdResult, NewPost};
use crate::error::Result;
use crate::layout::GardenLayout;
use crate::model::{Post, Stage};
use crate::render::write_post_page;
use crate::store::PostStore;

use super::helpers::position_by_title;

/// Creates a seed post, writes its page and appends it to the store.
///
/// Titles are not checked for uniqueness; a repeated title is stored, with a
/// warning, and later lookups resolve to the earlier post.
pub fn run<S: PostStore>(store: &mut S, layout: &GardenLayout, new_post: NewPost) -> Result<CmdResult> {
    let mut post = Post::seed(new_post.title, new_post.content, new_post.tags, new_post.links);
    post.link = write_post_page(layout, &post, Stage::Seed)?;

    let mut posts = store.load()?;
    let mut result = CmdResult::default();
    if position_by_title(&posts, &post.title).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "A post titled \"{}\" already exists; lookups by title will find the older one",
            post.title
        )));
    }
    posts.push(post.clone());
    store.save(&posts)?;

    tracing::info!(title = %post.title, link = %post.link, "planted seed");
    result.add_message(CmdMessage::success(format!(
        "Seed post created at {}",
        post.link
    )));
    result.affected_posts.push(post);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::render::render;
    use crate::templates::SEED_TEMPLATE;
    use crate::test_utils::TestGarden;

    #[test]
    fn creates_seed_entry_and_single_page() {
        let mut garden = TestGarden::new();
        let layout = garden.layout.clone();
        let new_post = NewPost::new("Idea A", "<p>First thought</p>")
            .with_tags(vec!["rust".into()])
            .with_links(vec!["https://example.com".into()]);

        let result = run(&mut garden.store, &layout, new_post).unwrap();

        let posts = garden.store.load().unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.stage, Stage::Seed);
        assert_eq!(post.link, "seeds/idea-a.html");
        assert!(post.dates.planted.is_some());
        assert!(post.dates.growing_started.is_none());
        assert!(post.dates.harvested_on.is_none());
        assert!(post.dates.abandoned_on.is_none());

        let page = garden.read_page("seeds/idea-a.html");
        assert_eq!(page, render(post, SEED_TEMPLATE).unwrap());
        for stage in [Stage::Growing, Stage::Harvested, Stage::Abandoned] {
            assert!(!layout.page_path(stage, "Idea A").exists());
        }
        assert_eq!(result.affected_posts[0].title, "Idea A");
    }

    #[test]
    fn appends_in_order() {
        let mut garden = TestGarden::new();
        let layout = garden.layout.clone();
        run(&mut garden.store, &layout, NewPost::new("One", "")).unwrap();
        run(&mut garden.store, &layout, NewPost::new("Two", "")).unwrap();

        let titles: Vec<_> = garden
            .store
            .load()
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn duplicate_title_is_stored_with_a_warning() {
        let mut garden = TestGarden::new();
        let layout = garden.layout.clone();
        run(&mut garden.store, &layout, NewPost::new("Same", "a")).unwrap();
        let result = run(&mut garden.store, &layout, NewPost::new("Same", "b")).unwrap();

        assert_eq!(garden.store.load().unwrap().len(), 2);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn empty_title_is_accepted_as_is() {
        let mut garden = TestGarden::new();
        let layout = garden.layout.clone();
        run(&mut garden.store, &layout, NewPost::new("", "")).unwrap();

        assert_eq!(garden.store.load().unwrap()[0].link, "seeds/.html");
        assert!(garden.page("seeds/.html").exists());
    }
}

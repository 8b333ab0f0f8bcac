//! # Page Rendering
//!
//! Every stage has its own HTML template (`templates/<stage>-template.html`). A page
//! is the template with these placeholders filled in, wherever they occur:
//!
//! | placeholder               | value                                      |
//! |---------------------------|--------------------------------------------|
//! | `{{title}}`               | post title                                 |
//! | `{{dates.planted}}` etc.  | `YYYY-MM-DD`, or empty when not yet set    |
//! | `{{tags}}`                | `<ul>` of tag pills                        |
//! | `{{links}}`               | `<ul>` of anchors opening in a new tab     |
//! | `{{content}}`             | the post's HTML fragment                   |
//!
//! Templates go through minijinja, so a template may also use its other syntax, and
//! a literal `{{`, `{%` or `{#` in a template is read as template syntax.
//!
//! Nothing is escaped. Titles, tags, links and content are written into the page as
//! raw HTML: the person filling the garden is the person publishing it, and content
//! is expected to carry markup.

use crate::error::{GardenError, Result};
use crate::layout::GardenLayout;
use crate::model::{date_part, DateField, Post, PostDates, Stage};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::fs;

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    dates: PageDates<'a>,
    tags: String,
    content: &'a str,
    links: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageDates<'a> {
    planted: &'a str,
    growing_started: &'a str,
    harvested_on: &'a str,
    abandoned_on: &'a str,
    last_updated: &'a str,
}

impl<'a> PageContext<'a> {
    fn new(post: &'a Post) -> Self {
        let dates = &post.dates;
        Self {
            title: &post.title,
            dates: PageDates {
                planted: day(dates, DateField::Planted),
                growing_started: day(dates, DateField::GrowingStarted),
                harvested_on: day(dates, DateField::HarvestedOn),
                abandoned_on: day(dates, DateField::AbandonedOn),
                last_updated: day(dates, DateField::LastUpdated),
            },
            tags: tags_html(&post.tags),
            content: &post.content,
            links: links_html(&post.links),
        }
    }
}

fn day(dates: &PostDates, field: DateField) -> &str {
    dates.get(field).map(date_part).unwrap_or_default()
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env
}

pub fn tags_html(tags: &[String]) -> String {
    let items: String = tags
        .iter()
        .map(|tag| format!(r#"<li class="bg-gray-300 px-2 py-1 rounded">{}</li>"#, tag))
        .collect();
    format!(r#"<ul class="flex flex-row gap-2">{}</ul>"#, items)
}

pub fn links_html(links: &[String]) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{0}" target="_blank" class="text-blue-600 underline">{0}</a></li>"#,
                link
            )
        })
        .collect();
    format!(r#"<ul class="list-disc pl-5">{}</ul>"#, items)
}

/// Fills `template` with the fields of `post`.
pub fn render(post: &Post, template: &str) -> Result<String> {
    let env = environment();
    Ok(env.render_str(template, PageContext::new(post))?)
}

/// Renders `post` with the template of `stage` into that stage's directory.
///
/// Returns the link to store on the post (`<stageDir>/<slug>.html`).
pub fn write_post_page(layout: &GardenLayout, post: &Post, stage: Stage) -> Result<String> {
    let template_path = layout.template_path(stage);
    if !template_path.exists() {
        return Err(GardenError::TemplateMissing(template_path));
    }
    let template = fs::read_to_string(&template_path)?;
    let html = render(post, &template)?;

    let dir = layout.stage_dir(stage);
    fs::create_dir_all(&dir)?;
    let path = dir.join(post.file_name());
    fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), "wrote page");

    Ok(layout.link_for(stage, &post.title))
}

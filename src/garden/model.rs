//! # Data Model
//!
//! A [`Post`] is one record of the post store. Its `title` is the identity used to
//! match the record against its rendered page, both for stage transitions and for
//! the reverse sync, so two posts sharing a title resolve to whichever comes first
//! in the store.
//!
//! Dates are kept as the ISO-8601 strings they were written with. Nothing here
//! validates them: a hand-edited `posts.json` with odd values loads and saves back
//! unchanged.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Seed,
    Growing,
    Harvested,
    Abandoned,
}

impl Stage {
    /// All stages, in the order directories are scanned and listed.
    pub const ALL: [Stage; 4] = [
        Stage::Seed,
        Stage::Growing,
        Stage::Harvested,
        Stage::Abandoned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Seed => "seed",
            Stage::Growing => "growing",
            Stage::Harvested => "harvested",
            Stage::Abandoned => "abandoned",
        }
    }

    /// The date stamped when a post enters this stage.
    pub fn entry_date_field(&self) -> DateField {
        match self {
            Stage::Seed => DateField::Planted,
            Stage::Growing => DateField::GrowingStarted,
            Stage::Harvested => DateField::HarvestedOn,
            Stage::Abandoned => DateField::AbandonedOn,
        }
    }

    /// Stages reachable from this one in a single move.
    pub fn successors(&self) -> &'static [Stage] {
        match self {
            Stage::Seed => &[Stage::Growing, Stage::Abandoned],
            Stage::Growing => &[Stage::Harvested, Stage::Abandoned],
            Stage::Harvested | Stage::Abandoned => &[],
        }
    }

    pub fn can_move_to(&self, target: Stage) -> bool {
        self.successors().contains(&target)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seed" | "seeds" => Ok(Stage::Seed),
            "growing" => Ok(Stage::Growing),
            "harvested" => Ok(Stage::Harvested),
            "abandoned" => Ok(Stage::Abandoned),
            other => Err(format!("Unknown stage: {}", other)),
        }
    }
}

/// Names the timestamps of [`PostDates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Planted,
    GrowingStarted,
    HarvestedOn,
    AbandonedOn,
    LastUpdated,
}

impl DateField {
    /// Key of the field in `posts.json` and in template placeholders.
    pub fn key(&self) -> &'static str {
        match self {
            DateField::Planted => "planted",
            DateField::GrowingStarted => "growingStarted",
            DateField::HarvestedOn => "harvestedOn",
            DateField::AbandonedOn => "abandonedOn",
            DateField::LastUpdated => "lastUpdated",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDates {
    #[serde(default)]
    pub planted: Option<String>,
    #[serde(default)]
    pub growing_started: Option<String>,
    #[serde(default)]
    pub harvested_on: Option<String>,
    #[serde(default)]
    pub abandoned_on: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl PostDates {
    pub fn get(&self, field: DateField) -> Option<&str> {
        match field {
            DateField::Planted => self.planted.as_deref(),
            DateField::GrowingStarted => self.growing_started.as_deref(),
            DateField::HarvestedOn => self.harvested_on.as_deref(),
            DateField::AbandonedOn => self.abandoned_on.as_deref(),
            DateField::LastUpdated => self.last_updated.as_deref(),
        }
    }

    pub fn set(&mut self, field: DateField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            DateField::Planted => self.planted = value,
            DateField::GrowingStarted => self.growing_started = value,
            DateField::HarvestedOn => self.harvested_on = value,
            DateField::AbandonedOn => self.abandoned_on = value,
            DateField::LastUpdated => self.last_updated = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub stage: Stage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub dates: PostDates,
    // Relative to the garden root, e.g. "seeds/idea-a.html"
    #[serde(default)]
    pub link: String,
}

impl Post {
    /// A freshly planted seed. `link` is filled in once its page is written.
    pub fn seed(title: String, content: String, tags: Vec<String>, links: Vec<String>) -> Self {
        let now = timestamp_now();
        let dates = PostDates {
            planted: Some(now.clone()),
            last_updated: Some(now),
            ..PostDates::default()
        };
        Self {
            title,
            stage: Stage::Seed,
            tags,
            content,
            links,
            dates,
            link: String::new(),
        }
    }

    pub fn file_name(&self) -> String {
        file_name_for(&self.title)
    }
}

/// Lower-cases the title and turns every run of whitespace into a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

pub fn file_name_for(title: &str) -> String {
    format!("{}.html", slugify(title))
}

/// Current instant as `2024-01-01T00:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The `YYYY-MM-DD` part of a stored timestamp.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or_default()
}

/// Splits a comma separated prompt answer, dropping blank entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates_whitespace_runs() {
        assert_eq!(slugify("Idea A"), "idea-a");
        assert_eq!(slugify("My  First\tPost"), "my-first-post");
        assert_eq!(file_name_for("Idea A"), "idea-a.html");
    }

    #[test]
    fn slug_keeps_punctuation() {
        assert_eq!(slugify("What's Next?"), "what's-next?");
    }

    #[test]
    fn only_forward_moves_are_allowed() {
        assert!(Stage::Seed.can_move_to(Stage::Growing));
        assert!(Stage::Seed.can_move_to(Stage::Abandoned));
        assert!(Stage::Growing.can_move_to(Stage::Harvested));
        assert!(Stage::Growing.can_move_to(Stage::Abandoned));

        assert!(!Stage::Seed.can_move_to(Stage::Harvested));
        assert!(!Stage::Growing.can_move_to(Stage::Seed));
        assert!(Stage::Harvested.successors().is_empty());
        assert!(Stage::Abandoned.successors().is_empty());
    }

    #[test]
    fn seed_has_only_planted_and_last_updated() {
        let post = Post::seed("A".into(), "".into(), vec![], vec![]);
        assert_eq!(post.stage, Stage::Seed);
        assert!(post.dates.planted.is_some());
        assert_eq!(post.dates.planted, post.dates.last_updated);
        assert!(post.dates.growing_started.is_none());
        assert!(post.dates.harvested_on.is_none());
        assert!(post.dates.abandoned_on.is_none());
    }

    #[test]
    fn serializes_with_store_field_names() {
        let mut post = Post::seed("A".into(), "<p>x</p>".into(), vec![], vec![]);
        post.dates.planted = Some("2024-01-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["stage"], "seed");
        assert_eq!(json["dates"]["planted"], "2024-01-01T00:00:00.000Z");
        assert!(json["dates"]["growingStarted"].is_null());
        assert!(json["dates"].get("lastUpdated").is_some());
    }

    #[test]
    fn loads_records_with_missing_fields() {
        let json = r#"{"title":"Idea A","stage":"seed","dates":{"planted":"2024-01-01T00:00:00.000Z","lastUpdated":"2024-01-01T00:00:00.000Z"}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.title, "Idea A");
        assert!(post.tags.is_empty());
        assert!(post.dates.abandoned_on.is_none());
        assert_eq!(post.link, "");
    }

    #[test]
    fn timestamps_are_millisecond_utc() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
        assert_eq!(date_part("2024-03-09T10:11:12.000Z"), "2024-03-09");
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(" rust, web ,,  "), vec!["rust", "web"]);
        assert!(split_list("").is_empty());
    }
}

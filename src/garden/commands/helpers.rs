use crate::commands::ListedPost;
use crate::error::{GardenError, Result};
use crate::model::{Post, Stage};
use std::fmt;

/// How a command names the post it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSelector {
    /// 1-based position in the listing of eligible posts.
    Index(usize),
    /// Exact title.
    Title(String),
}

impl PostSelector {
    /// A single numeric input is an index; anything else is joined with spaces
    /// into one title.
    pub fn parse<I: AsRef<str>>(inputs: &[I]) -> Result<Self> {
        if let [single] = inputs {
            if let Ok(n) = single.as_ref().trim().parse::<usize>() {
                return Ok(PostSelector::Index(n));
            }
        }

        let title = inputs
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        if title.trim().is_empty() {
            return Err(GardenError::InvalidSelection("no post given".to_string()));
        }
        Ok(PostSelector::Title(title))
    }
}

impl fmt::Display for PostSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostSelector::Index(n) => write!(f, "{}", n),
            PostSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// Posts in any of `stages`, numbered in store order. An empty `stages` lists all.
pub fn numbered(posts: &[Post], stages: &[Stage]) -> Vec<ListedPost> {
    posts
        .iter()
        .filter(|p| stages.is_empty() || stages.contains(&p.stage))
        .enumerate()
        .map(|(i, post)| ListedPost {
            index: i + 1,
            post: post.clone(),
        })
        .collect()
}

/// Position of the first post titled exactly `title`.
pub fn position_by_title(posts: &[Post], title: &str) -> Option<usize> {
    posts.iter().position(|p| p.title == title)
}

/// Resolves a selector to a title, with indexes counted over posts in `stages`.
pub fn resolve_title(posts: &[Post], stages: &[Stage], selector: &PostSelector) -> Result<String> {
    match selector {
        PostSelector::Index(n) => numbered(posts, stages)
            .into_iter()
            .find(|lp| lp.index == *n)
            .map(|lp| lp.post.title)
            .ok_or_else(|| GardenError::InvalidSelection(format!("no post at index {}", n))),
        PostSelector::Title(title) => Ok(title.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, stage: Stage) -> Post {
        let mut p = Post::seed(title.into(), String::new(), vec![], vec![]);
        p.stage = stage;
        p
    }

    #[test]
    fn parses_index_or_title() {
        assert_eq!(PostSelector::parse(&["2"]).unwrap(), PostSelector::Index(2));
        assert_eq!(
            PostSelector::parse(&["Idea", "A"]).unwrap(),
            PostSelector::Title("Idea A".into())
        );
        assert_eq!(
            PostSelector::parse(&["2", "cats"]).unwrap(),
            PostSelector::Title("2 cats".into())
        );
        assert!(PostSelector::parse::<&str>(&[]).is_err());
    }

    #[test]
    fn numbering_counts_only_matching_stages() {
        let posts = vec![
            post("A", Stage::Growing),
            post("B", Stage::Seed),
            post("C", Stage::Harvested),
            post("D", Stage::Seed),
        ];

        let seeds = numbered(&posts, &[Stage::Seed]);
        assert_eq!(seeds.len(), 2);
        assert_eq!((seeds[1].index, seeds[1].post.title.as_str()), (2, "D"));

        let open = numbered(&posts, &[Stage::Seed, Stage::Growing]);
        let titles: Vec<_> = open.iter().map(|lp| lp.post.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "D"]);

        assert_eq!(numbered(&posts, &[]).len(), 4);
    }

    #[test]
    fn resolves_index_within_stage() {
        let posts = vec![post("A", Stage::Growing), post("B", Stage::Seed)];
        let title = resolve_title(&posts, &[Stage::Seed], &PostSelector::Index(1)).unwrap();
        assert_eq!(title, "B");

        let err = resolve_title(&posts, &[Stage::Seed], &PostSelector::Index(2)).unwrap_err();
        assert!(matches!(err, GardenError::InvalidSelection(_)));
        assert!(resolve_title(&posts, &[Stage::Seed], &PostSelector::Index(0)).is_err());
    }

    #[test]
    fn first_title_match_wins() {
        let posts = vec![post("Dup", Stage::Seed), post("Dup", Stage::Growing)];
        assert_eq!(position_by_title(&posts, "Dup"), Some(0));
        assert_eq!(position_by_title(&posts, "dup"), None);
    }
}

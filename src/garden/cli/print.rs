use chrono::{DateTime, Utc};
use colored::Colorize;
use garden::api::{CmdMessage, ListedPost, MessageLevel};
use garden::model::Stage;
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const STAGE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 22;

pub(super) fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One line per post: index, stage, title and when it was last updated.
pub(super) fn print_posts(out: &mut dyn Write, posts: &[ListedPost]) -> io::Result<()> {
    if posts.is_empty() {
        return writeln!(out, "No posts found.");
    }

    for lp in posts {
        let idx_str = format!("{:>3}. ", lp.index);
        let stage_str = format!("{:<width$}", format!("[{}]", lp.post.stage), width = STAGE_WIDTH);
        let updated = format_updated(lp.post.dates.last_updated.as_deref());

        let fixed_width = idx_str.width() + stage_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&lp.post.title, available);
        let padding = available.saturating_sub(title.width());

        writeln!(
            out,
            "{}{}{}{}{}",
            idx_str,
            stage_colored(lp.post.stage, &stage_str),
            title,
            " ".repeat(padding),
            updated.dimmed()
        )?;
    }
    Ok(())
}

/// The menu's numbered choices: `N) title`, or `N) [stage] title` when the list
/// mixes stages.
pub(super) fn print_choices(
    out: &mut dyn Write,
    posts: &[ListedPost],
    show_stage: bool,
) -> io::Result<()> {
    for lp in posts {
        if show_stage {
            writeln!(out, "{}) [{}] {}", lp.index, lp.post.stage, lp.post.title)?;
        } else {
            writeln!(out, "{}) {}", lp.index, lp.post.title)?;
        }
    }
    Ok(())
}

fn stage_colored(stage: Stage, text: &str) -> colored::ColoredString {
    match stage {
        Stage::Seed => text.yellow(),
        Stage::Growing => text.green(),
        Stage::Harvested => text.blue(),
        Stage::Abandoned => text.dimmed(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// "updated 3 days ago"; timestamps that do not parse are shown as stored.
fn format_updated(timestamp: Option<&str>) -> String {
    let text = match timestamp {
        None => String::new(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => format!("updated {}", time_ago(parsed.with_timezone(&Utc))),
            Err(_) => format!("updated {}", raw),
        },
    };
    format!("{:>width$}", text, width = TIME_WIDTH)
}

fn time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden::model::Post;

    fn listed(index: usize, title: &str, stage: Stage) -> ListedPost {
        let mut post = Post::seed(title.into(), String::new(), vec![], vec![]);
        post.stage = stage;
        ListedPost { index, post }
    }

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choices_with_and_without_stage() {
        let posts = vec![listed(1, "A", Stage::Seed), listed(2, "B", Stage::Growing)];
        assert_eq!(
            rendered(|out| print_choices(out, &posts, false)),
            "1) A\n2) B\n"
        );
        assert_eq!(
            rendered(|out| print_choices(out, &posts, true)),
            "1) [seed] A\n2) [growing] B\n"
        );
    }

    #[test]
    fn listing_shows_index_title_and_age() {
        let posts = vec![listed(1, "Idea A", Stage::Seed)];
        let text = rendered(|out| print_posts(out, &posts));
        assert!(text.contains("1. "));
        assert!(text.contains("[seed]"));
        assert!(text.contains("Idea A"));
        assert!(text.contains("updated"));
    }

    #[test]
    fn empty_listing() {
        assert_eq!(rendered(|out| print_posts(out, &[])), "No posts found.\n");
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert!(format_updated(Some("last tuesday")).ends_with("updated last tuesday"));
        assert_eq!(format_updated(None).trim(), "");
    }

    #[test]
    fn long_titles_are_truncated() {
        let truncated = truncate_to_width(&"x".repeat(200), 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
    }
}

//! The interactive admin menu: one choice, one operation, then exit.
//!
//! Input and output are passed in so tests can drive the menu with byte buffers.

use super::print::{print_choices, print_messages};
use garden::api::{GardenApi, NewPost};
use garden::error::Result;
use garden::model::{split_list, Stage};
use garden::store::PostStore;
use std::io::{BufRead, Write};

const HEADER: &str = "=== Digital Garden Admin CLI ===";
const OPTIONS: [&str; 5] = [
    "1) Add new seed",
    "2) Grow a seed",
    "3) Harvest a growing post",
    "4) Abandon a seed or growing post",
    "5) Exit",
];

pub(super) fn run_menu<S, R, W>(api: &mut GardenApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: PostStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", HEADER)?;
    for option in OPTIONS {
        writeln!(out, "{}", option)?;
    }

    match ask_choice(input, out, "Choose an option: ")?.as_str() {
        "1" => add_seed(api, input, out),
        "2" => move_one(api, input, out, Action::Grow),
        "3" => move_one(api, input, out, Action::Harvest),
        "4" => move_one(api, input, out, Action::Abandon),
        "5" => Ok(()),
        _ => {
            writeln!(out, "Invalid choice.")?;
            Ok(())
        }
    }
}

/// Prints `prompt` and reads one line, as typed, without its line ending.
/// End of input reads as "".
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Like [`ask`], for menu and list numbers.
fn ask_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    Ok(ask(input, out, prompt)?.trim().to_string())
}

fn add_seed<S: PostStore, R: BufRead, W: Write>(
    api: &mut GardenApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let title = ask(input, out, "Title: ")?;
    let content = ask(input, out, "Content: ")?;
    let tags = ask(input, out, "Tags (comma separated): ")?;
    let links = ask(input, out, "Links (comma separated): ")?;

    let new_post = NewPost::new(title, content)
        .with_tags(split_list(&tags))
        .with_links(split_list(&links));
    let result = api.plant(new_post)?;
    print_messages(out, &result.messages)?;
    Ok(())
}

#[derive(Clone, Copy)]
enum Action {
    Grow,
    Harvest,
    Abandon,
}

impl Action {
    fn eligible(self) -> &'static [Stage] {
        match self {
            Action::Grow => &[Stage::Seed],
            Action::Harvest => &[Stage::Growing],
            Action::Abandon => &[Stage::Seed, Stage::Growing],
        }
    }
}

fn move_one<S: PostStore, R: BufRead, W: Write>(
    api: &mut GardenApi<S>,
    input: &mut R,
    out: &mut W,
    action: Action,
) -> Result<()> {
    let candidates = api.candidates(action.eligible())?;
    if candidates.is_empty() {
        match action {
            Action::Grow => writeln!(out, "No posts in stage \"{}\"", Stage::Seed)?,
            Action::Harvest => writeln!(out, "No posts in stage \"{}\"", Stage::Growing)?,
            Action::Abandon => writeln!(out, "No posts available to abandon.")?,
        }
        return Ok(());
    }

    let prompt = match action {
        Action::Grow => {
            writeln!(out, "\nAvailable {} posts:", Stage::Seed)?;
            "Enter the number of the post: "
        }
        Action::Harvest => {
            writeln!(out, "\nAvailable {} posts:", Stage::Growing)?;
            "Enter the number of the post: "
        }
        Action::Abandon => {
            writeln!(out, "\nAvailable posts to abandon (seed or growing):")?;
            "Enter the number of the post to abandon: "
        }
    };
    print_choices(out, &candidates, matches!(action, Action::Abandon))?;

    let answer = ask_choice(input, out, prompt)?;
    let index = match answer.parse::<usize>() {
        Ok(n) if (1..=candidates.len()).contains(&n) => n,
        _ => {
            writeln!(out, "Invalid choice.")?;
            return Ok(());
        }
    };

    let selector = [index.to_string()];
    let result = match action {
        Action::Grow => api.grow(&selector)?,
        Action::Harvest => api.harvest(&selector)?,
        Action::Abandon => api.abandon(&selector)?,
    };
    print_messages(out, &result.messages)?;
    Ok(())
}

use super::menu::run_menu;
use super::print::{print_messages, print_posts};
use super::setup::{Cli, Commands};
use clap::Parser;
use garden::api::{GardenApi, NewPost};
use garden::error::Result;
use garden::layout::GardenLayout;
use garden::model::{split_list, Stage};
use garden::store::fs::JsonFileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: GardenApi<JsonFileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Add {
            title,
            content,
            tags,
            links,
        }) => handle_add(&mut ctx, title, content, &tags, &links),
        Some(Commands::Grow { selector }) => handle_grow(&mut ctx, selector),
        Some(Commands::Harvest { selector }) => handle_harvest(&mut ctx, selector),
        Some(Commands::Abandon { selector }) => handle_abandon(&mut ctx, selector),
        Some(Commands::List { stages }) => handle_list(&ctx, &stages),
        Some(Commands::Sync) => handle_sync(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "garden=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    tracing::debug!(root = %root.display(), "opening garden");

    let layout = GardenLayout::open(root)?;
    let store = JsonFileStore::new(layout.store_path());
    tracing::debug!(store = %store.path().display(), "using store");
    Ok(AppContext {
        api: GardenApi::new(store, layout),
    })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_menu(&mut ctx.api, &mut input, &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    tags: &str,
    links: &str,
) -> Result<()> {
    let new_post = NewPost::new(title, content)
        .with_tags(split_list(tags))
        .with_links(split_list(links));
    let result = ctx.api.plant(new_post)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_grow(ctx: &mut AppContext, selector: Vec<String>) -> Result<()> {
    let result = ctx.api.grow(&selector)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_harvest(ctx: &mut AppContext, selector: Vec<String>) -> Result<()> {
    let result = ctx.api.harvest(&selector)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_abandon(ctx: &mut AppContext, selector: Vec<String>) -> Result<()> {
    let result = ctx.api.abandon(&selector)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, stages: &[Stage]) -> Result<()> {
    let result = ctx.api.list(stages)?;
    let mut out = io::stdout().lock();
    print_posts(&mut out, &result.listed_posts)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_sync(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sync()?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

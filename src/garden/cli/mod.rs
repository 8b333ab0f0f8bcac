//! # CLI Behavior
//!
//! One UI client for the garden library. This is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`garden`)
//!
//! Running `garden` with no subcommand opens the interactive admin menu, as does
//! `garden menu`. The menu performs one operation and exits.
//!
//! ## Subcommands
//!
//! `init`, `add`, `grow`, `harvest`, `abandon`, `list` and `sync` call the same API
//! the menu does. Stage commands take either a list index (as printed by
//! `garden list --stage <stage>`) or a title:
//!
//! - `garden grow 1` grows the first seed
//! - `garden harvest Idea A` harvests the post titled exactly "Idea A"
//!
//! Errors print `Error: ...` on stderr and exit with status 1. The menu reports a
//! bad choice as a message instead and exits normally.
//!
//! ## Garden Root
//!
//! `--root <DIR>`, else `$GARDEN_ROOT`, else the current directory.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`; `-v`
//! raises the garden's own events to `debug`, and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `menu`: The interactive menu
//! - `print`: Coloured messages and post listings
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod print;
pub mod setup;

pub use commands::run;

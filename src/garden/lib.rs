//! # Garden Architecture
//!
//! Garden manages a small "digital garden": short posts that move through an
//! editorial lifecycle and are published as static HTML pages. The library owns the
//! lifecycle; the `garden` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive menu                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns raw input (list index or title) into selectors     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - plant, transition, sync, list, init                      │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage + Pages (store/, render.rs, html.rs)               │
//! │  - PostStore trait: JsonFileStore, InMemoryStore            │
//! │  - Stage templates rendered to <stage dir>/<slug>.html      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Titles are identity
//!
//! The store is a JSON array of posts. A post's title is its key: pages are named
//! after the title's slug, and sync joins a page back to its post by the page's
//! `<title>`. Duplicate titles are allowed but every lookup finds the first one.
//!
//! ## Lifecycle
//!
//! ```text
//!   seed ──► growing ──► harvested
//!     │         │
//!     └────┬────┘
//!          ▼
//!      abandoned
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Post`, `Stage`, `PostDates`)
//! - [`layout`]: Paths inside a garden root
//! - [`config`]: `garden.json` settings
//! - [`render`]: Stage template rendering
//! - [`html`]: Locating the title and id'd elements in a page
//! - [`templates`]: Built-in stage templates written by `init`
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod html;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;
pub mod templates;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

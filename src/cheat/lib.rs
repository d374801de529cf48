//! # Cheat Architecture
//!
//! Cheat resolves short names like `tar` or `git/branch` to plain-text
//! cheatsheets stored across a stack of directories ("cheatpaths"), and lets
//! you view, edit, list and search them. It is a library with a thin CLI on
//! top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, picks exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + context (init.rs)                           │
//! │  - Loads conf.yml, builds the PathSet once, dispatches      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - view, edit, list, search, directories                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: pathset, resolver, aggregator, router                │
//! │  - Pure functions over an explicit, immutable PathSet       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cheatpaths and Priority
//!
//! Cheatpaths are configured from most global to most local, and a writable
//! `local` layer for `./.cheat` is appended when that directory exists.
//! Reading walks the list backwards, so local sheets shadow global ones.
//! Writing picks the *first* writable layer in configured order and copies
//! readonly sheets there before editing (copy-on-write). The two orders
//! differ on purpose; see [`router`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Launching the editor or pager is the one exception,
//! and it is confined to [`editor`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing command
//! - [`pathset`]: Ordered cheatpath layers
//! - [`resolver`]: Name to file resolution, with path-escape protection
//! - [`aggregator`]: Listing and full-text search across layers
//! - [`router`]: Choosing (and preparing) the file an edit writes to
//! - [`config`]: `conf.yml` parsing
//! - [`init`]: Config discovery and context setup
//! - [`editor`]: Editor and pager launching
//! - [`model`]: Core data types
//! - [`error`]: Error types

pub mod aggregator;
pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod pathset;
pub mod resolver;
pub mod router;

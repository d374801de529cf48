//! # CLI Behavior
//!
//! This is the only place that knows about terminal I/O, exit codes, and
//! output formatting. For the overall architecture, see the library docs.
//!
//! ## Modes
//!
//! Exactly one mode runs per invocation, checked in this order:
//!
//! - `cheat -d`: list cheatpaths as `name: path (readonly: bool)`
//! - `cheat -l [-p <cheatpath>]`: list sheet names, one per line
//! - `cheat -s <term>`: print matching lines as `sheet:line: text`
//! - `cheat -e <name>`: edit (copying readonly sheets first)
//! - `cheat <name>`: view in the pager
//!
//! With no arguments the help text is printed.

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;

//! # Cheat CLI
//!
//! The binary is intentionally thin: argument parsing, terminal output and
//! exit codes live in `cli/`, and this file only invokes `cli::run()` and
//! handles process termination. Everything else is in the `cheat` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cheat", bin_name = "cheat", version)]
#[command(about = "Create and view interactive cheatsheets", long_about = None)]
pub struct Cli {
    /// The name of the cheatsheet to view or edit (e.g. tar, git/branch)
    pub cheatname: Option<String>,

    /// Edit a cheatsheet
    #[arg(short, long)]
    pub edit: bool,

    /// List all available cheatsheets
    #[arg(short, long)]
    pub list: bool,

    /// Only list cheatsheets from the named cheatpath (used with -l)
    #[arg(short, long, value_name = "CHEATPATH")]
    pub path: Option<String>,

    /// Search for a term among cheatsheets
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// List configured cheatpaths
    #[arg(short, long)]
    pub directories: bool,

    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

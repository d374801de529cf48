use super::logging;
use super::print::{print_layers, print_messages, print_raw, print_search_hits, print_sheet_names};
use super::setup::Cli;
use cheat::api::CheatApi;
use cheat::error::{CheatError, Result};
use cheat::init::initialize;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let nothing_to_do = !cli.directories
        && !cli.list
        && cli.search.is_none()
        && !cli.edit
        && cli.cheatname.is_none();
    if nothing_to_do {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.conf.as_deref())?;
    let api = ctx.api;

    if cli.directories {
        return handle_directories(&api);
    }
    if cli.list {
        return handle_list(&api, cli.path.as_deref());
    }
    if let Some(term) = cli.search.as_deref() {
        return handle_search(&api, term);
    }

    match (cli.edit, cli.cheatname.as_deref()) {
        (true, Some(name)) => handle_edit(&api, name),
        (true, None) => Err(CheatError::Usage(
            "Please specify a cheatsheet to edit.".to_string(),
        )),
        (false, Some(name)) => handle_view(&api, name),
        (false, None) => Ok(()),
    }
}

fn handle_directories(api: &CheatApi) -> Result<()> {
    let result = api.directories()?;
    print_layers(&result.layers);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &CheatApi, layer_filter: Option<&str>) -> Result<()> {
    let result = api.list_sheets(layer_filter)?;
    print_sheet_names(&result.sheet_names);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &CheatApi, term: &str) -> Result<()> {
    let result = api.search_sheets(term)?;
    print_search_hits(&result.search_hits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &CheatApi, name: &str) -> Result<()> {
    let result = api.view_sheet(name)?;
    if let Some(content) = &result.fallback_content {
        print_raw(content);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &CheatApi, name: &str) -> Result<()> {
    let result = api.prepare_edit(name)?;
    // report copy-on-write before the editor takes over the terminal
    print_messages(&result.messages);

    for path in &result.sheet_paths {
        api.open_in_editor(path)?;
    }
    Ok(())
}

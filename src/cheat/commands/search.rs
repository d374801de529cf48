use crate::aggregator;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::pathset::PathSet;

pub fn run(paths: &PathSet, term: &str) -> Result<CmdResult> {
    let hits = aggregator::search(paths, term);
    Ok(CmdResult::default().with_search_hits(hits))
}

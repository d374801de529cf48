use crate::aggregator;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::pathset::PathSet;

pub fn run(paths: &PathSet, layer_filter: Option<&str>) -> Result<CmdResult> {
    let names = aggregator::list(paths, layer_filter);
    Ok(CmdResult::default().with_sheet_names(names))
}

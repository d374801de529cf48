use crate::commands::CmdResult;
use crate::error::Result;
use crate::pathset::PathSet;

pub fn run(paths: &PathSet) -> Result<CmdResult> {
    let layers = paths.layers_by_priority().cloned().collect();
    Ok(CmdResult::default().with_layers(layers))
}

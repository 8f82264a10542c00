use std::path::Path;

use anyhow::{Context, Result};
use campus_paths_cli::OutputFormat;
use campus_paths_lib::BuildingsResponse;

use super::load_map;

/// Handle the buildings subcommand.
pub fn handle_buildings(data_dir: Option<&Path>, format: OutputFormat) -> Result<()> {
    let map = load_map(data_dir)?;
    let response = BuildingsResponse::from_map(&map);
    let rendered = format
        .render_buildings(&response)
        .context("failed to render building list")?;
    print!("{rendered}");
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use campus_paths_cli::OutputFormat;
use campus_paths_lib::PathResponse;
use tracing::info;

use super::load_map;

/// Handle the route subcommand.
///
/// Unknown or empty building names fail the command. A valid pair with no
/// connecting walkway is not a failure.
pub fn handle_route(
    data_dir: Option<&Path>,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let map = load_map(data_dir)?;
    let path = map
        .find_shortest_path(from, to)
        .with_context(|| format!("cannot route from '{from}' to '{to}'"))?;

    info!(from, to, found = path.is_some(), "route query complete");

    let response = PathResponse::from_path(from, to, path.as_ref());
    let rendered = format
        .render_path(&response, from, to)
        .context("failed to render route")?;
    print!("{rendered}");
    Ok(())
}

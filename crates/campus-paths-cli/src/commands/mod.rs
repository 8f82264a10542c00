// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod buildings;
pub mod route;
pub mod script;

use std::path::Path;

use anyhow::{Context, Result};
use campus_paths_lib::{resolve_data_dir, CampusMap};

/// Resolve the dataset directory and build the campus map from it.
pub(crate) fn load_map(data_dir: Option<&Path>) -> Result<CampusMap> {
    let dir = resolve_data_dir(data_dir).context("failed to resolve the campus data directory")?;
    CampusMap::load(&dir)
        .with_context(|| format!("failed to load campus dataset from {}", dir.display()))
}

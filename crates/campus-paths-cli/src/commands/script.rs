use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use campus_paths_cli::ScriptRunner;

/// Handle the script subcommand.
pub fn handle_script(file: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let mut runner = ScriptRunner::new(stdout.lock());

    match file {
        Some(path) => {
            let script = File::open(path)
                .with_context(|| format!("cannot read script {}", path.display()))?;
            runner.run(BufReader::new(script))
        }
        None => runner.run(io::stdin().lock()),
    }
    .context("failed to run script")
}

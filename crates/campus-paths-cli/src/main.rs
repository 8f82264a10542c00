mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campus_paths_cli::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus map routing utilities")]
struct Cli {
    /// Override the directory holding campus_buildings.tsv and campus_paths.tsv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every building by short and long name.
    Buildings {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute the shortest walking route between two buildings.
    Route {
        /// Starting building short name.
        #[arg(long = "from")]
        from: String,
        /// Destination building short name.
        #[arg(long = "to")]
        to: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run a graph script from a file, or from stdin when no file is given.
    Script {
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Buildings { format } => {
            commands::buildings::handle_buildings(cli.data_dir.as_deref(), format)
        }
        Command::Route { from, to, format } => {
            commands::route::handle_route(cli.data_dir.as_deref(), &from, &to, format)
        }
        Command::Script { file } => commands::script::handle_script(file.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

mod browser;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wren-files")]
#[command(about = "File browser with back/forward navigation history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse interactively (default)
    Browse {
        /// Directory to start in (defaults to the working directory)
        path: Option<PathBuf>,
    },
    /// Print a one-shot listing and exit
    List {
        /// Directory to list (defaults to the working directory)
        path: Option<PathBuf>,
        /// Include hidden entries
        #[arg(long)]
        all: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wren_shell=info".parse()?)
                .add_directive("wren_core=info".parse()?)
                .add_directive("wren_files=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => browser::run(None),
        Some(Command::Browse { path }) => browser::run(path),
        Some(Command::List { path, all }) => browser::list_once(path, all),
    }
}

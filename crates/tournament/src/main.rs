//! Tournament CLI
//!
//! Pair a team Swiss event round by round from CSV files.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tournament::{handle_init, handle_pair, handle_standings, resolve_config, Cli, Command};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    execute_command(cli)
        .map(|output| print!("{output}"))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        });
}

/// Logs go to stderr so stdout only carries the reports
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute_command(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Init {
            file,
            teams,
            boards,
            force,
        } => handle_init(&file, teams, boards, force),
        Command::Pair {
            file,
            config,
            json,
            show_rosters,
        } => {
            let mut resolved = resolve_config(file.as_deref(), config.as_deref())?;
            resolved.export_json |= json;
            resolved.show_rosters |= show_rosters;
            handle_pair(resolved)
        }
        Command::Standings { file, config, json } => {
            let resolved = resolve_config(file.as_deref(), config.as_deref())?;
            handle_standings(resolved, json)
        }
    }
}

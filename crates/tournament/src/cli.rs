use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Team Swiss tournament manager")]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create a blank roster to fill in
    Init {
        /// Roster CSV to create
        file: PathBuf,
        /// Number of team rows
        #[arg(short, long, default_value_t = 8)]
        teams: usize,
        /// Boards per team
        #[arg(short, long, default_value_t = 4)]
        boards: usize,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Record the pending round's results and pair the next round
    Pair {
        /// Roster CSV
        file: Option<PathBuf>,
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Also export the pairings as JSON
        #[arg(long)]
        json: bool,
        /// Print team rosters before the standings
        #[arg(long)]
        show_rosters: bool,
    },
    /// Print the current standings without pairing
    Standings {
        /// Roster CSV
        file: Option<PathBuf>,
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

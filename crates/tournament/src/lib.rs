//! Team Swiss tournament manager
//!
//! This crate wraps `swiss_core` with everything needed to run an event from
//! a folder of CSV files:
//! - A roster template to fill in
//! - A results sheet per round for the arbiter
//! - A MAIN snapshot holding standings and history between runs
//! - Text and JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Create a roster for 8 teams of 4 boards
//! cargo run -p tournament -- init teams.csv --teams 8 --boards 4
//!
//! # Pair round 1, then after each round record results and pair the next
//! cargo run -p tournament -- pair teams.csv
//!
//! # Standings only
//! cargo run -p tournament -- standings teams.csv --json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod sheets;
pub mod store;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use swiss_core::{load_tournament, run_round};
use tracing::info;

pub use cli::{Cli, Command};
pub use config::TournamentConfig;
pub use error::{SkippedRow, StoreError};
pub use store::CsvStore;

/// Load `--config` if given; an explicit roster path wins over the file's.
pub fn resolve_config(file: Option<&Path>, config: Option<&Path>) -> Result<TournamentConfig> {
    let mut resolved = match config {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };
    if let Some(file) = file {
        resolved.roster = file.to_path_buf();
    }
    Ok(resolved)
}

pub fn handle_init(path: &Path, teams: usize, boards: usize, force: bool) -> Result<String> {
    if path.exists() && !force {
        return Err(StoreError::AlreadyExists(path.to_path_buf()))
            .context("Refusing to overwrite the roster (use --force)");
    }
    sheets::roster::write_template(path, teams, boards)
        .with_context(|| format!("Failed to create template {}", path.display()))?;

    Ok(format!(
        "Created {} with {} teams of {} boards.\n\
         Fill in Team_ID, Team_Name and every Board_k_Name / Board_k_Rating, then run `pair`.\n",
        path.display(),
        teams,
        boards
    ))
}

/// One full cycle: ingest the pending round, pair the next one, write files.
pub fn handle_pair(config: TournamentConfig) -> Result<String> {
    let roster_path = config.roster.clone();
    let show_rosters = config.show_rosters;
    let mut store = CsvStore::new(config);

    let outcome = run_round(&mut store)
        .with_context(|| format!("Tournament run failed for {}", roster_path.display()))?;
    let tournament = &outcome.tournament;

    let mut output = String::new();
    output.push_str(&report::format_skipped(&store.skipped));
    if let Some(restored) = &outcome.restored {
        output.push_str(&report::format_restore(restored));
    }
    if let Some(summary) = &outcome.ingested {
        output.push_str(&report::format_round_summary(summary));
    }
    if !outcome.waiting.is_empty() {
        output.push_str(&report::format_waiting(
            tournament.roster(),
            outcome.pairings.round,
            &outcome.waiting,
        ));
    }
    if show_rosters {
        output.push('\n');
        output.push_str(&report::format_rosters(tournament.roster()));
    }
    output.push('\n');
    output.push_str(&report::format_standings(
        &tournament.standings(),
        tournament.current_round(),
    ));
    output.push('\n');
    output.push_str(&report::format_pairings(&outcome.pairings));
    output.push('\n');

    let sheet: PathBuf = store.config().round_sheet_path(outcome.pairings.round);
    output.push_str(&report::next_steps(&sheet, outcome.pairings.round));

    info!(round = outcome.pairings.round, "Round ready: {}", sheet.display());
    Ok(output)
}

/// Standings from the saved state; nothing is written.
pub fn handle_standings(config: TournamentConfig, json: bool) -> Result<String> {
    let roster_path = config.roster.clone();
    let mut store = CsvStore::new(config);
    let (tournament, _) = load_tournament(&mut store)
        .with_context(|| format!("Failed to load tournament {}", roster_path.display()))?;

    let rows = tournament.standings();
    if json {
        let mut output =
            serde_json::to_string_pretty(&rows).context("Failed to serialize standings")?;
        output.push('\n');
        Ok(output)
    } else {
        let mut output = report::format_skipped(&store.skipped);
        output.push_str(&report::format_standings(&rows, tournament.current_round()));
        Ok(output)
    }
}

//! CSV-backed [`TournamentStore`]

use std::path::Path;
use swiss_core::{
    MatchReport, Result, RoundPairings, StateSnapshot, TeamEntry, Tournament, TournamentStore,
};
use tracing::{debug, info, warn};

use crate::config::TournamentConfig;
use crate::error::{SkippedRow, StoreError};
use crate::sheets::{results, roster, snapshot};

/// Reads and writes the tournament files named by a [`TournamentConfig`].
///
/// Rows that had to be ignored while reading are kept in `skipped` so the
/// caller can show them next to the reports.
#[derive(Debug, Clone)]
pub struct CsvStore {
    config: TournamentConfig,
    pub skipped: Vec<SkippedRow>,
}

impl CsvStore {
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            config,
            skipped: Vec::new(),
        }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    fn note_skipped(&mut self, rows: Vec<SkippedRow>) {
        for row in &rows {
            warn!("Skipped row {}", row);
        }
        self.skipped.extend(rows);
    }
}

impl TournamentStore for CsvStore {
    fn load_roster(&mut self) -> Result<Vec<TeamEntry>> {
        let load = roster::read_roster(&self.config.roster)?;
        self.note_skipped(load.skipped);
        Ok(load.teams)
    }

    fn load_snapshot(&mut self) -> Result<Option<StateSnapshot>> {
        let path = self.config.snapshot_path();
        if !path.exists() {
            debug!("No snapshot at {}", path.display());
            return Ok(None);
        }
        let load = snapshot::read_snapshot(&path)?;
        self.note_skipped(load.skipped);
        Ok(Some(load.snapshot))
    }

    fn load_round_results(&mut self, round: usize) -> Result<Option<Vec<MatchReport>>> {
        let path = self.config.round_sheet_path(round);
        if !path.exists() {
            debug!(round, "No results sheet at {}", path.display());
            return Ok(None);
        }
        let load = results::read_round_sheet(&path)?;
        self.note_skipped(load.skipped);
        Ok(Some(load.reports))
    }

    fn save_round_sheet(&mut self, pairings: &RoundPairings) -> Result<()> {
        results::write_round_sheet(&self.config.round_sheet_path(pairings.round), pairings)?;
        if self.config.export_json {
            export_json(&self.config.round_export_path(pairings.round), pairings)?;
        }
        Ok(())
    }

    fn save_snapshot(&mut self, tournament: &Tournament) -> Result<()> {
        snapshot::write_snapshot(&self.config.snapshot_path(), tournament)?;
        Ok(())
    }
}

fn export_json(path: &Path, pairings: &RoundPairings) -> std::result::Result<(), StoreError> {
    let json = serde_json::to_string_pretty(pairings).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| StoreError::io(path, e))?;
    info!("Pairings exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

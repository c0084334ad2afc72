//! Tournament configuration and file naming

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the tournament files live and what to print.
///
/// Every file is derived from the roster path unless overridden: for
/// `teams.csv` the snapshot is `teams_MAIN.csv` and round sheets are
/// `teams_ROUND_{n}_RESULTS.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Roster CSV (one team per row)
    pub roster: PathBuf,
    /// Saved state; defaults to `<stem>_MAIN.csv` next to the roster
    pub snapshot: Option<PathBuf>,
    /// Directory for round sheets and exports; defaults to the roster's
    pub results_dir: Option<PathBuf>,
    /// Also write each round's pairings as JSON
    pub export_json: bool,
    /// Print team rosters before the standings
    pub show_rosters: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("teams.csv"),
            snapshot: None,
            results_dir: None,
            export_json: false,
            show_rosters: false,
        }
    }
}

impl TournamentConfig {
    pub fn for_roster<P: AsRef<Path>>(roster: P) -> Self {
        Self {
            roster: roster.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn stem(&self) -> String {
        self.roster
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tournament".to_string())
    }

    fn roster_dir(&self) -> PathBuf {
        self.roster
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn output_dir(&self) -> PathBuf {
        self.results_dir.clone().unwrap_or_else(|| self.roster_dir())
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot
            .clone()
            .unwrap_or_else(|| self.roster_dir().join(format!("{}_MAIN.csv", self.stem())))
    }

    pub fn round_sheet_path(&self, round: usize) -> PathBuf {
        self.output_dir()
            .join(format!("{}_ROUND_{}_RESULTS.csv", self.stem(), round))
    }

    pub fn round_export_path(&self, round: usize) -> PathBuf {
        self.output_dir()
            .join(format!("{}_ROUND_{}.json", self.stem(), round))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

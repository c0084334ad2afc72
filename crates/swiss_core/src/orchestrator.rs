//! Round-by-round driver
//!
//! One invocation: load roster and saved state, ingest the pending round if
//! its results are in, pair the next round and hand everything back to the
//! store. Storage format is the store's business.

use std::collections::BTreeMap;
use tracing::info;

use crate::error::{Result, TournamentError};
use crate::pairing::RoundPairings;
use crate::results::{MatchReport, RoundSummary};
use crate::roster::TeamEntry;
use crate::snapshot::{RestoreReport, StateSnapshot};
use crate::tournament::Tournament;
use crate::types::TeamId;

/// Where rosters, saved state and round results come from and go to
pub trait TournamentStore {
    /// Team records in board order
    fn load_roster(&mut self) -> Result<Vec<TeamEntry>>;

    /// Saved state, or `None` when the tournament has not started
    fn load_snapshot(&mut self) -> Result<Option<StateSnapshot>>;

    /// Results for `round`, or `None` if no results sheet exists yet
    fn load_round_results(&mut self, round: usize) -> Result<Option<Vec<MatchReport>>>;

    /// Persist the pairings of a new round (e.g. as a fillable sheet)
    fn save_round_sheet(&mut self, pairings: &RoundPairings) -> Result<()>;

    /// Persist standings and full history
    fn save_snapshot(&mut self, tournament: &Tournament) -> Result<()>;
}

/// Outcome of one orchestrated invocation
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub tournament: Tournament,
    pub restored: Option<RestoreReport>,
    /// Summary of the round whose results were ingested, if any
    pub ingested: Option<RoundSummary>,
    /// Matches of the pending round that have no reported board yet
    pub waiting: Vec<(TeamId, TeamId)>,
    pub pairings: RoundPairings,
}

/// Load the roster and, if present, the saved state.
pub fn load_tournament<S: TournamentStore>(
    store: &mut S,
) -> Result<(Tournament, Option<RestoreReport>)> {
    let mut tournament = Tournament::new(store.load_roster()?)?;
    let restored = match store.load_snapshot()? {
        Some(snapshot) => Some(tournament.restore(snapshot)?),
        None => {
            info!("No previous tournament data found - starting fresh");
            None
        }
    };
    Ok((tournament, restored))
}

/// Run one full cycle: load, ingest pending results, pair, save.
///
/// The pending round is ingested only once every match on its sheet has at
/// least one reported board. Until then its pairings are issued again, and a
/// sheet that already holds results is left untouched.
pub fn run_round<S: TournamentStore>(store: &mut S) -> Result<RoundOutcome> {
    let (mut tournament, restored) = load_tournament(store)?;

    let pending = tournament.next_round();
    let mut waiting = Vec::new();
    let mut sheet_in_progress = false;
    let ingested = match store.load_round_results(pending)? {
        Some(reports) if !reports.is_empty() && reports.iter().all(|r| r.reported_boards() > 0) => {
            info!(round = pending, "Loading round results");
            Some(tournament.apply_round_results(pending, &reports)?)
        }
        Some(reports) => {
            sheet_in_progress = reports.iter().any(|r| r.reported_boards() > 0);
            waiting = reports
                .iter()
                .filter(|r| r.reported_boards() == 0)
                .map(|r| (r.team1, r.team2))
                .collect();
            info!(
                round = pending,
                waiting = waiting.len(),
                "Round not complete yet; re-issuing pairings"
            );
            None
        }
        None => None,
    };

    store.save_snapshot(&tournament)?;

    let pairings = tournament.pair_next_round();
    if !pairings.is_complete() {
        return Err(TournamentError::UnpairedTeams(pairings.unpaired));
    }
    if !sheet_in_progress {
        store.save_round_sheet(&pairings)?;
    }
    info!(
        round = pairings.round,
        matches = pairings.matches.len(),
        repeats = pairings.repeats().count(),
        "Pairings generated"
    );

    Ok(RoundOutcome {
        tournament,
        restored,
        ingested,
        waiting,
        pairings,
    })
}

// =============================================================================
// In-memory store
// =============================================================================

/// Store that keeps everything in memory. Handy for tests and for driving a
/// whole tournament programmatically.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub roster: Vec<TeamEntry>,
    pub snapshot: Option<StateSnapshot>,
    pub results: BTreeMap<usize, Vec<MatchReport>>,
    pub sheets: BTreeMap<usize, RoundPairings>,
}

impl MemoryStore {
    pub fn new(roster: Vec<TeamEntry>) -> Self {
        Self {
            roster,
            ..Default::default()
        }
    }
}

impl TournamentStore for MemoryStore {
    fn load_roster(&mut self) -> Result<Vec<TeamEntry>> {
        Ok(self.roster.clone())
    }

    fn load_snapshot(&mut self) -> Result<Option<StateSnapshot>> {
        Ok(self.snapshot.clone())
    }

    fn load_round_results(&mut self, round: usize) -> Result<Option<Vec<MatchReport>>> {
        Ok(self.results.get(&round).cloned())
    }

    fn save_round_sheet(&mut self, pairings: &RoundPairings) -> Result<()> {
        self.sheets.insert(pairings.round, pairings.clone());
        Ok(())
    }

    fn save_snapshot(&mut self, tournament: &Tournament) -> Result<()> {
        self.snapshot = Some(tournament.snapshot());
        Ok(())
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod orchestrator_tests;

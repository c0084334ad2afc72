//! Tournament state aggregate
//!
//! [`Tournament`] owns the roster and knows how many rounds are complete.
//! Every mutation of team or player state goes through it.

use tracing::{info, warn};

use crate::error::{Result, TournamentError};
use crate::pairing::{generate_round, RoundPairings};
use crate::results::{apply_round_results, MatchReport, RoundSummary};
use crate::roster::{Roster, TeamEntry};
use crate::snapshot::{PlayerState, RestoreReport, StateSnapshot, TeamState};
use crate::standings::{rank_teams, recompute_buchholz, recompute_points, standings, StandingRow};
use crate::types::TeamId;

const POINT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Tournament {
    roster: Roster,
    current_round: usize,
}

impl Tournament {
    /// Start a fresh tournament (round 0, zeroed statistics)
    pub fn new(entries: Vec<TeamEntry>) -> Result<Self> {
        let roster = Roster::build(entries)?;
        info!(
            teams = roster.team_count(),
            boards = roster.team_size(),
            players = roster.player_count(),
            "Roster loaded"
        );
        Ok(Self {
            roster,
            current_round: 0,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of completed rounds
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn next_round(&self) -> usize {
        self.current_round + 1
    }

    pub fn team_size(&self) -> usize {
        self.roster.team_size()
    }

    pub fn standings(&self) -> Vec<StandingRow> {
        standings(&self.roster)
    }

    // =========================================================================
    // Rounds
    // =========================================================================

    /// Apply the results of the next round and mark it complete.
    ///
    /// Every team must end up with a record for `round`; otherwise nothing is
    /// applied and [`TournamentError::IncompleteRound`] names the teams left
    /// behind.
    pub fn apply_round_results(
        &mut self,
        round: usize,
        reports: &[MatchReport],
    ) -> Result<RoundSummary> {
        if round != self.next_round() {
            return Err(TournamentError::OutOfOrderRound {
                expected: self.next_round(),
                got: round,
            });
        }

        // Applied to a copy, committed only when no team is left behind
        let mut roster = self.roster.clone();
        let summary = apply_round_results(&mut roster, round, reports);

        let missing: Vec<TeamId> = roster
            .teams()
            .filter(|t| t.rounds_played() < round)
            .map(|t| t.id)
            .collect();
        if !missing.is_empty() {
            warn!(round, ?missing, "Teams have no result for this round; round not applied");
            return Err(TournamentError::IncompleteRound { round, missing });
        }

        self.roster = roster;
        self.current_round = round;
        Ok(summary)
    }

    /// Pair the next round
    pub fn pair_next_round(&self) -> RoundPairings {
        generate_round(&self.roster, self.next_round())
    }

    /// Teams that have played fewer than `round` rounds
    pub fn teams_behind(&self, round: usize) -> Vec<TeamId> {
        self.roster
            .teams()
            .filter(|t| t.rounds_played() < round)
            .map(|t| t.id)
            .collect()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Capture state in ranking order
    pub fn snapshot(&self) -> StateSnapshot {
        let ranked = rank_teams(&self.roster);
        let teams = ranked
            .iter()
            .map(|t| TeamState {
                team_id: t.id,
                match_points: t.match_points,
                game_points: t.game_points,
                buchholz: t.buchholz,
                history: t.history.clone(),
            })
            .collect();
        let players = ranked
            .iter()
            .flat_map(|t| self.roster.lineup(t.id))
            .map(|p| PlayerState {
                name: p.name.clone(),
                colors: p.colors.clone(),
            })
            .collect();
        StateSnapshot { teams, players }
    }

    /// Resume from a snapshot taken on the same roster.
    ///
    /// Points and Buchholz are recomputed from the restored history; saved
    /// values that disagree are reported and discarded. All teams must have
    /// played the same number of rounds.
    pub fn restore(&mut self, snapshot: StateSnapshot) -> Result<RestoreReport> {
        let mut report = RestoreReport::default();

        for state in &snapshot.teams {
            let Some(team) = self.roster.team_mut(state.team_id) else {
                report
                    .warnings
                    .push(format!("snapshot team {} is not in the roster", state.team_id));
                continue;
            };
            team.history = state.history.clone();
        }

        for state in snapshot.players {
            match self.roster.player_mut(&state.name) {
                Some(player) => player.colors = state.colors,
                None => report
                    .warnings
                    .push(format!("snapshot player '{}' is not in the roster", state.name)),
            }
        }

        recompute_points(&mut self.roster);
        recompute_buchholz(&mut self.roster);

        for state in &snapshot.teams {
            let Some(team) = self.roster.team(state.team_id) else {
                continue;
            };
            for (label, saved, derived) in [
                ("match points", state.match_points, team.match_points),
                ("game points", state.game_points, team.game_points),
                ("Buchholz", state.buchholz, team.buchholz),
            ] {
                if (saved - derived).abs() > POINT_TOLERANCE {
                    report.warnings.push(format!(
                        "team {}: saved {} {} differ from history ({})",
                        team.id, label, saved, derived
                    ));
                }
            }
            for opponent in team.opponents() {
                if self.roster.team(opponent).is_none() {
                    report.warnings.push(format!(
                        "team {}: opponent {} is not in the roster",
                        team.id, opponent
                    ));
                }
            }
        }

        let rounds: Vec<usize> = self.roster.teams().map(|t| t.rounds_played()).collect();
        let min = rounds.iter().copied().min().unwrap_or(0);
        let max = rounds.iter().copied().max().unwrap_or(0);
        if min != max {
            return Err(TournamentError::RoundMismatch { min, max });
        }

        let mut overlong = Vec::new();
        for team in self.roster.teams() {
            for name in &team.boards {
                if let Some(p) = self.roster.player(name) {
                    if p.colors.len() > min {
                        overlong.push(p.name.clone());
                    }
                }
            }
        }
        for name in overlong {
            if let Some(p) = self.roster.player_mut(&name) {
                p.colors.truncate(min);
                report.warnings.push(format!(
                    "player '{}' had more colors than rounds played; truncated",
                    name
                ));
            }
        }

        self.current_round = min;
        report.rounds = min;
        for w in &report.warnings {
            warn!("Restore: {}", w);
        }
        info!(rounds = min, "Tournament state restored");
        Ok(report)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;

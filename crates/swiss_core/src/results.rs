//! Ingesting one round of board results
//!
//! Results arrive as [`MatchReport`]s, exactly as an arbiter filled them in.
//! Unplayed boards (no white player or no result) are normal while a round
//! is still in progress and simply contribute nothing. Rows that cannot be
//! interpreted are skipped and described in the returned [`RoundSummary`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::roster::{RoundRecord, Roster};
use crate::standings::{recompute_buchholz, recompute_points};
use crate::types::{BoardNumber, Color, GameScore, PlayerName, TeamId};

/// One board as reported on the results sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardReport {
    pub board: BoardNumber,
    /// Name of the player who had white
    pub white: Option<PlayerName>,
    /// Points scored by white (0, 0.5 or 1)
    pub white_points: Option<f64>,
}

impl BoardReport {
    pub fn played(board: BoardNumber, white: &str, white_points: f64) -> Self {
        Self {
            board,
            white: Some(white.to_string()),
            white_points: Some(white_points),
        }
    }

    pub fn unplayed(board: BoardNumber) -> Self {
        Self {
            board,
            white: None,
            white_points: None,
        }
    }

    pub fn is_reported(&self) -> bool {
        self.white.is_some() && self.white_points.is_some()
    }
}

/// One match of the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub team1: TeamId,
    pub team2: TeamId,
    pub boards: Vec<BoardReport>,
}

impl MatchReport {
    pub fn reported_boards(&self) -> usize {
        self.boards.iter().filter(|b| b.is_reported()).count()
    }
}

/// A row that was skipped or looks suspicious
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultWarning {
    UnknownTeam {
        team: TeamId,
    },
    SelfPairing {
        team: TeamId,
    },
    AlreadyRecorded {
        team1: TeamId,
        team2: TeamId,
    },
    ConflictingOpponent {
        team: TeamId,
        recorded: TeamId,
        reported: TeamId,
    },
    RoundGap {
        team: TeamId,
        rounds_played: usize,
    },
    NoBoardsReported {
        team1: TeamId,
        team2: TeamId,
    },
    InvalidBoard {
        team1: TeamId,
        board: BoardNumber,
    },
    InvalidScore {
        team1: TeamId,
        board: BoardNumber,
        value: f64,
    },
    UnknownWhitePlayer {
        team1: TeamId,
        board: BoardNumber,
        name: String,
    },
}

impl fmt::Display for ResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultWarning::UnknownTeam { team } => write!(f, "unknown team id {}", team),
            ResultWarning::SelfPairing { team } => write!(f, "team {} paired with itself", team),
            ResultWarning::AlreadyRecorded { team1, team2 } => {
                write!(f, "match {} vs {} already recorded for this round", team1, team2)
            }
            ResultWarning::ConflictingOpponent {
                team,
                recorded,
                reported,
            } => write!(
                f,
                "team {} already played team {} this round, not team {}",
                team, recorded, reported
            ),
            ResultWarning::RoundGap {
                team,
                rounds_played,
            } => write!(
                f,
                "team {} has only {} earlier round(s) recorded",
                team, rounds_played
            ),
            ResultWarning::NoBoardsReported { team1, team2 } => write!(
                f,
                "match {} vs {} has no reported boards; counted as 0-0",
                team1, team2
            ),
            ResultWarning::InvalidBoard { team1, board } => {
                write!(f, "match of team {}: no board {}", team1, board)
            }
            ResultWarning::InvalidScore {
                team1,
                board,
                value,
            } => write!(
                f,
                "match of team {}, board {}: result {} is not 0, 0.5 or 1",
                team1, board, value
            ),
            ResultWarning::UnknownWhitePlayer { team1, board, name } => write!(
                f,
                "match of team {}, board {}: '{}' does not sit at this board",
                team1, board, name
            ),
        }
    }
}

/// What happened while applying one round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: usize,
    pub matches_recorded: usize,
    pub boards_recorded: usize,
    pub boards_unplayed: usize,
    pub warnings: Vec<ResultWarning>,
}

impl RoundSummary {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Apply one round's results to the roster, then recompute match points from
/// the full history and refresh Buchholz.
///
/// Must be called once per round, in round order. A match whose teams already
/// hold a record for `round` is skipped, so a second application changes
/// nothing.
pub fn apply_round_results(roster: &mut Roster, round: usize, reports: &[MatchReport]) -> RoundSummary {
    let mut summary = RoundSummary {
        round,
        ..Default::default()
    };

    for report in reports {
        if register_match(roster, round, report, &mut summary.warnings) {
            summary.matches_recorded += 1;
            record_boards(roster, round, report, &mut summary);
        }
    }

    recompute_points(roster);
    recompute_buchholz(roster);

    for w in &summary.warnings {
        warn!(round, "Skipped result: {}", w);
    }
    info!(
        round,
        matches = summary.matches_recorded,
        boards = summary.boards_recorded,
        unplayed = summary.boards_unplayed,
        "Round results applied"
    );
    summary
}

/// Add the two teams to each other's history. Returns false when the match
/// must not be scored.
fn register_match(
    roster: &mut Roster,
    round: usize,
    report: &MatchReport,
    warnings: &mut Vec<ResultWarning>,
) -> bool {
    let (t1, t2) = (report.team1, report.team2);
    for team in [t1, t2] {
        if roster.team(team).is_none() {
            warnings.push(ResultWarning::UnknownTeam { team });
            return false;
        }
    }
    if t1 == t2 {
        warnings.push(ResultWarning::SelfPairing { team: t1 });
        return false;
    }

    for (team, other) in [(t1, t2), (t2, t1)] {
        let Some(t) = roster.team(team) else {
            return false;
        };
        if let Some(existing) = t.round(round) {
            if existing.opponent == other {
                warnings.push(ResultWarning::AlreadyRecorded {
                    team1: t1,
                    team2: t2,
                });
            } else {
                warnings.push(ResultWarning::ConflictingOpponent {
                    team,
                    recorded: existing.opponent,
                    reported: other,
                });
            }
            return false;
        }
        if t.rounds_played() + 1 != round {
            warnings.push(ResultWarning::RoundGap {
                team,
                rounds_played: t.rounds_played(),
            });
            return false;
        }
    }

    for (team, other) in [(t1, t2), (t2, t1)] {
        if let Some(t) = roster.team_mut(team) {
            t.history.push(RoundRecord::new(other));
        }
    }
    debug!(round, "Registered {} vs {}", t1, t2);

    if report.reported_boards() == 0 {
        warnings.push(ResultWarning::NoBoardsReported {
            team1: t1,
            team2: t2,
        });
    }
    true
}

fn record_boards(roster: &mut Roster, round: usize, report: &MatchReport, summary: &mut RoundSummary) {
    let (t1, t2) = (report.team1, report.team2);

    for board in &report.boards {
        let (Some(white_name), Some(points)) = (&board.white, board.white_points) else {
            summary.boards_unplayed += 1;
            continue;
        };

        let Some(score) = GameScore::from_white_points(points) else {
            summary.warnings.push(ResultWarning::InvalidScore {
                team1: t1,
                board: board.board,
                value: points,
            });
            continue;
        };

        let seated = |team: TeamId| {
            roster
                .team(team)
                .and_then(|t| t.player_on(board.board))
                .cloned()
        };
        let (Some(p1), Some(p2)) = (seated(t1), seated(t2)) else {
            summary.warnings.push(ResultWarning::InvalidBoard {
                team1: t1,
                board: board.board,
            });
            continue;
        };

        let white_name = white_name.trim();
        let (white, black, white_team, black_team) = if white_name == p1 {
            (p1, p2, t1, t2)
        } else if white_name == p2 {
            (p2, p1, t2, t1)
        } else {
            summary.warnings.push(ResultWarning::UnknownWhitePlayer {
                team1: t1,
                board: board.board,
                name: white_name.to_string(),
            });
            continue;
        };

        credit(roster, white_team, round, score.white_points(), score.black_points());
        credit(roster, black_team, round, score.black_points(), score.white_points());
        push_color(roster, &white, round, Color::White);
        push_color(roster, &black, round, Color::Black);
        summary.boards_recorded += 1;
    }
}

fn credit(roster: &mut Roster, team: TeamId, round: usize, scored: f64, conceded: f64) {
    if let Some(record) = roster.team_mut(team).and_then(|t| t.round_mut(round)) {
        record.scored += scored;
        record.conceded += conceded;
    }
}

/// Append a color unless this player's history already covers the round.
fn push_color(roster: &mut Roster, player: &str, round: usize, color: Color) {
    if let Some(p) = roster.player_mut(player) {
        if p.colors.len() < round {
            p.colors.push(color);
        }
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

//! Structural failures that stop the tournament from proceeding

use thiserror::Error;

use crate::types::TeamId;

/// Conditions under which the engine cannot continue.
///
/// Recoverable problems (a malformed result row, a repeat pairing) are not
/// errors; they are reported as warnings alongside the successful result.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("roster contains no teams")]
    EmptyRoster,

    #[error("team {0} has no players")]
    EmptyTeam(TeamId),

    #[error("team {team} has {found} boards but the tournament uses {expected}")]
    InconsistentTeamSize {
        team: TeamId,
        expected: usize,
        found: usize,
    },

    #[error("team id {0} appears more than once in the roster")]
    DuplicateTeam(TeamId),

    #[error("player '{0}' appears more than once in the roster")]
    DuplicatePlayer(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown team id {0}")]
    UnknownTeam(TeamId),

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("teams have played different numbers of rounds (min {min}, max {max})")]
    RoundMismatch { min: usize, max: usize },

    #[error("results were supplied for round {got} but round {expected} is next")]
    OutOfOrderRound { expected: usize, got: usize },

    #[error("round {round} is incomplete: no result for team(s) {missing:?}")]
    IncompleteRound { round: usize, missing: Vec<TeamId> },

    #[error("no opponent left for team(s) {0:?}; byes are not supported")]
    UnpairedTeams(Vec<TeamId>),

    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, TournamentError>;

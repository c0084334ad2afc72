//! Team Swiss pairing and scoring engine
//!
//! This crate provides:
//! - The roster model (teams, players, fixed boards)
//! - Standings with match points, game points and Buchholz
//! - Greedy Swiss pairing with repeat-pairing fallback and color balancing
//! - Ingestion of board-level round results
//! - A round driver over a pluggable [`TournamentStore`]
//!
//! Everything is synchronous and owned by a single [`Tournament`] value.

pub mod colors;
pub mod error;
pub mod orchestrator;
pub mod pairing;
pub mod results;
pub mod roster;
pub mod snapshot;
pub mod standings;
pub mod tournament;
pub mod types;

pub use colors::assign_colors;
pub use error::{Result, TournamentError};
pub use orchestrator::{load_tournament, run_round, MemoryStore, RoundOutcome, TournamentStore};
pub use pairing::{generate_round, BoardPairing, Match, RoundPairings};
pub use results::{apply_round_results, BoardReport, MatchReport, ResultWarning, RoundSummary};
pub use roster::{Player, PlayerEntry, Roster, RoundRecord, Team, TeamEntry};
pub use snapshot::{PlayerState, RestoreReport, StateSnapshot, TeamState};
pub use standings::{compare_teams, rank_teams, recompute_buchholz, recompute_points, standings, StandingRow};
pub use tournament::Tournament;
pub use types::*;

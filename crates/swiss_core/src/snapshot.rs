//! Serializable tournament state between invocations

use serde::{Deserialize, Serialize};

use crate::roster::RoundRecord;
use crate::types::{Color, PlayerName, TeamId};

/// Saved statistics and history of one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub team_id: TeamId,
    pub match_points: f64,
    pub game_points: f64,
    pub buchholz: f64,
    pub history: Vec<RoundRecord>,
}

/// Saved color history of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: PlayerName,
    pub colors: Vec<Color>,
}

/// Everything needed to resume a tournament on top of its roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub teams: Vec<TeamState>,
    pub players: Vec<PlayerState>,
}

/// Notes produced while restoring a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreReport {
    pub rounds: usize,
    pub warnings: Vec<String>,
}

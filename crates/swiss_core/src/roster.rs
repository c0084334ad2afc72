//! Teams, players and board assignments
//!
//! The roster is built once from plain [`TeamEntry`] records and is the single
//! owner of every [`Team`] and [`Player`]. Teams refer to their players by
//! name, so color history lives in exactly one place.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, TournamentError};
use crate::types::{BoardNumber, Color, MatchOutcome, PlayerName, TeamId};

// =============================================================================
// Input records
// =============================================================================

/// One player as supplied by the roster source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub rating: u32,
}

/// One team as supplied by the roster source, players in board order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<PlayerEntry>,
}

impl TeamEntry {
    pub fn new(id: TeamId, name: &str, players: &[(&str, u32)]) -> Self {
        Self {
            id,
            name: name.to_string(),
            players: players
                .iter()
                .map(|(name, rating)| PlayerEntry {
                    name: name.to_string(),
                    rating: *rating,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Registry entities
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub rating: u32,
    pub team_id: TeamId,
    pub board: BoardNumber,
    /// One entry per round this player actually sat at the board
    pub colors: Vec<Color>,
}

impl Player {
    pub fn new(name: &str, rating: u32, team_id: TeamId, board: BoardNumber) -> Self {
        Self {
            name: name.to_string(),
            rating,
            team_id,
            board,
            colors: Vec::new(),
        }
    }

    /// Whites played minus blacks played
    pub fn color_balance(&self) -> i32 {
        self.colors.iter().fold(0, |acc, c| match c {
            Color::White => acc + 1,
            Color::Black => acc - 1,
        })
    }
}

/// What a team did in one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub opponent: TeamId,
    /// Game points this team scored in the round
    pub scored: f64,
    /// Game points the opponent scored in the round
    pub conceded: f64,
}

impl RoundRecord {
    pub fn new(opponent: TeamId) -> Self {
        Self {
            opponent,
            scored: 0.0,
            conceded: 0.0,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_scores(self.scored, self.conceded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Player names indexed by board number - 1
    pub boards: Vec<PlayerName>,
    pub match_points: f64,
    pub game_points: f64,
    pub buchholz: f64,
    /// Round-ordered history, one record per round played
    pub history: Vec<RoundRecord>,
    average_rating: f64,
}

impl Team {
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Opponent ids in round order
    pub fn opponents(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.history.iter().map(|r| r.opponent)
    }

    pub fn has_played(&self, other: TeamId) -> bool {
        self.history.iter().any(|r| r.opponent == other)
    }

    pub fn player_on(&self, board: BoardNumber) -> Option<&PlayerName> {
        board.checked_sub(1).and_then(|idx| self.boards.get(idx))
    }

    /// Record for a given round (1-based)
    pub fn round(&self, round: usize) -> Option<&RoundRecord> {
        round.checked_sub(1).and_then(|idx| self.history.get(idx))
    }

    pub(crate) fn round_mut(&mut self, round: usize) -> Option<&mut RoundRecord> {
        round.checked_sub(1).and_then(|idx| self.history.get_mut(idx))
    }

    /// Match and game points as a pure function of the history
    pub fn totals_from_history(&self) -> (f64, f64) {
        self.history.iter().fold((0.0, 0.0), |(mp, gp), r| {
            (mp + r.outcome().match_points(), gp + r.scored)
        })
    }
}

// =============================================================================
// Roster
// =============================================================================

/// Owned registry of all teams and players
#[derive(Debug, Clone)]
pub struct Roster {
    teams: BTreeMap<TeamId, Team>,
    players: HashMap<PlayerName, Player>,
    team_size: usize,
}

impl Roster {
    /// Build the registry, enforcing that every team fields the same number
    /// of boards and that team ids and player names are unique.
    pub fn build(entries: Vec<TeamEntry>) -> Result<Self> {
        let first = entries.first().ok_or(TournamentError::EmptyRoster)?;
        let team_size = first.players.len();

        let mut teams = BTreeMap::new();
        let mut players = HashMap::new();

        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(TournamentError::MissingField(format!(
                    "name of team {}",
                    entry.id
                )));
            }
            if entry.players.is_empty() {
                return Err(TournamentError::EmptyTeam(entry.id));
            }
            if entry.players.len() != team_size {
                return Err(TournamentError::InconsistentTeamSize {
                    team: entry.id,
                    expected: team_size,
                    found: entry.players.len(),
                });
            }
            if teams.contains_key(&entry.id) {
                return Err(TournamentError::DuplicateTeam(entry.id));
            }

            let mut boards = Vec::with_capacity(team_size);
            let mut rating_sum = 0u64;
            for (idx, p) in entry.players.iter().enumerate() {
                let name = p.name.trim();
                if name.is_empty() {
                    return Err(TournamentError::MissingField(format!(
                        "player name on board {} of team {}",
                        idx + 1,
                        entry.id
                    )));
                }
                if players.contains_key(name) {
                    return Err(TournamentError::DuplicatePlayer(name.to_string()));
                }
                players.insert(
                    name.to_string(),
                    Player::new(name, p.rating, entry.id, idx + 1),
                );
                boards.push(name.to_string());
                rating_sum += u64::from(p.rating);
            }

            let average_rating = rating_sum as f64 / boards.len() as f64;
            teams.insert(
                entry.id,
                Team {
                    id: entry.id,
                    name: entry.name.trim().to_string(),
                    boards,
                    match_points: 0.0,
                    game_points: 0.0,
                    buchholz: 0.0,
                    history: Vec::new(),
                    average_rating,
                },
            );
        }

        Ok(Self {
            teams,
            players,
            team_size,
        })
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(&id)
    }

    /// Teams in ascending id order
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn teams_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.values_mut()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players of a team in board order
    pub fn lineup(&self, id: TeamId) -> Vec<&Player> {
        self.team(id)
            .map(|t| t.boards.iter().filter_map(|n| self.players.get(n)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;

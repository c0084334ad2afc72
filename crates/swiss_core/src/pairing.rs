//! Swiss pairing of teams for the next round
//!
//! Greedy and deterministic: teams are taken in ranking order and each one is
//! matched with the highest-ranked lower team it has not met yet. Only when no
//! such team is left does it fall back to a repeat pairing, which is flagged
//! on the resulting [`Match`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::colors::assign_colors;
use crate::roster::{Roster, Team};
use crate::standings::rank_teams;
use crate::types::{BoardNumber, PlayerName, TeamId};

/// White and black on one board of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPairing {
    pub board: BoardNumber,
    pub white: PlayerName,
    pub white_rating: u32,
    pub black: PlayerName,
    pub black_rating: u32,
}

/// A team-vs-team pairing. `team1` is the higher-ranked side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based match number within the round
    pub number: usize,
    pub team1: TeamId,
    pub team1_name: String,
    pub team2: TeamId,
    pub team2_name: String,
    pub boards: Vec<BoardPairing>,
    /// The two teams have met before
    pub repeat: bool,
}

/// Everything the pairing engine produced for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub round: usize,
    pub matches: Vec<Match>,
    /// Teams for which no opponent was left
    pub unpaired: Vec<TeamId>,
}

impl RoundPairings {
    pub fn repeats(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.repeat)
    }

    /// True when every team received an opponent
    pub fn is_complete(&self) -> bool {
        self.unpaired.is_empty()
    }
}

/// Pair all teams for `round`.
pub fn generate_round(roster: &Roster, round: usize) -> RoundPairings {
    let ranked = rank_teams(roster);
    let mut paired: HashSet<TeamId> = HashSet::new();
    let mut matches = Vec::new();
    let mut unpaired = Vec::new();

    for (i, team1) in ranked.iter().enumerate() {
        if paired.contains(&team1.id) {
            continue;
        }

        let candidates = || ranked[i + 1..].iter().filter(|t| !paired.contains(&t.id));
        let fresh = candidates().find(|t| !team1.has_played(t.id));
        let (team2, repeat) = match fresh {
            Some(team2) => (team2, false),
            None => match candidates().next() {
                Some(team2) => {
                    warn!(
                        round,
                        "Repeat pairing: {} vs {} (no fresh opponent left)", team1.name, team2.name
                    );
                    (team2, true)
                }
                None => {
                    unpaired.push(team1.id);
                    continue;
                }
            },
        };

        debug!(round, "Paired {} vs {}", team1.name, team2.name);
        let team2_id = team2.id;
        matches.push(build_match(roster, matches.len() + 1, team1, team2, repeat));
        paired.insert(team1.id);
        paired.insert(team2_id);
    }

    if !unpaired.is_empty() {
        warn!(round, ?unpaired, "Teams left without an opponent");
    }

    RoundPairings {
        round,
        matches,
        unpaired,
    }
}

fn build_match(roster: &Roster, number: usize, team1: &Team, team2: &Team, repeat: bool) -> Match {
    let boards = roster
        .lineup(team1.id)
        .into_iter()
        .zip(roster.lineup(team2.id))
        .enumerate()
        .map(|(idx, (p1, p2))| {
            let (white, black) = assign_colors(p1, p2);
            BoardPairing {
                board: idx + 1,
                white: white.name.clone(),
                white_rating: white.rating,
                black: black.name.clone(),
                black_rating: black.rating,
            }
        })
        .collect();

    Match {
        number,
        team1: team1.id,
        team1_name: team1.name.clone(),
        team2: team2.id,
        team2_name: team2.name.clone(),
        boards,
        repeat,
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;

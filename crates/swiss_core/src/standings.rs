//! Standings: match points, tiebreaks and ranking

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::roster::{Roster, Team};
use crate::types::TeamId;

/// One line of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub match_points: f64,
    pub game_points: f64,
    pub buchholz: f64,
    pub average_rating: f64,
    pub rounds_played: usize,
}

/// Ranking comparator: match points, game points, Buchholz, average rating,
/// all descending. Returns `Equal` on a full tie so a stable sort keeps the
/// input order.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.match_points
        .total_cmp(&a.match_points)
        .then_with(|| b.game_points.total_cmp(&a.game_points))
        .then_with(|| b.buchholz.total_cmp(&a.buchholz))
        .then_with(|| b.average_rating().total_cmp(&a.average_rating()))
}

/// Teams in ranking order. Ties keep ascending team id order.
pub fn rank_teams(roster: &Roster) -> Vec<&Team> {
    let mut teams: Vec<&Team> = roster.teams().collect();
    teams.sort_by(|a, b| compare_teams(a, b));
    teams
}

/// Current standings table
pub fn standings(roster: &Roster) -> Vec<StandingRow> {
    rank_teams(roster)
        .into_iter()
        .enumerate()
        .map(|(idx, team)| StandingRow {
            rank: idx + 1,
            team_id: team.id,
            team_name: team.name.clone(),
            match_points: team.match_points,
            game_points: team.game_points,
            buchholz: team.buchholz,
            average_rating: team.average_rating(),
            rounds_played: team.rounds_played(),
        })
        .collect()
}

/// Re-derive match and game points of every team from its round history.
pub fn recompute_points(roster: &mut Roster) {
    for team in roster.teams_mut() {
        let (match_points, game_points) = team.totals_from_history();
        team.match_points = match_points;
        team.game_points = game_points;
    }
}

/// Buchholz = sum of the *current* match points of every opponent played.
///
/// Must run after the round's match points are final.
pub fn recompute_buchholz(roster: &mut Roster) {
    let match_points: HashMap<TeamId, f64> =
        roster.teams().map(|t| (t.id, t.match_points)).collect();

    for team in roster.teams_mut() {
        team.buchholz = team
            .opponents()
            .filter_map(|id| match_points.get(&id))
            .sum();
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;

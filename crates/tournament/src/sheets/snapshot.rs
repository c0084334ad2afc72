//! MAIN sheet: standings plus the full opponent, score and color history
//!
//! Columns: `Rank, Team_ID, Team_Name, Match_Points, Game_Points, Buchholz,
//! Avg_Rating, Board_k_Name, Board_k_Rating`, then per completed round
//! `Round_r_Opponent, Round_r_Score, Round_r_Against, Round_r_Board_k_Color`.

use csv::{StringRecord, Writer};
use std::path::Path;
use swiss_core::{Color, PlayerState, RoundRecord, StateSnapshot, TeamId, TeamState, Tournament};
use tracing::info;

use super::{open_reader, points, skipped, Columns};
use crate::error::{SkippedRow, StoreError};

pub fn write_snapshot(path: &Path, tournament: &Tournament) -> Result<(), StoreError> {
    let roster = tournament.roster();
    let boards = tournament.team_size();
    let rounds = tournament.current_round();

    let mut headers: Vec<String> = [
        "Rank",
        "Team_ID",
        "Team_Name",
        "Match_Points",
        "Game_Points",
        "Buchholz",
        "Avg_Rating",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    for board in 1..=boards {
        headers.push(format!("Board_{}_Name", board));
        headers.push(format!("Board_{}_Rating", board));
    }
    for round in 1..=rounds {
        headers.push(format!("Round_{}_Opponent", round));
        headers.push(format!("Round_{}_Score", round));
        headers.push(format!("Round_{}_Against", round));
        for board in 1..=boards {
            headers.push(format!("Round_{}_Board_{}_Color", round, board));
        }
    }

    let mut writer = Writer::from_path(path).map_err(|e| StoreError::csv(path, e))?;
    writer
        .write_record(&headers)
        .map_err(|e| StoreError::csv(path, e))?;

    for row in tournament.standings() {
        let Some(team) = roster.team(row.team_id) else {
            continue;
        };
        let lineup = roster.lineup(team.id);

        let mut record = vec![
            row.rank.to_string(),
            team.id.to_string(),
            team.name.clone(),
            points(team.match_points),
            points(team.game_points),
            points(team.buchholz),
            points(team.average_rating()),
        ];
        for player in &lineup {
            record.push(player.name.clone());
            record.push(player.rating.to_string());
        }
        for round in 1..=rounds {
            match team.round(round) {
                Some(r) => {
                    record.push(r.opponent.to_string());
                    record.push(points(r.scored));
                    record.push(points(r.conceded));
                }
                None => record.extend([String::new(), String::new(), String::new()]),
            }
            for player in &lineup {
                record.push(
                    player
                        .colors
                        .get(round - 1)
                        .map(|c| c.symbol().to_string())
                        .unwrap_or_default(),
                );
            }
        }
        writer
            .write_record(&record)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    info!(rounds, "Tournament state saved: {}", path.display());
    Ok(())
}

/// Saved state plus the rows that could not be used
#[derive(Debug, Clone, Default)]
pub struct SnapshotLoad {
    pub snapshot: StateSnapshot,
    pub skipped: Vec<SkippedRow>,
}

pub fn read_snapshot(path: &Path) -> Result<SnapshotLoad, StoreError> {
    let (mut reader, columns) = open_reader(path)?;
    columns.require(path, "Team_ID")?;

    let mut load = SnapshotLoad::default();
    for record in reader.records() {
        let record = record.map_err(|e| StoreError::csv(path, e))?;
        match parse_row(&columns, &record) {
            Ok((team, players)) => {
                load.snapshot.teams.push(team);
                load.snapshot.players.extend(players);
            }
            Err(reason) => load.skipped.push(skipped(path, &record, reason)),
        }
    }

    info!(teams = load.snapshot.teams.len(), "Loaded tournament state {}", path.display());
    Ok(load)
}

fn parse_points(columns: &Columns, record: &StringRecord, name: &str) -> Result<f64, String> {
    match columns.get(record, name) {
        None => Ok(0.0),
        Some(v) => v.parse().map_err(|_| format!("{} '{}' is not a number", name, v)),
    }
}

fn parse_row(
    columns: &Columns,
    record: &StringRecord,
) -> Result<(TeamState, Vec<PlayerState>), String> {
    let team_id: TeamId = columns
        .get(record, "Team_ID")
        .ok_or("missing Team_ID")?
        .parse()
        .map_err(|_| "Team_ID is not a number".to_string())?;

    let mut players: Vec<PlayerState> = Vec::new();
    for board in 1.. {
        let Some(name) = columns.get(record, &format!("Board_{}_Name", board)) else {
            break;
        };
        players.push(PlayerState {
            name: name.to_string(),
            colors: Vec::new(),
        });
    }

    let mut history = Vec::new();
    for round in 1.. {
        let opponent_col = format!("Round_{}_Opponent", round);
        if !columns.has(&opponent_col) {
            break;
        }
        let Some(opponent) = columns.get(record, &opponent_col) else {
            continue;
        };
        let opponent: TeamId = opponent
            .parse()
            .map_err(|_| format!("round {}: opponent '{}' is not a team id", round, opponent))?;
        history.push(RoundRecord {
            opponent,
            scored: parse_points(columns, record, &format!("Round_{}_Score", round))?,
            conceded: parse_points(columns, record, &format!("Round_{}_Against", round))?,
        });

        for (idx, player) in players.iter_mut().enumerate() {
            let cell = columns.get(record, &format!("Round_{}_Board_{}_Color", round, idx + 1));
            if let Some(cell) = cell {
                let color = Color::from_symbol(cell)
                    .ok_or_else(|| format!("round {}: color '{}' is not W or B", round, cell))?;
                player.colors.push(color);
            }
        }
    }

    let team = TeamState {
        team_id,
        match_points: parse_points(columns, record, "Match_Points")?,
        game_points: parse_points(columns, record, "Game_Points")?,
        buchholz: parse_points(columns, record, "Buchholz")?,
        history,
    };
    Ok((team, players))
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;

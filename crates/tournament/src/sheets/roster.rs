//! Roster sheet: `Team_ID, Team_Name, Board_1_Name, Board_1_Rating, ...`

use csv::{StringRecord, Writer};
use std::path::Path;
use swiss_core::{PlayerEntry, TeamEntry, TeamId};
use tracing::info;

use super::{open_reader, skipped, Columns};
use crate::error::{SkippedRow, StoreError};

/// Teams read from a roster sheet plus the rows that were ignored
#[derive(Debug, Clone, Default)]
pub struct RosterLoad {
    pub teams: Vec<TeamEntry>,
    pub skipped: Vec<SkippedRow>,
}

pub fn read_roster(path: &Path) -> Result<RosterLoad, StoreError> {
    let (mut reader, columns) = open_reader(path)?;
    columns.require(path, "Team_ID")?;
    columns.require(path, "Team_Name")?;

    let mut load = RosterLoad::default();
    for record in reader.records() {
        let record = record.map_err(|e| StoreError::csv(path, e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match parse_team(&columns, &record) {
            Ok(team) => load.teams.push(team),
            Err(reason) => load.skipped.push(skipped(path, &record, reason)),
        }
    }

    info!(
        teams = load.teams.len(),
        skipped = load.skipped.len(),
        "Loaded roster {}",
        path.display()
    );
    Ok(load)
}

fn parse_team(columns: &Columns, record: &StringRecord) -> Result<TeamEntry, String> {
    let id: TeamId = columns
        .get(record, "Team_ID")
        .ok_or("missing Team_ID")?
        .parse()
        .map_err(|_| "Team_ID is not a number".to_string())?;
    let name = columns
        .get(record, "Team_Name")
        .ok_or_else(|| format!("team {} has no Team_Name", id))?;

    let mut players = Vec::new();
    for board in 1.. {
        let Some(player) = columns.get(record, &format!("Board_{}_Name", board)) else {
            break;
        };
        let rating = columns
            .get(record, &format!("Board_{}_Rating", board))
            .ok_or_else(|| format!("team {}: board {} has no rating", id, board))?;
        let rating: u32 = rating
            .parse()
            .map_err(|_| format!("team {}: rating '{}' on board {} is invalid", id, rating, board))?;
        players.push(PlayerEntry {
            name: player.to_string(),
            rating,
        });
    }

    Ok(TeamEntry {
        id,
        name: name.to_string(),
        players,
    })
}

/// Write a blank roster with `teams` empty rows and `boards` board columns.
pub fn write_template(path: &Path, teams: usize, boards: usize) -> Result<(), StoreError> {
    if teams < 2 {
        return Err(StoreError::TooSmall {
            what: "teams",
            min: 2,
            got: teams,
        });
    }
    if boards < 1 {
        return Err(StoreError::TooSmall {
            what: "boards",
            min: 1,
            got: boards,
        });
    }

    let mut headers = vec!["Team_ID".to_string(), "Team_Name".to_string()];
    for board in 1..=boards {
        headers.push(format!("Board_{}_Name", board));
        headers.push(format!("Board_{}_Rating", board));
    }

    let mut writer = Writer::from_path(path).map_err(|e| StoreError::csv(path, e))?;
    writer
        .write_record(&headers)
        .map_err(|e| StoreError::csv(path, e))?;
    let blank = vec![""; headers.len()];
    for _ in 0..teams {
        writer
            .write_record(&blank)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    info!(teams, boards, "Template created: {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;

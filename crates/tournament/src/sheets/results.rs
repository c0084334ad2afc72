//! Round results sheet, one row per match
//!
//! Written with every `Board_k_Result` blank; the arbiter fills in `1`, `0.5`
//! or `0` from white's point of view (`1-0`, `0-1` and `1/2` work too).

use csv::{StringRecord, Writer};
use std::path::Path;
use swiss_core::{BoardReport, GameScore, MatchReport, RoundPairings, TeamId};
use tracing::info;

use super::{open_reader, skipped, Columns};
use crate::error::{SkippedRow, StoreError};

pub fn write_round_sheet(path: &Path, pairings: &RoundPairings) -> Result<(), StoreError> {
    let boards = pairings
        .matches
        .iter()
        .map(|m| m.boards.len())
        .max()
        .unwrap_or(0);

    let mut headers: Vec<String> = ["Match", "Team1_ID", "Team1_Name", "Team2_ID", "Team2_Name"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    for board in 1..=boards {
        headers.push(format!("Board_{}_White", board));
        headers.push(format!("Board_{}_Black", board));
        headers.push(format!("Board_{}_Result", board));
    }

    let mut writer = Writer::from_path(path).map_err(|e| StoreError::csv(path, e))?;
    writer
        .write_record(&headers)
        .map_err(|e| StoreError::csv(path, e))?;

    for m in &pairings.matches {
        let mut record = vec![
            m.number.to_string(),
            m.team1.to_string(),
            m.team1_name.clone(),
            m.team2.to_string(),
            m.team2_name.clone(),
        ];
        for board in &m.boards {
            record.push(board.white.clone());
            record.push(board.black.clone());
            record.push(String::new());
        }
        record.resize(headers.len(), String::new());
        writer
            .write_record(&record)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    info!(
        round = pairings.round,
        matches = pairings.matches.len(),
        "Results sheet written: {}",
        path.display()
    );
    Ok(())
}

/// Match reports read from a results sheet plus the cells that were ignored
#[derive(Debug, Clone, Default)]
pub struct ResultsLoad {
    pub reports: Vec<MatchReport>,
    pub skipped: Vec<SkippedRow>,
}

pub fn read_round_sheet(path: &Path) -> Result<ResultsLoad, StoreError> {
    let (mut reader, columns) = open_reader(path)?;
    columns.require(path, "Team1_ID")?;
    columns.require(path, "Team2_ID")?;

    let mut load = ResultsLoad::default();
    for record in reader.records() {
        let record = record.map_err(|e| StoreError::csv(path, e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let (team1, team2) = match match_teams(&columns, &record) {
            Ok(teams) => teams,
            Err(reason) => {
                load.skipped.push(skipped(path, &record, reason));
                continue;
            }
        };

        let mut boards = Vec::new();
        for board in 1.. {
            if !columns.has(&format!("Board_{}_White", board)) {
                break;
            }
            let white = columns.get(&record, &format!("Board_{}_White", board));
            let result = columns.get(&record, &format!("Board_{}_Result", board));
            let white_points = match result.map(|r| (r, GameScore::parse(r))) {
                None => None,
                Some((_, Some(score))) => Some(score.white_points()),
                Some((raw, None)) => {
                    load.skipped.push(skipped(
                        path,
                        &record,
                        format!("board {}: result '{}' is not recognised", board, raw),
                    ));
                    None
                }
            };
            boards.push(BoardReport {
                board,
                white: white.map(str::to_string),
                white_points,
            });
        }

        load.reports.push(MatchReport {
            team1,
            team2,
            boards,
        });
    }

    let reported: usize = load.reports.iter().map(|r| r.reported_boards()).sum();
    info!(
        matches = load.reports.len(),
        reported,
        "Loaded results sheet {}",
        path.display()
    );
    Ok(load)
}

fn match_teams(columns: &Columns, record: &StringRecord) -> Result<(TeamId, TeamId), String> {
    let id = |name: &str| -> Result<TeamId, String> {
        let raw = columns
            .get(record, name)
            .ok_or_else(|| format!("missing {}", name))?;
        raw.parse()
            .map_err(|_| format!("{} '{}' is not a team id", name, raw))
    };
    Ok((id("Team1_ID")?, id("Team2_ID")?))
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

use super::*;
use std::path::PathBuf;
use swiss_core::{ResultWarning, TeamEntry, Tournament};

fn tournament() -> Tournament {
    Tournament::new(vec![
        TeamEntry::new(1, "Rooks", &[("Anna", 2100), ("Bert", 1900)]),
        TeamEntry::new(2, "Knights", &[("Cleo", 2000), ("Dave", 1800)]),
        TeamEntry::new(3, "Bishops", &[("Emil", 1950), ("Fay", 1700)]),
    ])
    .unwrap()
}

#[test]
fn test_rosters_list_every_board() {
    let report = format_rosters(tournament().roster());
    assert!(report.contains("Rooks (ID 1, avg 2000.0)"));
    assert!(report.contains("Bd 2   Dave"));
    assert_eq!(report.matches("Bd ").count(), 6);
}

#[test]
fn test_standings_table() {
    let t = tournament();
    let report = format_standings(&t.standings(), t.current_round());

    assert!(report.starts_with("=== Standings after round 0 ==="));
    let lines: Vec<&str> = report.lines().collect();
    // header, blank, column titles, rule, then one line per team
    assert_eq!(lines.len(), 7);
    assert!(lines[4].trim_start().starts_with("1  Rooks"));
}

#[test]
fn test_pairings_mark_repeats_and_byes() {
    let t = tournament();
    let mut pairings = t.pair_next_round();
    pairings.matches[0].repeat = true;

    let report = format_pairings(&pairings);
    assert!(report.contains("=== Round 1 Pairings ==="));
    assert!(report.contains("(repeat)"));
    assert!(report.contains("Without opponent: 3"));
}

#[test]
fn test_round_summary_lists_warnings() {
    let summary = RoundSummary {
        round: 2,
        matches_recorded: 1,
        boards_recorded: 3,
        boards_unplayed: 1,
        warnings: vec![ResultWarning::UnknownTeam { team: 9 }],
    };

    let report = format_round_summary(&summary);
    assert!(report.starts_with("Round 2: 1 matches, 3 boards recorded, 1 unplayed"));
    assert!(report.contains("warning: unknown team id 9"));
}

#[test]
fn test_skipped_rows_only_when_present() {
    assert!(format_skipped(&[]).is_empty());

    let rows = vec![SkippedRow {
        file: PathBuf::from("teams.csv"),
        line: 4,
        reason: "Team_ID is not a number".to_string(),
    }];
    assert!(format_skipped(&rows).contains("teams.csv:4: Team_ID is not a number"));
}

#[test]
fn test_next_steps_names_the_sheet() {
    let report = next_steps(Path::new("teams_ROUND_3_RESULTS.csv"), 3);
    assert!(report.contains("Play round 3"));
    assert!(report.contains("teams_ROUND_3_RESULTS.csv"));
}

#[test]
fn test_waiting_matches_by_name() {
    let t = tournament();
    let report = format_waiting(t.roster(), 4, &[(1, 3), (2, 9)]);
    assert!(report.starts_with("Round 4 is waiting for results of:"));
    assert!(report.contains("  Rooks vs Bishops\n"));
    assert!(report.contains("  Knights vs team 9\n"));
}

use super::*;
use swiss_core::{BoardReport, MatchReport, TeamEntry};
use tempfile::tempdir;

fn two_round_tournament() -> Tournament {
    let mut tournament = Tournament::new(vec![
        TeamEntry::new(1, "Rooks", &[("Anna", 2100), ("Bert", 1900)]),
        TeamEntry::new(2, "Knights", &[("Cleo", 2000), ("Dave", 1800)]),
        TeamEntry::new(3, "Bishops", &[("Emil", 1950), ("Fay", 1700)]),
        TeamEntry::new(4, "Pawns", &[("Gus", 1600), ("Hana", 1500)]),
    ])
    .unwrap();

    tournament
        .apply_round_results(
            1,
            &[
                MatchReport {
                    team1: 1,
                    team2: 2,
                    boards: vec![
                        BoardReport::played(1, "Anna", 1.0),
                        BoardReport::played(2, "Dave", 0.5),
                    ],
                },
                MatchReport {
                    team1: 3,
                    team2: 4,
                    boards: vec![
                        BoardReport::played(1, "Gus", 0.0),
                        BoardReport::unplayed(2),
                    ],
                },
            ],
        )
        .unwrap();
    tournament
        .apply_round_results(
            2,
            &[
                MatchReport {
                    team1: 1,
                    team2: 3,
                    boards: vec![
                        BoardReport::played(1, "Emil", 0.5),
                        BoardReport::played(2, "Bert", 0.5),
                    ],
                },
                MatchReport {
                    team1: 2,
                    team2: 4,
                    boards: vec![
                        BoardReport::played(1, "Cleo", 1.0),
                        BoardReport::played(2, "Hana", 0.0),
                    ],
                },
            ],
        )
        .unwrap();
    tournament
}

#[test]
fn test_snapshot_columns_and_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("teams_MAIN.csv");
    let tournament = two_round_tournament();
    write_snapshot(&path, &tournament).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with(
        "Rank,Team_ID,Team_Name,Match_Points,Game_Points,Buchholz,Avg_Rating,Board_1_Name"
    ));
    assert!(header.ends_with("Round_2_Board_1_Color,Round_2_Board_2_Color"));

    // Rows follow the standings
    let leader = lines.next().unwrap();
    let expected = &tournament.standings()[0];
    assert!(leader.starts_with(&format!("1,{},{}", expected.team_id, expected.team_name)));
    assert_eq!(lines.count(), 3);
}

#[test]
fn test_snapshot_restores_same_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("teams_MAIN.csv");
    let original = two_round_tournament();
    write_snapshot(&path, &original).unwrap();

    let load = read_snapshot(&path).unwrap();
    assert!(load.skipped.is_empty());
    assert_eq!(load.snapshot, original.snapshot());

    let mut resumed = Tournament::new(vec![
        TeamEntry::new(1, "Rooks", &[("Anna", 2100), ("Bert", 1900)]),
        TeamEntry::new(2, "Knights", &[("Cleo", 2000), ("Dave", 1800)]),
        TeamEntry::new(3, "Bishops", &[("Emil", 1950), ("Fay", 1700)]),
        TeamEntry::new(4, "Pawns", &[("Gus", 1600), ("Hana", 1500)]),
    ])
    .unwrap();
    let report = resumed.restore(load.snapshot).unwrap();
    assert_eq!(report.rounds, 2);
    assert!(report.warnings.is_empty());
    assert_eq!(resumed.standings(), original.standings());
    assert_eq!(resumed.pair_next_round(), original.pair_next_round());
}

#[test]
fn test_fresh_tournament_has_no_round_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("teams_MAIN.csv");
    let tournament = Tournament::new(vec![
        TeamEntry::new(1, "Rooks", &[("Anna", 2100)]),
        TeamEntry::new(2, "Knights", &[("Cleo", 2000)]),
    ])
    .unwrap();
    write_snapshot(&path, &tournament).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("Round_"));

    let load = read_snapshot(&path).unwrap();
    assert_eq!(load.snapshot.teams.len(), 2);
    assert!(load.snapshot.teams.iter().all(|t| t.history.is_empty()));
}

#[test]
fn test_bad_rows_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("teams_MAIN.csv");
    std::fs::write(
        &path,
        "\
Rank,Team_ID,Team_Name,Match_Points,Game_Points,Buchholz,Avg_Rating,Board_1_Name,Board_1_Rating,Round_1_Opponent,Round_1_Score,Round_1_Against,Round_1_Board_1_Color
1,1,Rooks,2.0,1.0,0.0,2100.0,Anna,2100,2,1.0,0.0,W
2,2,Knights,0.0,0.0,2.0,2000.0,Cleo,2000,one,0.0,1.0,B
3,3,Bishops,0.0,0.0,0.0,1900.0,Emil,1900,4,0.5,0.5,X
",
    )
    .unwrap();

    let load = read_snapshot(&path).unwrap();
    assert_eq!(load.snapshot.teams.len(), 1);
    assert_eq!(load.snapshot.teams[0].history[0].opponent, 2);
    assert_eq!(load.snapshot.players[0].colors, vec![Color::White]);

    assert_eq!(load.skipped.len(), 2);
    assert!(load.skipped[0].reason.contains("one"));
    assert!(load.skipped[1].reason.contains("'X'"));
}

use super::*;

fn two_teams() -> Vec<TeamEntry> {
    vec![
        TeamEntry::new(1, "Rooks", &[("Anna", 2100), ("Bert", 1900)]),
        TeamEntry::new(2, "Knights", &[("Cleo", 2000), ("Dave", 1800)]),
    ]
}

#[test]
fn test_build_registry() {
    let roster = Roster::build(two_teams()).unwrap();

    assert_eq!(roster.team_size(), 2);
    assert_eq!(roster.team_count(), 2);
    assert_eq!(roster.player_count(), 4);

    let rooks = roster.team(1).unwrap();
    assert_eq!(rooks.name, "Rooks");
    assert_eq!(rooks.average_rating(), 2000.0);
    assert_eq!(rooks.player_on(2), Some(&"Bert".to_string()));
    assert_eq!(rooks.player_on(0), None);

    let dave = roster.player("Dave").unwrap();
    assert_eq!(dave.team_id, 2);
    assert_eq!(dave.board, 2);
    assert!(dave.colors.is_empty());
}

#[test]
fn test_lineup_in_board_order() {
    let roster = Roster::build(two_teams()).unwrap();
    let names: Vec<_> = roster.lineup(2).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cleo", "Dave"]);
    assert!(roster.lineup(99).is_empty());
}

#[test]
fn test_empty_roster_rejected() {
    assert!(matches!(
        Roster::build(Vec::new()),
        Err(TournamentError::EmptyRoster)
    ));
}

#[test]
fn test_inconsistent_team_size_rejected() {
    let mut entries = two_teams();
    entries.push(TeamEntry::new(3, "Pawns", &[("Eve", 1500)]));

    match Roster::build(entries) {
        Err(TournamentError::InconsistentTeamSize {
            team,
            expected,
            found,
        }) => {
            assert_eq!(team, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected team size error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_identities_rejected() {
    let mut entries = two_teams();
    entries.push(TeamEntry::new(1, "Again", &[("Fay", 1500), ("Gus", 1400)]));
    assert!(matches!(
        Roster::build(entries),
        Err(TournamentError::DuplicateTeam(1))
    ));

    let mut entries = two_teams();
    entries.push(TeamEntry::new(3, "Copycats", &[("Anna", 1500), ("Gus", 1400)]));
    assert!(matches!(
        Roster::build(entries),
        Err(TournamentError::DuplicatePlayer(name)) if name == "Anna"
    ));
}

#[test]
fn test_missing_names_rejected() {
    let entries = vec![TeamEntry::new(1, "  ", &[("Anna", 2100)])];
    assert!(matches!(
        Roster::build(entries),
        Err(TournamentError::MissingField(_))
    ));

    let entries = vec![TeamEntry::new(1, "Rooks", &[("", 2100)])];
    assert!(matches!(
        Roster::build(entries),
        Err(TournamentError::MissingField(_))
    ));
}

#[test]
fn test_color_balance() {
    let mut player = Player::new("Anna", 2100, 1, 1);
    assert_eq!(player.color_balance(), 0);
    player.colors = vec![Color::White, Color::White, Color::Black];
    assert_eq!(player.color_balance(), 1);
}

#[test]
fn test_totals_from_history() {
    let mut roster = Roster::build(two_teams()).unwrap();
    let team = roster.team_mut(1).unwrap();
    team.history.push(RoundRecord {
        opponent: 2,
        scored: 1.5,
        conceded: 0.5,
    });
    team.history.push(RoundRecord {
        opponent: 3,
        scored: 1.0,
        conceded: 1.0,
    });

    assert_eq!(team.totals_from_history(), (3.0, 2.5));
    assert!(team.has_played(3));
    assert_eq!(team.opponents().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(team.round(2).map(|r| r.opponent), Some(3));
}

use super::*;

#[test]
fn test_color_symbols() {
    assert_eq!(Color::White.symbol(), 'W');
    assert_eq!(Color::from_symbol(" B "), Some(Color::Black));
    assert_eq!(Color::from_symbol("x"), None);
    assert_eq!(Color::White.other(), Color::Black);
}

#[test]
fn test_game_score_parsing() {
    assert_eq!(GameScore::parse("1"), Some(GameScore::WhiteWin));
    assert_eq!(GameScore::parse("1.0"), Some(GameScore::WhiteWin));
    assert_eq!(GameScore::parse("0.5"), Some(GameScore::Draw));
    assert_eq!(GameScore::parse("1/2"), Some(GameScore::Draw));
    assert_eq!(GameScore::parse("0"), Some(GameScore::BlackWin));
    assert_eq!(GameScore::parse("0-1"), Some(GameScore::BlackWin));
    assert_eq!(GameScore::parse("0.7"), None);
    assert_eq!(GameScore::parse("2"), None);
    assert_eq!(GameScore::parse(""), None);
}

#[test]
fn test_board_points_sum_to_one() {
    for score in [GameScore::WhiteWin, GameScore::Draw, GameScore::BlackWin] {
        assert_eq!(score.white_points() + score.black_points(), 1.0);
        assert_eq!(score.points_for(Color::Black), score.black_points());
    }
}

#[test]
fn test_match_outcome_points() {
    assert_eq!(MatchOutcome::from_scores(1.5, 0.5), MatchOutcome::Win);
    assert_eq!(MatchOutcome::from_scores(1.0, 1.0), MatchOutcome::Draw);
    assert_eq!(MatchOutcome::from_scores(0.0, 2.0), MatchOutcome::Loss);
    assert_eq!(MatchOutcome::Win.match_points(), 2.0);
    assert_eq!(MatchOutcome::Draw.match_points(), 1.0);
    assert_eq!(MatchOutcome::Loss.match_points(), 0.0);
}

//! Property tests for the scoring and pairing invariants
//!
//! Random tournaments are played round after round through the public API:
//! - Match points are conserved (2 per match)
//! - Game points equal the reported board scores
//! - Buchholz never drifts from a fresh recomputation
//! - Repeat pairings only happen when no fresh opponent is left
//! - Colors follow the balance-then-rating rule

use proptest::prelude::*;
use std::collections::HashSet;
use swiss_core::{
    assign_colors, rank_teams, BoardReport, Color, MatchReport, Player, RoundPairings, TeamEntry,
    TeamId, Tournament,
};

fn entries(pairs: usize, boards: usize, ratings: &[u32]) -> Vec<TeamEntry> {
    (0..pairs * 2)
        .map(|t| {
            let players = (0..boards)
                .map(|b| swiss_core::PlayerEntry {
                    name: format!("T{}B{}", t + 1, b + 1),
                    rating: ratings[(t * boards + b) % ratings.len()],
                })
                .collect();
            TeamEntry {
                id: t as TeamId + 1,
                name: format!("Team {}", t + 1),
                players,
            }
        })
        .collect()
}

/// Turn pairings into a results sheet; each code picks one board outcome
fn fill(pairings: &RoundPairings, codes: &mut impl Iterator<Item = u8>) -> (Vec<MatchReport>, f64) {
    let mut reported = 0.0;
    let reports = pairings
        .matches
        .iter()
        .map(|m| MatchReport {
            team1: m.team1,
            team2: m.team2,
            boards: m
                .boards
                .iter()
                .map(|b| match codes.next().unwrap_or(0) {
                    0 => BoardReport::unplayed(b.board),
                    code => {
                        reported += 1.0;
                        let points = f64::from(code - 1) / 2.0;
                        BoardReport::played(b.board, &b.white, points)
                    }
                })
                .collect(),
        })
        .collect();
    (reports, reported)
}

/// A repeat pairing is only allowed when team1 has met every lower-ranked
/// team that was still free at that point.
fn check_repeats(t: &Tournament, pairings: &RoundPairings) {
    let ranked: Vec<TeamId> = rank_teams(t.roster()).iter().map(|team| team.id).collect();
    let mut paired: HashSet<TeamId> = HashSet::new();

    for m in &pairings.matches {
        let team1 = t.roster().team(m.team1).unwrap();
        let position = ranked.iter().position(|id| *id == m.team1).unwrap();
        let free_below: Vec<TeamId> = ranked[position + 1..]
            .iter()
            .copied()
            .filter(|id| !paired.contains(id))
            .collect();

        assert_eq!(m.repeat, team1.has_played(m.team2));
        if m.repeat {
            assert!(free_below.iter().all(|id| team1.has_played(*id)));
        } else {
            assert_eq!(Some(&m.team2), free_below.iter().find(|id| !team1.has_played(**id)));
        }
        paired.insert(m.team1);
        paired.insert(m.team2);
    }
}

proptest! {
    #[test]
    fn tournament_invariants_hold(
        pairs in 1usize..=4,
        boards in 1usize..=4,
        rounds in 1usize..=6,
        ratings in prop::collection::vec(1000u32..2800, 1..8),
        codes in prop::collection::vec(0u8..4, 100),
    ) {
        let mut t = Tournament::new(entries(pairs, boards, &ratings)).unwrap();
        let mut codes = codes.into_iter();
        let mut reported_total = 0.0;

        for round in 1..=rounds {
            let pairings = t.pair_next_round();
            prop_assert!(pairings.is_complete());
            prop_assert_eq!(pairings.matches.len(), pairs);
            check_repeats(&t, &pairings);

            let (reports, reported) = fill(&pairings, &mut codes);
            reported_total += reported;
            t.apply_round_results(round, &reports).unwrap();

            let roster = t.roster();
            let total_mp: f64 = roster.teams().map(|team| team.match_points).sum();
            prop_assert_eq!(total_mp, 2.0 * (pairs * round) as f64);

            let total_gp: f64 = roster.teams().map(|team| team.game_points).sum();
            prop_assert_eq!(total_gp, reported_total);

            for team in roster.teams() {
                prop_assert_eq!(team.rounds_played(), round);
                let fresh: f64 = team
                    .opponents()
                    .map(|id| roster.team(id).unwrap().match_points)
                    .sum();
                prop_assert_eq!(team.buchholz, fresh);

                let own: f64 = team.history.iter().map(|r| r.scored).sum();
                prop_assert_eq!(team.game_points, own);
                for record in &team.history {
                    prop_assert!(record.scored + record.conceded <= boards as f64);
                }
                for name in &team.boards {
                    prop_assert!(roster.player(name).unwrap().colors.len() <= round);
                }
            }
        }

        // Saved state reproduces the same tournament
        let mut restored = Tournament::new(entries(pairs, boards, &ratings)).unwrap();
        restored.restore(t.snapshot()).unwrap();
        prop_assert_eq!(restored.standings(), t.standings());
        prop_assert_eq!(restored.pair_next_round(), t.pair_next_round());
    }

    #[test]
    fn colors_follow_balance_then_rating(
        history_a in prop::collection::vec(any::<bool>(), 0..6),
        history_b in prop::collection::vec(any::<bool>(), 0..6),
        rating_a in 1000u32..2800,
        rating_b in 1000u32..2800,
    ) {
        let to_colors = |h: &[bool]| -> Vec<Color> {
            h.iter().map(|w| if *w { Color::White } else { Color::Black }).collect()
        };
        let mut a = Player::new("a", rating_a, 1, 1);
        a.colors = to_colors(&history_a);
        let mut b = Player::new("b", rating_b, 2, 1);
        b.colors = to_colors(&history_b);

        let (white, black) = assign_colors(&a, &b);
        prop_assert_ne!(&white.name, &black.name);

        if a.color_balance() != b.color_balance() {
            prop_assert!(white.color_balance() < black.color_balance());
        } else if rating_a != rating_b {
            prop_assert!(white.rating > black.rating);
        } else {
            prop_assert_eq!(&white.name, "a");
        }
    }
}

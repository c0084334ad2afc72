//! Plain-text reports printed after each run

use std::path::Path;
use swiss_core::{RestoreReport, Roster, RoundPairings, RoundSummary, StandingRow, TeamId};

use crate::error::SkippedRow;

/// Every team with its fixed board order
pub fn format_rosters(roster: &Roster) -> String {
    let mut report = String::new();
    report.push_str("=== Team Rosters ===\n");

    for team in roster.teams() {
        report.push_str(&format!(
            "\n{} (ID {}, avg {:.1})\n",
            team.name,
            team.id,
            team.average_rating()
        ));
        for player in roster.lineup(team.id) {
            report.push_str(&format!(
                "  Bd {:<3} {:<24} {:>5}\n",
                player.board, player.name, player.rating
            ));
        }
    }

    report
}

pub fn format_standings(rows: &[StandingRow], round: usize) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Standings after round {} ===\n\n", round));
    report.push_str(&format!(
        "{:>4}  {:<24} {:>5} {:>5} {:>6} {:>8}\n",
        "Rank", "Team", "MP", "GP", "Buch", "Avg"
    ));
    report.push_str(&"-".repeat(58));
    report.push('\n');

    for row in rows {
        report.push_str(&format!(
            "{:>4}  {:<24} {:>5.1} {:>5.1} {:>6.1} {:>8.1}\n",
            row.rank,
            row.team_name,
            row.match_points,
            row.game_points,
            row.buchholz,
            row.average_rating
        ));
    }

    report
}

pub fn format_pairings(pairings: &RoundPairings) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Round {} Pairings ===\n", pairings.round));

    for m in &pairings.matches {
        report.push_str(&format!(
            "\nMatch {}: {} vs {}{}\n",
            m.number,
            m.team1_name,
            m.team2_name,
            if m.repeat { "  (repeat)" } else { "" }
        ));
        report.push_str(&format!(
            "  {:>3}  {:<24} {:>5}   {:<24} {:>5}\n",
            "Bd", "White", "Rtg", "Black", "Rtg"
        ));
        for board in &m.boards {
            report.push_str(&format!(
                "  {:>3}  {:<24} {:>5}   {:<24} {:>5}\n",
                board.board, board.white, board.white_rating, board.black, board.black_rating
            ));
        }
    }

    if !pairings.unpaired.is_empty() {
        let ids: Vec<String> = pairings.unpaired.iter().map(|t| t.to_string()).collect();
        report.push_str(&format!("\nWithout opponent: {}\n", ids.join(", ")));
    }

    report
}

/// What the last ingestion did, including every skipped result
pub fn format_round_summary(summary: &RoundSummary) -> String {
    let mut report = format!(
        "Round {}: {} matches, {} boards recorded, {} unplayed\n",
        summary.round, summary.matches_recorded, summary.boards_recorded, summary.boards_unplayed
    );
    for warning in &summary.warnings {
        report.push_str(&format!("  warning: {}\n", warning));
    }
    report
}

/// Matches of a round still being played; the round is recorded once every
/// one of them has a result.
pub fn format_waiting(roster: &Roster, round: usize, waiting: &[(TeamId, TeamId)]) -> String {
    let name = |id: TeamId| {
        roster
            .team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("team {}", id))
    };
    let mut report = format!("Round {} is waiting for results of:\n", round);
    for (team1, team2) in waiting {
        report.push_str(&format!("  {} vs {}\n", name(*team1), name(*team2)));
    }
    report
}

pub fn format_restore(restored: &RestoreReport) -> String {
    let mut report = format!("Resumed after round {}\n", restored.rounds);
    for warning in &restored.warnings {
        report.push_str(&format!("  warning: {}\n", warning));
    }
    report
}

pub fn format_skipped(rows: &[SkippedRow]) -> String {
    let mut report = String::new();
    if rows.is_empty() {
        return report;
    }
    report.push_str(&format!("Ignored {} row(s):\n", rows.len()));
    for row in rows {
        report.push_str(&format!("  {}\n", row));
    }
    report
}

pub fn next_steps(sheet: &Path, round: usize) -> String {
    let mut report = String::new();
    report.push_str("=== Next Steps ===\n");
    report.push_str(&format!("1. Play round {}.\n", round));
    report.push_str(&format!(
        "2. Enter the results in {} (Board_k_Result: 1, 0.5 or 0 for white).\n",
        sheet.display()
    ));
    report.push_str("3. Run this command again to record them and pair the next round.\n");
    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

//! Basic value types shared by every part of the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team identifier as written in the roster
pub type TeamId = u32;

/// Players are identified by their (unique) name
pub type PlayerName = String;

/// Board number within a team, starting at 1
pub type BoardNumber = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-letter form used in snapshots ('W' / 'B')
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    pub fn from_symbol(s: &str) -> Option<Color> {
        match s.trim() {
            "W" | "w" | "White" | "white" => Some(Color::White),
            "B" | "b" | "Black" | "black" => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of a single board, from white's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameScore {
    WhiteWin,
    Draw,
    BlackWin,
}

impl GameScore {
    /// Map a fractional score for white onto a result. Only 0, 0.5 and 1 are valid.
    pub fn from_white_points(points: f64) -> Option<GameScore> {
        if points == 1.0 {
            Some(GameScore::WhiteWin)
        } else if points == 0.5 {
            Some(GameScore::Draw)
        } else if points == 0.0 {
            Some(GameScore::BlackWin)
        } else {
            None
        }
    }

    /// Parse the notations an arbiter is likely to type into a result cell.
    pub fn parse(s: &str) -> Option<GameScore> {
        match s.trim() {
            "1-0" => Some(GameScore::WhiteWin),
            "0-1" => Some(GameScore::BlackWin),
            "1/2" | "½" | "1/2-1/2" | "=" => Some(GameScore::Draw),
            other => other
                .parse::<f64>()
                .ok()
                .and_then(GameScore::from_white_points),
        }
    }

    pub fn white_points(self) -> f64 {
        match self {
            GameScore::WhiteWin => 1.0,
            GameScore::Draw => 0.5,
            GameScore::BlackWin => 0.0,
        }
    }

    pub fn black_points(self) -> f64 {
        1.0 - self.white_points()
    }

    pub fn points_for(self, color: Color) -> f64 {
        match color {
            Color::White => self.white_points(),
            Color::Black => self.black_points(),
        }
    }
}

/// Team result of one round, worth 2/1/0 match points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_scores(scored: f64, conceded: f64) -> MatchOutcome {
        if scored > conceded {
            MatchOutcome::Win
        } else if scored < conceded {
            MatchOutcome::Loss
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn match_points(self) -> f64 {
        match self {
            MatchOutcome::Win => 2.0,
            MatchOutcome::Draw => 1.0,
            MatchOutcome::Loss => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

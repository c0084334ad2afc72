//! Board color allocation

use crate::roster::Player;

/// Decide who plays white between two board opponents.
///
/// The player with the lower color balance (whites minus blacks) gets white.
/// On equal balance the higher-rated player gets white, and on equal ratings
/// the first argument does. Only each player's own history is consulted and
/// nothing is carried over between rounds.
///
/// Returns `(white, black)`.
pub fn assign_colors<'a>(a: &'a Player, b: &'a Player) -> (&'a Player, &'a Player) {
    let (balance_a, balance_b) = (a.color_balance(), b.color_balance());

    if balance_a < balance_b {
        (a, b)
    } else if balance_b < balance_a {
        (b, a)
    } else if b.rating > a.rating {
        (b, a)
    } else {
        (a, b)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod colors_tests;

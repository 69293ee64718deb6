//! Utility of a board for a player, as consumed by adversarial search.

use crate::{Board, Player};

/// Score of a board the player has won.
pub const WIN_SCORE: i32 = 1000;
/// Score of a board the opponent has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Scores `board` from the perspective of `player`.
///
/// Only terminal positions are ranked: a win is [`WIN_SCORE`], a loss is
/// [`LOSS_SCORE`] and everything else, including draws, is `0`. The strength
/// of a search using this function therefore comes from its depth alone.
#[must_use]
pub fn score<const W: usize, const H: usize>(board: &Board<W, H>, player: Player) -> i32 {
    if board.is_win(player) {
        WIN_SCORE
    } else if board.is_win(player.opponent()) {
        LOSS_SCORE
    } else {
        0
    }
}

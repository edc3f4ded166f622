//! Win condition checking
//!
//! A player wins by occupying the opponent's camp with every one of their
//! pieces. There are no captures, so piece counts never change.

use crate::board::{Board, Camp, Player};

/// True iff every piece of `player` sits inside the opponent's camp.
pub fn check_victory(board: &Board, camp: &Camp, player: Player) -> bool {
    let target = Some(player.opponent());
    board.pieces(player).all(|pos| camp.get(pos) == target)
}

/// Winner of the position, checking Player One first.
pub fn winner(board: &Board, camp: &Camp) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| check_victory(board, camp, player))
}

//! Camp-proximity heuristic for Halma board positions
//!
//! Each piece scores `1 / (D + 1)` where D is the Euclidean distance to the
//! nearest square of the opponent's camp, so a piece already inside scores
//! 1.0 and the score falls off smoothly with distance.

use crate::board::{Board, Camp, Player};

/// Positional score of a single square for `player`.
///
/// Returns 1.0 inside the opponent's camp, otherwise `1 / (D + 1)` for the
/// distance D to the closest opponent camp square.
#[must_use]
pub fn camp_distance_score(camp: &Camp, player: Player, row: i32, col: i32) -> f64 {
    let closest = camp
        .cells(player.opponent())
        .iter()
        .map(|target| {
            let dr = (row - target.row as i32) as f64;
            let dc = (col - target.col as i32) as f64;
            (dr * dr + dc * dc).sqrt()
        })
        .fold(f64::INFINITY, f64::min);

    if closest == 0.0 {
        return 1.0;
    }
    1.0 / (closest + 1.0)
}

/// Sum of `camp_distance_score` over every piece of `player`.
#[must_use]
pub fn player_score(board: &Board, camp: &Camp, player: Player) -> f64 {
    board
        .pieces(player)
        .map(|pos| camp_distance_score(camp, player, pos.row as i32, pos.col as i32))
        .sum()
}

/// Evaluate the board from the perspective of the given player.
///
/// Positive values favor `perspective`. Antisymmetric:
/// `evaluate(b, c, p) == -evaluate(b, c, p.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, camp: &Camp, perspective: Player) -> f64 {
    player_score(board, camp, perspective) - player_score(board, camp, perspective.opponent())
}

/// Player Two's score minus Player One's; positive favors the computer side.
#[must_use]
pub fn board_quality(board: &Board, camp: &Camp) -> f64 {
    evaluate(board, camp, Player::Two)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Move, Pos};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_score_inside_opponent_camp() {
        let camp = Camp::new(8);
        assert_eq!(camp_distance_score(&camp, Player::One, 7, 7), 1.0);
        assert_eq!(camp_distance_score(&camp, Player::Two, 0, 0), 1.0);
    }

    #[test]
    fn test_score_one_square_away() {
        let camp = Camp::new(8);
        // (2,7) is directly above Player Two's camp edge at (3,7)
        let score = camp_distance_score(&camp, Player::One, 2, 7);
        assert!((score - 0.5).abs() < EPS);
    }

    #[test]
    fn test_score_decreases_with_distance() {
        let camp = Camp::new(16);
        let near = camp_distance_score(&camp, Player::One, 8, 8);
        let far = camp_distance_score(&camp, Player::One, 2, 2);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn test_initial_scores_symmetric() {
        for size in [8, 10, 16] {
            let board = Board::new(size);
            let camp = Camp::new(size);
            let one = player_score(&board, &camp, Player::One);
            let two = player_score(&board, &camp, Player::Two);
            assert!((one - two).abs() < EPS);
            assert!(board_quality(&board, &camp).abs() < EPS);
        }
    }

    #[test]
    fn test_quality_antisymmetric() {
        let camp = Camp::new(8);
        let mut board = Board::new(8);
        board.apply_move(Move::new(Pos::new(0, 0), Pos::new(2, 2)));
        let quality = board_quality(&board, &camp);
        assert!(quality < 0.0, "Player One advanced, quality favors One");
        assert!((evaluate(&board, &camp, Player::One) + quality).abs() < EPS);
        assert!((evaluate(&board, &camp, Player::Two) - quality).abs() < EPS);
    }

    #[test]
    fn test_player_score_empty_side() {
        let board = Board::empty(8);
        let camp = Camp::new(8);
        assert_eq!(player_score(&board, &camp, Player::One), 0.0);

        let mut board = Board::empty(8);
        board.set(Pos::new(7, 7), Cell::Occupied(Player::One));
        assert_eq!(player_score(&board, &camp, Player::One), 1.0);
    }
}

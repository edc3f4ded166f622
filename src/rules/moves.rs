//! Move legality for Halma
//!
//! A turn is either a single step to an adjacent empty square or a chain of
//! one or more jumps. A jump hops over exactly one occupied square (friend or
//! foe) into the empty square directly behind it, orthogonally or diagonally.
//! Jumped pieces are never removed.

use std::collections::BTreeSet;

use crate::board::{Board, Camp, Move, Player, Pos};
use crate::eval::camp_distance_score;

/// Largest displacement component considered for a single hop
const MAX_REACH: i32 = 2;

/// True iff (dr, dc) moves to one of the 8 neighbouring squares.
#[inline]
pub fn is_single_step(dr: i32, dc: i32) -> bool {
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

/// True iff (dr, dc) is a straight or diagonal hop of length 2.
///
/// Knight-shaped displacements such as (2, 1) are not jumps.
#[inline]
pub fn is_jump_shape(dr: i32, dc: i32) -> bool {
    matches!((dr.abs(), dc.abs()), (2, 2) | (2, 0) | (0, 2))
}

/// Shrink a displacement component one square toward zero.
#[inline]
fn toward_zero(delta: i32) -> i32 {
    delta - delta.signum()
}

/// Check whether the piece on (row, col) may jump by (dr, dc).
///
/// Requires a jump shape, an on-board empty landing square, and an occupied
/// square halfway between origin and landing.
pub fn is_legal_jump(board: &Board, row: i32, col: i32, dr: i32, dc: i32) -> bool {
    if !is_jump_shape(dr, dc) || !board.in_bounds(row, col) {
        return false;
    }
    let from = Pos::new(row as u8, col as u8);
    let size = board.size();
    match (from.offset(dr, dc, size), from.offset(toward_zero(dr), toward_zero(dc), size)) {
        (Some(to), Some(over)) => board.is_empty(to) && !board.is_empty(over),
        _ => false,
    }
}

/// Check a single hop from (row, col).
///
/// `must_jump` is set while continuing a jump chain; in that state only jumps
/// are allowed.
pub fn is_legal_step(board: &Board, row: i32, col: i32, dr: i32, dc: i32, must_jump: bool) -> bool {
    if must_jump {
        return is_legal_jump(board, row, col, dr, dc);
    }
    if is_single_step(dr, dc) {
        return board.in_bounds(row, col)
            && Pos::new(row as u8, col as u8)
                .offset(dr, dc, board.size())
                .is_some_and(|to| board.is_empty(to));
    }
    is_legal_jump(board, row, col, dr, dc)
}

/// Every square the piece on `from` can reach in one turn.
///
/// Depth-first over hops: single steps end the turn, jumps may continue
/// from their landing square. A landing square already explored is never
/// expanded again, which keeps cyclic jump paths finite. The board is not
/// modified, so the result is a pure function of board and origin.
pub fn reachable_destinations(board: &Board, from: Pos) -> BTreeSet<Pos> {
    let mut destinations = BTreeSet::new();
    let mut explored = BTreeSet::new();
    explore(board, from, false, &mut explored, &mut destinations);
    destinations
}

fn explore(
    board: &Board,
    pos: Pos,
    must_jump: bool,
    explored: &mut BTreeSet<Pos>,
    destinations: &mut BTreeSet<Pos>,
) {
    explored.insert(pos);
    let (row, col) = (pos.row as i32, pos.col as i32);

    for dr in -MAX_REACH..=MAX_REACH {
        for dc in -MAX_REACH..=MAX_REACH {
            if !is_legal_step(board, row, col, dr, dc, must_jump) {
                continue;
            }
            let Some(to) = pos.offset(dr, dc, board.size()) else {
                continue;
            };
            destinations.insert(to);

            if is_jump_shape(dr, dc) && !explored.contains(&to) {
                explore(board, to, true, explored, destinations);
            }
        }
    }
}

/// Destinations offered to `player` for the piece on `from`: reachable
/// squares that strictly improve the piece's camp distance score.
///
/// Moves filtered out here stay legal; they are only not offered.
pub fn forward_destinations(board: &Board, camp: &Camp, from: Pos, player: Player) -> BTreeSet<Pos> {
    let current = camp_distance_score(camp, player, from.row as i32, from.col as i32);
    reachable_destinations(board, from)
        .into_iter()
        .filter(|to| camp_distance_score(camp, player, to.row as i32, to.col as i32) > current)
        .collect()
}

/// Every legal move for `player`, pieces in row-major order and
/// destinations ascending. The search relies on this order for tie-breaks.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.pieces(player) {
        moves.extend(
            reachable_destinations(board, from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Legality oracle for an explicit move request.
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    let size = board.size();
    if !Pos::is_valid(mv.from.row as i32, mv.from.col as i32, size)
        || !Pos::is_valid(mv.to.row as i32, mv.to.col as i32, size)
    {
        return false;
    }
    !board.is_empty(mv.from) && reachable_destinations(board, mv.from).contains(&mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    fn board_with(size: usize, pieces: &[(u8, u8, Player)]) -> Board {
        let mut board = Board::empty(size);
        for &(row, col, player) in pieces {
            board.set(p(row, col), Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_single_step_shape() {
        assert!(is_single_step(1, 1));
        assert!(is_single_step(-1, 0));
        assert!(is_single_step(0, 1));
        assert!(!is_single_step(0, 0));
        assert!(!is_single_step(2, 0));
    }

    #[test]
    fn test_jump_shape() {
        assert!(is_jump_shape(2, 2));
        assert!(is_jump_shape(-2, 0));
        assert!(is_jump_shape(0, 2));
        assert!(is_jump_shape(-2, 2));
        assert!(!is_jump_shape(2, 1));
        assert!(!is_jump_shape(1, 2));
        assert!(!is_jump_shape(1, 1));
        assert!(!is_jump_shape(0, 0));
    }

    #[test]
    fn test_legal_jump_needs_piece_in_between() {
        let board = board_with(8, &[(3, 3, Player::One), (3, 4, Player::Two)]);
        assert!(is_legal_jump(&board, 3, 3, 0, 2));
        // Nothing to hop over
        assert!(!is_legal_jump(&board, 3, 3, 2, 0));
        // Knight shape
        assert!(!is_legal_jump(&board, 3, 3, 1, 2));
    }

    #[test]
    fn test_legal_jump_needs_empty_landing() {
        let board = board_with(
            8,
            &[(3, 3, Player::One), (3, 4, Player::One), (3, 5, Player::Two)],
        );
        assert!(!is_legal_jump(&board, 3, 3, 0, 2));
    }

    #[test]
    fn test_legal_jump_off_board() {
        let board = board_with(8, &[(0, 1, Player::One), (0, 0, Player::One)]);
        assert!(!is_legal_jump(&board, 0, 1, 0, -2));
    }

    #[test]
    fn test_hops_stay_on_board_at_edges() {
        let board = board_with(8, &[(7, 6, Player::Two), (7, 7, Player::Two), (6, 7, Player::One)]);
        // Steps off the far corner
        assert!(!is_legal_step(&board, 7, 7, 1, 0, false));
        assert!(!is_legal_step(&board, 7, 7, 0, 1, false));
        assert!(!is_legal_step(&board, 0, 0, -1, -1, false));
        // Jump over a real piece whose landing square would be off the board
        assert!(!is_legal_jump(&board, 7, 6, 0, 2));
        assert!(!is_legal_jump(&board, 6, 7, 2, 0));
        // Origin itself off the board
        assert!(!is_legal_step(&board, -1, 0, 1, 0, false));
        assert!(!is_legal_jump(&board, 8, 8, -2, -2));

        let dests = reachable_destinations(&board, p(7, 7));
        assert!(dests.iter().all(|d| d.row < 8 && d.col < 8));
        assert!(dests.contains(&p(6, 6)));
    }

    #[test]
    fn test_must_jump_rejects_steps() {
        let board = board_with(8, &[(3, 3, Player::One)]);
        assert!(is_legal_step(&board, 3, 3, 1, 0, false));
        assert!(!is_legal_step(&board, 3, 3, 1, 0, true));
    }

    #[test]
    fn test_isolated_piece_has_eight_steps() {
        let board = board_with(8, &[(3, 3, Player::One)]);
        let dests = reachable_destinations(&board, p(3, 3));
        assert_eq!(dests.len(), 8);
        assert!(dests.iter().all(|d| {
            is_single_step(d.row as i32 - 3, d.col as i32 - 3)
        }));
    }

    #[test]
    fn test_single_step_does_not_chain() {
        // Corner piece walled in except for one diagonal
        let board = board_with(
            8,
            &[
                (0, 0, Player::One),
                (0, 1, Player::One),
                (1, 0, Player::One),
                (0, 2, Player::Two),
                (2, 0, Player::Two),
                (2, 2, Player::Two),
            ],
        );
        let dests = reachable_destinations(&board, p(0, 0));
        assert_eq!(dests, BTreeSet::from([p(1, 1)]));
    }

    #[test]
    fn test_jump_chain() {
        // (0,0) -> (2,2) over (1,1), then (2,2) -> (4,4) over (3,3)
        let board = board_with(
            8,
            &[(0, 0, Player::One), (1, 1, Player::Two), (3, 3, Player::Two)],
        );
        let dests = reachable_destinations(&board, p(0, 0));
        assert!(dests.contains(&p(2, 2)));
        assert!(dests.contains(&p(4, 4)));
        // Single steps from the landing square are not part of the turn
        assert!(!dests.contains(&p(5, 5)));
        assert!(!dests.contains(&p(2, 3)));
    }

    #[test]
    fn test_jump_chain_changes_direction() {
        let board = board_with(
            8,
            &[(0, 0, Player::One), (0, 1, Player::One), (1, 2, Player::Two)],
        );
        let dests = reachable_destinations(&board, p(0, 0));
        // (0,0) -> (0,2) over (0,1), then (0,2) -> (2,2) over (1,2)
        assert!(dests.contains(&p(0, 2)));
        assert!(dests.contains(&p(2, 2)));
    }

    #[test]
    fn test_jump_cycle_terminates() {
        // Ring of pieces around (3,3) lets a piece jump around in a loop
        let mut pieces = vec![(1, 1, Player::One)];
        for &(r, c) in &[(2, 2), (2, 4), (4, 2), (4, 4), (2, 3), (3, 2), (3, 4), (4, 3)] {
            pieces.push((r, c, Player::Two));
        }
        let board = board_with(8, &pieces);
        let dests = reachable_destinations(&board, p(1, 1));
        assert!(dests.contains(&p(3, 3)));
        assert!(dests.contains(&p(5, 5)));
        assert!(!dests.contains(&p(1, 1)));
    }

    #[test]
    fn test_reachable_is_idempotent() {
        let board = Board::new(8);
        for from in board.pieces(Player::One).collect::<Vec<_>>() {
            let first = reachable_destinations(&board, from);
            let second = reachable_destinations(&board, from);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_reachable_squares_are_empty() {
        let board = Board::new(10);
        for player in [Player::One, Player::Two] {
            for mv in legal_moves(&board, player) {
                assert!(board.is_empty(mv.to));
                assert_ne!(mv.from, mv.to);
            }
        }
    }

    #[test]
    fn test_opening_corner_jump() {
        let board = Board::new(8);
        // a1->c3 hops over (1,1) into the empty (2,2)
        let dests = reachable_destinations(&board, p(0, 0));
        assert!(dests.contains(&p(2, 2)));
        assert!(is_legal_move(&board, Move::new(p(0, 0), p(2, 2))));
    }

    #[test]
    fn test_is_legal_move_rejects_empty_origin() {
        let board = Board::new(8);
        assert!(!is_legal_move(&board, Move::new(p(4, 4), p(4, 5))));
    }

    #[test]
    fn test_legal_moves_order() {
        let board = Board::new(8);
        let moves = legal_moves(&board, Player::One);
        assert!(!moves.is_empty());
        assert!(moves
            .windows(2)
            .all(|w| (w[0].from, w[0].to) < (w[1].from, w[1].to)));
    }

    #[test]
    fn test_forward_destinations_filter() {
        let board = board_with(8, &[(3, 3, Player::One)]);
        let camp = Camp::new(8);
        let offered = forward_destinations(&board, &camp, p(3, 3), Player::One);
        // Toward Player Two's corner is offered, away from it is not
        assert!(offered.contains(&p(4, 4)));
        assert!(!offered.contains(&p(2, 2)));
        assert!(offered.len() < reachable_destinations(&board, p(3, 3)).len());
    }

    #[test]
    fn test_opening_front_corner_diagonal_offered() {
        let board = Board::new(8);
        let camp = Camp::new(8);
        let offered = forward_destinations(&board, &camp, p(3, 0), Player::One);
        assert!(offered.contains(&p(4, 1)));
        let offered = forward_destinations(&board, &camp, p(0, 3), Player::One);
        assert!(offered.contains(&p(1, 4)));
    }
}

//! Game state machine for Halma
//!
//! Owns the live board, the selection and highlight state, turn order, the
//! turn clock and the computer opponent. Presentation code talks to it only
//! through `select_piece`, `apply_move`, `submit_text`, `poll_clock` and the
//! `view` snapshot.
//!
//! Request methods never fail: a rejected request clears the selection and
//! records a notice for the user.

mod clock;
mod view;

pub use clock::TurnClock;
pub use view::{BoardView, EndReason, GameOutcome};

use std::collections::BTreeSet;
use std::time::Instant;

use crate::board::{Board, Camp, Move, Player, Pos};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::eval::player_score;
use crate::notation::parse_move;
use crate::rules::{forward_destinations, is_legal_move, legal_moves, winner};

/// Who plays Player Two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human is Player One, the computer answers as Player Two
    #[default]
    VsComputer,
    /// Two humans share the board
    Hotseat,
}

/// Side controlled by the computer in `GameMode::VsComputer`
pub const COMPUTER: Player = Player::Two;

/// Main game state
pub struct GameState {
    config: GameConfig,
    board: Board,
    camp: Camp,
    turn: Player,
    selected: Option<Pos>,
    highlighted: BTreeSet<Pos>,
    previous: Option<Pos>,
    player_one_score: f64,
    player_two_score: f64,
    turn_number: u32,
    outcome: Option<GameOutcome>,
    notice: Option<GameError>,
    clock: TurnClock,
    engine: AIEngine,
    last_ai_result: Option<MoveResult>,
}

impl GameState {
    /// New game from the standard starting position, Player One to move.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size());
        Self::from_position(config, board, Player::One)
    }

    /// Game starting from an arbitrary position.
    ///
    /// The computer does not move until a turn is swapped to it.
    pub fn from_position(config: GameConfig, board: Board, turn: Player) -> Self {
        let camp = Camp::new(board.size());
        let clock = TurnClock::new(config.timeout(), Instant::now());
        let engine = AIEngine::with_depth(config.ai_depth());
        let mut state = Self {
            config,
            board,
            camp,
            turn,
            selected: None,
            highlighted: BTreeSet::new(),
            previous: None,
            player_one_score: 0.0,
            player_two_score: 0.0,
            turn_number: 0,
            outcome: None,
            notice: None,
            clock,
            engine,
            last_ai_result: None,
        };
        state.refresh_scores();
        state
    }

    /// Start over with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn camp(&self) -> &Camp {
        &self.camp
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    #[inline]
    pub fn highlighted(&self) -> &BTreeSet<Pos> {
        &self.highlighted
    }

    #[inline]
    pub fn previous(&self) -> Option<Pos> {
        self.previous
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn notice(&self) -> Option<&GameError> {
        self.notice.as_ref()
    }

    #[inline]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[inline]
    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Scores of Player One and Player Two
    #[inline]
    pub fn scores(&self) -> (f64, f64) {
        (self.player_one_score, self.player_two_score)
    }

    /// Check if the side to move is played by the computer
    pub fn is_computer_turn(&self) -> bool {
        self.config.mode() == GameMode::VsComputer && self.turn == COMPUTER
    }

    /// Select the piece on (row, col) and highlight where it may go.
    ///
    /// Only destinations that strictly improve the piece's camp distance
    /// score are offered. Selecting anything but one of the mover's pieces
    /// clears the selection.
    pub fn select_piece(&mut self, row: i32, col: i32) {
        self.highlighted.clear();
        self.selected = None;

        if self.outcome.is_some() {
            self.reject(GameError::GameOver);
            return;
        }
        if !self.board.in_bounds(row, col) {
            self.reject(GameError::OutOfBounds { row, col });
            return;
        }

        let pos = Pos::new(row as u8, col as u8);
        if self.board.get(pos).owner() != Some(self.turn) {
            self.reject(GameError::InvalidSelection { pos });
            return;
        }

        self.selected = Some(pos);
        self.notice = None;
        self.highlighted = forward_destinations(&self.board, &self.camp, pos, self.turn);
        log::debug!("selected {} with {} destinations offered", pos, self.highlighted.len());
    }

    /// Click handler: move the selected piece to (row, col) if that square
    /// is highlighted, otherwise treat the click as a new selection.
    pub fn apply_move(&mut self, row: i32, col: i32) {
        if self.outcome.is_some() {
            self.reject(GameError::GameOver);
            return;
        }

        let target = self
            .board
            .in_bounds(row, col)
            .then(|| Pos::new(row as u8, col as u8));

        match (self.selected, target) {
            (Some(from), Some(to)) if self.highlighted.contains(&to) => {
                self.complete_move(Move::new(from, to));
            }
            _ => self.select_piece(row, col),
        }
    }

    /// Typed move request. Accepted when the move is legal, whether or not
    /// the destination would have been offered as a highlight.
    pub fn submit_move(&mut self, mv: Move) {
        self.select_piece(mv.from.row as i32, mv.from.col as i32);
        if self.selected != Some(mv.from) {
            return;
        }

        if is_legal_move(&self.board, mv) {
            self.complete_move(mv);
        } else {
            self.clear_selection();
            self.reject(GameError::IllegalMove { mv });
        }
    }

    /// Parse `"a1->c3"` style text and submit it. Malformed text leaves the
    /// board untouched.
    pub fn submit_text(&mut self, text: &str) {
        if self.outcome.is_some() {
            self.reject(GameError::GameOver);
            return;
        }
        match parse_move(text, self.board.size()) {
            Ok(mv) => self.submit_move(mv),
            Err(err) => {
                self.clear_selection();
                self.reject(err.into());
            }
        }
    }

    /// End the game in favour of the side not to move (turn clock expiry).
    pub fn force_end_turn(&mut self) {
        if self.outcome.is_none() {
            self.end_game(self.turn.opponent(), EndReason::Timeout);
        }
    }

    /// Check the turn clock; returns true if this call ended the game.
    pub fn poll_clock(&mut self, now: Instant) -> bool {
        if self.outcome.is_none() && self.clock.is_expired(now) {
            self.force_end_turn();
            return true;
        }
        false
    }

    /// Snapshot for the presentation layer
    pub fn view(&self) -> BoardView {
        BoardView {
            size: self.board.size(),
            cells: self.board.cells().to_vec(),
            selected: self.selected,
            highlighted: self.highlighted.clone(),
            previous: self.previous,
            player_one_score: self.player_one_score,
            player_two_score: self.player_two_score,
            turn: self.turn,
            turn_number: self.turn_number,
            outcome: self.outcome,
            notice: self.notice.as_ref().map(ToString::to_string),
            time_remaining: self.clock.remaining(Instant::now()),
        }
    }

    /// Execute a move (for both human and computer)
    fn complete_move(&mut self, mv: Move) {
        debug_assert_eq!(self.board.get(mv.from).owner(), Some(self.turn));

        self.board.apply_move(mv);
        self.previous = Some(mv.from);
        self.clear_selection();
        self.notice = None;
        self.refresh_scores();

        log::info!(
            "player {} played {} (scores {:.2} / {:.2})",
            self.turn.number(),
            mv,
            self.player_one_score,
            self.player_two_score
        );

        if let Some(player) = winner(&self.board, &self.camp) {
            self.end_game(player, EndReason::Victory);
            return;
        }

        self.swap_turns();
    }

    fn swap_turns(&mut self) {
        self.turn = self.turn.opponent();
        self.clear_selection();
        self.clock.reset(Instant::now());
        self.turn_number += 1;

        if legal_moves(&self.board, self.turn).is_empty() {
            self.end_game(self.turn.opponent(), EndReason::NoLegalMoves);
            return;
        }

        if self.is_computer_turn() {
            self.play_computer_turn();
        }
    }

    fn play_computer_turn(&mut self) {
        let result = self.engine.get_move_with_stats(&self.board, &self.camp, self.turn);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(mv) => self.complete_move(mv),
            None => self.end_game(self.turn.opponent(), EndReason::NoLegalMoves),
        }
    }

    fn end_game(&mut self, winner: Player, reason: EndReason) {
        self.clear_selection();
        self.outcome = Some(GameOutcome { winner, reason });
        log::info!("player {} wins ({:?})", winner.number(), reason);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    fn reject(&mut self, err: GameError) {
        log::warn!("{}", err);
        self.notice = Some(err);
    }

    fn refresh_scores(&mut self) {
        self.player_one_score = player_score(&self.board, &self.camp, Player::One);
        self.player_two_score = player_score(&self.board, &self.camp, Player::Two);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::PieceColor;
    use std::time::Duration;

    fn hotseat(size: usize) -> GameState {
        let config = GameConfig::new(size, 30, PieceColor::Green, 2, GameMode::Hotseat).unwrap();
        GameState::new(config)
    }

    fn vs_computer(size: usize, depth: u8) -> GameState {
        let config = GameConfig::new(size, 30, PieceColor::Green, depth, GameMode::VsComputer).unwrap();
        GameState::new(config)
    }

    fn total_pieces(board: &Board) -> usize {
        board.piece_count(Player::One) + board.piece_count(Player::Two)
    }

    #[test]
    fn test_new_game() {
        let game = hotseat(8);
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.selected(), None);
        assert!(game.highlighted().is_empty());
        assert_eq!(game.outcome(), None);
        let (one, two) = game.scores();
        assert!(one > 0.0 && (one - two).abs() < 1e-9);
    }

    #[test]
    fn test_select_own_piece_offers_diagonal() {
        let mut game = hotseat(8);
        game.select_piece(3, 0);
        assert_eq!(game.selected(), Some(Pos::new(3, 0)));
        assert!(game.highlighted().contains(&Pos::new(4, 1)));
        assert!(game.notice().is_none());
    }

    #[test]
    fn test_select_opponent_piece_rejected() {
        let mut game = hotseat(8);
        game.select_piece(7, 7);
        assert_eq!(game.selected(), None);
        assert!(game.highlighted().is_empty());
        assert_eq!(
            game.notice(),
            Some(&GameError::InvalidSelection { pos: Pos::new(7, 7) })
        );
    }

    #[test]
    fn test_select_out_of_bounds_rejected() {
        let mut game = hotseat(8);
        game.select_piece(3, 0);
        game.select_piece(-1, 9);
        assert_eq!(game.selected(), None);
        assert_eq!(game.notice(), Some(&GameError::OutOfBounds { row: -1, col: 9 }));
    }

    #[test]
    fn test_apply_highlighted_move() {
        let mut game = hotseat(8);
        let before = total_pieces(game.board());
        game.select_piece(3, 0);
        game.apply_move(4, 1);

        assert!(game.board().is_empty(Pos::new(3, 0)));
        assert_eq!(game.board().get(Pos::new(4, 1)), Cell::Occupied(Player::One));
        assert_eq!(game.previous(), Some(Pos::new(3, 0)));
        assert_eq!(game.selected(), None);
        assert!(game.highlighted().is_empty());
        assert_eq!(game.turn(), Player::Two);
        assert_eq!(game.turn_number(), 1);
        assert_eq!(total_pieces(game.board()), before);
        let (one, two) = game.scores();
        assert!(one > two);
    }

    #[test]
    fn test_click_on_unhighlighted_square_reselects() {
        let mut game = hotseat(8);
        game.select_piece(3, 0);
        // Another own piece: selection moves to it instead
        game.apply_move(2, 1);
        assert_eq!(game.selected(), Some(Pos::new(2, 1)));
        assert_eq!(game.turn(), Player::One);

        // Empty, unhighlighted square: selection cleared
        game.apply_move(6, 0);
        assert_eq!(game.selected(), None);
        assert_eq!(game.turn(), Player::One);
        assert!(game.notice().is_some());
    }

    #[test]
    fn test_apply_without_selection() {
        let mut game = hotseat(8);
        let before = game.board().clone();
        game.apply_move(4, 1);
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn test_text_jump_keeps_jumped_piece() {
        let mut game = hotseat(8);
        game.submit_text("a1->c3");

        assert!(game.board().is_empty(Pos::new(0, 0)));
        assert_eq!(game.board().get(Pos::new(1, 1)), Cell::Occupied(Player::One));
        assert_eq!(game.board().get(Pos::new(2, 2)), Cell::Occupied(Player::One));
        assert_eq!(game.turn(), Player::Two);
    }

    #[test]
    fn test_malformed_text_leaves_board() {
        let mut game = hotseat(8);
        let before = game.board().clone();
        game.select_piece(3, 0);

        for text in ["zz->a1", "", "a1c3", "a1->", "q1->a1"] {
            game.submit_text(text);
            assert_eq!(game.board(), &before);
            assert_eq!(game.selected(), None);
            assert!(matches!(game.notice(), Some(GameError::MalformedCoordinate(_))));
        }
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn test_text_illegal_move_rejected() {
        let mut game = hotseat(8);
        let before = game.board().clone();
        game.submit_text("a4->a6");
        assert_eq!(game.board(), &before);
        assert_eq!(game.selected(), None);
        assert!(matches!(game.notice(), Some(GameError::IllegalMove { .. })));
    }

    #[test]
    fn test_text_from_opponent_piece_rejected() {
        let mut game = hotseat(8);
        game.submit_text("h8->g7");
        assert!(matches!(game.notice(), Some(GameError::InvalidSelection { .. })));
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn test_text_accepts_legal_backward_move() {
        // Not offered as a highlight, but still a legal move when typed
        let mut board = Board::empty(8);
        board.set(Pos::new(4, 4), Cell::Occupied(Player::One));
        board.set(Pos::new(7, 0), Cell::Occupied(Player::Two));
        let config = GameConfig::new(8, 30, PieceColor::Green, 2, GameMode::Hotseat).unwrap();
        let mut game = GameState::from_position(config, board, Player::One);

        game.select_piece(4, 4);
        assert!(!game.highlighted().contains(&Pos::new(3, 3)));

        game.submit_text("e5->d4");
        assert_eq!(game.board().get(Pos::new(3, 3)), Cell::Occupied(Player::One));
        assert_eq!(game.turn(), Player::Two);
    }

    #[test]
    fn test_victory_ends_game() {
        let camp = Camp::new(8);
        let mut board = Board::empty(8);
        // Fill the back of Player Two's camp, leaving (5,5) free
        for &pos in camp.cells(Player::Two).iter().rev().take(9) {
            board.set(pos, Cell::Occupied(Player::One));
        }
        board.set(Pos::new(4, 4), Cell::Occupied(Player::One));
        board.set(Pos::new(1, 6), Cell::Occupied(Player::Two));
        let config = GameConfig::new(8, 30, PieceColor::Green, 2, GameMode::VsComputer).unwrap();
        let mut game = GameState::from_position(config, board, Player::One);

        game.select_piece(4, 4);
        assert!(game.highlighted().contains(&Pos::new(5, 5)));
        game.apply_move(5, 5);

        assert_eq!(
            game.outcome(),
            Some(GameOutcome { winner: Player::One, reason: EndReason::Victory })
        );
        // No swap after the winning move, the computer never ran
        assert_eq!(game.turn(), Player::One);
        assert!(game.last_ai_result().is_none());

        let before = game.board().clone();
        game.select_piece(5, 5);
        assert_eq!(game.notice(), Some(&GameError::GameOver));
        game.submit_text("a1->a2");
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_force_end_turn() {
        let mut game = hotseat(8);
        game.submit_text("a4->b5");
        assert_eq!(game.turn(), Player::Two);

        game.force_end_turn();
        assert_eq!(
            game.outcome(),
            Some(GameOutcome { winner: Player::One, reason: EndReason::Timeout })
        );
    }

    #[test]
    fn test_poll_clock_timeout() {
        let mut game = hotseat(8);
        let now = Instant::now();
        assert!(!game.poll_clock(now));
        assert!(game.outcome().is_none());

        assert!(game.poll_clock(now + Duration::from_secs(31)));
        assert_eq!(
            game.outcome(),
            Some(GameOutcome { winner: Player::Two, reason: EndReason::Timeout })
        );
        // Already over: nothing more happens
        assert!(!game.poll_clock(now + Duration::from_secs(62)));
    }

    #[test]
    fn test_clock_reset_once_per_swap() {
        let mut game = hotseat(8);
        assert_eq!(game.clock().resets(), 0);
        game.submit_text("a4->b5");
        assert_eq!(game.clock().resets(), 1);
        game.submit_text("h5->g4");
        assert_eq!(game.clock().resets(), 2);
        assert_eq!(game.turn_number(), 2);
        assert!(game.clock().remaining(Instant::now()) > Duration::from_secs(29));
    }

    #[test]
    fn test_computer_answers_immediately() {
        let mut game = vs_computer(8, 2);
        let before = game.board().clone();
        game.select_piece(3, 0);
        game.apply_move(4, 1);

        // Human move plus the computer's reply, back to the human
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.clock().resets(), 2);
        let reply = game.last_ai_result().and_then(|r| r.best_move).unwrap();
        assert_eq!(before.get(reply.from), Cell::Occupied(Player::Two));
        assert_eq!(game.board().get(reply.to), Cell::Occupied(Player::Two));
        assert_eq!(game.previous(), Some(reply.from));
        assert_eq!(total_pieces(game.board()), total_pieces(&before));
    }

    #[test]
    fn test_stalemated_side_loses() {
        // Player Two's only piece sits in the corner; jumping into (6,6)
        // leaves it without a step or a jump
        let mut board = Board::empty(8);
        board.set(Pos::new(7, 7), Cell::Occupied(Player::Two));
        for (r, c) in [(7, 6), (6, 7), (7, 5), (5, 7), (5, 5), (4, 4), (0, 0)] {
            board.set(Pos::new(r, c), Cell::Occupied(Player::One));
        }
        let config = GameConfig::new(8, 30, PieceColor::Green, 2, GameMode::VsComputer).unwrap();
        let mut game = GameState::from_position(config, board, Player::One);

        game.submit_text("e5->g7");
        assert_eq!(game.board().get(Pos::new(6, 6)), Cell::Occupied(Player::One));
        assert_eq!(
            game.outcome(),
            Some(GameOutcome { winner: Player::One, reason: EndReason::NoLegalMoves })
        );
    }

    #[test]
    fn test_view_snapshot() {
        let mut game = hotseat(10);
        game.select_piece(3, 0);
        let view = game.view();

        assert_eq!(view.size, 10);
        assert_eq!(view.cells.len(), 100);
        assert_eq!(view.selected, Some(Pos::new(3, 0)));
        assert!(view.is_highlighted(Pos::new(4, 1)));
        assert_eq!(view.cell(Pos::new(0, 0)), Cell::Occupied(Player::One));
        assert_eq!(view.turn, Player::One);
        assert!(view.notice.is_none());
        assert!(view.time_remaining <= Duration::from_secs(30));
    }

    #[test]
    fn test_reset() {
        let mut game = hotseat(8);
        game.submit_text("a4->b5");
        game.reset();
        assert_eq!(game.board(), &Board::new(8));
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.turn_number(), 0);
    }
}

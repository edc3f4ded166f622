//! Fixed-depth minimax search with alpha-beta pruning
//!
//! This module implements the search that picks the computer's move.
//! Scores are always from the perspective of the side that owns the search
//! root (the maximizing player); the side to move alternates each ply.
//!
//! # Features
//!
//! - Plain fail-soft alpha-beta, no transposition table
//! - Every node explores a private clone of the board
//! - Deterministic tie-break: the first best move in enumeration order wins
//!
//! # Example
//!
//! ```
//! use halma::board::{Board, Camp, Player};
//! use halma::search::Searcher;
//!
//! let board = Board::new(8);
//! let camp = Camp::new(8);
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.choose_move(&board, &camp, Player::Two, 2);
//! if let Some(mv) = result.best_move {
//!     println!("Best move: {:?} -> {:?}", mv.from, mv.to);
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Camp, Move, Player};
use crate::eval::evaluate;
use crate::rules::legal_moves;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` if the root side has no legal move
    pub best_move: Option<Move>,
    /// Minimax value of the root from the maximizing player's perspective
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Alpha-beta search engine.
///
/// Stateless between searches apart from the node counter of the last run.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search for the best move for `maximizing` to `depth` plies.
    ///
    /// Leaves are scored with `evaluate(board, camp, maximizing)`, which for
    /// Player Two is exactly `board_quality`. The live board is never
    /// modified.
    ///
    /// # Returns
    ///
    /// `SearchResult` with the move whose subtree produced the best value.
    /// Ties go to the move enumerated first (pieces row-major, then
    /// destinations ascending).
    #[must_use]
    pub fn choose_move(
        &mut self,
        board: &Board,
        camp: &Camp,
        maximizing: Player,
        depth: u8,
    ) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();

        let (score, best_move) = self.alpha_beta(board, camp, maximizing, maximizing, depth, -INF, INF);

        log::debug!(
            "alpha-beta depth {} for player {}: score {:.4}, {} nodes, {}ms",
            depth,
            maximizing.number(),
            score,
            self.nodes,
            start.elapsed().as_millis()
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Same recursion as `choose_move` without any pruning.
    ///
    /// Explores the full tree; used to confirm that pruning never changes
    /// the chosen move or its value.
    #[must_use]
    pub fn minimax(&mut self, board: &Board, camp: &Camp, maximizing: Player, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.full_width(board, camp, maximizing, maximizing, depth);
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive alpha-beta in max/min form.
    ///
    /// The maximizing side stops once its best value exceeds `beta`, the
    /// minimizing side once its best value falls below `alpha`.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        camp: &Camp,
        root: Player,
        to_move: Player,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        // Depth limit reached - evaluate position
        if depth == 0 {
            return (evaluate(board, camp, root), None);
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            return (evaluate(board, camp, root), None);
        }

        let maximizing = to_move == root;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv);

            let (score, _) =
                self.alpha_beta(&child, camp, root, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                if best_score > beta {
                    break;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                if best_score < alpha {
                    break;
                }
                beta = beta.min(best_score);
            }
        }

        (best_score, best_move)
    }

    fn full_width(
        &mut self,
        board: &Board,
        camp: &Camp,
        root: Player,
        to_move: Player,
        depth: u8,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            return (evaluate(board, camp, root), None);
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            return (evaluate(board, camp, root), None);
        }

        let maximizing = to_move == root;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let (score, _) = self.full_width(&child, camp, root, to_move.opponent(), depth - 1);

            let improves = if maximizing { score > best_score } else { score < best_score };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }
}

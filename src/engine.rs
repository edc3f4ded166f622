//! Main AI Engine wrapping the search
//!
//! The engine owns a `Searcher` and a configured depth, and reports each
//! decision together with search statistics.
//!
//! # Example
//!
//! ```
//! use halma::{AIEngine, Board, Camp, Player};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_depth(2);
//! let board = Board::new(8);
//! let camp = Camp::new(8);
//!
//! let result = engine.get_move_with_stats(&board, &camp, Player::Two);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Camp, Move, Player};
use crate::search::{SearchResult, Searcher, DEFAULT_DEPTH};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value from the moving side's perspective
    pub score: f64,
    /// Plies searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Computer opponent.
///
/// Runs a fixed-depth alpha-beta search on a private copy of the position.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine searching `DEFAULT_DEPTH` plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom search depth.
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Get the best move for `player`, or `None` if it has no legal move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, camp: &Camp, player: Player) -> Option<Move> {
        self.get_move_with_stats(board, camp, player).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, camp: &Camp, player: Player) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.choose_move(board, camp, player, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "engine chose {:?} for player {} (score {:.3}, {} nodes, {}ms)",
            result.best_move,
            player.number(),
            result.score,
            result.nodes,
            time_ms
        );

        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

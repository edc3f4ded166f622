//! Halma engine with a minimax computer opponent
//!
//! A two-player Halma implementation on an N x N board (N = 8, 10 or 16):
//! - 10 pieces per side in opposite corners
//! - A turn is one single step or a chain of jumps over occupied squares
//! - Jumped pieces are never captured
//! - A player wins by filling the opponent's camp with all of their pieces
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, camps and coordinates
//! - [`rules`]: Move legality, jump-chain discovery, win condition
//! - [`eval`]: Camp-proximity heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent integrating the search
//! - [`game`]: Turn-based state machine, turn clock, render snapshot
//! - [`notation`]: `"a1->c3"` move text
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use halma::{AIEngine, Board, Camp, Player};
//!
//! let mut board = Board::new(8);
//! let camp = Camp::new(8);
//! let mut engine = AIEngine::with_depth(2);
//!
//! // Computer plays Player Two
//! if let Some(mv) = engine.get_move(&board, &camp, Player::Two) {
//!     board.apply_move(mv);
//!     println!("AI plays {}", mv);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod notation;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Camp, Cell, Move, Player, Pos, FIRST_ROW_PAWN_COUNT};
pub use config::{GameConfig, PieceColor};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError, NotationError};
pub use game::{BoardView, EndReason, GameMode, GameOutcome, GameState};

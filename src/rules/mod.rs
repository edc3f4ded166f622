//! Game rules for Halma
//!
//! This module is the sole authority on legality:
//! - Single steps and jump shapes
//! - Multi-jump chain discovery (`reachable_destinations`)
//! - Win condition (full invasion of the opponent's camp)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{
    forward_destinations, is_jump_shape, is_legal_jump, is_legal_move, is_legal_step,
    is_single_step, legal_moves, reachable_destinations,
};
pub use win::{check_victory, winner};

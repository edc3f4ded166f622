//! Evaluation module for Halma positions
//!
//! Scores are positional only: every piece earns more the closer it stands
//! to the opponent's camp. Used for the score display and as the search's
//! leaf evaluation.

pub mod heuristic;

pub use heuristic::{board_quality, camp_distance_score, evaluate, player_score};

//! Search module for the Halma AI
//!
//! Contains the fixed-depth minimax search with alpha-beta pruning, plus an
//! unpruned reference search with identical move ordering.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_DEPTH};

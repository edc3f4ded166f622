//! Read-only snapshot handed to the presentation layer

use std::collections::BTreeSet;
use std::time::Duration;

use crate::board::{Cell, Player, Pos};

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every piece of the winner reached the opponent's camp
    Victory,
    /// The loser's turn clock ran out
    Timeout,
    /// The loser had no legal move
    NoLegalMoves,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Player,
    pub reason: EndReason,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub size: usize,
    /// Row-major cells
    pub cells: Vec<Cell>,
    pub selected: Option<Pos>,
    pub highlighted: BTreeSet<Pos>,
    /// Square vacated by the last move
    pub previous: Option<Pos>,
    pub player_one_score: f64,
    pub player_two_score: f64,
    pub turn: Player,
    pub turn_number: u32,
    pub outcome: Option<GameOutcome>,
    /// User-facing message for the last rejected request
    pub notice: Option<String>,
    pub time_remaining: Duration,
}

impl BoardView {
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize * self.size + pos.col as usize]
    }

    #[inline]
    pub fn is_highlighted(&self, pos: Pos) -> bool {
        self.highlighted.contains(&pos)
    }
}

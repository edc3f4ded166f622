//! Coordinate text protocol
//!
//! Squares are written as a column letter followed by a 1-based row number
//! (`a1` is row 0, column 0) and moves as `from->to`, e.g. `"a1->c3"`.

use std::fmt;

use crate::board::{Move, Pos};
use crate::error::NotationError;

/// Separator between the two squares of a move
pub const SEPARATOR: &str = "->";

/// Parse a square such as `"c3"` on an N x N board.
pub fn parse_pos(text: &str, size: usize) -> Result<Pos, NotationError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(NotationError::MissingCoordinate)?;
    if !letter.is_ascii_lowercase() {
        return Err(NotationError::InvalidColumn(letter));
    }
    let number = chars.as_str();
    let row: usize = number
        .parse()
        .map_err(|_| NotationError::InvalidRow(number.to_string()))?;

    let col = (letter as u8 - b'a') as usize;
    if row == 0 || row > size || col >= size {
        return Err(NotationError::OffBoard(text.to_string()));
    }
    Ok(Pos::new((row - 1) as u8, col as u8))
}

/// Parse a move such as `"a1->c3"`. Surrounding whitespace is ignored.
pub fn parse_move(text: &str, size: usize) -> Result<Move, NotationError> {
    let (from, to) = text
        .trim()
        .split_once(SEPARATOR)
        .ok_or(NotationError::MissingSeparator)?;
    Ok(Move::new(parse_pos(from, size)?, parse_pos(to, size)?))
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row as u32 + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, SEPARATOR, self.to)
    }
}

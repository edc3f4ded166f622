//! Board structure: an N x N grid of cells

use super::{Cell, Move, Player, Pos, FIRST_ROW_PAWN_COUNT};

/// Game board
///
/// Cloning is a deep copy; the search explores on clones and never touches
/// the live game's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cell storage (size * size)
    cells: Vec<Cell>,
}

impl Board {
    /// Standard starting position: triangular formations of
    /// `FIRST_ROW_PAWN_COUNT` ranks in opposite corners.
    pub fn new(size: usize) -> Self {
        let mut board = Self::empty(size);
        for row in 0..FIRST_ROW_PAWN_COUNT {
            for col in 0..FIRST_ROW_PAWN_COUNT - row {
                board.set(Pos::new(row as u8, col as u8), Cell::Occupied(Player::One));
                board.set(
                    Pos::new((size - 1 - row) as u8, (size - 1 - col) as u8),
                    Cell::Occupied(Player::Two),
                );
            }
        }
        board
    }

    /// Board with no pieces at all
    pub fn empty(size: usize) -> Self {
        debug_assert!(Self::is_valid_size(size));
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build an arbitrary position from row-major cells.
    ///
    /// Returns `None` if `cells` does not hold exactly `size * size` cells or
    /// `size` is outside the range `Board::empty` accepts (coordinates must
    /// fit in a `u8`).
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Self> {
        if !Self::is_valid_size(size) || cells.len() != size * size {
            return None;
        }
        Some(Self { size, cells })
    }

    #[inline]
    fn is_valid_size(size: usize) -> bool {
        size > FIRST_ROW_PAWN_COUNT && size <= u8::MAX as usize
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col, self.size)
    }

    /// Get cell at position. `pos` must be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Overwrite cell at position. `pos` must be on the board.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Move the piece on `mv.from` to `mv.to`. Nothing is captured.
    pub fn apply_move(&mut self, mv: Move) {
        let piece = self.get(mv.from);
        debug_assert!(!piece.is_empty() && self.is_empty(mv.to));
        self.set(mv.from, Cell::Empty);
        self.set(mv.to, piece);
    }

    /// Positions of every piece owned by `player`, row-major
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.owner() == Some(player))
            .map(move |(idx, _)| Pos::new((idx / size) as u8, (idx % size) as u8))
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.owner() == Some(player)).count()
    }

    /// Row-major view of every cell
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.size && (pos.col as usize) < self.size);
        pos.row as usize * self.size + pos.col as usize
    }
}

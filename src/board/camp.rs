//! Home camps: the fixed corner regions that define victory and anchor the
//! positional heuristic.

use super::{Player, Pos, FIRST_ROW_PAWN_COUNT};

/// Number of ranks in each camp, one more than the starting formation
pub const CAMP_RANKS: usize = FIRST_ROW_PAWN_COUNT + 1;

/// Immutable camp layout for an N x N board.
///
/// Player One's camp is the triangle in the top-left corner, Player Two's
/// the mirrored triangle in the bottom-right. Depends only on N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    size: usize,
    /// Row-major owner of every square (`None` outside both camps)
    owners: Vec<Option<Player>>,
    /// Row-major camp squares, cached for distance queries
    player_one: Vec<Pos>,
    player_two: Vec<Pos>,
}

impl Camp {
    pub fn new(size: usize) -> Self {
        let mut owners = vec![None; size * size];
        for row in 0..CAMP_RANKS.min(size) {
            for col in 0..(CAMP_RANKS - row).min(size) {
                owners[row * size + col] = Some(Player::One);
                owners[(size - 1 - row) * size + (size - 1 - col)] = Some(Player::Two);
            }
        }

        let collect = |player: Player| -> Vec<Pos> {
            owners
                .iter()
                .enumerate()
                .filter(|(_, owner)| **owner == Some(player))
                .map(|(idx, _)| Pos::new((idx / size) as u8, (idx % size) as u8))
                .collect()
        };
        let player_one = collect(Player::One);
        let player_two = collect(Player::Two);

        Self {
            size,
            owners,
            player_one,
            player_two,
        }
    }

    /// Which camp (if any) contains `pos`
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.owners[pos.row as usize * self.size + pos.col as usize]
    }

    /// Every square of `player`'s camp, row-major
    #[inline]
    pub fn cells(&self, player: Player) -> &[Pos] {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

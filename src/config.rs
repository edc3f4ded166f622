//! Startup configuration
//!
//! Validated once before a game is created; the engine core never sees an
//! unsupported board size or a zero timeout.

use std::time::Duration;

use crate::board::SUPPORTED_SIZES;
use crate::error::ConfigError;
use crate::game::GameMode;
use crate::search::DEFAULT_DEPTH;

/// Colour of the human's (Player One's) pieces. The computer plays black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PieceColor {
    #[default]
    Green,
    Red,
}

/// Validated game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    timeout: Duration,
    human_color: PieceColor,
    ai_depth: u8,
    mode: GameMode,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the board size is not 8, 10 or 16, the timeout is
    /// zero, or the search depth is zero.
    pub fn new(
        board_size: usize,
        timeout_secs: u64,
        human_color: PieceColor,
        ai_depth: u8,
        mode: GameMode,
    ) -> Result<Self, ConfigError> {
        if !SUPPORTED_SIZES.contains(&board_size) {
            return Err(ConfigError::UnsupportedBoardSize(board_size));
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if ai_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(Self {
            board_size,
            timeout: Duration::from_secs(timeout_secs),
            human_color,
            ai_depth,
            mode,
        })
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    pub fn human_color(&self) -> PieceColor {
        self.human_color
    }

    #[inline]
    pub fn ai_depth(&self) -> u8 {
        self.ai_depth
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            timeout: Duration::from_secs(30),
            human_color: PieceColor::default(),
            ai_depth: DEFAULT_DEPTH,
            mode: GameMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = GameConfig::new(16, 10, PieceColor::Red, 3, GameMode::Hotseat).unwrap();
        assert_eq!(config.board_size(), 16);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.human_color(), PieceColor::Red);
        assert_eq!(config.ai_depth(), 3);
        assert_eq!(config.mode(), GameMode::Hotseat);
    }

    #[test]
    fn test_rejects_board_size() {
        for size in [0, 7, 9, 12, 19] {
            let err = GameConfig::new(size, 10, PieceColor::Green, 4, GameMode::VsComputer).unwrap_err();
            assert_eq!(err, ConfigError::UnsupportedBoardSize(size));
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = GameConfig::new(8, 0, PieceColor::Green, 4, GameMode::VsComputer).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_rejects_zero_depth() {
        let err = GameConfig::new(8, 5, PieceColor::Green, 0, GameMode::VsComputer).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDepth);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size(), 8);
        assert_eq!(config.ai_depth(), 4);
        assert_eq!(config.mode(), GameMode::VsComputer);
    }
}

//! Theme constants for the Halma GUI

use egui::Color32;

use crate::config::PieceColor;

// Board squares - light and dark checkered tones
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(238, 226, 200);
pub const SQUARE_DARK: Color32 = Color32::from_rgb(205, 186, 150);
pub const CAMP_TINT: Color32 = Color32::from_rgba_premultiplied(40, 30, 10, 40);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(139, 90, 43);
pub const LABEL: Color32 = Color32::from_rgb(245, 232, 205);

// Pieces
pub const COMPUTER_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const COMPUTER_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const GREEN_PIECE: Color32 = Color32::from_rgb(40, 160, 80);
pub const RED_PIECE: Color32 = Color32::from_rgb(200, 50, 50);
pub const PIECE_RIM: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const SELECTED: Color32 = Color32::from_rgb(255, 200, 40);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(60, 210, 230);
pub const PREVIOUS: Color32 = Color32::from_rgb(140, 140, 145);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

/// Fill colour of the human's pieces
pub fn human_piece(color: PieceColor) -> Color32 {
    match color {
        PieceColor::Green => GREEN_PIECE,
        PieceColor::Red => RED_PIECE,
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.36;
pub const MARKER_WIDTH: f32 = 3.0;

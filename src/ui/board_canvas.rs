//! Board rendering for the Halma GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::{Camp, Cell, Player, Pos};
use crate::config::PieceColor;
use crate::game::BoardView;

use super::theme::*;

/// Draws a `BoardView` and turns clicks into board coordinates
pub struct BoardCanvas {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardCanvas {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardCanvas {
    /// Render the board and return the clicked (row, col), if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view: &BoardView,
        camp: &Camp,
        human_color: PieceColor,
    ) -> Option<(i32, i32)> {
        let available = ui.available_size();
        let side = (available.x.min(available.y) - 20.0).max(200.0);
        self.size = view.size;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / view.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_squares(&painter, camp);
        self.draw_coordinates(&painter);

        if let Some(pos) = view.previous {
            self.outline(&painter, pos, PREVIOUS);
        }
        for &pos in &view.highlighted {
            self.outline(&painter, pos, HIGHLIGHT);
        }
        if let Some(pos) = view.selected {
            self.outline(&painter, pos, SELECTED);
        }

        self.draw_pieces(&painter, view, human_color);

        if view.outcome.is_some() {
            return None;
        }

        let pointer = response.hover_pos()?;
        let (row, col) = self.screen_to_board(pointer)?;
        painter.rect_filled(self.square_rect(row, col), CornerRadius::ZERO, hover());

        response.clicked().then_some((row as i32, col as i32))
    }

    fn draw_squares(&self, painter: &Painter, camp: &Camp) {
        for row in 0..self.size {
            for col in 0..self.size {
                let rect = self.square_rect(row, col);
                let fill = if (row + col) % 2 == 0 { SQUARE_LIGHT } else { SQUARE_DARK };
                painter.rect_filled(rect, CornerRadius::ZERO, fill);

                if camp.get(Pos::new(row as u8, col as u8)).is_some() {
                    painter.rect_filled(rect, CornerRadius::ZERO, CAMP_TINT);
                }
            }
        }
    }

    /// Column letters along the top, row numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        let min = self.board_rect.min;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            let letter = ((b'a' + i as u8) as char).to_string();
            painter.text(
                Pos2::new(min.x + offset, min.y + BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                letter,
                font.clone(),
                LABEL,
            );
            painter.text(
                Pos2::new(min.x + BOARD_MARGIN * 0.5, min.y + offset),
                Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_pieces(&self, painter: &Painter, view: &BoardView, human_color: PieceColor) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        for row in 0..self.size {
            for col in 0..self.size {
                let Cell::Occupied(player) = view.cell(Pos::new(row as u8, col as u8)) else {
                    continue;
                };
                let center = self.square_rect(row, col).center();

                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                match player {
                    Player::One => {
                        painter.circle_filled(center, radius, human_piece(human_color));
                        painter.circle_stroke(center, radius, Stroke::new(1.5, PIECE_RIM));
                    }
                    Player::Two => {
                        painter.circle_filled(center, radius, COMPUTER_PIECE);
                        painter.circle_filled(
                            center + Vec2::new(-radius * 0.3, -radius * 0.3),
                            radius * 0.2,
                            COMPUTER_PIECE_HIGHLIGHT,
                        );
                    }
                }
            }
        }
    }

    fn outline(&self, painter: &Painter, pos: Pos, color: Color32) {
        let rect = self
            .square_rect(pos.row as usize, pos.col as usize)
            .shrink(MARKER_WIDTH * 0.5);
        painter.rect_stroke(
            rect,
            CornerRadius::same(2),
            Stroke::new(MARKER_WIDTH, color),
            StrokeKind::Inside,
        );
    }

    fn square_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + col as f32 * self.cell_size,
                BOARD_MARGIN + row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to (row, col)
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<(usize, usize)> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor();
        let row = (relative.y / self.cell_size).floor();
        let size = self.size as f32;

        (row >= 0.0 && row < size && col >= 0.0 && col < size).then(|| (row as usize, col as usize))
    }
}

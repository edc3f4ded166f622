//! Main application for the Halma GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Player;
use crate::config::{GameConfig, PieceColor};
use crate::game::{BoardView, EndReason, GameMode, GameOutcome, GameState};

use super::board_canvas::BoardCanvas;
use super::theme::*;

/// Main Halma application
pub struct HalmaApp {
    state: GameState,
    canvas: BoardCanvas,
    move_text: String,
    show_debug: bool,
}

impl HalmaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            canvas: BoardCanvas::default(),
            move_text: String::new(),
            show_debug: false,
        }
    }

    fn player_name(&self, player: Player) -> String {
        let color = match player {
            Player::One => match self.state.config().human_color() {
                PieceColor::Green => "Green",
                PieceColor::Red => "Red",
            },
            Player::Two => "Black",
        };
        match self.state.config().mode() {
            GameMode::VsComputer if player == Player::Two => format!("{color} (computer)"),
            _ => color.to_string(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.config().board_size();
                    let mode = match self.state.config().mode() {
                        GameMode::VsComputer => "vs Computer",
                        GameMode::Hotseat => "Hotseat",
                    };
                    ui.label(format!("{size}x{size} - {mode}"));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context, view: &BoardView) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("HALMA").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui, view);
                ui.add_space(10.0);
                self.render_timer_card(ui, view);
                ui.add_space(10.0);
                self.render_scores_card(ui, view);
                ui.add_space(10.0);
                self.render_move_entry(ui, view);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = view.outcome {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome, view);
                }

                if let Some(msg) = &view.notice {
                    ui.add_space(10.0);
                    render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui, view: &BoardView) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(self.player_name(view.turn))
                    .size(18.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );

            let status = if view.outcome.is_some() {
                ("Game over", WIN_HIGHLIGHT)
            } else if view.selected.is_some() {
                ("Pick a highlighted square", TIMER_NORMAL)
            } else {
                ("Select a piece", TIMER_NORMAL)
            };
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
            ui.label(
                RichText::new(format!("Turn #{}", view.turn_number))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui, view: &BoardView) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIME LEFT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let secs = view.time_remaining.as_secs_f32();
            let limit = self.state.clock().timeout().as_secs_f32();
            let color = if view.outcome.is_some() {
                TEXT_SECONDARY
            } else if secs < limit * 0.2 {
                TIMER_CRITICAL
            } else if secs < limit * 0.5 {
                TIMER_WARNING
            } else {
                TIMER_NORMAL
            };
            ui.label(RichText::new(format!("{secs:.1}s")).size(26.0).strong().color(color));
        });
    }

    fn render_scores_card(&self, ui: &mut egui::Ui, view: &BoardView) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (player, score) in [
                (Player::One, view.player_one_score),
                (Player::Two, view.player_two_score),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.player_name(player)).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{score:.2}")).size(13.0).color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    /// Text entry for typed moves such as `a1->c3`
    fn render_move_entry(&mut self, ui: &mut egui::Ui, view: &BoardView) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let enabled = view.outcome.is_none() && !self.state.is_computer_turn();
            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut self.move_text).hint_text("a1->c3"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if submitted {
                let text = std::mem::take(&mut self.move_text);
                self.state.submit_text(&text);
                response.request_focus();
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.state.last_ai_result() else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };
            ui.label(
                RichText::new(format!("Depth {}  Score {:.3}", result.depth, result.score))
                    .size(11.0)
                    .color(TIMER_NORMAL),
            );
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(mv) = result.best_move {
                ui.label(RichText::new(format!("-> {mv}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome, view: &BoardView) {
        let prefix = match outcome.reason {
            EndReason::Timeout => "Timeout! ",
            EndReason::Victory | EndReason::NoLegalMoves => "",
        };
        let reason = match outcome.reason {
            EndReason::Victory => "camp invaded",
            EndReason::Timeout => "opponent ran out of time",
            EndReason::NoLegalMoves => "opponent cannot move",
        };
        let headline = format!("{prefix}{} wins", self.player_name(outcome.winner));

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("by {reason}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!(
                            "Final scores {:.2} / {:.2}",
                            view.player_one_score, view.player_two_score
                        ))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context, view: &BoardView) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let human_color = self.state.config().human_color();
                let clicked = ui
                    .vertical_centered(|ui| self.canvas.show(ui, view, self.state.camp(), human_color))
                    .inner;

                if let Some((row, col)) = clicked {
                    if !self.state.is_computer_turn() {
                        self.state.apply_move(row, col);
                    }
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        // Shortcuts stay quiet while the move box has focus
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
        });
    }

    fn new_game(&mut self) {
        self.state.reset();
        self.move_text.clear();
    }
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(egui::Color32::from_rgb(80, 60, 30))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
}

impl eframe::App for HalmaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.poll_clock(Instant::now());

        // One snapshot per frame; requests below take effect next frame
        let view = self.state.view();
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx, &view);
        self.render_board(ctx, &view);

        if view.outcome.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

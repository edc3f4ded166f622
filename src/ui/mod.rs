//! GUI module for the Halma game
//!
//! Native front end built on egui/eframe. All game logic lives in
//! [`crate::game::GameState`]; this module only draws `BoardView`
//! snapshots and forwards clicks and typed moves.

mod app;
mod board_canvas;
mod theme;

pub use app::HalmaApp;

//! Terminal front-end.
//!
//! A small, game-oriented rendering layer: the controller's renderer and
//! score display calls are painted into a character [`Canvas`], which is then
//! flushed to the terminal with crossterm.
//!
//! - [`canvas`]: styled character cells, with run-based diffing
//! - [`game_view`]: [`GameView`], the pure `Renderer` + `ScoreDisplay` implementation
//! - [`renderer`]: terminal setup/teardown and frame flushing

pub mod canvas;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{Canvas, Glyph, Rgb, Style};
pub use game_view::{color_rgb, GameView, CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalView};

//! Terminal front-end for the snake game.
//!
//! A small game-oriented rendering layer: the game state is mapped into a
//! styled-character framebuffer by a pure view, and the framebuffer is
//! flushed to the terminal by a diffing renderer. The run loop ticks the
//! core at a fixed cadence while a dedicated thread blocks on keyboard
//! input.
//!
//! Goals:
//! - Keep `snake-core` deterministic and testable
//! - Keep everything except the final flush free of terminal I/O
//! - Never leave the terminal in raw mode, whatever the loop does

pub mod app;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use snake_core as core;
pub use snake_types as types;

pub use app::run;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

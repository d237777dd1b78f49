//! Input handling for the console front-end.
//!
//! Two small pieces: [`map::map_key_event`] turns `crossterm` key events into
//! [`snake_types::GameCommand`]s, and [`pending::PendingInput`] is the shared
//! cell the input-reading thread writes into while the tick loop drains it.
//! The SDL2 front-end does its own keycode mapping; nothing here depends on
//! a particular renderer.

pub mod map;
pub mod pending;

pub use snake_types as types;

pub use map::map_key_event;
pub use pending::PendingInput;

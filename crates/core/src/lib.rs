//! Core game logic: pure, deterministic and testable.
//!
//! This crate owns the game rules and nothing else. It has no dependency on
//! UI, terminals or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same food sequence
//! - **Testable**: every rule is exercised by unit tests against fixed layouts
//! - **Portable**: the same core drives the terminal and the SDL2 front-end
//!
//! # Module structure
//!
//! - [`game`]: the [`Game`] state machine (`set_direction` / `start` / `tick`)
//! - [`snake`]: the snake body container, head first, fixed capacity
//! - [`rng`]: small seedable generator used for food placement
//!
//! # Example
//!
//! ```
//! use snake_core::Game;
//! use snake_types::{Direction, GameStatus};
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.status(), GameStatus::Title);
//!
//! game.start();
//! game.set_direction(Direction::Down);
//! assert_eq!(game.tick(), GameStatus::Playing);
//! ```

pub mod game;
pub mod rng;
pub mod snake;

pub use snake_types as types;

pub use game::Game;
pub use rng::GameRng;
pub use snake::Snake;

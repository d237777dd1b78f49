//! Snake (workspace facade crate).
//!
//! Keeps the `snake::{core,input,term,gui,types}` public paths stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use snake_core as core;
pub use snake_input as input;
pub use snake_sdl2 as gui;
pub use snake_term as term;
pub use snake_types as types;

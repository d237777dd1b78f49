//! Snake runner (default binary).
//!
//! Picks a front-end from the command line:
//!
//! ```text
//! snake [term|gui] [seed]
//! ```
//!
//! The console front-end is the default. The optional seed fixes the food
//! sequence, which is handy for reproducing a run.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use snake::core::Game;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frontend = args.next().unwrap_or_else(|| "term".to_string());
    let seed = match args.next() {
        Some(raw) => match raw.parse::<u32>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Seed must be an unsigned integer, got '{}'", raw);
                std::process::exit(2);
            }
        },
        None => clock_seed(),
    };

    log::info!("starting {} front-end, seed {}", frontend, seed);
    let game = Game::new(seed);

    match frontend.as_str() {
        "term" | "console" => snake::term::run(game),
        "gui" | "window" => snake::gui::run(game),
        other => {
            eprintln!("Unknown front-end '{}'. Supported: term, gui", other);
            std::process::exit(2);
        }
    }
}

/// Millisecond clock seed; enough to vary food placement between runs.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

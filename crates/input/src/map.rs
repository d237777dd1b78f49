//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use snake_types::{Direction, GameCommand};

/// Map a terminal key event to a game command.
///
/// Arrow keys and WASD steer, Enter (or space) starts a round, and `q`,
/// Esc or Ctrl-C quit. Everything else is ignored.
pub fn map_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameCommand::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameCommand::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameCommand::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameCommand::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameCommand::Turn(Direction::Right))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(GameCommand::Start),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameCommand::Quit),

        _ => None,
    }
}

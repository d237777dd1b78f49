//! Cross-thread input cell shared between the reader thread and the tick
//! loop.
//!
//! Single writer (the input thread), single reader (the game loop). The
//! direction slot holds only the most recent turn request, so several
//! keypresses inside one tick interval coalesce to the last one. Start and
//! quit are sticky flags; start is consumed by the loop, quit stays set.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use snake_types::Direction;

/// Pending input state written by the reader thread.
#[derive(Debug, Default)]
pub struct PendingInput {
    direction: Mutex<Option<Direction>>,
    start: AtomicBool,
    quit: AtomicBool,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn request, replacing any not-yet-consumed one.
    pub fn set_direction(&self, dir: Direction) {
        *self.direction.lock().unwrap() = Some(dir);
    }

    /// Take the pending turn request, leaving the slot empty.
    pub fn take_direction(&self) -> Option<Direction> {
        self.direction.lock().unwrap().take()
    }

    pub fn request_start(&self) {
        self.start.store(true, Ordering::Release);
    }

    /// Consume a pending start request.
    pub fn take_start(&self) -> bool {
        self.start.swap(false, Ordering::AcqRel)
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_slot_starts_empty() {
        let pending = PendingInput::new();
        assert_eq!(pending.take_direction(), None);
    }

    #[test]
    fn take_direction_consumes_the_slot() {
        let pending = PendingInput::new();
        pending.set_direction(Direction::Up);
        assert_eq!(pending.take_direction(), Some(Direction::Up));
        assert_eq!(pending.take_direction(), None);
    }

    #[test]
    fn latest_turn_request_wins() {
        let pending = PendingInput::new();
        pending.set_direction(Direction::Up);
        pending.set_direction(Direction::Left);
        assert_eq!(pending.take_direction(), Some(Direction::Left));
    }

    #[test]
    fn start_is_consumed_once() {
        let pending = PendingInput::new();
        assert!(!pending.take_start());
        pending.request_start();
        assert!(pending.take_start());
        assert!(!pending.take_start());
    }

    #[test]
    fn quit_is_sticky() {
        let pending = PendingInput::new();
        assert!(!pending.quit_requested());
        pending.request_quit();
        assert!(pending.quit_requested());
        assert!(pending.quit_requested());
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let pending = Arc::new(PendingInput::new());
        let writer = Arc::clone(&pending);
        let handle = std::thread::spawn(move || {
            writer.set_direction(Direction::Down);
            writer.request_quit();
        });
        handle.join().unwrap();

        assert_eq!(pending.take_direction(), Some(Direction::Down));
        assert!(pending.quit_requested());
    }
}

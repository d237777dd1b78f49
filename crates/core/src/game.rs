//! Game state machine.
//!
//! [`Game`] owns the grid dimensions, the snake, the current heading, the
//! food cell and the lifecycle status. Front-ends drive it through
//! [`Game::set_direction`], [`Game::start`] and [`Game::tick`] and read state
//! back through the accessors; nothing here performs I/O and nothing returns
//! an error. Invalid requests (turning while on the title screen, reversing
//! into the neck, ticking a finished game) are silent no-ops.

use snake_types::{Direction, GameStatus, Point, GRID_HEIGHT, GRID_WIDTH, MAX_CELLS};

use crate::rng::GameRng;
use crate::snake::Snake;

/// One snake game.
#[derive(Debug, Clone)]
pub struct Game {
    width: i8,
    height: i8,
    snake: Snake,
    direction: Direction,
    food: Option<Point>,
    status: GameStatus,
    rng: GameRng,
}

impl Game {
    /// New game on the default 20x20 grid, parked on the title screen.
    pub fn new(seed: u32) -> Self {
        Self::with_size(GRID_WIDTH, GRID_HEIGHT, seed)
    }

    /// New game on a custom grid.
    ///
    /// # Panics
    ///
    /// Panics when a dimension is not positive or the grid exceeds
    /// [`MAX_CELLS`], the snake body capacity.
    pub fn with_size(width: i8, height: i8, seed: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert!(
            (width as usize) * (height as usize) <= MAX_CELLS,
            "grid larger than the {} cell capacity",
            MAX_CELLS
        );
        Self {
            width,
            height,
            snake: Snake::new(Point::new(width / 2, height / 2)),
            direction: Direction::Right,
            food: None,
            status: GameStatus::Title,
            rng: GameRng::new(seed),
        }
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The food cell, `None` until the first [`Game::start`].
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Request a heading change.
    ///
    /// Applied immediately unless the game is not running or `requested` is
    /// the exact reverse of the current heading (which would fold the snake
    /// onto its own neck). Rejected requests are dropped silently.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.status == GameStatus::Playing && requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Begin a fresh round: one-cell snake at the grid center, heading
    /// right, food on a random free cell, status `Playing`.
    ///
    /// Callable from any status; the front-ends send it from the title
    /// screen and as the restart control after a game over.
    pub fn start(&mut self) {
        self.snake = Snake::new(Point::new(self.width / 2, self.height / 2));
        self.direction = Direction::Right;
        self.status = GameStatus::Playing;
        self.place_food();
    }

    /// Advance the simulation by one step and return the resulting status.
    ///
    /// A no-op unless the game is `Playing`. The step moves the head one
    /// cell along the current heading; walking off the grid or into the body
    /// ends the round with the losing position left intact for rendering.
    /// Landing on the food grows the snake by one and relocates the food,
    /// otherwise the tail cell is dropped and the length is unchanged.
    pub fn tick(&mut self) -> GameStatus {
        if self.status != GameStatus::Playing {
            return self.status;
        }

        let new_head = self.snake.head().step(self.direction);
        if self.is_outside(new_head) || self.snake.contains(new_head) {
            self.status = GameStatus::GameOver;
            return self.status;
        }

        self.snake.push_head(new_head);
        if self.food == Some(new_head) {
            self.place_food();
        } else {
            self.snake.pop_tail();
        }
        self.status
    }

    fn is_outside(&self, p: Point) -> bool {
        p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height
    }

    fn free_cells(&self) -> usize {
        (self.width as usize) * (self.height as usize) - self.snake.len()
    }

    /// Place the food on a uniformly random cell not covered by the snake,
    /// sampled by reject-and-retry.
    ///
    /// When the snake covers the whole grid there is no cell left and no
    /// survivable move either, so the round ends instead of spinning in the
    /// sampler.
    fn place_food(&mut self) {
        if self.free_cells() == 0 {
            self.food = None;
            self.status = GameStatus::GameOver;
            return;
        }
        loop {
            let p = Point::new(
                self.rng.next_below(self.width as u32) as i8,
                self.rng.next_below(self.height as u32) as i8,
            );
            if !self.snake.contains(p) {
                self.food = Some(p);
                return;
            }
        }
    }
}

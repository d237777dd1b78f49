//! SDL2 windowed front-end.
//!
//! A thin shell over the shared game core: open a window sized to the grid,
//! pump events on the main thread, advance the core on a fixed timer and
//! draw every cell as a filled rect. The bare canvas has no text rendering,
//! so the title-screen and game-over hints live in the window title.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

use snake_core::Game;
use snake_types::{Direction, GameCommand, GameStatus, Point, TICK_MS};

/// Window pixels per grid cell.
pub const CELL_PX: u32 = 20;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const SNAKE_BODY: Color = Color::RGB(80, 200, 60);
const SNAKE_HEAD: Color = Color::RGB(150, 240, 110);
const SNAKE_DEAD: Color = Color::RGB(120, 120, 120);
const FOOD: Color = Color::RGB(220, 70, 50);

/// Run the windowed front-end until the player quits.
pub fn run(mut game: Game) -> Result<()> {
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let video = sdl.video().map_err(|e| anyhow!(e))?;
    let window = video
        .window(
            title_for(game.status()),
            game.width() as u32 * CELL_PX,
            game.height() as u32 * CELL_PX,
        )
        .position_centered()
        .build()?;
    let mut canvas = window.into_canvas().present_vsync().build()?;
    let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;

    log::info!(
        "sdl2 front-end up ({}x{} cells, {} px each)",
        game.width(),
        game.height(),
        CELL_PX
    );

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut shown_status = game.status();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => match map_keycode(keycode) {
                    Some(GameCommand::Quit) => break 'running,
                    Some(GameCommand::Start) => game.start(),
                    Some(GameCommand::Turn(dir)) => game.set_direction(dir),
                    None => {}
                },
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let before = game.status();
            let after = game.tick();
            if before != after {
                log::debug!("status {:?} -> {:?}", before, after);
            }
        }

        if shown_status != game.status() {
            shown_status = game.status();
            canvas.window_mut().set_title(title_for(shown_status))?;
        }

        draw(&mut canvas, &game).map_err(|e| anyhow!(e))?;
        canvas.present();

        // Keep the pump responsive without spinning a core.
        std::thread::sleep(Duration::from_millis(5));
    }

    log::info!("sdl2 front-end down");
    Ok(())
}

/// Map an SDL keycode to a game command.
///
/// Arrow keys and WASD steer, Return starts, Escape or `q` quits.
pub fn map_keycode(keycode: Keycode) -> Option<GameCommand> {
    match keycode {
        Keycode::Up | Keycode::W => Some(GameCommand::Turn(Direction::Up)),
        Keycode::Down | Keycode::S => Some(GameCommand::Turn(Direction::Down)),
        Keycode::Left | Keycode::A => Some(GameCommand::Turn(Direction::Left)),
        Keycode::Right | Keycode::D => Some(GameCommand::Turn(Direction::Right)),
        Keycode::Return | Keycode::Space => Some(GameCommand::Start),
        Keycode::Escape | Keycode::Q => Some(GameCommand::Quit),
        _ => None,
    }
}

fn title_for(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Title => "Snake - press Return to start",
        GameStatus::Playing => "Snake",
        GameStatus::GameOver => "Snake - game over, Return restarts",
    }
}

fn draw(canvas: &mut WindowCanvas, game: &Game) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    if game.status() == GameStatus::Title {
        return Ok(());
    }

    if let Some(food) = game.food() {
        canvas.set_draw_color(FOOD);
        canvas.fill_rect(cell_rect(food))?;
    }

    let dead = game.status() == GameStatus::GameOver;
    for (i, &cell) in game.snake().cells().iter().enumerate() {
        let color = match (dead, i) {
            (true, _) => SNAKE_DEAD,
            (false, 0) => SNAKE_HEAD,
            _ => SNAKE_BODY,
        };
        canvas.set_draw_color(color);
        canvas.fill_rect(cell_rect(cell))?;
    }

    Ok(())
}

fn cell_rect(p: Point) -> Rect {
    Rect::new(
        p.x as i32 * CELL_PX as i32,
        p.y as i32 * CELL_PX as i32,
        CELL_PX,
        CELL_PX,
    )
}

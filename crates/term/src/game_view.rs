//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. Grid cells are drawn two
//! terminal columns wide to compensate the glyph aspect ratio, and the whole
//! playfield is centered in the viewport.

use snake_core::Game;
use snake_types::{GameStatus, Point};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(160, 160, 160),
    bg: BLACK,
    bold: false,
};
const BODY: CellStyle = CellStyle {
    fg: Rgb::new(80, 200, 60),
    bg: BLACK,
    bold: false,
};
const HEAD: CellStyle = CellStyle {
    fg: Rgb::new(150, 240, 110),
    bg: BLACK,
    bold: true,
};
const DEAD: CellStyle = CellStyle {
    fg: Rgb::new(120, 120, 120),
    bg: BLACK,
    bold: false,
};
const FOOD: CellStyle = CellStyle {
    fg: Rgb::new(220, 70, 50),
    bg: BLACK,
    bold: true,
};
const TEXT: CellStyle = CellStyle {
    fg: Rgb::new(230, 230, 230),
    bg: BLACK,
    bold: true,
};

/// Glyph for a snake cell; both columns of the cell are filled with it.
pub const SNAKE_CHAR: char = '█';

/// Glyph for the food cell.
pub const FOOD_CHAR: char = '●';

/// Renders a [`Game`] into a [`FrameBuffer`].
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates the typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = game.width() as u16 * self.cell_w + 2;
        let frame_h = game.height() as u16 + 2;
        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, x0, y0, frame_w, frame_h);

        match game.status() {
            GameStatus::Title => {
                self.draw_center_lines(
                    &mut fb,
                    x0,
                    y0,
                    frame_w,
                    frame_h,
                    &[
                        "S N A K E",
                        "",
                        "arrows or wasd to steer",
                        "enter starts, q quits",
                    ],
                );
            }
            status => {
                if let Some(food) = game.food() {
                    self.draw_cell(&mut fb, x0, y0, food, FOOD_CHAR, ' ', FOOD);
                }
                let dead = status == GameStatus::GameOver;
                for (i, &cell) in game.snake().cells().iter().enumerate() {
                    let style = match (dead, i) {
                        (true, _) => DEAD,
                        (false, 0) => HEAD,
                        _ => BODY,
                    };
                    self.draw_cell(&mut fb, x0, y0, cell, SNAKE_CHAR, SNAKE_CHAR, style);
                }
                if dead {
                    self.draw_center_lines(
                        &mut fb,
                        x0,
                        y0,
                        frame_w,
                        frame_h,
                        &["GAME OVER", "", "enter restarts, q quits"],
                    );
                }
            }
        }

        fb
    }

    /// Paint one grid cell. `ch` fills the first terminal column of the
    /// cell, `pad` the remaining ones.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        cell: Point,
        ch: char,
        pad: char,
        style: CellStyle,
    ) {
        let x = x0 + 1 + cell.x as u16 * self.cell_w;
        let y = y0 + 1 + cell.y as u16;
        for dx in 0..self.cell_w {
            fb.put_char(x + dx, y, if dx == 0 { ch } else { pad }, style);
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_center_lines(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let top = y0 + frame_h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = x0 + frame_w.saturating_sub(line.chars().count() as u16) / 2;
            fb.put_str(x, top + i as u16, line, TEXT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::Game;

    fn find_char(fb: &FrameBuffer, needle: char) -> Vec<(u16, u16)> {
        let mut hits = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).unwrap().ch == needle {
                    hits.push((x, y));
                }
            }
        }
        hits
    }

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    fn any_row_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
    }

    #[test]
    fn title_screen_shows_the_banner_and_no_snake() {
        let game = Game::new(1);
        let fb = GameView::default().render(&game, Viewport::new(80, 24));
        assert!(find_char(&fb, SNAKE_CHAR).is_empty());
        assert!(any_row_contains(&fb, "S N A K E"), "title banner missing");
    }

    #[test]
    fn playing_frame_contains_snake_food_and_border() {
        let mut game = Game::new(1);
        game.start();
        let fb = GameView::default().render(&game, Viewport::new(80, 24));

        // One snake cell drawn two columns wide.
        assert_eq!(find_char(&fb, SNAKE_CHAR).len(), 2);
        assert_eq!(find_char(&fb, FOOD_CHAR).len(), 1);
        assert_eq!(find_char(&fb, '┌').len(), 1);
        assert_eq!(find_char(&fb, '┘').len(), 1);
    }

    #[test]
    fn snake_cells_map_to_the_expected_columns() {
        let mut game = Game::with_size(5, 5, 1);
        game.start();
        let view = GameView::default();
        let fb = view.render(&game, Viewport::new(40, 20));

        // Frame is 12x7, centered: x0 = (40-12)/2 = 14, y0 = (20-7)/2 = 6.
        // Head at grid (2,2) lands at terminal (14+1+2*2, 6+1+2) = (19, 9).
        assert_eq!(fb.get(19, 9).unwrap().ch, SNAKE_CHAR);
        assert_eq!(fb.get(20, 9).unwrap().ch, SNAKE_CHAR);
    }

    #[test]
    fn game_over_overlays_the_message() {
        let mut game = Game::with_size(5, 5, 1);
        game.start();
        while game.tick().is_playing() {}

        let fb = GameView::default().render(&game, Viewport::new(80, 24));
        assert!(any_row_contains(&fb, "GAME OVER"), "game over banner missing");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut game = Game::new(1);
        game.start();
        let fb = GameView::default().render(&game, Viewport::new(10, 3));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 3);
    }
}

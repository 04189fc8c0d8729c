use macroquad::prelude::*;

use crate::game::{Arena, Canvas, GameEvent, Position};

const LETTERBOX_COLOR: Color = Color::new(0.08, 0.08, 0.08, 1.0);
const HUD_COLOR: Color = WHITE;

/// Largest square tile that fits the arena into the window, centred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub tile: f32,
    pub off_x: f32,
    pub off_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn fit(arena: Arena, screen_w: f32, screen_h: f32) -> Self {
        let tile = (screen_w / arena.width as f32).min(screen_h / arena.height as f32);
        let width = tile * arena.width as f32;
        let height = tile * arena.height as f32;
        Self {
            tile,
            off_x: (screen_w - width) * 0.5,
            off_y: (screen_h - height) * 0.5,
            width,
            height,
        }
    }

    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.off_x + pos.x as f32 * self.tile,
            self.off_y + pos.y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }
}

/// Draws into the macroquad window; rebuilt every frame so resizes apply.
pub struct ScreenCanvas {
    layout: Layout,
}

impl ScreenCanvas {
    pub fn for_frame(arena: Arena) -> Self {
        Self {
            layout: Layout::fit(arena, screen_width(), screen_height()),
        }
    }
}

impl Canvas for ScreenCanvas {
    fn fill_background(&mut self, color: Color) {
        clear_background(LETTERBOX_COLOR);
        let l = self.layout;
        draw_rectangle(l.off_x, l.off_y, l.width, l.height, color);
    }

    fn fill_cell(&mut self, pos: Position, color: Color) {
        let r = self.layout.cell_rect(pos);
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }
}

/// Text readout of the score, refreshed only when the score changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    text: String,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            text: Self::format(0),
        }
    }

    fn format(score: u32) -> String {
        format!("Score: {score}")
    }

    pub fn apply(&mut self, event: &GameEvent) {
        if let GameEvent::ScoreChanged(score) = event {
            self.text = Self::format(*score);
        }
    }

    pub fn draw(&self) {
        draw_text(&self.text, 8.0, 24.0, 24.0, HUD_COLOR);
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

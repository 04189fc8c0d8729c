use macroquad::color::Color;

use super::grid::Position;

pub const BACKGROUND_COLOR: Color = Color::new(0.737, 0.561, 0.561, 1.0); // rosy brown
pub const SNAKE_COLOR: Color = Color::new(0.212, 0.212, 0.212, 1.0); // charcoal
pub const APPLE_COLOR: Color = Color::new(1.0, 0.2, 0.0, 1.0); // orange red
pub const SLOWDOWN_COLOR: Color = Color::new(0.576, 0.71, 0.918, 1.0); // pale blue

/// A surface with one unit per grid cell
pub trait Canvas {
    fn fill_background(&mut self, color: Color);
    fn fill_cell(&mut self, pos: Position, color: Color);
}

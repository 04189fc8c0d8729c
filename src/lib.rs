//! Grid snake with apples and a slowdown powerup, drawn with macroquad.
//!
//! - `game`: window-free rules (movement, collisions, powerups, timing, palette);
//!   it only borrows macroquad's `Color` and RNG types
//! - `render`, `audio`, `input`: macroquad-facing collaborators
//! - `config`: JSON tunables

pub mod audio;
pub mod config;
pub mod game;
pub mod input;
pub mod render;

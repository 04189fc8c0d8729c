pub mod canvas;
pub mod grid;
pub mod powerup;
pub mod session;
pub mod snake;
pub mod timer;

pub use canvas::{APPLE_COLOR, BACKGROUND_COLOR, Canvas, SLOWDOWN_COLOR, SNAKE_COLOR};
pub use grid::{Arena, Direction, ParseDirectionError, Position};
pub use powerup::{Powerup, PowerupId, PowerupKind, PowerupRegistry};
pub use session::{Cue, GameEvent, ResetReason, Session, TickOutcome};
pub use snake::{Player, START_HEAD, Snake, TooShort};

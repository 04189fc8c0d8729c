use thiserror::Error;

use super::grid::{Direction, Position};

pub const START_HEAD: Position = Position::new(5, 5);
pub const START_TAIL: Position = Position::new(4, 5);
pub const START_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a snake needs at least two segments, got {0}")]
pub struct TooShort(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Index 0 is the head
    segments: Vec<Position>,
    direction: Direction,
    /// Set once a turn was accepted; cleared by the next `advance`
    turned_this_tick: bool,
}

impl Snake {
    /// The two-cell snake every session starts with
    pub fn fresh() -> Self {
        Self {
            segments: vec![START_HEAD, START_TAIL],
            direction: START_DIRECTION,
            turned_this_tick: false,
        }
    }

    pub fn from_segments(
        segments: Vec<Position>,
        direction: Direction,
    ) -> Result<Self, TooShort> {
        if segments.len() < 2 {
            return Err(TooShort(segments.len()));
        }

        Ok(Self {
            segments,
            direction,
            turned_this_tick: false,
        })
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_direction_locked(&self) -> bool {
        self.turned_this_tick
    }

    /// Moves the head one cell and drags every other segment into the cell
    /// its leader held before this tick. No bounds checks happen here.
    pub fn advance(&mut self) {
        let mut carried = self.segments[0];
        self.segments[0] = carried.moved(self.direction);

        for segment in self.segments.iter_mut().skip(1) {
            carried = std::mem::replace(segment, carried);
        }

        self.turned_this_tick = false;
    }

    /// Accepts at most one turn per tick, and never a reversal.
    /// Returns whether the turn was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() || self.turned_this_tick {
            return false;
        }

        self.direction = requested;
        self.turned_this_tick = true;
        true
    }

    /// Appends a copy of the tail; it separates on the following moves.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }

    /// Whether the head overlaps the body, ignoring the last segment which
    /// is about to vacate its cell.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        let end = self.segments.len() - 1;
        self.segments[1..end].contains(&head)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub snake: Snake,
    pub score: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            snake: Snake::fresh(),
            score: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_of(segments: Vec<Position>, direction: Direction) -> Snake {
        Snake::from_segments(segments, direction).unwrap()
    }

    fn line(len: i32) -> Snake {
        // Heading right, head at (len, 5)
        let segments = (0..len).map(|i| Position::new(len - i, 5)).collect();
        snake_of(segments, Direction::Right)
    }

    #[test]
    fn test_fresh_snake() {
        let snake = Snake::fresh();
        assert_eq!(snake.segments(), &[Position::new(5, 5), Position::new(4, 5)]);
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_direction_locked());
    }

    #[test]
    fn test_short_snake_rejected() {
        let one = Snake::from_segments(vec![Position::new(1, 1)], Direction::Up);
        assert_eq!(one, Err(TooShort(1)));
        assert_eq!(Snake::from_segments(Vec::new(), Direction::Up), Err(TooShort(0)));
    }

    #[test]
    fn test_advance_right() {
        let mut snake = Snake::fresh();
        snake.advance();
        assert_eq!(snake.segments(), &[Position::new(6, 5), Position::new(5, 5)]);
    }

    #[test]
    fn test_segments_follow_leader() {
        for len in 2..8 {
            let mut snake = line(len);
            for dir in [Direction::Down, Direction::Left, Direction::Down, Direction::Right] {
                snake.set_direction(dir);
                let before = snake.segments().to_vec();
                snake.advance();
                let after = snake.segments();

                assert_eq!(after[0], before[0].moved(dir));
                for i in 1..after.len() {
                    assert_eq!(after[i], before[i - 1]);
                }
            }
        }
    }

    #[test]
    fn test_advance_does_not_clamp() {
        let mut snake = snake_of(vec![Position::new(0, 0), Position::new(0, 1)], Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Position::new(0, -1));
    }

    #[test]
    fn test_reversal_rejected() {
        for dir in Direction::ALL {
            let mut snake = snake_of(vec![Position::new(5, 5), Position::new(5, 5)], dir);
            assert!(!snake.set_direction(dir.opposite()));
            assert_eq!(snake.direction(), dir);
            assert!(!snake.is_direction_locked());
        }
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut snake = Snake::fresh();
        assert!(snake.set_direction(Direction::Up));
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Up);

        snake.advance();
        assert!(!snake.is_direction_locked());
        assert!(snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_grow_duplicates_tail() {
        let mut snake = Snake::fresh();
        snake.grow();
        assert_eq!(snake.segments().len(), 3);
        assert_eq!(snake.segments()[2], Position::new(4, 5));

        snake.advance();
        assert_eq!(
            snake.segments(),
            &[Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_bite_ignores_last_segment() {
        // Head sits on the final tail cell only
        let snake = snake_of(
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 1),
            ],
            Direction::Up,
        );
        assert!(!snake.bites_itself());

        let snake = snake_of(
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(1, 2),
            ],
            Direction::Up,
        );
        assert!(snake.bites_itself());
    }

    #[test]
    fn test_two_segment_snake_never_bites() {
        let snake = snake_of(vec![Position::new(3, 3), Position::new(3, 3)], Direction::Up);
        assert!(!snake.bites_itself());
    }
}

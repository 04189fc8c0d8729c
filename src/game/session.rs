use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::rand::RandGenerator;

use super::canvas::{BACKGROUND_COLOR, Canvas, SNAKE_COLOR};
use super::grid::{Arena, Direction, Position};
use super::powerup::{PowerupId, PowerupKind, PowerupRegistry};
use super::snake::{Player, Snake};
use super::timer::{TimerEvent, TimerId, Timers};
use crate::config::{ConfigError, GameConfig};

/// Sound effects the session asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Death,
    Eat,
    /// Every tenth point
    Milestone,
}

/// Side effects for the platform layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    Sound(Cue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    Start,
    Wall,
    SelfBite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Playing,
    Reset(ResetReason),
}

/// All mutable game state, driven by `update` once per rendered frame.
pub struct Session {
    config: GameConfig,
    arena: Arena,
    player: Player,
    powerups: PowerupRegistry,
    move_interval: f32,
    accumulator: f32,
    timers: Timers,
    slowdown_timer: Option<TimerId>,
    rng: RandGenerator,
    events: Vec<GameEvent>,
}

impl Session {
    /// Fails when the config is out of range, e.g. an arena too small for
    /// the starting snake.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = RandGenerator::new();
        rng.srand(config.seed.unwrap_or_else(clock_seed));

        Ok(Self {
            arena: config.arena(),
            move_interval: config.move_interval,
            config,
            player: Player::new(),
            powerups: PowerupRegistry::new(),
            accumulator: 0.0,
            timers: Timers::new(),
            slowdown_timer: None,
            rng,
            events: Vec::new(),
        })
    }

    /// Puts the board in its starting layout.
    pub fn start(&mut self) {
        log::info!(
            "starting on a {}x{} arena, tick every {:.0}ms",
            self.arena.width,
            self.arena.height,
            self.config.move_interval * 1000.0
        );
        self.reset(ResetReason::Start);
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn snake(&self) -> &Snake {
        &self.player.snake
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn powerups(&self) -> &PowerupRegistry {
        &self.powerups
    }

    /// Current seconds between ticks
    pub fn move_interval(&self) -> f32 {
        self.move_interval
    }

    pub fn is_slowed(&self) -> bool {
        self.slowdown_timer.is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.player.snake.set_direction(direction)
    }

    /// Feeds one frame's worth of time. Runs at most one tick, no matter how
    /// long the frame took.
    pub fn update(&mut self, dt: f32) -> Option<TickOutcome> {
        self.run_timers(dt);

        self.accumulator += dt.max(0.0);
        if self.accumulator <= self.move_interval {
            return None;
        }

        // Keep the phase, drop any whole intervals a slow frame piled up
        self.accumulator = (self.accumulator - self.move_interval) % self.move_interval;
        Some(self.tick())
    }

    /// One discrete step: move, then resolve collisions.
    pub fn tick(&mut self) -> TickOutcome {
        self.player.snake.advance();
        self.check_collisions()
    }

    fn check_collisions(&mut self) -> TickOutcome {
        let head = self.player.snake.head();

        if !self.arena.contains(head) {
            self.reset(ResetReason::Wall);
            return TickOutcome::Reset(ResetReason::Wall);
        }

        if self.player.snake.bites_itself() {
            self.reset(ResetReason::SelfBite);
            return TickOutcome::Reset(ResetReason::SelfBite);
        }

        for id in self.powerups.at(head) {
            self.pick_up(id);
        }

        TickOutcome::Playing
    }

    fn pick_up(&mut self, id: PowerupId) {
        let Some(powerup) = self.powerups.get(id).copied() else {
            return;
        };
        log::debug!("picked up {:?} at {}", powerup.kind, powerup.pos);

        match powerup.kind {
            PowerupKind::Apple => self.eat_apple(id, powerup.pos),
            PowerupKind::Slowdown => self.start_slowdown(),
        }

        if powerup.kind.consumed_on_pickup() {
            self.powerups.remove(id);
        }
    }

    fn eat_apple(&mut self, id: PowerupId, old: Position) {
        self.player.snake.grow();

        let mut pos = self.random_position();
        while pos == old && self.arena.cell_count() > 1 {
            pos = self.random_position();
        }
        self.powerups.relocate(id, pos);

        self.set_score(self.player.score + 1);

        let roll: f32 = self.rng.gen_range(0.0, 1.0);
        if roll < self.config.slowdown_chance
            && self.powerups.count(PowerupKind::Slowdown) < self.config.max_slowdowns
        {
            self.spawn_powerup(PowerupKind::Slowdown, None);
        }
    }

    fn start_slowdown(&mut self) {
        self.move_interval = self.config.move_interval * self.config.slowdown_factor;

        // A fresh pickup restarts the countdown rather than stacking
        if let Some(previous) = self.slowdown_timer.take() {
            self.timers.cancel(previous);
        }
        let revert = self
            .timers
            .schedule_in(self.config.slowdown_duration, TimerEvent::RestoreInterval);
        self.slowdown_timer = Some(revert);

        log::debug!(
            "slowed to {:.0}ms for {}s",
            self.move_interval * 1000.0,
            self.config.slowdown_duration
        );
    }

    fn run_timers(&mut self, dt: f32) {
        for event in self.timers.advance(dt) {
            match event {
                TimerEvent::RestoreInterval => {
                    self.move_interval = self.config.move_interval;
                    self.slowdown_timer = None;
                    log::debug!("slowdown expired");
                }
            }
        }
    }

    pub fn spawn_powerup(&mut self, kind: PowerupKind, pos: Option<Position>) -> PowerupId {
        let pos = pos.unwrap_or_else(|| self.random_position());
        self.powerups.spawn(kind, pos)
    }

    /// Uniform over the whole arena; occupied cells are not excluded.
    pub fn random_position(&self) -> Position {
        Position::new(
            self.rng.gen_range(0, self.arena.width),
            self.rng.gen_range(0, self.arena.height),
        )
    }

    fn set_score(&mut self, score: u32) {
        self.player.score = score;
        self.events.push(GameEvent::ScoreChanged(score));

        if score == 0 {
            return;
        }
        let cue = if score % 10 == 0 { Cue::Milestone } else { Cue::Eat };
        self.events.push(GameEvent::Sound(cue));
    }

    fn reset(&mut self, reason: ResetReason) {
        if reason != ResetReason::Start {
            log::info!("{reason:?} collision, final score {}", self.player.score);
        }

        self.player.snake = Snake::fresh();
        self.set_score(0);

        self.powerups.clear();
        self.spawn_powerup(PowerupKind::Apple, None);

        self.move_interval = self.config.move_interval;
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            log::debug!("cancelled {cancelled} pending timer(s)");
        }
        self.slowdown_timer = None;

        self.events.push(GameEvent::Sound(Cue::Death));
    }

    /// Background, then powerups in spawn order, then the snake on top.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_background(BACKGROUND_COLOR);

        for powerup in self.powerups.iter() {
            canvas.fill_cell(powerup.pos, powerup.kind.color());
        }

        for segment in self.player.snake.segments() {
            canvas.fill_cell(*segment, SNAKE_COLOR);
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

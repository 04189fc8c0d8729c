use macroquad::color::Color;

use super::canvas::{APPLE_COLOR, SLOWDOWN_COLOR};
use super::grid::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerupKind {
    /// Grows the snake and scores a point; always present, relocated on pickup
    Apple,
    /// Slows the tick rate for a while; consumed on pickup
    Slowdown,
}

impl PowerupKind {
    pub fn color(self) -> Color {
        match self {
            PowerupKind::Apple => APPLE_COLOR,
            PowerupKind::Slowdown => SLOWDOWN_COLOR,
        }
    }

    /// Whether picking it up takes it off the board
    pub fn consumed_on_pickup(self) -> bool {
        match self {
            PowerupKind::Apple => false,
            PowerupKind::Slowdown => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PowerupId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Powerup {
    pub id: PowerupId,
    pub kind: PowerupKind,
    pub pos: Position,
}

/// Live powerups in spawn order. Order only matters for drawing.
#[derive(Debug, Default)]
pub struct PowerupRegistry {
    entries: Vec<Powerup>,
    next_id: u64,
}

impl PowerupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: PowerupKind, pos: Position) -> PowerupId {
        let id = PowerupId(self.next_id);
        self.next_id += 1;
        self.entries.push(Powerup { id, kind, pos });
        log::debug!("spawned {kind:?} at {pos}");
        id
    }

    /// Removes the entity if it is still registered.
    pub fn remove(&mut self, id: PowerupId) -> Option<Powerup> {
        let index = self.entries.iter().position(|p| p.id == id)?;
        let removed = self.entries.remove(index);
        log::debug!("removed {:?} at {}", removed.kind, removed.pos);
        Some(removed)
    }

    pub fn get(&self, id: PowerupId) -> Option<&Powerup> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn relocate(&mut self, id: PowerupId, pos: Position) -> bool {
        match self.entries.iter_mut().find(|p| p.id == id) {
            Some(powerup) => {
                powerup.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Ids of every powerup sitting on `pos`, in spawn order
    pub fn at(&self, pos: Position) -> Vec<PowerupId> {
        self.entries.iter().filter(|p| p.pos == pos).map(|p| p.id).collect()
    }

    pub fn count(&self, kind: PowerupKind) -> usize {
        self.entries.iter().filter(|p| p.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Powerup> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

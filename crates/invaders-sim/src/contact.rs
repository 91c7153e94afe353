//! Contact events reported by a collision source.
//!
//! Stored in `SimulationEngine`'s contact queue, NOT as ECS entities.
//! The queue decouples when an overlap is detected from when game rules apply it.

use hecs::Entity;

/// Two entities began touching. The pair is unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
    /// Tick at which the collision source saw the overlap begin.
    pub tick: u64,
}

impl ContactEvent {
    pub fn new(a: Entity, b: Entity, tick: u64) -> Self {
        Self { a, b, tick }
    }

    /// The pair in canonical order, for set membership regardless of which
    /// body the collision source reported first.
    pub fn key(&self) -> (Entity, Entity) {
        if self.a.to_bits() <= self.b.to_bits() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    pub fn involves(&self, entity: Entity) -> bool {
        self.a == entity || self.b == entity
    }
}

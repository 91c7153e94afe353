//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// A member of the invader formation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Invader {
    /// Lattice row at spawn time (0 = lowest).
    pub row: u32,
    /// Lattice column at spawn time (0 = leftmost).
    pub column: u32,
    pub kind: InvaderKind,
}

/// A bullet in flight. Travels linearly from `origin` to `destination`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub kind: BulletKind,
    pub origin: DVec2,
    pub destination: DVec2,
    /// Simulation time at which the bullet was fired (seconds).
    pub fired_at: f64,
    /// Seconds from origin to destination.
    pub duration: f64,
}

// Bounds is defined in types.rs but used as an ECS component.

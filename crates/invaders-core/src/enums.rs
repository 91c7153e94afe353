//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// What kind of simulation object an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Ship,
    Invader,
    ShipBullet,
    InvaderBullet,
}

impl EntityCategory {
    /// Physics category bit for this entity kind.
    pub fn bitmask(self) -> u32 {
        match self {
            EntityCategory::Ship => SHIP_CATEGORY,
            EntityCategory::Invader => INVADER_CATEGORY,
            EntityCategory::ShipBullet => SHIP_FIRED_BULLET_CATEGORY,
            EntityCategory::InvaderBullet => INVADER_FIRED_BULLET_CATEGORY,
        }
    }

    /// Categories this kind reports contacts with.
    pub fn contact_test_mask(self) -> u32 {
        match self {
            EntityCategory::Ship => INVADER_CATEGORY,
            EntityCategory::Invader => 0,
            EntityCategory::ShipBullet => INVADER_CATEGORY,
            EntityCategory::InvaderBullet => SHIP_CATEGORY,
        }
    }

    /// Categories this kind is physically blocked by.
    pub fn collision_mask(self) -> u32 {
        match self {
            EntityCategory::Ship => SCENE_EDGE_CATEGORY,
            _ => 0,
        }
    }

    /// Whether a pair of categories produces contact events, in either direction.
    pub fn can_contact(self, other: EntityCategory) -> bool {
        self.contact_test_mask() & other.bitmask() != 0
            || other.contact_test_mask() & self.bitmask() != 0
    }
}

/// Which side fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    ShipFired,
    InvaderFired,
}

impl BulletKind {
    pub fn category(self) -> EntityCategory {
        match self {
            BulletKind::ShipFired => EntityCategory::ShipBullet,
            BulletKind::InvaderFired => EntityCategory::InvaderBullet,
        }
    }
}

/// Invader sprite family. Cycles by formation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvaderKind {
    A,
    B,
    C,
}

impl InvaderKind {
    pub fn for_row(row: u32) -> Self {
        match row % 3 {
            0 => InvaderKind::A,
            1 => InvaderKind::B,
            _ => InvaderKind::C,
        }
    }
}

/// Formation movement state. The turning states last exactly one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementDirection {
    #[default]
    MovingRight,
    MovingLeft,
    /// Stepping down, then heading left.
    TurningToLeft,
    /// Stepping down, then heading right.
    TurningToRight,
}

impl MovementDirection {
    pub fn is_turning(self) -> bool {
        matches!(
            self,
            MovementDirection::TurningToLeft | MovementDirection::TurningToRight
        )
    }
}

/// Round lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundPhase::InProgress)
    }
}

/// Final result of a round, reported once to the scene collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

impl From<RoundOutcome> for RoundPhase {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Won => RoundPhase::Won,
            RoundOutcome::Lost => RoundPhase::Lost,
        }
    }
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// No ship remains in the registry.
    ShipDestroyed,
    /// An invader's lower edge reached the floor line.
    InvasionBreach,
}

//! Events emitted by the simulation for audio and scene feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Sound cues for the frontend audio system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    ShipBulletFired,
    InvaderBulletFired,
    InvaderHit,
    ShipHit,
}

/// Gameplay events for the scene and HUD collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The formation reached a wall and will step down.
    FormationTurned {
        direction: MovementDirection,
        move_interval: f64,
    },
    /// An invader was destroyed by a ship bullet.
    InvaderDestroyed { row: u32, column: u32, points: u32 },
    /// The ship was destroyed.
    ShipDestroyed,
    /// The round reached a terminal state. Emitted exactly once per round.
    RoundEnded {
        outcome: RoundOutcome,
        cause: Option<LossCause>,
        final_score: u32,
    },
}

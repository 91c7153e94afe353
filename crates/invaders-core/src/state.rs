//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{Bounds, SimTime};

/// Complete game state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub loss_cause: Option<LossCause>,
    pub score: ScoreView,
    pub ship: Option<ShipView>,
    pub invaders: Vec<InvaderView>,
    pub bullets: Vec<BulletView>,
    pub formation: FormationView,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub bounds: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderView {
    pub row: u32,
    pub column: u32,
    pub kind: InvaderKind,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub kind: BulletKind,
    pub bounds: Bounds,
}

/// Formation cadence for display and animation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationView {
    pub direction: MovementDirection,
    pub move_interval: f64,
    /// Two-frame sprite animation index, flipped on every lockstep step.
    pub animation_frame: u8,
    pub live_count: u32,
}

/// Running score for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub invaders_destroyed: u32,
}

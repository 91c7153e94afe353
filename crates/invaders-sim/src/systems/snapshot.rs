//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use invaders_core::components::*;
use invaders_core::enums::*;
use invaders_core::events::{AudioEvent, GameEvent};
use invaders_core::state::*;
use invaders_core::types::{Bounds, SimTime};

use crate::formation::FormationState;
use crate::score::ScoreTracker;

/// Everything the snapshot needs besides the world itself.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub loss_cause: Option<LossCause>,
    pub score: &'a ScoreTracker,
    pub formation: &'a FormationState,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        loss_cause: ctx.loss_cause,
        score: ctx.score.view(),
        ship: build_ship(world),
        invaders: build_invaders(world),
        bullets: build_bullets(world),
        formation: ctx.formation.view(),
        audio_events,
        events,
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&Ship, &Bounds)>()
        .iter()
        .next()
        .map(|(_, (_, bounds))| ShipView { bounds: *bounds })
}

/// Invaders sorted by lattice cell so the order is stable across ticks.
fn build_invaders(world: &World) -> Vec<InvaderView> {
    let mut invaders: Vec<InvaderView> = world
        .query::<(&Invader, &Bounds)>()
        .iter()
        .map(|(_, (invader, bounds))| InvaderView {
            row: invader.row,
            column: invader.column,
            kind: invader.kind,
            bounds: *bounds,
        })
        .collect();
    invaders.sort_by_key(|view| (view.row, view.column));
    invaders
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&Bullet, &Bounds)>()
        .iter()
        .map(|(_, (bullet, bounds))| BulletView {
            kind: bullet.kind,
            bounds: *bounds,
        })
        .collect();
    bullets.sort_by_key(|view| view.kind == BulletKind::InvaderFired);
    bullets
}

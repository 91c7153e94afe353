//! Bullet system: spawns, advances and retires bullets.
//!
//! Each side owns a single bullet slot: a spawn request while that side's
//! bullet is still in flight is ignored.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use tracing::{debug, trace};

use invaders_core::components::{Bullet, Ship};
use invaders_core::config::SimConfig;
use invaders_core::constants::{BULLET_HEIGHT, BULLET_WIDTH};
use invaders_core::enums::BulletKind;
use invaders_core::events::AudioEvent;
use invaders_core::types::Bounds;

use crate::formation::FormationState;
use crate::registry;

/// Move every bullet along its path and retire the ones that have arrived.
/// Arrival is not a collision; nothing is scored.
pub fn run(world: &mut World, now: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (bullet, bounds)) in world.query_mut::<(&Bullet, &mut Bounds)>() {
        let elapsed = now - bullet.fired_at;
        if elapsed >= bullet.duration {
            despawn_buffer.push(entity);
            continue;
        }
        let t = (elapsed / bullet.duration).clamp(0.0, 1.0);
        bounds.center = bullet.origin.lerp(bullet.destination, t);
    }

    for entity in despawn_buffer.drain(..) {
        let despawned = world.despawn(entity);
        debug_assert!(despawned.is_ok(), "arrived bullet was already despawned");
        trace!(?entity, "bullet arrived");
    }
}

/// Fire from just above the ship toward the top of the playfield.
pub fn spawn_ship_bullet(
    world: &mut World,
    config: &SimConfig,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<Entity> {
    if registry::live_bullet(world, BulletKind::ShipFired).is_some() {
        trace!("ship bullet already in flight");
        return None;
    }

    let ship_bounds = world
        .query::<(&Ship, &Bounds)>()
        .iter()
        .next()
        .map(|(_, (_, bounds))| *bounds)?;

    let origin = DVec2::new(
        ship_bounds.center.x,
        ship_bounds.center.y + ship_bounds.size.y - BULLET_HEIGHT / 2.0,
    );
    let destination = DVec2::new(
        ship_bounds.center.x,
        config.playfield_height + BULLET_HEIGHT / 2.0,
    );

    let entity = spawn_bullet(
        world,
        BulletKind::ShipFired,
        origin,
        destination,
        now,
        config.ship_bullet_duration,
    );
    audio_events.push(AudioEvent::ShipBulletFired);
    debug!(x = origin.x, "ship fired");
    Some(entity)
}

/// Fire from a uniformly chosen live invader toward the bottom of the playfield.
pub fn spawn_invader_bullet<R: Rng + ?Sized>(
    world: &mut World,
    formation: &FormationState,
    rng: &mut R,
    config: &SimConfig,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> Option<Entity> {
    if registry::live_bullet(world, BulletKind::InvaderFired).is_some() {
        return None;
    }
    if formation.is_empty() {
        return None;
    }

    let shooter = formation.members()[rng.gen_range(0..formation.len())];
    let shooter_bounds = *world.get::<&Bounds>(shooter).ok()?;

    let origin = DVec2::new(
        shooter_bounds.center.x,
        shooter_bounds.center.y - shooter_bounds.size.y / 2.0 + BULLET_HEIGHT / 2.0,
    );
    let destination = DVec2::new(shooter_bounds.center.x, -(BULLET_HEIGHT / 2.0));

    let entity = spawn_bullet(
        world,
        BulletKind::InvaderFired,
        origin,
        destination,
        now,
        config.invader_bullet_duration,
    );
    audio_events.push(AudioEvent::InvaderBulletFired);
    debug!(x = origin.x, "invader fired");
    Some(entity)
}

fn spawn_bullet(
    world: &mut World,
    kind: BulletKind,
    origin: DVec2,
    destination: DVec2,
    now: f64,
    duration: f64,
) -> Entity {
    world.spawn((
        Bullet {
            kind,
            origin,
            destination,
            fired_at: now,
            duration,
        },
        Bounds::new(origin, DVec2::new(BULLET_WIDTH, BULLET_HEIGHT)),
    ))
}

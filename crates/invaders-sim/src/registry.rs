//! Entity registry helpers over the hecs world.
//!
//! The world owns every live entity. Other parts of the engine hold
//! `hecs::Entity` handles and go through these helpers to classify or destroy them.

use hecs::{Entity, World};

use invaders_core::components::{Bullet, Invader, Ship};
use invaders_core::enums::{BulletKind, EntityCategory};

use crate::formation::FormationState;

/// Classify an entity by the marker components it carries.
pub fn category_of(world: &World, entity: Entity) -> Option<EntityCategory> {
    let entity_ref = world.entity(entity).ok()?;
    if entity_ref.has::<Ship>() {
        return Some(EntityCategory::Ship);
    }
    if entity_ref.has::<Invader>() {
        return Some(EntityCategory::Invader);
    }
    entity_ref
        .get::<&Bullet>()
        .map(|bullet| bullet.kind.category())
}

/// The live bullet of the given kind, if its slot is taken.
pub fn live_bullet(world: &World, kind: BulletKind) -> Option<Entity> {
    world
        .query::<&Bullet>()
        .iter()
        .find(|(_, bullet)| bullet.kind == kind)
        .map(|(entity, _)| entity)
}

/// The ship, if it is still alive.
pub fn ship(world: &World) -> Option<Entity> {
    world.query::<&Ship>().iter().next().map(|(entity, _)| entity)
}

pub fn invader_count(world: &World) -> usize {
    world.query::<&Invader>().iter().count()
}

/// Remove an entity from the world and release it from the formation.
/// Returns false if it was already gone.
pub fn destroy(world: &mut World, formation: &mut FormationState, entity: Entity) -> bool {
    if world.despawn(entity).is_err() {
        return false;
    }
    formation.release(entity);
    true
}

//! Contact resolution system. Applies game rules to queued contact events.
//!
//! Each queued event is applied at most once. An event whose entities have
//! already been removed (for instance by an earlier event in the same drain)
//! is stale and dropped; this also absorbs duplicate reports of one contact.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::{debug, trace};

use invaders_core::components::Invader;
use invaders_core::constants::INVADER_KILL_POINTS;
use invaders_core::enums::EntityCategory;
use invaders_core::events::{AudioEvent, GameEvent};

use crate::contact::ContactEvent;
use crate::formation::FormationState;
use crate::registry;
use crate::score::ScoreTracker;

/// Game rule matched by a pair of categories, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRule {
    /// Invader bullet struck the ship. Both destroyed.
    ShipHit { ship: Entity, bullet: Entity },
    /// Ship bullet struck an invader. Both destroyed, points credited.
    InvaderKilled { invader: Entity, bullet: Entity },
    /// Invader rammed the ship. The ship is destroyed.
    ShipRammed { ship: Entity },
}

/// Counters for one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainStats {
    pub applied: u32,
    pub stale: u32,
    pub unmatched: u32,
}

/// Match a pair against the rules. First match wins.
pub fn classify(
    (a, a_category): (Entity, EntityCategory),
    (b, b_category): (Entity, EntityCategory),
) -> Option<ContactRule> {
    let pick = |wanted: EntityCategory| {
        if a_category == wanted {
            Some(a)
        } else if b_category == wanted {
            Some(b)
        } else {
            None
        }
    };
    let has = |x: EntityCategory, y: EntityCategory| {
        (a_category == x && b_category == y) || (a_category == y && b_category == x)
    };

    if has(EntityCategory::Ship, EntityCategory::InvaderBullet) {
        return Some(ContactRule::ShipHit {
            ship: pick(EntityCategory::Ship)?,
            bullet: pick(EntityCategory::InvaderBullet)?,
        });
    }
    if has(EntityCategory::Invader, EntityCategory::ShipBullet) {
        return Some(ContactRule::InvaderKilled {
            invader: pick(EntityCategory::Invader)?,
            bullet: pick(EntityCategory::ShipBullet)?,
        });
    }
    if has(EntityCategory::Invader, EntityCategory::Ship) {
        return Some(ContactRule::ShipRammed {
            ship: pick(EntityCategory::Ship)?,
        });
    }
    None
}

/// Apply every event queued before this call, then leave the queue empty.
pub fn drain(
    world: &mut World,
    formation: &mut FormationState,
    score: &mut ScoreTracker,
    queue: &mut VecDeque<ContactEvent>,
    audio_events: &mut Vec<AudioEvent>,
    events: &mut Vec<GameEvent>,
) -> DrainStats {
    let mut stats = DrainStats::default();
    let pending = std::mem::take(queue);

    for contact in pending {
        let categories = (
            registry::category_of(world, contact.a),
            registry::category_of(world, contact.b),
        );
        let (Some(a_category), Some(b_category)) = categories else {
            trace!(?contact, "stale contact dropped");
            stats.stale += 1;
            continue;
        };
        if contact.a == contact.b {
            stats.unmatched += 1;
            continue;
        }

        let Some(rule) = classify((contact.a, a_category), (contact.b, b_category)) else {
            trace!(?a_category, ?b_category, "contact matches no rule");
            stats.unmatched += 1;
            continue;
        };

        apply(world, formation, score, rule, audio_events, events);
        stats.applied += 1;
    }

    stats
}

fn apply(
    world: &mut World,
    formation: &mut FormationState,
    score: &mut ScoreTracker,
    rule: ContactRule,
    audio_events: &mut Vec<AudioEvent>,
    events: &mut Vec<GameEvent>,
) {
    match rule {
        ContactRule::ShipHit { ship, bullet } => {
            registry::destroy(world, formation, ship);
            registry::destroy(world, formation, bullet);
            audio_events.push(AudioEvent::ShipHit);
            events.push(GameEvent::ShipDestroyed);
            debug!("ship hit by invader bullet");
        }
        ContactRule::InvaderKilled { invader, bullet } => {
            let cell = world
                .get::<&Invader>(invader)
                .map(|inv| (inv.row, inv.column))
                .unwrap_or_default();
            registry::destroy(world, formation, invader);
            registry::destroy(world, formation, bullet);
            score.record_kill(INVADER_KILL_POINTS);
            audio_events.push(AudioEvent::InvaderHit);
            events.push(GameEvent::InvaderDestroyed {
                row: cell.0,
                column: cell.1,
                points: INVADER_KILL_POINTS,
            });
            debug!(
                row = cell.0,
                column = cell.1,
                score = score.total(),
                "invader destroyed"
            );
        }
        ContactRule::ShipRammed { ship } => {
            registry::destroy(world, formation, ship);
            audio_events.push(AudioEvent::ShipHit);
            events.push(GameEvent::ShipDestroyed);
            debug!("ship rammed by invader");
        }
    }
}

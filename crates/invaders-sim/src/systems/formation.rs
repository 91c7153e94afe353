//! Formation movement system: timed lockstep steps with edge turns.

use glam::DVec2;
use hecs::World;
use tracing::debug;

use invaders_core::config::SimConfig;
use invaders_core::constants::EDGE_MARGIN;
use invaders_core::enums::MovementDirection;
use invaders_core::events::GameEvent;
use invaders_core::types::Bounds;

use crate::formation::FormationState;

/// Step the whole formation if its cadence has elapsed.
/// Returns the direction that was applied, or `None` if nothing moved.
pub fn advance(
    world: &mut World,
    formation: &mut FormationState,
    config: &SimConfig,
    now: f64,
    events: &mut Vec<GameEvent>,
) -> Option<MovementDirection> {
    if now - formation.last_move_at < formation.move_interval() {
        return None;
    }
    // Nothing to move; the round check will report the win.
    if formation.is_empty() {
        return None;
    }

    resolve_direction(world, formation, config, events);

    let offset = match formation.direction {
        MovementDirection::MovingRight => DVec2::new(config.formation_step, 0.0),
        MovementDirection::MovingLeft => DVec2::new(-config.formation_step, 0.0),
        MovementDirection::TurningToLeft | MovementDirection::TurningToRight => {
            DVec2::new(0.0, -config.formation_step)
        }
    };

    for &member in formation.members() {
        if let Ok(mut bounds) = world.get::<&mut Bounds>(member) {
            bounds.translate(offset);
        }
    }

    formation.last_move_at = now;
    formation.steps += 1;
    Some(formation.direction)
}

/// Re-evaluate the movement direction against the playfield walls.
/// The first invader found touching a wall triggers the turn; scanning stops there.
fn resolve_direction(
    world: &World,
    formation: &mut FormationState,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
) {
    let right_wall = config.playfield_width - EDGE_MARGIN;
    let left_wall = EDGE_MARGIN;

    let next = match formation.direction {
        MovementDirection::MovingRight => {
            let reached = formation.members().iter().any(|&member| {
                world
                    .get::<&Bounds>(member)
                    .map(|bounds| bounds.max_x() >= right_wall)
                    .unwrap_or(false)
            });
            reached.then_some(MovementDirection::TurningToLeft)
        }
        MovementDirection::MovingLeft => {
            let reached = formation.members().iter().any(|&member| {
                world
                    .get::<&Bounds>(member)
                    .map(|bounds| bounds.min_x() <= left_wall)
                    .unwrap_or(false)
            });
            reached.then_some(MovementDirection::TurningToRight)
        }
        MovementDirection::TurningToLeft => Some(MovementDirection::MovingLeft),
        MovementDirection::TurningToRight => Some(MovementDirection::MovingRight),
    };

    let Some(next) = next else {
        return;
    };

    if next.is_turning() {
        if !formation.scale_interval(config.speed_up_factor) {
            debug!(
                interval = formation.move_interval(),
                "move interval speed-up rejected"
            );
        }
        debug!(
            ?next,
            interval = formation.move_interval(),
            "formation reached the wall"
        );
        events.push(GameEvent::FormationTurned {
            direction: next,
            move_interval: formation.move_interval(),
        });
    }
    formation.direction = next;
}

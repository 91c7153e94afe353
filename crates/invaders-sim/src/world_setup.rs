//! Entity spawn factories for setting up a round.
//!
//! Creates the ship and the full invader lattice.

use glam::DVec2;
use hecs::{Entity, World};

use invaders_core::components::*;
use invaders_core::config::SimConfig;
use invaders_core::constants::*;
use invaders_core::enums::InvaderKind;
use invaders_core::types::Bounds;

/// Populate an empty world for a new round.
/// Returns the ship and the formation members in row-major order.
pub fn setup_round(world: &mut World, config: &SimConfig) -> (Entity, Vec<Entity>) {
    let ship = spawn_ship(world, config);
    let members = spawn_formation(world, config);
    (ship, members)
}

/// Spawn the ship centred horizontally at `config.ship_y`.
pub fn spawn_ship(world: &mut World, config: &SimConfig) -> Entity {
    world.spawn((
        Ship,
        Bounds::new(
            DVec2::new(config.playfield_width / 2.0, config.ship_y),
            DVec2::new(SHIP_WIDTH, SHIP_HEIGHT),
        ),
    ))
}

/// Spawn a `rows × columns` lattice. Row 0 is the lowest; each row above sits
/// two invader-heights higher.
pub fn spawn_formation(world: &mut World, config: &SimConfig) -> Vec<Entity> {
    let origin = DVec2::new(
        config.playfield_width * FORMATION_ORIGIN_X_RATIO,
        config.playfield_height * FORMATION_ORIGIN_Y_RATIO,
    );
    let pitch = DVec2::new(INVADER_WIDTH + INVADER_GRID_SPACING, INVADER_HEIGHT * 2.0);
    let size = DVec2::new(INVADER_WIDTH, INVADER_HEIGHT);

    let mut members =
        Vec::with_capacity(config.invader_rows as usize * config.invader_columns as usize);
    for row in 0..config.invader_rows {
        for column in 0..config.invader_columns {
            let center = origin + pitch * DVec2::new(column as f64, row as f64);
            let entity = world.spawn((
                Invader {
                    row,
                    column,
                    kind: InvaderKind::for_row(row),
                },
                Bounds::new(center, size),
            ));
            members.push(entity);
        }
    }
    members
}

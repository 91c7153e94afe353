//! Ship steering system.

use hecs::World;

use invaders_core::components::Ship;
use invaders_core::config::SimConfig;
use invaders_core::types::Bounds;

/// Apply the joystick velocity for one tick. The playfield edge stops the ship.
pub fn steer(world: &mut World, velocity: f64, config: &SimConfig) {
    if velocity == 0.0 {
        return;
    }
    for (_entity, (_ship, bounds)) in world.query_mut::<(&Ship, &mut Bounds)>() {
        let half_width = bounds.size.x / 2.0;
        let max_x = (config.playfield_width - half_width).max(half_width);
        let x = bounds.center.x - velocity * config.ship_speed_factor;
        bounds.center.x = x.clamp(half_width, max_x);
    }
}

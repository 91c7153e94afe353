//! Formation data model: the invader lattice's membership and cadence.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Only the formation
//! system mutates the direction and timing fields.

use hecs::Entity;

use invaders_core::enums::MovementDirection;
use invaders_core::state::FormationView;

#[derive(Debug, Clone)]
pub struct FormationState {
    /// Current movement state.
    pub direction: MovementDirection,
    /// Seconds between lockstep steps.
    move_interval: f64,
    /// Simulation time of the last step.
    pub last_move_at: f64,
    /// Lockstep steps taken this round.
    pub steps: u64,
    /// Live invaders in spawn (row-major) order. Shrinks, never regrows.
    members: Vec<Entity>,
}

impl FormationState {
    pub fn new(members: Vec<Entity>, move_interval: f64) -> Self {
        Self {
            direction: MovementDirection::default(),
            move_interval,
            last_move_at: 0.0,
            steps: 0,
            members,
        }
    }

    pub fn move_interval(&self) -> f64 {
        self.move_interval
    }

    /// Multiply the move interval. A result that is not strictly positive is
    /// rejected and the interval is left unchanged.
    pub fn scale_interval(&mut self, factor: f64) -> bool {
        let scaled = self.move_interval * factor;
        if !scaled.is_finite() || scaled <= 0.0 {
            return false;
        }
        self.move_interval = scaled;
        true
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Free a destroyed invader's slot. Unknown entities are ignored.
    pub fn release(&mut self, entity: Entity) {
        self.members.retain(|&member| member != entity);
    }

    pub fn view(&self) -> FormationView {
        FormationView {
            direction: self.direction,
            move_interval: self.move_interval,
            animation_frame: (self.steps % 2) as u8,
            live_count: self.members.len() as u32,
        }
    }
}

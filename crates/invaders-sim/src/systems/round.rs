//! Round evaluation system. Decides whether the round is over.
//!
//! Read-only: runs at the start of every tick, before anything moves.

use hecs::World;

use invaders_core::components::Invader;
use invaders_core::config::SimConfig;
use invaders_core::enums::{LossCause, RoundOutcome};
use invaders_core::types::Bounds;

use crate::registry;

/// A terminal decision for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundVerdict {
    pub outcome: RoundOutcome,
    pub cause: Option<LossCause>,
}

impl RoundVerdict {
    fn lost(cause: LossCause) -> Self {
        Self {
            outcome: RoundOutcome::Lost,
            cause: Some(cause),
        }
    }

    fn won() -> Self {
        Self {
            outcome: RoundOutcome::Won,
            cause: None,
        }
    }
}

/// Evaluate terminal conditions. Loss checks run before the win check, so a
/// dead ship loses even if the last invader fell on the same tick.
pub fn evaluate(world: &World, config: &SimConfig) -> Option<RoundVerdict> {
    if registry::ship(world).is_none() {
        return Some(RoundVerdict::lost(LossCause::ShipDestroyed));
    }

    let breached = world
        .query::<(&Invader, &Bounds)>()
        .iter()
        .any(|(_, (_, bounds))| bounds.min_y() <= config.floor_height);
    if breached {
        return Some(RoundVerdict::lost(LossCause::InvasionBreach));
    }

    if registry::invader_count(world) == 0 {
        return Some(RoundVerdict::won());
    }

    None
}

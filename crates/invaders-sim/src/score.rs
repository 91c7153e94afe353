//! Running score for the current round.

use invaders_core::state::ScoreView;

/// Accumulates points on confirmed kills. There is no decrement: the total
/// only grows until the round is torn down.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    total: u32,
    invaders_destroyed: u32,
}

impl ScoreTracker {
    pub fn credit(&mut self, points: u32) {
        self.total = self.total.saturating_add(points);
    }

    /// Credit a confirmed invader kill.
    pub fn record_kill(&mut self, points: u32) {
        self.invaders_destroyed += 1;
        self.credit(points);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn invaders_destroyed(&self) -> u32 {
        self.invaders_destroyed
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.total,
            invaders_destroyed: self.invaders_destroyed,
        }
    }
}

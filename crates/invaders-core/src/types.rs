//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Axis-aligned bounding box, stored as centre and full size.
/// y grows upward, so `min_y` is the lower edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: DVec2,
    pub size: DVec2,
}

impl Bounds {
    pub fn new(center: DVec2, size: DVec2) -> Self {
        Self { center, size }
    }

    pub fn min_x(&self) -> f64 {
        self.center.x - self.size.x / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.center.x + self.size.x / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.center.y - self.size.y / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.center.y + self.size.y / 2.0
    }

    /// Whether two boxes overlap. Touching edges count as contact.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    pub fn translate(&mut self, offset: DVec2) {
        self.center += offset;
    }
}

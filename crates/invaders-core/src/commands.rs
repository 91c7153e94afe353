//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Normalized horizontal joystick deflection in [-1, 1]. Held until replaced.
    Steer { velocity: f64 },
    /// A single tap on the fire pad.
    Fire,
}

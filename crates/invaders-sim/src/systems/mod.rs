//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! State that outlives a tick lives in components or in the engine's data models.

pub mod bullets;
pub mod contacts;
pub mod formation;
pub mod overlap;
pub mod round;
pub mod ship;
pub mod snapshot;

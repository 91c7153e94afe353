//! Simulation engine for INVADERS.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the presentation layer.

pub mod contact;
pub mod engine;
pub mod formation;
pub mod persistence;
pub mod registry;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use invaders_core as core;
pub use contact::ContactEvent;
pub use engine::SimulationEngine;

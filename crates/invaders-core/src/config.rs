//! Round configuration.
//!
//! Every field defaults to the tuning constants in `constants.rs`, so a JSON
//! document only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. `None` draws a fresh seed per engine.
    pub seed: Option<u64>,
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub invader_rows: u32,
    pub invader_columns: u32,
    pub initial_move_interval: f64,
    pub speed_up_factor: f64,
    pub formation_step: f64,
    pub ship_speed_factor: f64,
    /// Height of the ship's centre above the bottom of the playfield.
    pub ship_y: f64,
    pub floor_height: f64,
    pub ship_bullet_duration: f64,
    pub invader_bullet_duration: f64,
    /// Run the built-in overlap detector. Disable when an external
    /// collision source submits contacts.
    pub detect_contacts: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            invader_rows: INVADER_ROW_COUNT,
            invader_columns: INVADER_COLUMN_COUNT,
            initial_move_interval: INITIAL_MOVE_INTERVAL,
            speed_up_factor: SPEED_UP_FACTOR,
            formation_step: FORMATION_STEP,
            ship_speed_factor: SHIP_SPEED_FACTOR,
            ship_y: SHIP_HEIGHT / 2.0,
            floor_height: MIN_INVADER_BOTTOM_HEIGHT,
            ship_bullet_duration: SHIP_BULLET_DURATION,
            invader_bullet_duration: INVADER_BULLET_DURATION,
            detect_contacts: true,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(String),
    #[error("playfield must have positive size, got {width}x{height}")]
    EmptyPlayfield { width: f64, height: f64 },
    #[error("formation must have at least one row and column, got {rows}x{columns}")]
    EmptyFormation { rows: u32, columns: u32 },
    #[error("formation does not fit the playfield ({needed} units wide, {available} available)")]
    FormationTooWide { needed: f64, available: f64 },
    #[error("formation does not fit the playfield height (top at {top}, height {height})")]
    FormationTooTall { top: f64, height: f64 },
    #[error("formation starts at or below the floor (bottom at {bottom}, floor {floor})")]
    FormationBelowFloor { bottom: f64, floor: f64 },
    #[error("floor height must lie inside the playfield, got {0}")]
    FloorOutOfBounds(f64),
    #[error("ship must lie inside the playfield, got y = {0}")]
    ShipOutOfBounds(f64),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("speed-up factor must be in (0, 1], got {0}")]
    SpeedUpFactor(f64),
}

impl SimConfig {
    /// Deterministic config for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Total width of the formation lattice at spawn time.
    pub fn formation_width(&self) -> f64 {
        let columns = self.invader_columns as f64;
        columns * INVADER_WIDTH + (columns - 1.0).max(0.0) * INVADER_GRID_SPACING
    }

    /// Lowest `min_y` and highest `max_y` of the lattice at spawn time.
    /// Each row sits two invader-heights above the one below it.
    pub fn formation_vertical_extent(&self) -> (f64, f64) {
        let origin_y = self.playfield_height * FORMATION_ORIGIN_Y_RATIO;
        let rows_above = (self.invader_rows as f64 - 1.0).max(0.0);
        let bottom = origin_y - INVADER_HEIGHT / 2.0;
        let top = origin_y + rows_above * INVADER_HEIGHT * 2.0 + INVADER_HEIGHT / 2.0;
        (bottom, top)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(ConfigError::EmptyPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if self.invader_rows == 0 || self.invader_columns == 0 {
            return Err(ConfigError::EmptyFormation {
                rows: self.invader_rows,
                columns: self.invader_columns,
            });
        }

        let origin_x = self.playfield_width * FORMATION_ORIGIN_X_RATIO - INVADER_WIDTH / 2.0;
        let available = self.playfield_width - origin_x;
        let needed = self.formation_width();
        if needed > available {
            return Err(ConfigError::FormationTooWide { needed, available });
        }

        if !(self.floor_height >= 0.0 && self.floor_height < self.playfield_height) {
            return Err(ConfigError::FloorOutOfBounds(self.floor_height));
        }
        let ship_half_height = SHIP_HEIGHT / 2.0;
        if !(self.ship_y >= ship_half_height
            && self.ship_y <= self.playfield_height - ship_half_height)
        {
            return Err(ConfigError::ShipOutOfBounds(self.ship_y));
        }

        let (bottom, top) = self.formation_vertical_extent();
        if top > self.playfield_height {
            return Err(ConfigError::FormationTooTall {
                top,
                height: self.playfield_height,
            });
        }
        if bottom <= self.floor_height {
            return Err(ConfigError::FormationBelowFloor {
                bottom,
                floor: self.floor_height,
            });
        }

        let positive = [
            ("initial_move_interval", self.initial_move_interval),
            ("formation_step", self.formation_step),
            ("ship_speed_factor", self.ship_speed_factor),
            ("ship_bullet_duration", self.ship_bullet_duration),
            ("invader_bullet_duration", self.invader_bullet_duration),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(self.speed_up_factor > 0.0 && self.speed_up_factor <= 1.0) {
            return Err(ConfigError::SpeedUpFactor(self.speed_up_factor));
        }
        Ok(())
    }
}

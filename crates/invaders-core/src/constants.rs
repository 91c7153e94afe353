//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Default playfield width (world units).
pub const PLAYFIELD_WIDTH: f64 = 640.0;

/// Default playfield height (world units). y grows upward.
pub const PLAYFIELD_HEIGHT: f64 = 800.0;

/// Distance from the side walls at which the formation turns.
pub const EDGE_MARGIN: f64 = 1.0;

/// Invaders whose lower edge reaches this height have breached the defences.
pub const MIN_INVADER_BOTTOM_HEIGHT: f64 = 32.0;

// --- Formation ---

pub const INVADER_ROW_COUNT: u32 = 5;
pub const INVADER_COLUMN_COUNT: u32 = 10;

pub const INVADER_WIDTH: f64 = 24.0;
pub const INVADER_HEIGHT: f64 = 16.0;

/// Horizontal gap between neighbouring invaders.
pub const INVADER_GRID_SPACING: f64 = 12.0;

/// Formation origin as a fraction of playfield width.
pub const FORMATION_ORIGIN_X_RATIO: f64 = 1.0 / 3.0;

/// Formation origin as a fraction of playfield height.
pub const FORMATION_ORIGIN_Y_RATIO: f64 = 1.0 / 1.35;

/// Seconds between lockstep steps at round start.
pub const INITIAL_MOVE_INTERVAL: f64 = 1.0;

/// Applied to the move interval every time an edge is reached.
pub const SPEED_UP_FACTOR: f64 = 0.8;

/// Displacement of one lockstep step, horizontal or downward.
pub const FORMATION_STEP: f64 = 10.0;

// --- Ship ---

pub const SHIP_WIDTH: f64 = 30.0;
pub const SHIP_HEIGHT: f64 = 16.0;

/// Units per tick at full joystick deflection.
pub const SHIP_SPEED_FACTOR: f64 = 4.0;

// --- Bullets ---

pub const BULLET_WIDTH: f64 = 4.0;
pub const BULLET_HEIGHT: f64 = 8.0;

/// Seconds for a ship bullet to reach the top of the playfield.
pub const SHIP_BULLET_DURATION: f64 = 1.0;

/// Seconds for an invader bullet to reach the bottom of the playfield.
pub const INVADER_BULLET_DURATION: f64 = 2.0;

// --- Scoring ---

pub const INVADER_KILL_POINTS: u32 = 100;

// --- Physics categories ---

pub const INVADER_CATEGORY: u32 = 0x1 << 0;
pub const SHIP_FIRED_BULLET_CATEGORY: u32 = 0x1 << 1;
pub const SHIP_CATEGORY: u32 = 0x1 << 2;
pub const SCENE_EDGE_CATEGORY: u32 = 0x1 << 3;
pub const INVADER_FIRED_BULLET_CATEGORY: u32 = 0x1 << 4;

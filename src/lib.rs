//! Gatefall - a one-button gravity-dive arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game state)
//! - `config`: Play-area geometry with startup validation
//!
//! Rendering, audio, and raw input are host concerns. A host drives the game
//! by feeding [`sim::TickInput`] into [`sim::tick`] at a fixed timestep and
//! consuming the returned [`sim::GameEvent`] stream.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play-area dimensions (portrait)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 1200.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    /// Spawn height above the vertical midline, as a fraction of play height
    pub const PLAYER_SPAWN_RISE: f32 = 1.0 / 3.0;

    /// Gravity on the player (pixels/s², downward)
    pub const GRAVITY_Y: f32 = -1500.0;
    /// Vertical speed set by one activation (pixels/s)
    pub const THRUST_SPEED: f32 = 420.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 120.0;
    /// Gap height in player heights
    pub const GAP_IN_PLAYER_HEIGHTS: f32 = 4.0;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 3.0;
    /// Leftward obstacle speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 200.0;
    /// The gate sits this far ahead of its solids along x
    pub const GATE_LEAD: f32 = 30.0;
    /// Ground slab half-thickness
    pub const GROUND_HALF_THICKNESS: f32 = 1.0;

    /// Difficulty ramp
    pub const BASE_SPEED_FACTOR: f32 = 2.0;
    pub const SPEED_FACTOR_STEP: f32 = 2.0;
    /// Hard cap on the speed factor
    pub const MAX_SPEED_FACTOR: f32 = 10.0;
    /// Every Nth point raises urgency
    pub const URGENCY_EVERY: u32 = 6;
    /// Every Nth point is a milestone (urgency points win the overlap)
    pub const MILESTONE_EVERY: u32 = 3;
}

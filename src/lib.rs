//! Dash Runner - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player kinematics, spawn scheduling, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and input are left to the embedding frontend; the crate exposes
//! [`sim::GameState`] plus [`sim::tick`] as the whole host-facing surface.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Simulation rate in ticks per second
    pub const TICKS_PER_SECOND: u32 = 120;

    /// Playfield dimensions (origin top-left, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Top of the ground plane
    pub const GROUND_Y: f32 = 368.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Horizontal run speed (px/s)
    pub const PLAYER_RUN_SPEED: f32 = 160.0;
    /// Jump impulse (px/s, negative = up)
    pub const PLAYER_JUMP_VELOCITY: f32 = -330.0;
    /// Downward gravity (px/s²)
    pub const GRAVITY: f32 = 300.0;

    /// Obstacle extents
    pub const GROUND_OBSTACLE_WIDTH: f32 = 32.0;
    pub const GROUND_OBSTACLE_HEIGHT: f32 = 32.0;
    pub const FLYING_OBSTACLE_WIDTH: f32 = 36.0;
    pub const FLYING_OBSTACLE_HEIGHT: f32 = 24.0;
    /// Horizontal margin past the right edge where obstacles enter
    pub const SPAWN_MARGIN: f32 = 48.0;
}

/// Convert a duration in milliseconds to simulation ticks, rounding up so a
/// nonzero delay never collapses to zero ticks.
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    (ms as u64 * consts::TICKS_PER_SECOND as u64).div_ceil(1000)
}

/// Convert a tick count back to seconds
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 * consts::SIM_DT
}

//! Data-driven game balance
//!
//! Every progression constant for the difficulty ramp and spawn cadence lives
//! here so balance can be tweaked from a JSON file without recompiling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Difficulty progression and spawn cadence parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Obstacle speed at run start (px/s, negative = leftward)
    pub start_speed: f32,
    /// Fastest allowed obstacle speed (most negative)
    pub speed_floor: f32,
    /// Speed change applied per ramp step (negative)
    pub speed_step: f32,
    /// Simulated time between ramp steps (ms)
    pub speed_ramp_interval_ms: u32,
    /// Shortest spawn delay at run start (ms)
    pub min_spawn_delay_ms: u32,
    /// Longest spawn delay at run start (ms)
    pub max_spawn_delay_ms: u32,
    /// Smallest delay the bounds may ever tighten to (ms)
    pub spawn_delay_floor_ms: u32,
    /// Delay reduction applied per spawn decision (ms)
    pub spawn_delay_step_ms: u32,
    /// Fraction of the playfield height flying obstacles hover above the ground
    pub flying_height_fraction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_speed: -100.0,
            speed_floor: -500.0,
            speed_step: -20.0,
            speed_ramp_interval_ms: 5000,
            min_spawn_delay_ms: 3000,
            max_spawn_delay_ms: 5000,
            spawn_delay_floor_ms: 1000,
            spawn_delay_step_ms: 100,
            flying_height_fraction: 0.35,
        }
    }
}

/// Failure loading or validating a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning file: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning override from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject parameter sets the progression math cannot run on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.start_speed >= 0.0 || self.speed_floor >= 0.0 {
            return Err(TuningError::Invalid("obstacle speeds must be negative"));
        }
        if self.speed_floor > self.start_speed {
            return Err(TuningError::Invalid(
                "speed_floor must be at least as fast as start_speed",
            ));
        }
        if self.speed_step >= 0.0 {
            return Err(TuningError::Invalid("speed_step must be negative"));
        }
        if self.speed_ramp_interval_ms == 0 {
            return Err(TuningError::Invalid("speed_ramp_interval_ms must be nonzero"));
        }
        if self.min_spawn_delay_ms > self.max_spawn_delay_ms {
            return Err(TuningError::Invalid(
                "min_spawn_delay_ms must not exceed max_spawn_delay_ms",
            ));
        }
        if self.spawn_delay_floor_ms == 0 {
            return Err(TuningError::Invalid("spawn_delay_floor_ms must be nonzero"));
        }
        if self.spawn_delay_floor_ms > self.min_spawn_delay_ms {
            return Err(TuningError::Invalid(
                "spawn_delay_floor_ms must not exceed min_spawn_delay_ms",
            ));
        }
        if self.spawn_delay_step_ms == 0 {
            return Err(TuningError::Invalid("spawn_delay_step_ms must be nonzero"));
        }
        if !(0.0..1.0).contains(&self.flying_height_fraction) {
            return Err(TuningError::Invalid(
                "flying_height_fraction must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

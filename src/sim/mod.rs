//! Deterministic simulation module
//!
//! All gameplay logic lives here and must stay deterministic:
//! - Fixed timestep only
//! - Randomness only from the run's seeded RNG
//! - Stable entity iteration order (by ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod scheduler;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use difficulty::Difficulty;
pub use scheduler::{SchedulerState, SpawnScheduler};
pub use spawn::{ObstacleKind, SpawnEvent, roll_obstacle, spawn_position};
pub use state::{GamePhase, GameState, Obstacle, Player, RunSummary};
pub use tick::{TickInput, tick};

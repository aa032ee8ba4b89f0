//! Game state and core simulation types
//!
//! Everything a run needs to advance deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::Difficulty;
use super::scheduler::SpawnScheduler;
use super::spawn::{ObstacleKind, SpawnEvent};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first jump input
    Ready,
    /// Active run
    Running,
    /// Run ended on a collision
    GameOver,
}

/// The player-controlled runner
#[derive(Debug, Clone)]
pub struct Player {
    /// Position of the sprite center (y grows downward)
    pub pos: Vec2,
    pub vel: Vec2,
    /// True while standing on the ground line
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, GROUND_Y - PLAYER_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            grounded: true,
        }
    }
}

impl Player {
    /// Bounding box for collision against obstacles
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0))
    }

    /// Advance one tick of input, gravity, and ground contact.
    ///
    /// Jumping is only possible while grounded; landing zeroes vertical
    /// velocity and restores the grounded flag.
    pub fn step(&mut self, left: bool, right: bool, jump: bool, dt: f32) {
        self.vel.x = match (left, right) {
            (true, false) => -PLAYER_RUN_SPEED,
            (false, true) => PLAYER_RUN_SPEED,
            _ => 0.0,
        };

        if jump && self.grounded {
            self.vel.y = PLAYER_JUMP_VELOCITY;
            self.grounded = false;
        }

        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;

        let half_w = PLAYER_WIDTH / 2.0;
        self.pos.x = self.pos.x.clamp(half_w, WORLD_WIDTH - half_w);

        let feet = self.pos.y + PLAYER_HEIGHT / 2.0;
        if feet >= GROUND_Y {
            self.pos.y = GROUND_Y - PLAYER_HEIGHT / 2.0;
            self.vel.y = 0.0;
            self.grounded = true;
        }
    }
}

/// A moving obstacle entity
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Position of the sprite center
    pub pos: Vec2,
    /// Captured from the ramp at spawn; later ramp steps do not touch it
    pub vel_x: f32,
}

impl Obstacle {
    pub fn from_event(id: u32, event: SpawnEvent) -> Self {
        Self {
            id,
            kind: event.kind,
            pos: event.pos,
            vel_x: event.velocity_x,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.kind.half_extents())
    }

    /// Move leftward by the captured velocity
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.vel_x * dt;
    }

    /// True once the whole sprite has left the visible playfield
    pub fn off_screen_left(&self) -> bool {
        self.pos.x + self.kind.half_extents().x < 0.0
    }
}

/// End-of-run statistics (the demo binary prints this as JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub survived_secs: f32,
    pub obstacles_spawned: u32,
    pub obstacles_cleared: u32,
    /// Obstacle speed when the run ended (px/s)
    pub final_speed: f32,
}

/// Complete game state (deterministic, replayable from its seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG stream, the only source of randomness
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter (starts counting when the run starts)
    pub time_ticks: u64,
    pub difficulty: Difficulty,
    pub scheduler: SpawnScheduler,
    pub player: Player,
    /// Live obstacles (sorted by id for deterministic iteration)
    pub obstacles: Vec<Obstacle>,
    pub obstacles_spawned: u32,
    pub obstacles_cleared: u32,
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh Ready state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            time_ticks: 0,
            difficulty: Difficulty::new(&tuning),
            scheduler: SpawnScheduler::new(&tuning),
            player: Player::default(),
            obstacles: Vec::new(),
            obstacles_spawned: 0,
            obstacles_cleared: 0,
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Materialize a spawn event as a live obstacle
    pub fn push_obstacle(&mut self, event: SpawnEvent) {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle::from_event(id, event));
        self.obstacles_spawned += 1;
    }

    /// Tear down and rebuild everything for a fresh run. Controller and
    /// scheduler are recreated together; nothing survives from the old run.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed, self.tuning.clone());
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.time_ticks,
            survived_secs: crate::ticks_to_secs(self.time_ticks),
            obstacles_spawned: self.obstacles_spawned,
            obstacles_cleared: self.obstacles_cleared,
            final_speed: self.difficulty.speed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_jump_and_land_cycle() {
        let mut player = Player::default();
        assert!(player.grounded);

        player.step(false, false, true, SIM_DT);
        assert!(!player.grounded);
        assert!(player.vel.y < 0.0);

        // Airborne jumps are ignored
        let rising_vel = player.vel.y;
        player.step(false, false, true, SIM_DT);
        assert!(player.vel.y > rising_vel); // gravity only, no second impulse

        // Fall back down and land
        for _ in 0..10_000 {
            player.step(false, false, false, SIM_DT);
            if player.grounded {
                break;
            }
        }
        assert!(player.grounded);
        assert_eq!(player.pos.y, GROUND_Y - PLAYER_HEIGHT / 2.0);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_player_never_sinks_below_ground() {
        let mut player = Player::default();
        for _ in 0..1000 {
            player.step(false, true, false, SIM_DT);
            assert!(player.pos.y + PLAYER_HEIGHT / 2.0 <= GROUND_Y);
        }
    }

    #[test]
    fn test_player_clamped_to_playfield() {
        let mut player = Player::default();
        for _ in 0..10_000 {
            player.step(false, true, false, SIM_DT);
        }
        assert_eq!(player.pos.x, WORLD_WIDTH - PLAYER_WIDTH / 2.0);
    }

    #[test]
    fn test_obstacle_moves_left_and_retires() {
        let event = SpawnEvent {
            kind: ObstacleKind::Ground,
            pos: Vec2::new(10.0, GROUND_Y - 16.0),
            velocity_x: -400.0,
        };
        let mut obstacle = Obstacle::from_event(1, event);
        assert!(!obstacle.off_screen_left());

        for _ in 0..20 {
            obstacle.advance(SIM_DT);
        }
        assert!(obstacle.pos.x < 10.0);
        assert!(obstacle.off_screen_left());
    }

    #[test]
    fn test_restart_rebuilds_everything() {
        let mut state = GameState::new(7, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.obstacles_spawned = 9;
        state.time_ticks = 1234;

        state.restart(8);
        assert_eq!(state.seed, 8);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.obstacles_spawned, 0);
        assert!(state.obstacles.is_empty());
        assert!(!state.scheduler.is_armed());
    }

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut state = GameState::new(1, Tuning::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}

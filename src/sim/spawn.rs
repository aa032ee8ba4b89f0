//! Obstacle kind and spawn position policy
//!
//! Stateless: given a uniform random draw and the playfield extents, decide
//! what the next obstacle looks like and where it enters the screen.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// The two obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Sits on the ground line; cleared by jumping
    Ground,
    /// Hovers above the ground; passes over a grounded player
    Flying,
}

impl ObstacleKind {
    /// Half extents of this kind's bounding box
    pub fn half_extents(&self) -> Vec2 {
        match self {
            ObstacleKind::Ground => Vec2::new(
                GROUND_OBSTACLE_WIDTH / 2.0,
                GROUND_OBSTACLE_HEIGHT / 2.0,
            ),
            ObstacleKind::Flying => Vec2::new(
                FLYING_OBSTACLE_WIDTH / 2.0,
                FLYING_OBSTACLE_HEIGHT / 2.0,
            ),
        }
    }
}

/// Transient description of one obstacle to be created
#[derive(Debug, Clone, Copy)]
pub struct SpawnEvent {
    pub kind: ObstacleKind,
    /// Entry position (center)
    pub pos: Vec2,
    /// Horizontal velocity captured from the difficulty ramp (px/s)
    pub velocity_x: f32,
}

/// Roll the next obstacle: independent 50/50 kind draw, entry position just
/// past the right edge, velocity captured from the ramp at this instant.
pub fn roll_obstacle(
    rng: &mut impl Rng,
    speed: f32,
    flying_height_fraction: f32,
) -> SpawnEvent {
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Ground
    } else {
        ObstacleKind::Flying
    };
    SpawnEvent {
        kind,
        pos: spawn_position(kind, flying_height_fraction),
        velocity_x: speed,
    }
}

/// Entry position for a kind. Ground obstacles sit on the ground line; flying
/// obstacles hover a fixed fraction of the playfield height above it.
pub fn spawn_position(kind: ObstacleKind, flying_height_fraction: f32) -> Vec2 {
    let x = WORLD_WIDTH + SPAWN_MARGIN;
    let y = match kind {
        ObstacleKind::Ground => GROUND_Y - GROUND_OBSTACLE_HEIGHT / 2.0,
        ObstacleKind::Flying => GROUND_Y - flying_height_fraction * WORLD_HEIGHT,
    };
    Vec2::new(x, y)
}

//! Fixed timestep simulation tick
//!
//! Core game loop that advances a run deterministically: the difficulty ramp
//! on its wall-clock cadence, the spawn scheduler, player kinematics, obstacle
//! motion, and the terminal collision check.

use super::state::{GamePhase, GameState};
use crate::ms_to_ticks;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Restart after game over
    pub restart: bool,
    /// Demo mode - a trivial autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut input = *input;
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    match state.phase {
        GamePhase::Ready => {
            // The first jump starts the run and arms the spawn scheduler
            if input.jump {
                state.phase = GamePhase::Running;
                let now = state.time_ticks;
                state
                    .scheduler
                    .start(now, &mut state.difficulty, &mut state.rng);
                state.player.step(input.left, input.right, true, dt);
            }
        }
        GamePhase::Running => run_tick(state, &input, dt),
        GamePhase::GameOver => {
            if input.restart {
                let seed = state.seed.wrapping_add(1);
                state.restart(seed);
            }
        }
    }
}

fn run_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Speed ramp on its own fixed cadence, independent of spawn events
    let ramp_ticks = ms_to_ticks(state.tuning.speed_ramp_interval_ms);
    if ramp_ticks > 0 && state.time_ticks % ramp_ticks == 0 {
        state.difficulty.increase_speed();
    }

    // Spawn scheduler: at most one fire per tick, re-armed before it returns
    let now = state.time_ticks;
    if let Some(event) = state
        .scheduler
        .poll(now, &mut state.difficulty, &mut state.rng)
    {
        state.push_obstacle(event);
    }

    state.player.step(input.left, input.right, input.jump, dt);

    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
    }

    // Obstacles that leave the left edge count as cleared
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.off_screen_left());
    state.obstacles_cleared += (before - state.obstacles.len()) as u32;

    // Any overlap ends the run; the scheduler is cancelled so no spawn can
    // land after the restart
    let player_box = state.player.aabb();
    if state
        .obstacles
        .iter()
        .any(|o| player_box.overlaps(&o.aabb()))
    {
        state.scheduler.cancel();
        state.phase = GamePhase::GameOver;
    }
}

/// Trivial demo AI: start the run, then hop over approaching ground obstacles.
fn autopilot(state: &GameState, input: &mut TickInput) {
    use super::spawn::ObstacleKind;

    match state.phase {
        GamePhase::Ready => input.jump = true,
        GamePhase::Running => {
            let player_x = state.player.pos.x;
            let nearest_ahead = state
                .obstacles
                .iter()
                .filter(|o| o.kind == ObstacleKind::Ground && o.pos.x > player_x)
                .map(|o| o.pos.x - player_x)
                .fold(f32::INFINITY, f32::min);

            // Lead distance grows with approach speed
            let lead = (state.difficulty.speed().abs() * 0.55).max(90.0);
            input.jump = nearest_ahead < lead;
        }
        GamePhase::GameOver => {}
    }
}

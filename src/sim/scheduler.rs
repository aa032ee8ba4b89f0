//! Self-rescheduling spawn timer
//!
//! A one-shot deadline that, when it elapses, emits a [`SpawnEvent`] and
//! immediately re-arms itself using freshly tightened delay bounds. At most
//! one deadline is ever pending: arming replaces the previous deadline, and
//! cancelling takes it out of the scheduler entirely, so a stale timer cannot
//! fire after a restart.

use rand::Rng;

use super::difficulty::Difficulty;
use super::spawn::{self, SpawnEvent};
use crate::ms_to_ticks;
use crate::tuning::Tuning;

/// Scheduler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No pending deadline
    Idle,
    /// A spawn fires at the given tick unless cancelled first
    Armed { fires_at: u64 },
}

/// Drives periodic obstacle creation via self-rescheduling deadlines
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    state: SchedulerState,
    flying_height_fraction: f32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            state: SchedulerState::Idle,
            flying_height_fraction: tuning.flying_height_fraction,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, SchedulerState::Armed { .. })
    }

    /// Arm the next spawn, replacing any pending deadline.
    ///
    /// Tightens the delay bounds before sampling (tighten-before-sample
    /// order), then schedules the fire `delay` ms past `now`.
    pub fn start(&mut self, now: u64, difficulty: &mut Difficulty, rng: &mut impl Rng) {
        difficulty.tighten_delay_bounds();
        let delay_ms = difficulty.sample_delay_ms(rng);
        let (min, max) = difficulty.delay_bounds_ms();
        log::debug!("armed spawn in {delay_ms}ms (bounds {min}..{max}ms)");
        self.state = SchedulerState::Armed {
            fires_at: now + ms_to_ticks(delay_ms),
        };
    }

    /// Drop the pending deadline, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Advance the scheduler to `now`.
    ///
    /// Returns the spawn to materialize if the armed deadline elapsed. The
    /// scheduler re-arms itself before returning, so a fire can never stall
    /// the cadence; while idle or still pending this is a no-op.
    pub fn poll(
        &mut self,
        now: u64,
        difficulty: &mut Difficulty,
        rng: &mut impl Rng,
    ) -> Option<SpawnEvent> {
        match self.state {
            SchedulerState::Armed { fires_at } if now >= fires_at => {
                let event = self.fire(difficulty, rng);
                self.start(now, difficulty, rng);
                Some(event)
            }
            _ => None,
        }
    }

    /// Roll the next obstacle at the current ramp speed. Reachable only
    /// through `poll`, never from arbitrary callers.
    fn fire(&self, difficulty: &Difficulty, rng: &mut impl Rng) -> SpawnEvent {
        spawn::roll_obstacle(rng, difficulty.speed(), self.flying_height_fraction)
    }
}

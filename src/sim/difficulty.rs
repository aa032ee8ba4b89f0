//! Difficulty ramp state
//!
//! Owns the evolving obstacle speed and spawn-delay bounds for one run. Speed
//! ratchets toward its floor on a fixed cadence; delay bounds tighten once per
//! spawn decision. Both progressions are monotonic and clamped.

use rand::Rng;

use crate::tuning::Tuning;

/// Evolving speed and spawn-delay bounds
#[derive(Debug, Clone)]
pub struct Difficulty {
    /// Current obstacle speed (px/s, negative = leftward)
    speed: f32,
    /// Fastest allowed speed (most negative)
    speed_floor: f32,
    /// Applied per ramp step (negative)
    speed_step: f32,
    /// Current spawn-delay bounds (ms)
    min_delay_ms: u32,
    max_delay_ms: u32,
    /// Smallest permitted delay (ms)
    delay_floor_ms: u32,
    /// Subtracted from both bounds per spawn decision (ms)
    delay_step_ms: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.start_speed,
            speed_floor: tuning.speed_floor,
            speed_step: tuning.speed_step,
            min_delay_ms: tuning.min_spawn_delay_ms,
            max_delay_ms: tuning.max_spawn_delay_ms,
            delay_floor_ms: tuning.spawn_delay_floor_ms,
            delay_step_ms: tuning.spawn_delay_step_ms,
        }
    }

    /// Current obstacle speed (px/s, negative = leftward)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current spawn-delay bounds in ms (min, max)
    #[inline]
    pub fn delay_bounds_ms(&self) -> (u32, u32) {
        (self.min_delay_ms, self.max_delay_ms)
    }

    /// Ratchet the speed one step toward the floor. No-op once the floor is
    /// reached, so the ramp never overshoots.
    pub fn increase_speed(&mut self) {
        if self.speed > self.speed_floor {
            self.speed = (self.speed + self.speed_step).max(self.speed_floor);
        }
    }

    /// Tighten both delay bounds by one step.
    ///
    /// The min bound clamps at the floor; the max bound clamps at the
    /// already-updated min, so the bounds can never cross.
    pub fn tighten_delay_bounds(&mut self) {
        self.min_delay_ms = self
            .min_delay_ms
            .saturating_sub(self.delay_step_ms)
            .max(self.delay_floor_ms);
        self.max_delay_ms = self
            .max_delay_ms
            .saturating_sub(self.delay_step_ms)
            .max(self.min_delay_ms);
    }

    /// Draw the next spawn delay uniformly from the current bounds, inclusive.
    pub fn sample_delay_ms(&self, rng: &mut impl Rng) -> u32 {
        rng.random_range(self.min_delay_ms..=self.max_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn tuning(
        start_speed: f32,
        speed_floor: f32,
        speed_step: f32,
        min_ms: u32,
        max_ms: u32,
        floor_ms: u32,
        step_ms: u32,
    ) -> Tuning {
        Tuning {
            start_speed,
            speed_floor,
            speed_step,
            min_spawn_delay_ms: min_ms,
            max_spawn_delay_ms: max_ms,
            spawn_delay_floor_ms: floor_ms,
            spawn_delay_step_ms: step_ms,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_speed_ramp_clamps_at_floor() {
        let mut d = Difficulty::new(&tuning(-100.0, -500.0, -20.0, 3000, 5000, 1000, 100));
        for _ in 0..20 {
            d.increase_speed();
        }
        assert_eq!(d.speed(), -500.0);

        // Further steps are no-ops, not overshoot
        d.increase_speed();
        assert_eq!(d.speed(), -500.0);
    }

    #[test]
    fn test_delay_bounds_tighten_to_floor() {
        let mut d = Difficulty::new(&tuning(-100.0, -500.0, -20.0, 3000, 5000, 1000, 100));
        for _ in 0..25 {
            d.tighten_delay_bounds();
        }
        // Min reaches the floor after 20 steps; max keeps tightening alone
        assert_eq!(d.delay_bounds_ms(), (1000, 2500));
    }

    #[test]
    fn test_max_bound_stops_at_min() {
        // Step larger than the gap between the bounds and the floor
        let mut d = Difficulty::new(&tuning(-100.0, -500.0, -20.0, 1100, 1200, 1000, 300));
        d.tighten_delay_bounds();
        assert_eq!(d.delay_bounds_ms(), (1000, 1000));
    }

    #[test]
    fn test_sample_delay_at_collapsed_bounds() {
        let mut d = Difficulty::new(&tuning(-100.0, -500.0, -20.0, 1000, 1000, 1000, 100));
        let mut rng = Pcg32::seed_from_u64(1);
        d.tighten_delay_bounds();
        assert_eq!(d.sample_delay_ms(&mut rng), 1000);
    }

    proptest! {
        #[test]
        fn prop_speed_is_monotonic_and_bounded(steps in 0usize..64) {
            let t = tuning(-80.0, -640.0, -35.0, 3000, 5000, 1000, 100);
            let mut d = Difficulty::new(&t);
            let mut prev = d.speed();
            for _ in 0..steps {
                d.increase_speed();
                prop_assert!(d.speed() <= prev);
                prop_assert!(d.speed() >= t.speed_floor);
                prev = d.speed();
            }
        }

        #[test]
        fn prop_delay_bounds_stay_ordered(
            min0 in 100u32..6000,
            spread in 0u32..4000,
            floor in 1u32..2000,
            step in 1u32..500,
            calls in 1usize..80,
        ) {
            let t = tuning(-100.0, -500.0, -20.0, min0, min0 + spread, floor, step);
            let mut d = Difficulty::new(&t);
            for _ in 0..calls {
                d.tighten_delay_bounds();
                let (min, max) = d.delay_bounds_ms();
                prop_assert!(min >= floor);
                prop_assert!(max >= min);
            }
        }

        #[test]
        fn prop_sampled_delay_within_bounds(seed in 0u64..1024, calls in 0usize..40) {
            let t = tuning(-100.0, -500.0, -20.0, 3000, 5000, 1000, 100);
            let mut d = Difficulty::new(&t);
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..calls {
                d.tighten_delay_bounds();
            }
            let (min, max) = d.delay_bounds_ms();
            let delay = d.sample_delay_ms(&mut rng);
            prop_assert!(delay >= min && delay <= max);
        }
    }
}

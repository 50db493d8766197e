use arrayvec::ArrayVec;

use super::{Movement, StepClock};
use crate::config::HeroConfig;
use crate::types::{Direction8, Displacement, Tick};

/// Movement along a short sequence of grid steps.
///
/// Each step covers one grid cell ([`HeroConfig::GRID_SIZE`] pixels).
#[derive(Clone, Debug)]
pub struct PathMovement {
    steps: ArrayVec<Direction8, { PathMovement::MAX_STEPS }>,
    current: usize,
    pixels_in_step: i32,
    clock: StepClock,
    distance: u32,
}

impl PathMovement {
    pub const MAX_STEPS: usize = 8;

    /// Creates a movement over `steps` (truncated to [`Self::MAX_STEPS`]),
    /// starting at `now`.
    pub fn new(steps: impl IntoIterator<Item = Direction8>, speed: u32, now: Tick) -> Self {
        let steps: ArrayVec<Direction8, { Self::MAX_STEPS }> =
            steps.into_iter().take(Self::MAX_STEPS).collect();
        let mut clock = StepClock::new(speed);
        clock.restart(now);
        Self {
            steps,
            current: 0,
            pixels_in_step: 0,
            clock,
            distance: 0,
        }
    }

    /// `count` grid steps in the same direction.
    pub fn repeated(direction: Direction8, count: usize, speed: u32, now: Tick) -> Self {
        Self::new(std::iter::repeat_n(direction, count), speed, now)
    }
}

impl Movement for PathMovement {
    fn name(&self) -> &'static str {
        "path"
    }

    fn next_step(&mut self, now: Tick) -> Option<Displacement> {
        let direction = *self.steps.get(self.current)?;
        if !self.clock.take_due(now) {
            return None;
        }

        self.distance += 1;
        self.pixels_in_step += 1;
        if self.pixels_in_step == HeroConfig::GRID_SIZE {
            self.pixels_in_step = 0;
            self.current += 1;
        }
        Some(direction.unit())
    }

    fn is_finished(&self) -> bool {
        self.current >= self.steps.len()
    }

    fn set_suspended(&mut self, suspended: bool, now: Tick) {
        self.clock.set_suspended(suspended, now);
    }

    fn total_distance_covered(&self) -> u32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_cover_sixteen_pixels_then_finish() {
        let mut movement = PathMovement::repeated(Direction8::Right, 2, 1000, Tick(0));
        let mut total = Displacement::ZERO;
        let mut now = Tick(0);
        while !movement.is_finished() {
            now += 1;
            if let Some(step) = movement.next_step(now) {
                total.dx += step.dx;
                total.dy += step.dy;
            }
        }

        assert_eq!(total, Displacement::new(16, 0));
        assert_eq!(movement.total_distance_covered(), 16);
        assert_eq!(movement.next_step(Tick(1_000)), None);
    }

    #[test]
    fn empty_path_is_finished_immediately() {
        let movement = PathMovement::new(std::iter::empty(), 40, Tick(0));
        assert!(movement.is_finished());
    }
}

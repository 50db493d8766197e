use super::{Movement, StepClock};
use crate::types::{Displacement, Tick};

/// Movement along a fixed angle for a bounded distance.
#[derive(Clone, Debug)]
pub struct StraightMovement {
    unit_x: f64,
    unit_y: f64,
    max_distance: u32,
    clock: StepClock,
    distance: u32,
    emitted: Displacement,
}

impl StraightMovement {
    /// Creates a movement heading along `angle` (radians, trigonometric
    /// convention) that stops after `max_distance` pixels.
    pub fn new(angle: f64, speed: u32, max_distance: u32, now: Tick) -> Self {
        let mut clock = StepClock::new(speed);
        clock.restart(now);
        Self {
            unit_x: angle.cos(),
            // screen y grows downward
            unit_y: -angle.sin(),
            max_distance,
            clock,
            distance: 0,
            emitted: Displacement::ZERO,
        }
    }
}

impl Movement for StraightMovement {
    fn name(&self) -> &'static str {
        "straight"
    }

    fn next_step(&mut self, now: Tick) -> Option<Displacement> {
        if self.is_finished() || !self.clock.take_due(now) {
            return None;
        }

        self.distance += 1;
        let traveled = f64::from(self.distance);
        let target_x = (self.unit_x * traveled).round() as i32;
        let target_y = (self.unit_y * traveled).round() as i32;
        let step = Displacement::new(target_x - self.emitted.dx, target_y - self.emitted.dy);
        self.emitted = Displacement::new(target_x, target_y);
        Some(step)
    }

    fn is_finished(&self) -> bool {
        self.distance >= self.max_distance
    }

    fn set_suspended(&mut self, suspended: bool, now: Tick) {
        self.clock.set_suspended(suspended, now);
    }

    fn total_distance_covered(&self) -> u32 {
        self.distance
    }
}

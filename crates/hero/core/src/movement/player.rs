use super::{Movement, MovementInput, StepClock};
use crate::types::{Direction8, Displacement, Tick};

/// Movement following the direction currently wanted by the player.
#[derive(Clone, Debug)]
pub struct PlayerMovement {
    direction: Option<Direction8>,
    clock: StepClock,
    distance: u32,
}

impl PlayerMovement {
    pub fn new(speed: u32) -> Self {
        Self {
            direction: None,
            clock: StepClock::new(speed),
            distance: 0,
        }
    }
}

impl Movement for PlayerMovement {
    fn name(&self) -> &'static str {
        "player"
    }

    fn compute_direction(&mut self, input: MovementInput, now: Tick) -> bool {
        if input.wanted_direction == self.direction {
            return false;
        }

        self.direction = input.wanted_direction;
        if self.direction.is_some() {
            self.clock.restart(now);
        } else {
            self.clock.stop();
        }
        true
    }

    fn wanted_direction(&self) -> Option<Direction8> {
        self.direction
    }

    fn next_step(&mut self, now: Tick) -> Option<Displacement> {
        let direction = self.direction?;
        if !self.clock.take_due(now) {
            return None;
        }
        self.distance += 1;
        Some(direction.unit())
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn set_suspended(&mut self, suspended: bool, now: Tick) {
        self.clock.set_suspended(suspended, now);
    }

    fn total_distance_covered(&self) -> u32 {
        self.distance
    }
}

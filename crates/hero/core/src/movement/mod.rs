//! Movement primitives attached to the hero.
//!
//! A movement is a pixel integrator: each call to [`Movement::next_step`]
//! yields at most one pixel of displacement that is due at the given time.
//! The hero controller applies the steps one at a time so that obstacle tests
//! and position notifications happen for every pixel.

mod path;
mod player;
mod straight;

pub use path::PathMovement;
pub use player::PlayerMovement;
pub use straight::StraightMovement;

use std::fmt;

use crate::types::{Direction8, Displacement, Tick};

/// Player input consumed by direction-driven movements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub wanted_direction: Option<Direction8>,
}

/// A movement primitive driving the hero's position.
pub trait Movement: fmt::Debug {
    /// Diagnostic name of the movement.
    fn name(&self) -> &'static str;

    /// Recomputes the movement direction from player input.
    ///
    /// Returns `true` when the direction changed. Movements that do not read
    /// input keep the default.
    fn compute_direction(&mut self, _input: MovementInput, _now: Tick) -> bool {
        false
    }

    /// Direction the movement currently wants to go, if it is input-driven.
    fn wanted_direction(&self) -> Option<Direction8> {
        None
    }

    /// Returns the next single-pixel step due at `now`, if any.
    fn next_step(&mut self, now: Tick) -> Option<Displacement>;

    fn is_finished(&self) -> bool;

    fn set_suspended(&mut self, suspended: bool, now: Tick);

    /// Number of pixel steps produced since the movement started.
    fn total_distance_covered(&self) -> u32;
}

/// Paces pixel steps at a fixed speed and shifts its schedule across pauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StepClock {
    delay: u64,
    next_step_at: Option<Tick>,
    suspended_since: Option<Tick>,
}

impl StepClock {
    /// Creates a stopped clock for a speed in pixels per second.
    pub(crate) fn new(speed: u32) -> Self {
        let delay = 1000 / u64::from(speed.max(1));
        Self {
            delay: delay.max(1),
            next_step_at: None,
            suspended_since: None,
        }
    }

    /// Schedules the first step one delay after `now`.
    pub(crate) fn restart(&mut self, now: Tick) {
        self.next_step_at = Some(now + self.delay);
    }

    pub(crate) fn stop(&mut self) {
        self.next_step_at = None;
    }

    /// Consumes one due step, if any.
    pub(crate) fn take_due(&mut self, now: Tick) -> bool {
        if self.suspended_since.is_some() {
            return false;
        }
        match self.next_step_at {
            Some(due) if due <= now => {
                self.next_step_at = Some(due + self.delay);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_suspended(&mut self, suspended: bool, now: Tick) {
        match (suspended, self.suspended_since) {
            (true, None) => self.suspended_since = Some(now),
            (false, Some(since)) => {
                let paused = now.saturating_since(since);
                if let Some(due) = self.next_step_at.as_mut() {
                    *due += paused;
                }
                self.suspended_since = None;
            }
            _ => {}
        }
    }
}

//! Timed player input replayed by the simulator.

use hero_core::{Command, Point, Tick};

/// One scripted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Press(Command),
    Release(Command),
    /// Hits the hero, optionally from a point (knockback source).
    Hurt { source: Option<Point>, damage: u32 },
    /// Pauses or resumes the game.
    Suspend(bool),
    Freeze,
    Unfreeze,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptEvent {
    pub at: Tick,
    pub step: ScriptStep,
}

/// Input events ordered by date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputScript {
    duration: Tick,
    events: Vec<ScriptEvent>,
}

impl InputScript {
    /// Builds a script; events are sorted by date, keeping the given order
    /// for events sharing a date.
    ///
    /// The duration is extended to cover the last event.
    pub fn new(mut events: Vec<ScriptEvent>, duration: Tick) -> Self {
        events.sort_by_key(|event| event.at);
        let last = events.last().map_or(Tick::ZERO, |event| event.at);
        Self {
            duration: duration.max(last),
            events,
        }
    }

    pub fn duration(&self) -> Tick {
        self.duration
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_sorted_stably() {
        let script = InputScript::new(
            vec![
                ScriptEvent {
                    at: Tick(50),
                    step: ScriptStep::Release(Command::Right),
                },
                ScriptEvent {
                    at: Tick(0),
                    step: ScriptStep::Press(Command::Right),
                },
                ScriptEvent {
                    at: Tick(50),
                    step: ScriptStep::Press(Command::Action),
                },
            ],
            Tick(10),
        );

        let steps: Vec<_> = script.events().iter().map(|event| event.step).collect();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Press(Command::Right),
                ScriptStep::Release(Command::Right),
                ScriptStep::Press(Command::Action),
            ]
        );
        assert_eq!(script.duration(), Tick(50));
    }
}

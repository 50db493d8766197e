//! Fixed-tick replay of an input script against a sandboxed hero.

use hero_core::{Equipment, Hero, HeroConfig, Point, StateId, Tick};
use tracing::{debug, info};

use crate::sandbox::Sandbox;
use crate::script::{InputScript, ScriptStep};

/// Default simulation step, in milliseconds.
pub const DEFAULT_TICK: u64 = 10;

/// A state change observed during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub at: Tick,
    pub from: &'static str,
    pub to: &'static str,
}

/// Outcome of a complete run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ended_at: Tick,
    pub final_state: &'static str,
    pub final_position: Point,
    pub life: u32,
    pub transitions: Vec<Transition>,
}

/// Drives a hero tick by tick, applying script events as their date comes.
pub struct Simulation {
    sandbox: Sandbox,
    hero: Hero,
    script: InputScript,
    next_event: usize,
    tick: u64,
    now: Tick,
    observed: (Option<StateId>, &'static str),
    transitions: Vec<Transition>,
}

impl Simulation {
    pub fn new(sandbox: Sandbox, config: HeroConfig, script: InputScript) -> Self {
        let hero = sandbox.spawn_hero(config, Tick::ZERO);
        let observed = (hero.state().core().id(), hero.state_name());
        Self {
            sandbox,
            hero,
            script,
            next_event: 0,
            tick: DEFAULT_TICK,
            now: Tick::ZERO,
            observed,
            transitions: Vec::new(),
        }
    }

    /// Sets the simulation step. A zero step is raised to one millisecond.
    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick.max(1);
        self
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn is_finished(&self) -> bool {
        self.now >= self.script.duration() && self.next_event >= self.script.events().len()
    }

    /// Advances the clock by one tick.
    ///
    /// The hero is updated first, then the room reports collisions and the
    /// facing entity, and finally the script events due by now are applied.
    pub fn step(&mut self) {
        self.now += self.tick;
        let now = self.now;

        self.hero.update(now);
        self.observe();
        self.sandbox.sync(&mut self.hero);
        self.observe();

        while let Some(event) = self.script.events().get(self.next_event).copied() {
            if event.at > now {
                break;
            }
            self.next_event += 1;
            self.apply(event.step, now);
            self.observe();
        }
    }

    /// Runs until the script is over.
    pub fn run(mut self) -> RunSummary {
        while !self.is_finished() {
            self.step();
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ended_at: self.now,
            final_state: self.hero.state_name(),
            final_position: self.hero.position(),
            life: self.sandbox.equipment.life(),
            transitions: self.transitions.clone(),
        }
    }

    fn apply(&mut self, step: ScriptStep, now: Tick) {
        debug!(%now, ?step, "script event");
        match step {
            ScriptStep::Press(command) => {
                self.sandbox.commands.press(command);
                self.hero.notify_command_pressed(command);
            }
            ScriptStep::Release(command) => self.sandbox.commands.release(command),
            ScriptStep::Hurt { source, damage } => {
                if !self.hero.hurt(source, damage, None) {
                    debug!(%now, "attack ignored");
                }
            }
            ScriptStep::Suspend(suspended) => self.hero.set_suspended(suspended, now),
            ScriptStep::Freeze => self.hero.freeze(),
            ScriptStep::Unfreeze => self.hero.unfreeze(),
        }
    }

    fn observe(&mut self) {
        let current = (self.hero.state().core().id(), self.hero.state_name());
        if current.0 == self.observed.0 {
            return;
        }
        let transition = Transition {
            at: self.now,
            from: self.observed.1,
            to: current.1,
        };
        info!(
            at = %transition.at,
            from = transition.from,
            to = transition.to,
            position = %self.hero.position(),
            "transition"
        );
        self.transitions.push(transition);
        self.observed = current;
    }
}

use crate::env::{Animation, Command};
use crate::hero::HeroContext;
use crate::types::EntityId;

use super::{Free, HeroState, Pulling, Pushing, StateCore};

/// Holding an obstacle, ready to push or pull it.
#[derive(Debug)]
pub struct Grabbing {
    core: StateCore,
}

impl Grabbing {
    pub const NAME: &'static str = "grabbing";

    pub fn new() -> Self {
        Self {
            core: StateCore::new(Self::NAME),
        }
    }
}

impl Default for Grabbing {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroState for Grabbing {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        hero.clear_movement();
        hero.set_animation(Animation::Grabbing);
    }

    fn update(&mut self, hero: &mut HeroContext) {
        if self.core.is_suspended() {
            return;
        }

        let facing = hero.direction();
        let wanted = hero.wanted_direction8();
        if !hero.is_command_pressed(Command::Action) {
            hero.change_state(Box::new(Free::new()));
        } else if wanted == Some(facing.to_direction8()) {
            hero.change_state(Box::new(Pushing::new(facing)));
        } else if wanted == Some(facing.opposite().to_direction8()) {
            hero.change_state(Box::new(Pulling::new(facing)));
        }
    }

    fn can_be_hurt(&self, _attacker: Option<EntityId>) -> bool {
        true
    }

    fn is_grabbing_or_pulling(&self) -> bool {
        true
    }
}

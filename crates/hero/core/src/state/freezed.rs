use crate::env::{ActionEffect, Animation};
use crate::hero::HeroContext;

use super::{HeroState, StateCore};

/// The hero cannot act, e.g. during a cutscene.
#[derive(Debug)]
pub struct Freezed {
    core: StateCore,
}

impl Freezed {
    pub const NAME: &'static str = "freezed";

    pub fn new() -> Self {
        Self {
            core: StateCore::new(Self::NAME),
        }
    }
}

impl Default for Freezed {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroState for Freezed {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        hero.clear_movement();
        hero.set_animation(Animation::StoppedNormal);
        hero.set_action_effect(ActionEffect::None);
    }
}

use crate::env::{ActionEffect, Animation, Equipment};
use crate::hero::HeroContext;
use crate::treasure::Treasure;

use super::{HeroState, StateCore};

/// Brandishing a treasure that was just obtained.
#[derive(Debug)]
pub struct TreasureState {
    core: StateCore,
    treasure: Treasure,
}

impl TreasureState {
    pub const NAME: &'static str = "treasure";

    /// The treasure is replaced by an empty one if the equipment cannot
    /// obtain it.
    pub fn new(mut treasure: Treasure, equipment: &dyn Equipment) -> Self {
        treasure.ensure_obtainable(equipment);
        Self {
            core: StateCore::new(Self::NAME),
            treasure,
        }
    }

    pub fn treasure(&self) -> &Treasure {
        &self.treasure
    }
}

impl HeroState for TreasureState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        hero.clear_movement();
        hero.set_action_effect(ActionEffect::None);
        hero.set_animation(Animation::Brandish);
    }

    fn is_brandishing_treasure(&self) -> bool {
        true
    }
}

use crate::carried::{CarriedBehavior, CarriedObject};
use crate::env::{ActionEffect, Sound};
use crate::hero::HeroContext;
use crate::types::{EntityId, ItemId};

use super::{Free, HeroState, PlayerMovementState, StateCore};

/// Walking with an object held overhead.
#[derive(Debug)]
pub struct Carrying {
    core: StateCore,
    walking: PlayerMovementState,
    object: Option<CarriedObject>,
}

impl Carrying {
    pub const NAME: &'static str = "carrying";

    pub fn new(object: CarriedObject) -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            walking: PlayerMovementState::CARRYING,
            object: Some(object),
        }
    }

    fn throw(&mut self, hero: &mut HeroContext) {
        if let Some(object) = self.object.take() {
            hero.sprites_mut().set_lifted_item(None);
            throw_object(hero, object);
        }
    }
}

impl HeroState for Carrying {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        self.walking.start(&self.core, hero);
        if !hero.is_current(&self.core) {
            return;
        }

        let Some(object) = self.object.as_mut() else {
            tracing::warn!("carrying state started without an object");
            return;
        };
        if self.core.is_suspended() {
            object.set_suspended(true, hero.now());
        }
        let entity = object.entity();
        hero.sprites_mut().set_lifted_item(Some(entity));
        hero.set_action_effect(ActionEffect::Throw);
    }

    fn stop(&mut self, hero: &mut HeroContext, next: &dyn HeroState) {
        hero.set_action_effect(ActionEffect::None);
        hero.sprites_mut().set_lifted_item(None);
        self.walking.stop(hero);
        release_object(hero, &mut self.object, next.previous_carried_item_behavior());
    }

    fn update(&mut self, hero: &mut HeroContext) {
        let Some(object) = self.object.as_mut() else {
            return;
        };
        object.update(hero.now());

        if !self.core.is_suspended() && object.is_broken() {
            tracing::trace!(entity = %object.entity(), "carried object broke");
            self.object = None;
            hero.change_state(Box::new(Free::new()));
        }
    }

    fn on_suspended_changed(&mut self, hero: &mut HeroContext, suspended: bool) {
        if let Some(object) = self.object.as_mut() {
            object.set_suspended(suspended, hero.now());
        }
    }

    fn notify_action_command_pressed(&mut self, hero: &mut HeroContext) {
        if hero.action_effect() == ActionEffect::Throw {
            self.throw(hero);
            hero.change_state(Box::new(Free::new()));
        }
    }

    fn notify_movement_changed(&mut self, hero: &mut HeroContext) {
        self.walking.notify_movement_changed(hero);
    }

    fn notify_layer_changed(&mut self, hero: &mut HeroContext) {
        if let Some(object) = self.object.as_mut() {
            object.set_layer(hero.layer());
        }
    }

    fn set_map(&mut self, hero: &mut HeroContext) {
        if let Some(object) = self.object.as_mut() {
            object.set_map(hero.map().id());
        }
    }

    fn can_be_hurt(&self, _attacker: Option<EntityId>) -> bool {
        true
    }

    fn can_start_item(&self, _item: ItemId) -> bool {
        true
    }

    fn carried_item(&self) -> Option<&CarriedObject> {
        self.object.as_ref()
    }

    fn take_carried_item(&mut self) -> Option<CarriedObject> {
        self.object.take()
    }

    fn previous_carried_item_behavior(&self) -> CarriedBehavior {
        CarriedBehavior::Keep
    }
}

/// Gives a held object back to the map in front of the hero.
pub(super) fn throw_object(hero: &mut HeroContext, object: CarriedObject) {
    let from = hero.position();
    let direction = hero.direction();
    tracing::trace!(entity = %object.entity(), %direction, "throwing carried object");
    hero.play_sound(Sound::Throw);
    hero.map_mut().throw_object(object, from, direction);
}

/// Disposes of a held object as the next state asks.
pub(super) fn release_object(
    hero: &mut HeroContext,
    object: &mut Option<CarriedObject>,
    behavior: CarriedBehavior,
) {
    match behavior {
        CarriedBehavior::Throw => {
            if let Some(object) = object.take() {
                throw_object(hero, object);
            }
        }
        CarriedBehavior::Destroy => {
            if let Some(object) = object.take() {
                tracing::trace!(entity = %object.entity(), "dropping carried object");
            }
        }
        CarriedBehavior::Keep => {}
    }
}

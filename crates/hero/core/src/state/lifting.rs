use crate::carried::CarriedObject;
use crate::env::{Ability, ActionEffect, Animation, Sound};
use crate::hero::HeroContext;
use crate::types::EntityId;

use super::carrying::release_object;
use super::{Carrying, HeroState, StateCore};

/// Picking an object up. Becomes [`Carrying`] once the lift animation ends.
#[derive(Debug)]
pub struct Lifting {
    core: StateCore,
    object: Option<CarriedObject>,
}

impl Lifting {
    pub const NAME: &'static str = "lifting";

    pub fn new(object: CarriedObject) -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            object: Some(object),
        }
    }
}

impl HeroState for Lifting {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        let now = hero.now();
        let map = hero.map().id();
        let layer = hero.layer();
        let duration = hero.config().lift_duration;

        let Some(object) = self.object.as_mut() else {
            tracing::warn!("lifting state started without an object");
            return;
        };
        object.set_map(map);
        object.set_layer(layer);
        object.start_lifting(now, duration);
        if self.core.is_suspended() {
            object.set_suspended(true, now);
        }
        let entity = object.entity();

        hero.set_action_effect(ActionEffect::Throw);
        hero.sprites_mut().set_lifted_item(Some(entity));
        hero.clear_movement();
        hero.set_animation(Animation::Lifting);
        hero.set_facing_entity(None);
        hero.play_sound(Sound::Lift);
        hero.equipment_mut().notify_ability_used(Ability::Lift);
    }

    fn stop(&mut self, hero: &mut HeroContext, next: &dyn HeroState) {
        if self.object.is_some() {
            hero.sprites_mut().set_lifted_item(None);
            release_object(hero, &mut self.object, next.previous_carried_item_behavior());
        }
        hero.set_action_effect(ActionEffect::None);
    }

    fn update(&mut self, hero: &mut HeroContext) {
        let Some(object) = self.object.as_mut() else {
            return;
        };
        object.update(hero.now());

        if !self.core.is_suspended() && !object.is_being_lifted() {
            if let Some(object) = self.object.take() {
                hero.change_state(Box::new(Carrying::new(object)));
            }
        }
    }

    fn on_suspended_changed(&mut self, hero: &mut HeroContext, suspended: bool) {
        if let Some(object) = self.object.as_mut() {
            object.set_suspended(suspended, hero.now());
        }
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

    fn carried_item(&self) -> Option<&CarriedObject> {
        self.object.as_ref()
    }

    fn take_carried_item(&mut self) -> Option<CarriedObject> {
        self.object.take()
    }
}

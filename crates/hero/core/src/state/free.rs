use crate::carried::CarriedObject;
use crate::env::{Ability, ActionEffect};
use crate::hero::HeroContext;
use crate::types::{Direction4, EntityId, ItemId, Tick};

use super::{Grabbing, HeroState, Lifting, PlayerMovementState, Pushing, StateCore};

/// The idle/walking state.
#[derive(Debug)]
pub struct Free {
    core: StateCore,
    walking: PlayerMovementState,
    /// Direction and date at which walking against an obstacle turns into pushing.
    push_attempt: Option<(Direction4, Tick)>,
}

impl Free {
    pub const NAME: &'static str = "free";

    pub fn new() -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            walking: PlayerMovementState::NORMAL,
            push_attempt: None,
        }
    }

    /// Tracks how long the hero has been walking against an obstacle.
    fn update_push_attempt(&mut self, hero: &mut HeroContext) {
        let walking_into_obstacle = hero
            .wanted_direction8()
            .and_then(|wanted| wanted.to_direction4())
            .filter(|&direction| direction == hero.direction() && hero.is_facing_obstacle());

        let Some(direction) = walking_into_obstacle else {
            self.push_attempt = None;
            return;
        };

        match self.push_attempt {
            Some((pushed, at)) if pushed == direction => {
                if hero.now() >= at {
                    hero.change_state(Box::new(Pushing::new(direction)));
                }
            }
            _ => {
                let at = hero.now() + hero.config().push_delay;
                self.push_attempt = Some((direction, at));
            }
        }
    }

    /// Action hint for what is in front of the hero.
    fn action_effect(&self, hero: &HeroContext) -> ActionEffect {
        let liftable = hero
            .facing_entity()
            .and_then(|entity| hero.map().lift_weight(entity))
            .is_some_and(|weight| hero.equipment().ability_level(Ability::Lift) >= weight);

        if liftable {
            ActionEffect::Lift
        } else if hero.is_facing_obstacle() && hero.equipment().has_ability(Ability::Grab) {
            ActionEffect::Grab
        } else {
            ActionEffect::None
        }
    }
}

impl Default for Free {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroState for Free {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        self.walking.start(&self.core, hero);
    }

    fn stop(&mut self, hero: &mut HeroContext, _next: &dyn HeroState) {
        self.walking.stop(hero);
        hero.set_action_effect(ActionEffect::None);
    }

    fn update(&mut self, hero: &mut HeroContext) {
        if self.is_suspended() {
            return;
        }

        let effect = self.action_effect(hero);
        hero.set_action_effect(effect);
        self.update_push_attempt(hero);
    }

    fn on_suspended_changed(&mut self, hero: &mut HeroContext, suspended: bool) {
        if suspended {
            return;
        }
        let paused = self.core.paused_duration(hero.now());
        if let Some((_, at)) = self.push_attempt.as_mut() {
            *at += paused;
        }
    }

    fn notify_action_command_pressed(&mut self, hero: &mut HeroContext) {
        if let Some(object) = lift_facing_entity(hero) {
            hero.change_state(Box::new(Lifting::new(object)));
        } else if hero.is_facing_obstacle() && hero.equipment().has_ability(Ability::Grab) {
            hero.change_state(Box::new(Grabbing::new()));
        }
    }

    fn notify_movement_changed(&mut self, hero: &mut HeroContext) {
        self.walking.notify_movement_changed(hero);
    }

    fn can_be_hurt(&self, _attacker: Option<EntityId>) -> bool {
        true
    }

    fn can_start_item(&self, _item: ItemId) -> bool {
        true
    }

    fn is_free(&self) -> bool {
        true
    }
}

/// Takes the facing entity from the map if the hero is strong enough to lift it.
fn lift_facing_entity(hero: &mut HeroContext) -> Option<CarriedObject> {
    let entity = hero.facing_entity()?;
    let weight = hero.map().lift_weight(entity)?;
    let level = hero.equipment().ability_level(Ability::Lift);
    if level < weight {
        tracing::debug!(%entity, weight, level, "entity is too heavy to lift");
        return None;
    }

    let now = hero.now();
    hero.map_mut().lift_entity(entity, now)
}

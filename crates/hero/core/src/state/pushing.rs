use crate::env::{Animation, Command};
use crate::hero::HeroContext;
use crate::types::{Direction4, EntityId};

use super::drag::Drag;
use super::{Free, Grabbing, HeroState, StateCore};

/// Pushing against an obstacle, and moving it when it accepts.
#[derive(Debug)]
pub struct Pushing {
    core: StateCore,
    direction: Direction4,
    drag: Drag,
}

impl Pushing {
    pub const NAME: &'static str = "pushing";

    /// Pushes towards `direction`, which becomes the hero's facing direction.
    pub fn new(direction: Direction4) -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            direction,
            drag: Drag::push(direction.to_direction8()),
        }
    }
}

impl HeroState for Pushing {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        hero.set_direction(self.direction);
        hero.set_animation(Animation::Pushing);
    }

    fn stop(&mut self, hero: &mut HeroContext, _next: &dyn HeroState) {
        if self.drag.is_dragging() {
            self.drag.finish(hero);
        }
    }

    fn update(&mut self, hero: &mut HeroContext) {
        if self.core.is_suspended() || self.drag.is_dragging() {
            return;
        }

        if !hero.is_facing_obstacle() {
            hero.change_state(Box::new(Free::new()));
        } else if hero.wanted_direction8() != Some(self.drag.direction()) {
            if hero.is_command_pressed(Command::Action) {
                hero.change_state(Box::new(Grabbing::new()));
            } else {
                hero.change_state(Box::new(Free::new()));
            }
        } else {
            self.drag.try_start(hero);
        }
    }

    fn notify_position_changed(&mut self, hero: &mut HeroContext) {
        if self.drag.has_reached_grid(hero) {
            self.drag.stop(&self.core, hero);
        }
    }

    fn notify_movement_finished(&mut self, hero: &mut HeroContext) {
        self.drag.stop(&self.core, hero);
    }

    fn notify_grabbed_entity_collision(&mut self, hero: &mut HeroContext) {
        self.drag.stop(&self.core, hero);
    }

    fn notify_entity_removed(&mut self, hero: &mut HeroContext, entity: EntityId) {
        self.drag.abort(&self.core, hero, entity);
    }

    fn can_be_hurt(&self, _attacker: Option<EntityId>) -> bool {
        !self.is_moving_grabbed_entity()
    }

    fn is_moving_grabbed_entity(&self) -> bool {
        self.drag.is_dragging()
    }

    fn is_shallow_water_obstacle(&self) -> bool {
        true
    }

    fn is_deep_water_obstacle(&self) -> bool {
        true
    }

    fn is_hole_obstacle(&self) -> bool {
        true
    }

    fn is_lava_obstacle(&self) -> bool {
        true
    }

    fn is_prickle_obstacle(&self) -> bool {
        true
    }
}

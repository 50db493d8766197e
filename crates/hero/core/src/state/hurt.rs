use crate::env::{Ability, Animation, Sound};
use crate::hero::HeroContext;
use crate::movement::StraightMovement;
use crate::types::{Point, Tick};

use super::{HeroState, StateCore};

/// Life points lost for `damage` against a defense ability level.
///
/// A hit always costs at least one point; a defense level of zero counts as one.
pub fn life_lost(damage: u32, defense: u32) -> u32 {
    (damage / defense.max(1)).max(1)
}

/// Knocked back after being hit.
#[derive(Debug)]
pub struct Hurt {
    core: StateCore,
    source: Option<Point>,
    damage: u32,
    end_date: Tick,
}

impl Hurt {
    pub const NAME: &'static str = "hurt";

    /// `source` is where the hit comes from; without it there is no knockback.
    pub fn new(source: Option<Point>, damage: u32) -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            source,
            damage,
            end_date: Tick::ZERO,
        }
    }

    /// Date at which the state ends if the knockback has not finished before.
    pub fn end_date(&self) -> Tick {
        self.end_date
    }
}

impl HeroState for Hurt {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        let now = hero.now();
        let config = hero.config().clone();

        hero.play_sound(Sound::HeroHurt);
        hero.set_invincible(config.invincibility_duration);
        hero.sprites_mut().blink(config.invincibility_duration);
        hero.set_animation(Animation::Hurt);

        match self.source {
            Some(source) => {
                let angle = source.angle_to(hero.position());
                let knockback = StraightMovement::new(
                    angle,
                    config.knockback_speed,
                    config.knockback_distance,
                    now,
                );
                hero.set_movement(Box::new(knockback));
            }
            None => hero.clear_movement(),
        }
        self.end_date = now + config.hurt_duration;

        if self.damage > 0 {
            let defense = hero.equipment().ability_level(Ability::Defense);
            let lost = life_lost(self.damage, defense);
            hero.equipment_mut().remove_life(lost);
            hero.equipment_mut().notify_ability_used(Ability::Defense);
            tracing::debug!(damage = self.damage, defense, lost, "hero hurt");
        }
    }

    fn stop(&mut self, hero: &mut HeroContext, _next: &dyn HeroState) {
        hero.clear_movement();
    }

    fn update(&mut self, hero: &mut HeroContext) {
        if self.core.is_suspended() {
            return;
        }

        if hero.is_movement_finished() || hero.now() >= self.end_date {
            hero.clear_movement();
            hero.start_state_from_ground();
        }
    }

    fn on_suspended_changed(&mut self, hero: &mut HeroContext, suspended: bool) {
        if !suspended {
            self.end_date += self.core.paused_duration(hero.now());
        }
    }
}

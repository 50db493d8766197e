use crate::env::Animation;
use crate::hero::HeroContext;
use crate::movement::PlayerMovement;
use crate::types::{Direction4, Direction8};

use super::StateCore;

/// Direct player control, shared by the states that let the player walk.
///
/// Holds the pair of animations to use when stopped and when walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerMovementState {
    stopped: Animation,
    walking: Animation,
}

impl PlayerMovementState {
    pub const NORMAL: Self = Self {
        stopped: Animation::StoppedNormal,
        walking: Animation::WalkingNormal,
    };

    pub const CARRYING: Self = Self {
        stopped: Animation::StoppedCarrying,
        walking: Animation::WalkingCarrying,
    };

    pub fn stopped_animation(&self) -> Animation {
        self.stopped
    }

    pub fn walking_animation(&self) -> Animation {
        self.walking
    }

    /// Installs a player movement and computes its first direction.
    pub fn start(&self, core: &StateCore, hero: &mut HeroContext) {
        let speed = hero.config().walking_speed;
        hero.set_movement(Box::new(PlayerMovement::new(speed)));
        hero.compute_movement_direction();

        if hero.is_current(core) {
            let wanted = self.wanted_direction(hero);
            if let Some(wanted) = wanted {
                hero.set_direction(facing_for(hero.direction(), wanted));
            }
            self.set_animation(hero, wanted.is_some());
        }
    }

    pub fn stop(&self, hero: &mut HeroContext) {
        hero.clear_movement();
        hero.set_animation(Animation::StoppedNormal);
    }

    /// Flips between the walking and stopped animations on an edge only.
    pub fn notify_movement_changed(&self, hero: &mut HeroContext) {
        let wanted = self.wanted_direction(hero);
        let facing = match wanted {
            Some(wanted) => facing_for(hero.direction(), wanted),
            None => hero.direction(),
        };

        let walking = wanted.is_some();
        if walking != hero.sprites().is_walking() || facing != hero.direction() {
            hero.set_direction(facing);
            self.set_animation(hero, walking);
        }
    }

    fn wanted_direction(&self, hero: &HeroContext) -> Option<Direction8> {
        hero.movement().and_then(|movement| movement.wanted_direction())
    }

    fn set_animation(&self, hero: &mut HeroContext, walking: bool) {
        let animation = if walking { self.walking } else { self.stopped };
        hero.set_animation(animation);
    }
}

/// Sprite direction for a wanted direction. Diagonals keep the current
/// facing when it is one of their components.
fn facing_for(current: Direction4, wanted: Direction8) -> Direction4 {
    if let Some(direction) = wanted.to_direction4() {
        return direction;
    }

    let unit = wanted.unit();
    let horizontal = if unit.dx > 0 {
        Direction4::Right
    } else {
        Direction4::Left
    };
    let vertical = if unit.dy < 0 {
        Direction4::Up
    } else {
        Direction4::Down
    };

    if current == horizontal || current == vertical {
        current
    } else {
        horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_directions_face_themselves() {
        assert_eq!(
            facing_for(Direction4::Left, Direction8::Up),
            Direction4::Up
        );
    }

    #[test]
    fn diagonals_keep_a_compatible_facing() {
        assert_eq!(
            facing_for(Direction4::Up, Direction8::UpRight),
            Direction4::Up
        );
        assert_eq!(
            facing_for(Direction4::Down, Direction8::UpLeft),
            Direction4::Left
        );
    }
}

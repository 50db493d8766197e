use crate::types::{Direction4, EntityId};

/// Hero animations the behavior states select.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Animation {
    #[default]
    StoppedNormal,
    WalkingNormal,
    StoppedCarrying,
    WalkingCarrying,
    Grabbing,
    Pushing,
    Pulling,
    Lifting,
    Hurt,
    Brandish,
}

impl Animation {
    pub const fn is_walking(self) -> bool {
        matches!(self, Animation::WalkingNormal | Animation::WalkingCarrying)
    }
}

/// The hero's sprite set.
pub trait HeroSprites {
    /// Sets the animation, facing `direction`.
    fn set_animation(&mut self, animation: Animation, direction: Direction4);

    fn animation(&self) -> Animation;

    fn is_walking(&self) -> bool {
        self.animation().is_walking()
    }

    /// Attaches (or detaches) the object displayed above the hero.
    fn set_lifted_item(&mut self, item: Option<EntityId>);

    fn lifted_item(&self) -> Option<EntityId>;

    fn blink(&mut self, duration: u64);

    fn set_suspended(&mut self, _suspended: bool) {}
}

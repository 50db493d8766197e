use std::cell::RefCell;
use std::rc::Rc;

use hero_core::{Animation, Direction4, EntityId, HeroSprites};
use tracing::trace;

#[derive(Debug, Default)]
struct SpriteRecord {
    animation: Animation,
    direction: Direction4,
    lifted_item: Option<EntityId>,
    blinks: Vec<u64>,
    suspended: bool,
    changes: Vec<(Animation, Direction4)>,
}

/// Sprite set that only remembers what it was asked to show.
#[derive(Clone, Debug, Default)]
pub struct RecordingSprites(Rc<RefCell<SpriteRecord>>);

impl RecordingSprites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction4 {
        self.0.borrow().direction
    }

    pub fn blinks(&self) -> Vec<u64> {
        self.0.borrow().blinks.clone()
    }

    pub fn is_suspended(&self) -> bool {
        self.0.borrow().suspended
    }

    /// Every distinct animation shown, in order.
    pub fn changes(&self) -> Vec<(Animation, Direction4)> {
        self.0.borrow().changes.clone()
    }
}

impl HeroSprites for RecordingSprites {
    fn set_animation(&mut self, animation: Animation, direction: Direction4) {
        let mut record = self.0.borrow_mut();
        if (record.animation, record.direction) != (animation, direction) {
            trace!(%animation, %direction, "hero animation");
            record.changes.push((animation, direction));
        }
        record.animation = animation;
        record.direction = direction;
    }

    fn animation(&self) -> Animation {
        self.0.borrow().animation
    }

    fn set_lifted_item(&mut self, item: Option<EntityId>) {
        self.0.borrow_mut().lifted_item = item;
    }

    fn lifted_item(&self) -> Option<EntityId> {
        self.0.borrow().lifted_item
    }

    fn blink(&mut self, duration: u64) {
        self.0.borrow_mut().blinks.push(duration);
    }

    fn set_suspended(&mut self, suspended: bool) {
        self.0.borrow_mut().suspended = suspended;
    }
}

//! Hero behavior states.
//!
//! Exactly one [`HeroState`] is active per hero. The controller installs a
//! state with `start`, forwards ticks and notifications to it, and removes it
//! with exactly one `stop` before discarding it. States never outlive their
//! active tenure.
//!
//! Every hook has a well-defined default so that an unhandled notification
//! is a no-op. Variants override only what they need:
//!
//! | State | Vulnerable | Notes |
//! |-------|------------|-------|
//! | [`Free`] | yes | idle/walking, starts lifting, grabbing and pushing |
//! | [`Carrying`] | yes | walks with an object overhead |
//! | [`Lifting`] | yes | becomes [`Carrying`] when the lift animation ends |
//! | [`Grabbing`] | yes | chooses between [`Pushing`] and [`Pulling`] |
//! | [`Pushing`], [`Pulling`] | when not dragging | two-cell drag protocol |
//! | [`Hurt`] | no | knockback and life loss |
//! | [`UsingItem`], [`TreasureState`], [`Freezed`] | no | |

mod carrying;
mod drag;
mod free;
mod freezed;
mod grabbing;
mod hurt;
mod lifting;
mod player_movement;
mod pulling;
mod pushing;
mod treasure;
mod using_item;

pub use carrying::Carrying;
pub use free::Free;
pub use freezed::Freezed;
pub use grabbing::Grabbing;
pub use hurt::{Hurt, life_lost};
pub use lifting::Lifting;
pub use player_movement::PlayerMovementState;
pub use pulling::Pulling;
pub use pushing::Pushing;
pub use treasure::TreasureState;
pub use using_item::{ItemUsage, UsingItem};

use std::fmt;

use crate::carried::{CarriedBehavior, CarriedObject};
use crate::env::GroundObstacles;
use crate::hero::HeroContext;
use crate::types::{EntityId, ItemId, ItemSlot, Tick};

/// Identity of an installed state, used for "is this state still current" checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) u64);

/// Bookkeeping shared by every state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateCore {
    name: &'static str,
    id: Option<StateId>,
    stopping: bool,
    suspended: bool,
    when_suspended: Tick,
}

impl StateCore {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            id: None,
            stopping: false,
            suspended: false,
            when_suspended: Tick::ZERO,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identity assigned when the state was installed.
    pub fn id(&self) -> Option<StateId> {
        self.id
    }

    pub fn is_stopping(&self) -> bool {
        self.stopping
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Date of the last transition to suspended.
    pub fn when_suspended(&self) -> Tick {
        self.when_suspended
    }

    /// Installs the state: records its identity and inherits the hero's
    /// suspension flag.
    pub(crate) fn attach(&mut self, id: StateId, hero_suspended: bool, now: Tick) {
        self.id = Some(id);
        self.suspended = hero_suspended;
        if hero_suspended {
            self.when_suspended = now;
        }
    }

    /// Marks the state as stopping.
    ///
    /// # Panics
    ///
    /// Panics if the state is already stopping: a state is stopped exactly once.
    pub(crate) fn begin_stop(&mut self) {
        assert!(
            !self.stopping,
            "hero state '{}' is already stopping",
            self.name
        );
        self.stopping = true;
    }

    /// Updates the suspended flag. Returns `false` when the value is unchanged.
    pub(crate) fn set_suspended(&mut self, suspended: bool, now: Tick) -> bool {
        if suspended == self.suspended {
            return false;
        }
        self.suspended = suspended;
        if suspended {
            self.when_suspended = now;
        }
        true
    }

    /// Time spent suspended, measured at resume time.
    pub fn paused_duration(&self, now: Tick) -> u64 {
        now.saturating_since(self.when_suspended)
    }
}

/// One mode of hero behavior.
///
/// Lifecycle hooks receive the [`HeroContext`], through which a state reads
/// commands, drives collaborators and requests transitions. A transition
/// requested by a handler takes effect when the handler returns; any work a
/// handler does after a call that may have requested one must first check
/// [`HeroContext::is_current`].
pub trait HeroState: fmt::Debug {
    fn core(&self) -> &StateCore;

    fn core_mut(&mut self) -> &mut StateCore;

    fn name(&self) -> &'static str {
        self.core().name()
    }

    fn is_suspended(&self) -> bool {
        self.core().is_suspended()
    }

    // ===== lifecycle =====

    /// Called once when the state is installed. `previous` is `None` only for
    /// the first state of a hero's life.
    fn start(&mut self, _hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {}

    /// Called once when the state is replaced by `next`. The stopping flag is
    /// already set; requesting a transition from here is a fatal error.
    fn stop(&mut self, _hero: &mut HeroContext, _next: &dyn HeroState) {}

    /// Called once per tick while the state is active.
    fn update(&mut self, _hero: &mut HeroContext) {}

    /// Called after the suspended flag changed. On resume,
    /// [`StateCore::paused_duration`] gives the time to add to deadlines.
    fn on_suspended_changed(&mut self, _hero: &mut HeroContext, _suspended: bool) {}

    // ===== notifications =====

    fn notify_action_command_pressed(&mut self, _hero: &mut HeroContext) {}

    /// Starts the item assigned to `slot` when both the equipment and this
    /// state allow it.
    fn notify_item_command_pressed(&mut self, hero: &mut HeroContext, slot: ItemSlot) {
        let Some(item) = hero.equipment().item_assigned(slot) else {
            return;
        };
        if hero.equipment().can_start_item(item) && self.can_start_item(item) {
            hero.change_state(Box::new(UsingItem::new(item)));
        }
    }

    fn notify_movement_changed(&mut self, _hero: &mut HeroContext) {}

    fn notify_movement_finished(&mut self, _hero: &mut HeroContext) {}

    fn notify_position_changed(&mut self, _hero: &mut HeroContext) {}

    fn notify_layer_changed(&mut self, _hero: &mut HeroContext) {}

    fn notify_grabbed_entity_collision(&mut self, _hero: &mut HeroContext) {}

    /// An entity was removed from the map's registry.
    fn notify_entity_removed(&mut self, _hero: &mut HeroContext, _entity: EntityId) {}

    /// The hero moved to another map.
    fn set_map(&mut self, _hero: &mut HeroContext) {}

    // ===== capabilities =====

    fn can_be_hurt(&self, _attacker: Option<EntityId>) -> bool {
        false
    }

    fn can_start_item(&self, _item: ItemId) -> bool {
        false
    }

    fn is_free(&self) -> bool {
        false
    }

    fn is_grabbing_or_pulling(&self) -> bool {
        false
    }

    fn is_moving_grabbed_entity(&self) -> bool {
        false
    }

    fn is_using_item(&self) -> bool {
        false
    }

    fn item_usage(&self) -> Option<&ItemUsage> {
        None
    }

    fn is_brandishing_treasure(&self) -> bool {
        false
    }

    fn carried_item(&self) -> Option<&CarriedObject> {
        None
    }

    /// Hands the carried object over to the next state.
    fn take_carried_item(&mut self) -> Option<CarriedObject> {
        None
    }

    /// What the previous state should do with its carried object when this
    /// state replaces it.
    fn previous_carried_item_behavior(&self) -> CarriedBehavior {
        CarriedBehavior::Throw
    }

    fn is_shallow_water_obstacle(&self) -> bool {
        false
    }

    fn is_deep_water_obstacle(&self) -> bool {
        false
    }

    fn is_hole_obstacle(&self) -> bool {
        false
    }

    fn is_lava_obstacle(&self) -> bool {
        false
    }

    fn is_prickle_obstacle(&self) -> bool {
        false
    }

    fn is_ladder_obstacle(&self) -> bool {
        false
    }

    /// Grounds this state refuses to walk on.
    fn ground_obstacles(&self) -> GroundObstacles {
        let mut obstacles = GroundObstacles::empty();
        obstacles.set(
            GroundObstacles::SHALLOW_WATER,
            self.is_shallow_water_obstacle(),
        );
        obstacles.set(GroundObstacles::DEEP_WATER, self.is_deep_water_obstacle());
        obstacles.set(GroundObstacles::HOLE, self.is_hole_obstacle());
        obstacles.set(GroundObstacles::LAVA, self.is_lava_obstacle());
        obstacles.set(GroundObstacles::PRICKLE, self.is_prickle_obstacle());
        obstacles.set(GroundObstacles::LADDER, self.is_ladder_obstacle());
        obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Idle {
        core: StateCore,
    }

    impl HeroState for Idle {
        fn core(&self) -> &StateCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut StateCore {
            &mut self.core
        }
    }

    #[test]
    #[should_panic(expected = "already stopping")]
    fn stopping_twice_is_fatal() {
        let mut core = StateCore::new("idle");
        core.begin_stop();
        core.begin_stop();
    }

    #[test]
    fn suspension_is_idempotent() {
        let mut core = StateCore::new("idle");
        assert!(core.set_suspended(true, Tick(50)));
        assert!(!core.set_suspended(true, Tick(80)));
        assert_eq!(core.when_suspended(), Tick(50));
        assert!(core.set_suspended(false, Tick(150)));
        assert_eq!(core.paused_duration(Tick(150)), 100);
    }

    #[test]
    fn attach_inherits_hero_suspension() {
        let mut core = StateCore::new("idle");
        core.attach(StateId(7), true, Tick(30));
        assert!(core.is_suspended());
        assert_eq!(core.when_suspended(), Tick(30));
        assert_eq!(core.id(), Some(StateId(7)));
    }

    #[test]
    fn defaults_are_safe() {
        let state = Idle {
            core: StateCore::new("idle"),
        };
        assert!(!state.can_be_hurt(None));
        assert!(!state.is_free());
        assert!(state.carried_item().is_none());
        assert_eq!(
            state.previous_carried_item_behavior(),
            CarriedBehavior::Throw
        );
        assert!(state.ground_obstacles().is_empty());
    }
}

//! The hero controller.
//!
//! [`Hero`] owns the active [`HeroState`] and the [`HeroContext`]. External
//! callers talk to the hero only through the controller, which forwards to the
//! active state and then applies the transitions the state requested.

mod context;

pub use context::{Collaborators, HeroContext};

use crate::config::HeroConfig;
use crate::env::{Command, Map};
use crate::state::{Free, Freezed, HeroState, Hurt, StateId, TreasureState, UsingItem};
use crate::treasure::Treasure;
use crate::types::{Direction4, Displacement, EntityId, ItemId, ItemSlot, Layer, Point, Tick};

/// The player-controlled hero.
pub struct Hero {
    ctx: HeroContext,
    state: Box<dyn HeroState>,
    next_state_id: u64,
}

impl Hero {
    /// Creates a hero standing at `position`, in the free state.
    pub fn new(
        collaborators: Collaborators,
        config: HeroConfig,
        position: Point,
        now: Tick,
    ) -> Self {
        let mut hero = Self {
            ctx: HeroContext::new(collaborators, config, position, now),
            state: Box::new(Free::new()),
            next_state_id: 0,
        };

        let id = hero.allocate_state_id();
        hero.state.core_mut().attach(id, false, now);
        hero.ctx.set_active(id, hero.state.ground_obstacles());
        hero.state.start(&mut hero.ctx, None);
        hero.apply_transitions();
        hero
    }

    // ===== queries =====

    pub fn state(&self) -> &dyn HeroState {
        self.state.as_ref()
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn context(&self) -> &HeroContext {
        &self.ctx
    }

    pub fn position(&self) -> Point {
        self.ctx.position()
    }

    pub fn direction(&self) -> Direction4 {
        self.ctx.direction()
    }

    pub fn layer(&self) -> Layer {
        self.ctx.layer()
    }

    pub fn is_suspended(&self) -> bool {
        self.ctx.is_suspended()
    }

    pub fn is_invincible(&self) -> bool {
        self.ctx.is_invincible()
    }

    pub fn can_be_hurt(&self, attacker: Option<EntityId>) -> bool {
        !self.ctx.is_invincible() && self.state.can_be_hurt(attacker)
    }

    // ===== tick =====

    /// Advances the hero to `now`: updates the active state, then integrates
    /// the movement one pixel at a time.
    pub fn update(&mut self, now: Tick) {
        self.ctx.set_now(now);
        self.ctx.expire_invincibility();
        self.dispatch(|state, hero| state.update(hero));
        self.update_movement();
    }

    fn update_movement(&mut self) {
        if self.ctx.is_suspended() {
            return;
        }

        let serial = self.ctx.movement_serial();
        if self.ctx.compute_movement_direction() {
            self.dispatch(|state, hero| state.notify_movement_changed(hero));
        }

        let now = self.ctx.now();
        loop {
            if self.ctx.movement_serial() != serial {
                return;
            }
            let Some(step) = self.ctx.movement_mut().and_then(|m| m.next_step(now)) else {
                break;
            };
            if let Some(step) = self.resolve_step(step) {
                let bounds = self.ctx.bounds();
                self.ctx.set_position(self.ctx.position().offset(step));
                self.ctx.map_mut().notify_hero_moved(bounds, step);
                self.dispatch(|state, hero| state.notify_position_changed(hero));
            }
        }

        if self.ctx.movement_serial() == serial
            && self.ctx.is_movement_finished()
            && self.ctx.mark_movement_finish_notified()
        {
            self.dispatch(|state, hero| state.notify_movement_finished(hero));
        }
    }

    /// Returns the part of `step` the hero can take, sliding along an
    /// obstacle when a diagonal step is blocked on one axis only.
    fn resolve_step(&self, step: Displacement) -> Option<Displacement> {
        if step.is_zero() {
            return None;
        }

        let bounds = self.ctx.bounds();
        let obstacles = self.ctx.ground_obstacles();
        let clear = |d: Displacement| !self.ctx.map().test_obstacle(bounds.translated(d), obstacles);

        if clear(step) {
            return Some(step);
        }
        if step.dx != 0 && step.dy != 0 {
            return [Displacement::new(step.dx, 0), Displacement::new(0, step.dy)]
                .into_iter()
                .find(|&d| clear(d));
        }
        None
    }

    /// Pauses or resumes the hero. Deadlines move forward by the paused time.
    pub fn set_suspended(&mut self, suspended: bool, now: Tick) {
        self.ctx.set_now(now);
        if !self.ctx.set_suspended(suspended) {
            return;
        }
        if self.state.core_mut().set_suspended(suspended, now) {
            self.dispatch(|state, hero| state.on_suspended_changed(hero, suspended));
        }
    }

    // ===== input and world events =====

    pub fn notify_command_pressed(&mut self, command: Command) {
        match command {
            Command::Action => self.dispatch(|state, hero| state.notify_action_command_pressed(hero)),
            Command::Item1 => self.dispatch(|state, hero| {
                state.notify_item_command_pressed(hero, ItemSlot::First)
            }),
            Command::Item2 => self.dispatch(|state, hero| {
                state.notify_item_command_pressed(hero, ItemSlot::Second)
            }),
            _ => {}
        }
    }

    /// Moves the hero to another map. Returns the previous one.
    pub fn set_map(&mut self, map: Box<dyn Map>) -> Box<dyn Map> {
        let previous = self.ctx.replace_map(map);
        self.ctx.set_facing_entity(None);
        self.dispatch(|state, hero| state.set_map(hero));
        previous
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.ctx.set_layer(layer);
        self.dispatch(|state, hero| state.notify_layer_changed(hero));
    }

    pub fn set_position(&mut self, position: Point) {
        self.ctx.set_position(position);
    }

    pub fn set_direction(&mut self, direction: Direction4) {
        self.ctx.set_direction(direction);
    }

    /// Sets the entity in front of the hero, as detected by the map.
    pub fn set_facing_entity(&mut self, entity: Option<EntityId>) {
        self.ctx.set_facing_entity(entity);
    }

    pub fn notify_grabbed_entity_collision(&mut self) {
        self.dispatch(|state, hero| state.notify_grabbed_entity_collision(hero));
    }

    pub fn notify_entity_removed(&mut self, entity: EntityId) {
        if self.ctx.facing_entity() == Some(entity) {
            self.ctx.set_facing_entity(None);
        }
        self.dispatch(|state, hero| state.notify_entity_removed(hero, entity));
    }

    /// Hurts the hero. `source` is where the attack comes from, if it has a
    /// position. Returns `false` when the hero could not be hurt.
    pub fn hurt(&mut self, source: Option<Point>, damage: u32, attacker: Option<EntityId>) -> bool {
        if !self.can_be_hurt(attacker) {
            tracing::trace!(state = self.state.name(), "hero ignores an attack");
            return false;
        }
        self.set_state(Box::new(Hurt::new(source, damage)));
        true
    }

    pub fn start_treasure(&mut self, treasure: Treasure) {
        let state = TreasureState::new(treasure, self.ctx.equipment());
        self.set_state(Box::new(state));
    }

    /// Starts using `item`, bypassing the item command checks.
    pub fn start_using_item(&mut self, item: ItemId) {
        self.set_state(Box::new(UsingItem::new(item)));
    }

    /// Stops every hero action, for cutscenes and dialogs.
    pub fn freeze(&mut self) {
        self.set_state(Box::new(Freezed::new()));
    }

    /// Gives control back to the player.
    pub fn unfreeze(&mut self) {
        self.set_state(Box::new(Free::new()));
    }

    /// Replaces the active state.
    pub fn set_state(&mut self, next: Box<dyn HeroState>) {
        self.ctx.change_state(next);
        self.apply_transitions();
    }

    // ===== transitions =====

    fn dispatch(&mut self, hook: impl FnOnce(&mut dyn HeroState, &mut HeroContext)) {
        hook(self.state.as_mut(), &mut self.ctx);
        self.apply_transitions();
    }

    fn apply_transitions(&mut self) {
        while let Some(next) = self.ctx.take_pending() {
            self.install(next);
        }
    }

    fn install(&mut self, mut next: Box<dyn HeroState>) {
        let now = self.ctx.now();

        self.state.core_mut().begin_stop();
        self.ctx.set_in_stop(true);
        self.state.stop(&mut self.ctx, next.as_ref());
        self.ctx.set_in_stop(false);
        debug_assert!(!self.ctx.has_pending());

        let id = self.allocate_state_id();
        next.core_mut().attach(id, self.ctx.is_suspended(), now);
        let mut previous = std::mem::replace(&mut self.state, next);
        self.ctx.set_active(id, self.state.ground_obstacles());

        tracing::debug!(
            from = previous.name(),
            to = self.state.name(),
            %now,
            "hero state changed"
        );

        self.state.start(&mut self.ctx, Some(previous.as_mut()));
    }

    fn allocate_state_id(&mut self) -> StateId {
        self.next_state_id += 1;
        StateId(self.next_state_id)
    }
}

impl std::fmt::Debug for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hero")
            .field("state", &self.state)
            .field("ctx", &self.ctx)
            .finish()
    }
}

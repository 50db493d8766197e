use crate::config::HeroConfig;
use crate::env::{
    ActionEffect, Animation, Audio, Command, Commands, Equipment, Ground, GroundObstacles,
    HeroSprites, Map, Sound,
};
use crate::movement::{Movement, MovementInput};
use crate::state::{Free, HeroState, StateCore, StateId};
use crate::types::{Direction4, Direction8, Displacement, EntityId, Layer, Point, Rect, Tick};

/// The subsystems a hero collaborates with.
pub struct Collaborators {
    pub map: Box<dyn Map>,
    pub sprites: Box<dyn HeroSprites>,
    pub equipment: Box<dyn Equipment>,
    pub commands: Box<dyn Commands>,
    pub audio: Box<dyn Audio>,
}

/// Everything a state may read or drive, minus the state itself.
///
/// Handed to every [`HeroState`] hook. Transitions requested through
/// [`change_state`](Self::change_state) are applied by the controller once the
/// current hook returns.
pub struct HeroContext {
    config: HeroConfig,
    now: Tick,

    position: Point,
    direction: Direction4,
    layer: Layer,
    facing_entity: Option<EntityId>,
    action_effect: ActionEffect,
    invincible_until: Option<Tick>,
    suspended: bool,
    when_suspended: Tick,

    movement: Option<Box<dyn Movement>>,
    movement_serial: u64,
    movement_finish_notified: bool,
    ground_obstacles: GroundObstacles,

    map: Box<dyn Map>,
    sprites: Box<dyn HeroSprites>,
    equipment: Box<dyn Equipment>,
    commands: Box<dyn Commands>,
    audio: Box<dyn Audio>,

    active: Option<StateId>,
    pending: Option<Box<dyn HeroState>>,
    in_stop: bool,
}

impl HeroContext {
    pub(crate) fn new(
        collaborators: Collaborators,
        config: HeroConfig,
        position: Point,
        now: Tick,
    ) -> Self {
        let Collaborators {
            map,
            sprites,
            equipment,
            commands,
            audio,
        } = collaborators;

        Self {
            config,
            now,
            position,
            direction: Direction4::default(),
            layer: Layer::default(),
            facing_entity: None,
            action_effect: ActionEffect::None,
            invincible_until: None,
            suspended: false,
            when_suspended: now,
            movement: None,
            movement_serial: 0,
            movement_finish_notified: false,
            ground_obstacles: GroundObstacles::empty(),
            map,
            sprites,
            equipment,
            commands,
            audio,
            active: None,
            pending: None,
            in_stop: false,
        }
    }

    // ===== clock and tuning =====

    /// Date of the tick or notification being handled.
    pub fn now(&self) -> Tick {
        self.now
    }

    pub(crate) fn set_now(&mut self, now: Tick) {
        self.now = now;
    }

    /// Tuning the hero was created with.
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    // ===== transitions =====

    /// Requests a transition to `next`.
    ///
    /// The transition is applied after the current hook returns. A second
    /// request before that supersedes the first.
    ///
    /// # Panics
    ///
    /// Panics when called while a state is being stopped.
    pub fn change_state(&mut self, next: Box<dyn HeroState>) {
        assert!(
            !self.in_stop,
            "cannot change the hero state to '{}' while a state is stopping",
            next.name()
        );
        if let Some(superseded) = self.pending.replace(next) {
            tracing::warn!(
                superseded = superseded.name(),
                "hero state change requested twice in the same hook"
            );
        }
    }

    /// Whether the state owning `core` is still the active one with no
    /// transition pending.
    pub fn is_current(&self, core: &StateCore) -> bool {
        core.id().is_some()
            && core.id() == self.active
            && !core.is_stopping()
            && self.pending.is_none()
    }

    /// Requests the state matching the ground under the hero.
    pub fn start_state_from_ground(&mut self) {
        let ground = self.ground_below();
        match ground {
            Ground::Traversable | Ground::Wall => {}
            ground => tracing::debug!(%ground, "no dedicated state for ground, staying free"),
        }
        self.change_state(Box::new(Free::new()));
    }

    pub(crate) fn take_pending(&mut self) -> Option<Box<dyn HeroState>> {
        self.pending.take()
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn set_active(&mut self, id: StateId, obstacles: GroundObstacles) {
        self.active = Some(id);
        self.ground_obstacles = obstacles;
    }

    pub(crate) fn set_in_stop(&mut self, in_stop: bool) {
        self.in_stop = in_stop;
    }

    // ===== position and facing =====

    /// Top-left corner of the hero, in map pixels.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the hero without obstacle tests or position notifications.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Bounding box of the hero.
    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, HeroConfig::HERO_SIZE, HeroConfig::HERO_SIZE)
    }

    /// Facing direction of the sprites.
    pub fn direction(&self) -> Direction4 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction4) {
        self.direction = direction;
    }

    /// Map layer the hero stands on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub(crate) fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    /// Ground under the center of the hero.
    pub fn ground_below(&self) -> Ground {
        let half = HeroConfig::HERO_SIZE as i32 / 2;
        self.map
            .ground_at(self.position.offset(Displacement::new(half, half)))
    }

    /// Grounds the active state refuses to walk on.
    pub fn ground_obstacles(&self) -> GroundObstacles {
        self.ground_obstacles
    }

    /// Whether the pixel in front of the hero is an obstacle.
    pub fn is_facing_obstacle(&self) -> bool {
        let ahead = self.bounds().translated(self.direction.unit());
        self.map.test_obstacle(ahead, self.ground_obstacles)
    }

    /// Entity right in front of the hero, as last reported by the map.
    pub fn facing_entity(&self) -> Option<EntityId> {
        self.facing_entity
    }

    pub fn set_facing_entity(&mut self, entity: Option<EntityId>) {
        self.facing_entity = entity;
    }

    /// Aligns the hero with the facing entity on the axis perpendicular to the
    /// facing direction, if the target position is free.
    ///
    /// Returns `true` when the hero moved.
    pub fn try_snap_to_facing_entity(&mut self) -> bool {
        let Some(entity) = self.facing_entity else {
            return false;
        };
        let Some(target) = self.map.entity_position(entity) else {
            return false;
        };

        let snapped = if self.direction.is_horizontal() {
            Point::new(self.position.x, target.y)
        } else {
            Point::new(target.x, self.position.y)
        };
        if snapped == self.position {
            return false;
        }

        let bounds = Rect::at(snapped, HeroConfig::HERO_SIZE, HeroConfig::HERO_SIZE);
        if self.map.test_obstacle(bounds, self.ground_obstacles) {
            return false;
        }
        self.position = snapped;
        true
    }

    // ===== movement =====

    /// Movement driving the hero, if any.
    pub fn movement(&self) -> Option<&dyn Movement> {
        self.movement.as_deref()
    }

    pub fn has_movement(&self) -> bool {
        self.movement.is_some()
    }

    /// Replaces the hero's movement.
    pub fn set_movement(&mut self, mut movement: Box<dyn Movement>) {
        if self.suspended {
            movement.set_suspended(true, self.now);
        }
        self.movement = Some(movement);
        self.movement_serial += 1;
        self.movement_finish_notified = false;
    }

    /// Stops the hero where it stands.
    pub fn clear_movement(&mut self) {
        if self.movement.take().is_some() {
            self.movement_serial += 1;
        }
    }

    /// Whether a movement is installed and has finished. `false` without one.
    pub fn is_movement_finished(&self) -> bool {
        self.movement.as_ref().is_some_and(|m| m.is_finished())
    }

    /// Feeds the current input to the movement. Returns `true` when its
    /// direction changed.
    pub fn compute_movement_direction(&mut self) -> bool {
        let input = MovementInput {
            wanted_direction: self.commands.wanted_direction8(),
        };
        let now = self.now;
        self.movement
            .as_mut()
            .is_some_and(|m| m.compute_direction(input, now))
    }

    pub(crate) fn movement_serial(&self) -> u64 {
        self.movement_serial
    }

    pub(crate) fn movement_mut(&mut self) -> Option<&mut (dyn Movement + 'static)> {
        self.movement.as_deref_mut()
    }

    /// Marks the finish of the current movement as notified. Returns `false`
    /// if it already was.
    pub(crate) fn mark_movement_finish_notified(&mut self) -> bool {
        !std::mem::replace(&mut self.movement_finish_notified, true)
    }

    // ===== input =====

    pub fn is_command_pressed(&self, command: Command) -> bool {
        self.commands.is_pressed(command)
    }

    /// Direction the player wants to move in, if any.
    pub fn wanted_direction8(&self) -> Option<Direction8> {
        self.commands.wanted_direction8()
    }

    /// What the action command would do now, as shown to the player.
    pub fn action_effect(&self) -> ActionEffect {
        self.action_effect
    }

    pub fn set_action_effect(&mut self, effect: ActionEffect) {
        self.action_effect = effect;
    }

    // ===== collaborators =====

    /// Map the hero is on.
    pub fn map(&self) -> &dyn Map {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> &mut dyn Map {
        self.map.as_mut()
    }

    pub(crate) fn replace_map(&mut self, map: Box<dyn Map>) -> Box<dyn Map> {
        std::mem::replace(&mut self.map, map)
    }

    pub fn sprites(&self) -> &dyn HeroSprites {
        self.sprites.as_ref()
    }

    pub fn sprites_mut(&mut self) -> &mut dyn HeroSprites {
        self.sprites.as_mut()
    }

    /// Sets the animation in the current facing direction.
    pub fn set_animation(&mut self, animation: Animation) {
        self.sprites.set_animation(animation, self.direction);
    }

    /// Life, abilities and items of the player.
    pub fn equipment(&self) -> &dyn Equipment {
        self.equipment.as_ref()
    }

    pub fn equipment_mut(&mut self) -> &mut dyn Equipment {
        self.equipment.as_mut()
    }

    pub fn play_sound(&mut self, sound: Sound) {
        self.audio.play(sound);
    }

    // ===== suspension and invincibility =====

    /// Whether the game is paused for the hero.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Updates the hero-level suspended flag. Returns `false` when unchanged.
    pub(crate) fn set_suspended(&mut self, suspended: bool) -> bool {
        if suspended == self.suspended {
            return false;
        }
        self.suspended = suspended;

        if suspended {
            self.when_suspended = self.now;
        } else if let Some(until) = self.invincible_until.as_mut() {
            *until += self.now.saturating_since(self.when_suspended);
        }

        let now = self.now;
        if let Some(movement) = self.movement.as_mut() {
            movement.set_suspended(suspended, now);
        }
        self.sprites.set_suspended(suspended);
        true
    }

    /// Whether attacks are ignored at the current date.
    pub fn is_invincible(&self) -> bool {
        self.invincible_until.is_some_and(|until| self.now < until)
    }

    /// Makes the hero invincible for `duration` ms from now.
    pub fn set_invincible(&mut self, duration: u64) {
        self.invincible_until = Some(self.now + duration);
    }

    pub(crate) fn expire_invincibility(&mut self) {
        if !self.suspended && !self.is_invincible() {
            self.invincible_until = None;
        }
    }
}

impl std::fmt::Debug for HeroContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroContext")
            .field("now", &self.now)
            .field("position", &self.position)
            .field("direction", &self.direction)
            .field("layer", &self.layer)
            .field("movement", &self.movement)
            .field("facing_entity", &self.facing_entity)
            .field("action_effect", &self.action_effect)
            .field("suspended", &self.suspended)
            .field("pending", &self.pending.as_ref().map(|s| s.name()))
            .finish_non_exhaustive()
    }
}

//! Moving a grabbed entity by one drag of two grid steps.

use crate::config::HeroConfig;
use crate::env::{Command, EntityKind};
use crate::hero::HeroContext;
use crate::movement::PathMovement;
use crate::types::{Direction4, Direction8, EntityId, Point};

use super::{Free, Grabbing, StateCore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragKind {
    Push,
    Pull,
}

/// Drag progress shared by [`Pushing`](super::Pushing) and
/// [`Pulling`](super::Pulling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Drag {
    kind: DragKind,
    direction: Direction8,
    entity: Option<EntityId>,
}

impl Drag {
    /// A push moving along the hero's facing `direction`.
    pub(super) fn push(direction: Direction8) -> Self {
        Self::new(DragKind::Push, direction)
    }

    /// A pull moving along `direction`, away from the grabbed entity.
    pub(super) fn pull(direction: Direction8) -> Self {
        Self::new(DragKind::Pull, direction)
    }

    fn new(kind: DragKind, direction: Direction8) -> Self {
        Self {
            kind,
            direction,
            entity: None,
        }
    }

    /// Direction the hero moves in while dragging.
    pub(super) fn direction(&self) -> Direction8 {
        self.direction
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.entity.is_some()
    }

    /// Starts dragging the facing entity if it accepts being moved by the hero.
    ///
    /// Leaves everything untouched when there is no facing entity or when it
    /// refuses.
    pub(super) fn try_start(&mut self, hero: &mut HeroContext) -> bool {
        let Some(entity) = hero.facing_entity() else {
            return false;
        };

        if hero.map().entity_kind(entity) == Some(EntityKind::Block) {
            hero.try_snap_to_facing_entity();
        }
        if !hero.map_mut().start_movement_by_hero(entity) {
            tracing::trace!(%entity, "entity refuses to be dragged");
            return false;
        }

        let movement = PathMovement::repeated(
            self.direction,
            HeroConfig::DRAG_STEPS,
            hero.config().drag_speed,
            hero.now(),
        );
        hero.set_movement(Box::new(movement));
        self.entity = Some(entity);
        hero.map_mut().notify_moving_by(entity);
        tracing::trace!(%entity, direction = %self.direction, "drag started");
        true
    }

    /// Whether the dragged entity went past the minimum distance and sits on
    /// the grid line across the drag path.
    pub(super) fn has_reached_grid(&self, hero: &HeroContext) -> bool {
        let Some(entity) = self.entity else {
            return false;
        };

        let covered = hero
            .movement()
            .map_or(0, |movement| movement.total_distance_covered());
        if covered <= HeroConfig::DRAG_MIN_DISTANCE {
            return false;
        }

        let horizontal = self
            .direction
            .to_direction4()
            .is_some_and(Direction4::is_horizontal);
        if horizontal {
            hero.map().is_aligned_to_grid_x(entity)
        } else {
            hero.map().is_aligned_to_grid_y(entity)
        }
    }

    /// Stops the drag, then picks the next state with [`Drag::leave`].
    pub(super) fn stop(&mut self, core: &StateCore, hero: &mut HeroContext) {
        if !self.finish(hero) {
            return;
        }

        self.leave(core, hero);
    }

    /// Hands the entity back to the map and snaps the hero next to it.
    ///
    /// Returns `false` if nothing was being dragged.
    pub(super) fn finish(&mut self, hero: &mut HeroContext) -> bool {
        let Some(entity) = self.entity.take() else {
            return false;
        };

        hero.map_mut().stop_movement_by_hero(entity);
        if let Some(position) = hero.map().entity_position(entity) {
            let snapped = snapped_position(hero.position(), position, hero.direction());
            hero.set_position(snapped);
        }
        hero.clear_movement();
        hero.map_mut().notify_moved_by(entity);
        tracing::trace!(%entity, position = %hero.position(), "drag stopped");
        true
    }

    /// The dragged entity left the map: ends the drag where the hero stands.
    pub(super) fn abort(&mut self, core: &StateCore, hero: &mut HeroContext, removed: EntityId) {
        if self.entity != Some(removed) {
            return;
        }

        self.entity = None;
        hero.clear_movement();
        tracing::trace!(entity = %removed, "dragged entity removed");

        self.leave(core, hero);
    }

    /// Chooses what follows a finished drag, unless the state changed meanwhile.
    ///
    /// [`Grabbing`] needs the action command and a main wanted direction. A
    /// push whose direction is still wanted keeps its state, so the next
    /// update drags again. Anything else ends in [`Free`].
    fn leave(&self, core: &StateCore, hero: &mut HeroContext) {
        if !hero.is_current(core) {
            return;
        }

        let wanted = hero.wanted_direction8();
        let grabbing = hero.is_command_pressed(Command::Action)
            && wanted.is_some_and(|direction| direction.to_direction4().is_some());
        if grabbing {
            hero.change_state(Box::new(Grabbing::new()));
        } else if self.kind == DragKind::Push && wanted == Some(self.direction) {
            tracing::trace!(direction = %self.direction, "push goes on");
        } else {
            hero.change_state(Box::new(Free::new()));
        }
    }
}

/// Hero position right next to an entity at `entity`, facing it.
fn snapped_position(hero: Point, entity: Point, facing: Direction4) -> Point {
    let offset = HeroConfig::DRAG_SNAP_OFFSET;
    match facing {
        Direction4::Right => Point::new(entity.x - offset, hero.y),
        Direction4::Up => Point::new(hero.x, entity.y + offset),
        Direction4::Left => Point::new(entity.x + offset, hero.y),
        Direction4::Down => Point::new(hero.x, entity.y - offset),
    }
}

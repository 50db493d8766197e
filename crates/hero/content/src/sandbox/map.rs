//! In-memory room served through [`hero_core::Map`].
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use hero_core::{
    CarriedObject, Direction4, Displacement, EntityId, EntityKind, Ground, GroundObstacles,
    HeroConfig, ItemId, Map, MapId, Point, Rect, Tick,
};
use tracing::{debug, trace};

use crate::room::{EntitySpec, GroundPatch, RoomSpec};

/// An object the hero threw, as recorded by the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrownObject {
    pub entity: EntityId,
    pub from: Point,
    pub direction: Direction4,
}

#[derive(Clone, Copy, Debug)]
struct RoomEntity {
    spec: EntitySpec,
    moving_by_hero: bool,
}

impl RoomEntity {
    fn bounds_at(position: Point) -> Rect {
        Rect::at(position, HeroConfig::HERO_SIZE, HeroConfig::HERO_SIZE)
    }

    fn bounds(&self) -> Rect {
        Self::bounds_at(self.spec.position)
    }

    fn is_solid(&self) -> bool {
        !matches!(self.spec.kind, EntityKind::Other)
    }
}

#[derive(Debug)]
struct RoomState {
    id: MapId,
    walls: Vec<Rect>,
    grounds: Vec<GroundPatch>,
    entities: BTreeMap<EntityId, RoomEntity>,
    thrown: Vec<ThrownObject>,
    interceptions: Vec<(EntityId, ItemId)>,
    dragged_entity_collided: bool,
}

impl RoomState {
    fn ground_at(&self, point: Point) -> Ground {
        if self.walls.iter().any(|wall| wall.contains(point)) {
            return Ground::Wall;
        }
        self.grounds
            .iter()
            .rev()
            .find(|patch| patch.area.contains(point))
            .map_or(Ground::Traversable, |patch| patch.ground)
    }

    fn hits_terrain(&self, bounds: Rect, obstacles: GroundObstacles) -> bool {
        self.walls.iter().any(|wall| wall.overlaps(&bounds))
            || self
                .grounds
                .iter()
                .any(|patch| patch.area.overlaps(&bounds) && patch.ground.blocks(obstacles))
    }

    /// Solid entities other than `except` and those being moved by the hero.
    fn hits_entity(&self, bounds: Rect, except: Option<EntityId>) -> bool {
        self.entities.iter().any(|(id, entity)| {
            Some(*id) != except
                && !entity.moving_by_hero
                && entity.is_solid()
                && entity.bounds().overlaps(&bounds)
        })
    }
}

/// Shared handle on a sandbox room.
///
/// Clones share the same room, so the simulator can keep a handle while the
/// hero owns another one.
#[derive(Clone, Debug)]
pub struct RoomMap(Rc<RefCell<RoomState>>);

impl RoomMap {
    pub fn from_spec(spec: &RoomSpec) -> Self {
        let entities = spec
            .entities
            .iter()
            .map(|entity| {
                (
                    entity.id,
                    RoomEntity {
                        spec: *entity,
                        moving_by_hero: false,
                    },
                )
            })
            .collect();

        Self(Rc::new(RefCell::new(RoomState {
            id: spec.map,
            walls: spec.walls.clone(),
            grounds: spec.grounds.clone(),
            entities,
            thrown: Vec::new(),
            interceptions: Vec::new(),
            dragged_entity_collided: false,
        })))
    }

    /// The entity right in front of a hero occupying `hero_bounds`.
    pub fn facing_entity(&self, hero_bounds: Rect, direction: Direction4) -> Option<EntityId> {
        let probe = hero_bounds.translated(direction.unit());
        self.0
            .borrow()
            .entities
            .iter()
            .find(|(_, entity)| entity.bounds().overlaps(&probe))
            .map(|(id, _)| *id)
    }

    /// Returns and clears the collision flag raised when an entity moved by
    /// the hero ran into something.
    pub fn take_dragged_entity_collision(&self) -> bool {
        std::mem::take(&mut self.0.borrow_mut().dragged_entity_collided)
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.0.borrow().entities.contains_key(&entity)
    }

    pub fn thrown(&self) -> Vec<ThrownObject> {
        self.0.borrow().thrown.clone()
    }

    pub fn interceptions(&self) -> Vec<(EntityId, ItemId)> {
        self.0.borrow().interceptions.clone()
    }
}

impl Map for RoomMap {
    fn id(&self) -> MapId {
        self.0.borrow().id
    }

    fn test_obstacle(&self, bounds: Rect, obstacles: GroundObstacles) -> bool {
        let state = self.0.borrow();
        state.hits_terrain(bounds, obstacles) || state.hits_entity(bounds, None)
    }

    fn ground_at(&self, point: Point) -> Ground {
        self.0.borrow().ground_at(point)
    }

    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.0.borrow().entities.get(&entity).map(|e| e.spec.kind)
    }

    fn entity_position(&self, entity: EntityId) -> Option<Point> {
        self.0.borrow().entities.get(&entity).map(|e| e.spec.position)
    }

    fn is_aligned_to_grid_x(&self, entity: EntityId) -> bool {
        self.entity_position(entity)
            .is_some_and(|position| position.x.rem_euclid(HeroConfig::GRID_SIZE) == 0)
    }

    fn is_aligned_to_grid_y(&self, entity: EntityId) -> bool {
        self.entity_position(entity)
            .is_some_and(|position| position.y.rem_euclid(HeroConfig::GRID_SIZE) == 0)
    }

    fn start_movement_by_hero(&mut self, entity: EntityId) -> bool {
        let mut state = self.0.borrow_mut();
        let Some(entity) = state.entities.get_mut(&entity) else {
            return false;
        };
        if !entity.spec.draggable {
            return false;
        }
        entity.moving_by_hero = true;
        state.dragged_entity_collided = false;
        true
    }

    fn stop_movement_by_hero(&mut self, entity: EntityId) {
        if let Some(entity) = self.0.borrow_mut().entities.get_mut(&entity) {
            entity.moving_by_hero = false;
        }
    }

    fn notify_moving_by(&mut self, entity: EntityId) {
        trace!(%entity, "entity starts moving with the hero");
    }

    fn notify_moved_by(&mut self, entity: EntityId) {
        trace!(%entity, position = ?self.entity_position(entity), "entity moved by the hero");
    }

    /// Entities moved by the hero follow its displacement unless they would
    /// run into something, which raises the collision flag instead.
    fn notify_hero_moved(&mut self, _hero_bounds: Rect, displacement: Displacement) {
        let mut state = self.0.borrow_mut();
        let moving: Vec<EntityId> = state
            .entities
            .iter()
            .filter(|(_, entity)| entity.moving_by_hero)
            .map(|(id, _)| *id)
            .collect();

        for id in moving {
            let Some(position) = state.entities.get(&id).map(|e| e.spec.position) else {
                continue;
            };
            let target = position.offset(displacement);
            let bounds = RoomEntity::bounds_at(target);
            if state.hits_terrain(bounds, GroundObstacles::all())
                || state.hits_entity(bounds, Some(id))
            {
                trace!(entity = %id, "dragged entity collided");
                state.dragged_entity_collided = true;
                continue;
            }
            if let Some(entity) = state.entities.get_mut(&id) {
                entity.spec.position = target;
            }
        }
    }

    fn lift_weight(&self, entity: EntityId) -> Option<u32> {
        self.0
            .borrow()
            .entities
            .get(&entity)
            .and_then(|e| e.spec.lift_weight)
    }

    fn lift_entity(&mut self, entity: EntityId, _now: Tick) -> Option<CarriedObject> {
        let mut state = self.0.borrow_mut();
        let lifted = state.entities.remove(&entity)?;
        debug!(%entity, kind = %lifted.spec.kind, "entity lifted");

        let mut object = CarriedObject::new(entity);
        object.set_map(state.id);
        Some(object)
    }

    fn throw_object(&mut self, object: CarriedObject, from: Point, direction: Direction4) {
        debug!(entity = %object.entity(), %from, %direction, "object thrown");
        self.0.borrow_mut().thrown.push(ThrownObject {
            entity: object.entity(),
            from,
            direction,
        });
    }

    fn interaction_with_item(&mut self, entity: EntityId, item: ItemId) -> bool {
        let mut state = self.0.borrow_mut();
        let intercepts = state
            .entities
            .get(&entity)
            .is_some_and(|e| e.spec.intercepts_items);
        if intercepts {
            state.interceptions.push((entity, item));
        }
        intercepts
    }
}

use crate::carried::CarriedObject;
use crate::types::{Direction4, Displacement, EntityId, ItemId, MapId, Point, Rect, Tick};

bitflags::bitflags! {
    /// Grounds that block the hero in its current state.
    ///
    /// Built from the active state's terrain queries and handed to the map's
    /// collision test.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GroundObstacles: u8 {
        const SHALLOW_WATER = 1 << 0;
        const DEEP_WATER    = 1 << 1;
        const HOLE          = 1 << 2;
        const LAVA          = 1 << 3;
        const PRICKLE       = 1 << 4;
        const LADDER        = 1 << 5;
    }
}

/// Terrain kind under a point of the map.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ground {
    #[default]
    Traversable,
    Wall,
    ShallowWater,
    DeepWater,
    Hole,
    Lava,
    Prickle,
    Ladder,
}

impl Ground {
    /// The obstacle flag that makes this ground block the hero, if any.
    ///
    /// Walls always block and traversable ground never does, so neither has a flag.
    pub const fn obstacle_flag(self) -> Option<GroundObstacles> {
        match self {
            Ground::ShallowWater => Some(GroundObstacles::SHALLOW_WATER),
            Ground::DeepWater => Some(GroundObstacles::DEEP_WATER),
            Ground::Hole => Some(GroundObstacles::HOLE),
            Ground::Lava => Some(GroundObstacles::LAVA),
            Ground::Prickle => Some(GroundObstacles::PRICKLE),
            Ground::Ladder => Some(GroundObstacles::LADDER),
            Ground::Traversable | Ground::Wall => None,
        }
    }

    /// Whether this ground blocks a hero whose state declares `obstacles`.
    pub fn blocks(self, obstacles: GroundObstacles) -> bool {
        match self {
            Ground::Wall => true,
            ground => ground
                .obstacle_flag()
                .is_some_and(|flag| obstacles.contains(flag)),
        }
    }
}

/// Coarse class of a map entity, as far as the hero cares.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    /// Pushable/pullable block; the hero snaps to it before dragging.
    Block,
    /// Object that can be lifted and thrown (pots, bushes, stones).
    Destructible,
    Chest,
    Npc,
    Other,
}

/// The current map: collision layer and entity registry.
///
/// The registry keeps ownership of every entity. The hero refers to them by
/// [`EntityId`] only, except while an object is lifted or carried, in which
/// case the map hands out a [`CarriedObject`] and receives it back when
/// thrown.
pub trait Map {
    fn id(&self) -> MapId;

    /// Whether a hero occupying `bounds` would collide with the map.
    fn test_obstacle(&self, bounds: Rect, obstacles: GroundObstacles) -> bool;

    fn ground_at(&self, point: Point) -> Ground;

    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind>;

    fn entity_position(&self, entity: EntityId) -> Option<Point>;

    fn is_aligned_to_grid_x(&self, entity: EntityId) -> bool;

    fn is_aligned_to_grid_y(&self, entity: EntityId) -> bool;

    /// Asks the entity to accept being moved by the hero.
    ///
    /// Returns `false` when the entity refuses; nothing is changed then.
    fn start_movement_by_hero(&mut self, entity: EntityId) -> bool;

    fn stop_movement_by_hero(&mut self, entity: EntityId);

    fn notify_moving_by(&mut self, entity: EntityId);

    fn notify_moved_by(&mut self, entity: EntityId);

    /// Called after each pixel the hero moves.
    fn notify_hero_moved(&mut self, _hero_bounds: Rect, _displacement: Displacement) {}

    /// Lift ability level required to lift the entity, or `None` if it
    /// cannot be lifted at all.
    fn lift_weight(&self, entity: EntityId) -> Option<u32>;

    /// Removes the entity from normal updates and hands it to the hero.
    fn lift_entity(&mut self, entity: EntityId, now: Tick) -> Option<CarriedObject>;

    /// Re-inserts a carried object into the map as a thrown entity.
    fn throw_object(&mut self, object: CarriedObject, from: Point, direction: Direction4);

    /// Lets the entity intercept the use of an item on it.
    ///
    /// Returns `true` when the entity handled the interaction itself.
    fn interaction_with_item(&mut self, _entity: EntityId, _item: ItemId) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_block_regardless_of_state() {
        assert!(Ground::Wall.blocks(GroundObstacles::empty()));
        assert!(!Ground::Traversable.blocks(GroundObstacles::all()));
    }

    #[test]
    fn hazards_block_only_when_declared() {
        let obstacles = GroundObstacles::HOLE | GroundObstacles::LAVA;
        assert!(Ground::Hole.blocks(obstacles));
        assert!(Ground::Lava.blocks(obstacles));
        assert!(!Ground::DeepWater.blocks(obstacles));
    }
}

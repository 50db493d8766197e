//! Sandbox room description.
//!
//! A room is a single map: solid walls, patches of special ground, the
//! entities the hero can interact with and the equipment the hero starts
//! with. [`RoomMap`](crate::RoomMap) and [`SimpleEquipment`](crate::SimpleEquipment)
//! are built from it.

use hero_core::{Ability, EntityId, EntityKind, Ground, ItemId, ItemSlot, MapId, Point, Rect};

/// Everything needed to set up a sandbox run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSpec {
    pub map: MapId,
    pub hero_start: Point,
    pub walls: Vec<Rect>,
    pub grounds: Vec<GroundPatch>,
    pub entities: Vec<EntitySpec>,
    pub equipment: EquipmentSpec,
}

impl RoomSpec {
    /// An empty room with default equipment.
    pub fn empty(map: MapId) -> Self {
        Self {
            map,
            hero_start: Point::ORIGIN,
            walls: Vec::new(),
            grounds: Vec::new(),
            entities: Vec::new(),
            equipment: EquipmentSpec::default(),
        }
    }
}

/// A rectangle of non-default ground. Later patches win where they overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroundPatch {
    pub area: Rect,
    pub ground: Ground,
}

/// An entity placed in the room. Every entity occupies one 16×16 cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntitySpec {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Point,
    /// Lift level required to pick the entity up; `None` if it cannot be lifted.
    pub lift_weight: Option<u32>,
    /// Whether the entity accepts being pushed or pulled.
    pub draggable: bool,
    /// Whether the entity handles items used on it by itself.
    pub intercepts_items: bool,
}

impl EntitySpec {
    pub fn new(id: EntityId, kind: EntityKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            lift_weight: None,
            draggable: false,
            intercepts_items: false,
        }
    }

    /// A pushable block.
    pub fn block(id: EntityId, position: Point) -> Self {
        Self {
            draggable: true,
            ..Self::new(id, EntityKind::Block, position)
        }
    }

    /// A pot that can be lifted with the given lift level.
    pub fn pot(id: EntityId, position: Point, weight: u32) -> Self {
        Self {
            lift_weight: Some(weight),
            ..Self::new(id, EntityKind::Destructible, position)
        }
    }
}

/// Starting life, abilities and item slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentSpec {
    pub life: u32,
    pub abilities: Vec<(Ability, u32)>,
    pub items: Vec<ItemSpec>,
}

impl Default for EquipmentSpec {
    fn default() -> Self {
        Self {
            life: 12,
            abilities: vec![(Ability::Defense, 1), (Ability::Lift, 1), (Ability::Grab, 1)],
            items: Vec::new(),
        }
    }
}

/// An item assigned to a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub slot: ItemSlot,
    pub item: ItemId,
    /// Number of updates a use of the item lasts.
    pub duration: u32,
}

//! Sandbox room loader.
//!
//! Rooms are RON files:
//!
//! ```ron
//! (
//!     map_id: 1,
//!     hero: (0, 0),
//!     walls: [(-16, -16, 96, 16)],             // (x, y, width, height)
//!     grounds: [(48, 0, 16, 16, Hole)],       // (x, y, width, height, ground)
//!     entities: [
//!         (id: 3, kind: Block, position: (16, 0), draggable: true),
//!         (id: 5, kind: Destructible, position: (0, 32), weight: Some(1)),
//!     ],
//!     equipment: (life: 12, abilities: [(Lift, 1), (Grab, 1)]),
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;

use hero_core::{Ability, EntityId, EntityKind, Ground, ItemId, ItemSlot, MapId, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::room::{EntitySpec, EquipmentSpec, GroundPatch, ItemSpec, RoomSpec};

/// Room data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoomDataRon {
    map_id: u32,
    hero: (i32, i32),
    #[serde(default)]
    walls: Vec<(i32, i32, u32, u32)>,
    #[serde(default)]
    grounds: Vec<(i32, i32, u32, u32, Ground)>,
    #[serde(default)]
    entities: Vec<EntityRon>,
    #[serde(default)]
    equipment: EquipmentRon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntityRon {
    id: u32,
    kind: EntityKind,
    position: (i32, i32),
    #[serde(default)]
    weight: Option<u32>,
    #[serde(default)]
    draggable: bool,
    #[serde(default)]
    intercepts_items: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct EquipmentRon {
    life: u32,
    abilities: Vec<(Ability, u32)>,
    items: Vec<ItemRon>,
}

impl Default for EquipmentRon {
    fn default() -> Self {
        let spec = EquipmentSpec::default();
        Self {
            life: spec.life,
            abilities: spec.abilities,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRon {
    slot: u8, // 1 or 2
    item: u32,
    duration: u32,
}

/// Loader for sandbox rooms from RON files.
pub struct RoomLoader;

impl RoomLoader {
    /// Load a room from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the room
    ///
    /// # Returns
    ///
    /// Returns the room layout, its entities and the starting equipment.
    pub fn load(path: &Path) -> LoadResult<RoomSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a room from RON text.
    pub fn parse(content: &str) -> LoadResult<RoomSpec> {
        let data: RoomDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room RON: {}", e))?;

        let walls = data
            .walls
            .into_iter()
            .map(|(x, y, width, height)| Rect::new(x, y, width, height))
            .collect();

        let grounds = data
            .grounds
            .into_iter()
            .map(|(x, y, width, height, ground)| GroundPatch {
                area: Rect::new(x, y, width, height),
                ground,
            })
            .collect();

        let mut seen = HashSet::new();
        let mut entities = Vec::with_capacity(data.entities.len());
        for entity in data.entities {
            if !seen.insert(entity.id) {
                anyhow::bail!("Duplicate entity id {} in room", entity.id);
            }
            entities.push(EntitySpec {
                id: EntityId(entity.id),
                kind: entity.kind,
                position: Point::new(entity.position.0, entity.position.1),
                lift_weight: entity.weight,
                draggable: entity.draggable,
                intercepts_items: entity.intercepts_items,
            });
        }

        let items = data
            .equipment
            .items
            .into_iter()
            .map(|item| {
                let slot = match item.slot {
                    1 => ItemSlot::First,
                    2 => ItemSlot::Second,
                    other => anyhow::bail!("Invalid item slot {} (expected 1 or 2)", other),
                };
                Ok(ItemSpec {
                    slot,
                    item: ItemId(item.item),
                    duration: item.duration,
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(RoomSpec {
            map: MapId(data.map_id),
            hero_start: Point::new(data.hero.0, data.hero.1),
            walls,
            grounds,
            entities,
            equipment: EquipmentSpec {
                life: data.equipment.life,
                abilities: data.equipment.abilities,
                items,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ROOM: &str = r#"(
        map_id: 7,
        hero: (0, 0),
        walls: [(-16, -16, 96, 16)],
        grounds: [(48, 0, 16, 16, Hole)],
        entities: [
            (id: 3, kind: Block, position: (16, 0), draggable: true),
            (id: 5, kind: Destructible, position: (0, 32), weight: Some(1)),
        ],
        equipment: (life: 20, abilities: [(Lift, 2)], items: [(slot: 1, item: 4, duration: 30)]),
    )"#;

    #[test]
    fn parses_every_section() {
        let room = RoomLoader::parse(ROOM).unwrap();

        assert_eq!(room.map, MapId(7));
        assert_eq!(room.walls, vec![Rect::new(-16, -16, 96, 16)]);
        assert_eq!(room.grounds[0].ground, Ground::Hole);
        assert_eq!(room.entities.len(), 2);
        assert!(room.entities[0].draggable);
        assert_eq!(room.entities[1].lift_weight, Some(1));
        assert_eq!(room.equipment.life, 20);
        assert_eq!(room.equipment.abilities, vec![(Ability::Lift, 2)]);
        assert_eq!(
            room.equipment.items,
            vec![ItemSpec {
                slot: ItemSlot::First,
                item: ItemId(4),
                duration: 30
            }]
        );
    }

    #[test]
    fn optional_sections_default() {
        let room = RoomLoader::parse("(map_id: 1, hero: (8, 8))").unwrap();

        assert_eq!(room.hero_start, Point::new(8, 8));
        assert!(room.walls.is_empty());
        assert!(room.entities.is_empty());
        assert_eq!(room.equipment, EquipmentSpec::default());
    }

    #[test]
    fn duplicate_entity_ids_are_rejected() {
        let content = r#"(
            map_id: 1,
            hero: (0, 0),
            entities: [
                (id: 3, kind: Block, position: (16, 0)),
                (id: 3, kind: Npc, position: (32, 0)),
            ],
        )"#;

        let err = RoomLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("Duplicate entity id 3"));
    }

    #[test]
    fn invalid_item_slot_is_rejected() {
        let content = r#"(
            map_id: 1,
            hero: (0, 0),
            equipment: (items: [(slot: 3, item: 1, duration: 1)]),
        )"#;

        assert!(RoomLoader::parse(content).is_err());
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("room.ron");
        std::fs::write(&path, ROOM).unwrap();

        let room = RoomLoader::load(&path).unwrap();
        assert_eq!(room.entities[0].id, EntityId(3));
    }
}

//! Recording fakes for the hero collaborators.
//!
//! Each fake keeps its state behind `Rc<RefCell<_>>` so that tests can keep a
//! handle while the hero owns the boxed trait object.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use hero_core::{
    Ability, Animation, Audio, CarriedObject, Collaborators, Command, Commands, Direction4,
    Direction8, Displacement, EntityId, EntityKind, Equipment, Ground, GroundObstacles, Hero,
    HeroConfig, HeroSprites, ItemId, ItemSlot, Map, MapId, Point, Rect, Sound, Tick,
};

// ===== map =====

#[derive(Clone, Debug)]
pub struct FakeEntity {
    pub kind: EntityKind,
    pub position: Point,
    pub lift_weight: Option<u32>,
    pub accepts_drag: bool,
    pub moving_by_hero: bool,
    /// Forces the grid alignment answer instead of computing it.
    pub aligned: Option<bool>,
}

impl FakeEntity {
    pub fn block(position: Point) -> Self {
        Self {
            kind: EntityKind::Block,
            position,
            lift_weight: None,
            accepts_drag: true,
            moving_by_hero: false,
            aligned: None,
        }
    }

    pub fn pot(position: Point, weight: u32) -> Self {
        Self {
            kind: EntityKind::Destructible,
            position,
            lift_weight: Some(weight),
            accepts_drag: false,
            moving_by_hero: false,
            aligned: None,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::at(self.position, 16, 16)
    }
}

#[derive(Debug, Default)]
pub struct MapState {
    pub walls: Vec<Rect>,
    pub grounds: Vec<(Rect, Ground)>,
    pub entities: HashMap<EntityId, FakeEntity>,
    pub thrown: Vec<(EntityId, Point, Direction4)>,
    pub intercepting: HashSet<EntityId>,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeMap(pub Rc<RefCell<MapState>>);

impl FakeMap {
    pub fn add_entity(&self, id: EntityId, entity: FakeEntity) {
        self.0.borrow_mut().entities.insert(id, entity);
    }

    pub fn remove_entity(&self, id: EntityId) {
        self.0.borrow_mut().entities.remove(&id);
    }

    pub fn add_wall(&self, wall: Rect) {
        self.0.borrow_mut().walls.push(wall);
    }

    pub fn entity_position(&self, id: EntityId) -> Option<Point> {
        self.0.borrow().entities.get(&id).map(|e| e.position)
    }

    pub fn set_aligned(&self, id: EntityId, aligned: Option<bool>) {
        if let Some(entity) = self.0.borrow_mut().entities.get_mut(&id) {
            entity.aligned = aligned;
        }
    }

    pub fn thrown(&self) -> Vec<(EntityId, Point, Direction4)> {
        self.0.borrow().thrown.clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.0.borrow().events.clone()
    }
}

impl Map for FakeMap {
    fn id(&self) -> MapId {
        MapId(1)
    }

    fn test_obstacle(&self, bounds: Rect, obstacles: GroundObstacles) -> bool {
        let state = self.0.borrow();
        state.walls.iter().any(|wall| wall.overlaps(&bounds))
            || state
                .grounds
                .iter()
                .any(|(rect, ground)| rect.overlaps(&bounds) && ground.blocks(obstacles))
            || state
                .entities
                .values()
                .any(|entity| !entity.moving_by_hero && entity.bounds().overlaps(&bounds))
    }

    fn ground_at(&self, point: Point) -> Ground {
        let probe = Rect::at(point, 1, 1);
        self.0
            .borrow()
            .grounds
            .iter()
            .find(|(rect, _)| rect.overlaps(&probe))
            .map_or(Ground::Traversable, |(_, ground)| *ground)
    }

    fn entity_kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.0.borrow().entities.get(&entity).map(|e| e.kind)
    }

    fn entity_position(&self, entity: EntityId) -> Option<Point> {
        FakeMap::entity_position(self, entity)
    }

    fn is_aligned_to_grid_x(&self, entity: EntityId) -> bool {
        self.0
            .borrow()
            .entities
            .get(&entity)
            .is_some_and(|e| e.aligned.unwrap_or(e.position.x % 8 == 0))
    }

    fn is_aligned_to_grid_y(&self, entity: EntityId) -> bool {
        self.0
            .borrow()
            .entities
            .get(&entity)
            .is_some_and(|e| e.aligned.unwrap_or(e.position.y % 8 == 0))
    }

    fn start_movement_by_hero(&mut self, entity: EntityId) -> bool {
        let mut state = self.0.borrow_mut();
        let accepted = match state.entities.get_mut(&entity) {
            Some(e) if e.accepts_drag => {
                e.moving_by_hero = true;
                true
            }
            _ => false,
        };
        state.events.push(format!("start_movement_by_hero {entity} {accepted}"));
        accepted
    }

    fn stop_movement_by_hero(&mut self, entity: EntityId) {
        let mut state = self.0.borrow_mut();
        if let Some(e) = state.entities.get_mut(&entity) {
            e.moving_by_hero = false;
        }
        state.events.push(format!("stop_movement_by_hero {entity}"));
    }

    fn notify_moving_by(&mut self, entity: EntityId) {
        self.0
            .borrow_mut()
            .events
            .push(format!("moving_by {entity}"));
    }

    fn notify_moved_by(&mut self, entity: EntityId) {
        self.0.borrow_mut().events.push(format!("moved_by {entity}"));
    }

    fn notify_hero_moved(&mut self, _hero_bounds: Rect, displacement: Displacement) {
        for entity in self.0.borrow_mut().entities.values_mut() {
            if entity.moving_by_hero {
                entity.position = entity.position.offset(displacement);
            }
        }
    }

    fn lift_weight(&self, entity: EntityId) -> Option<u32> {
        self.0.borrow().entities.get(&entity).and_then(|e| e.lift_weight)
    }

    fn lift_entity(&mut self, entity: EntityId, _now: Tick) -> Option<CarriedObject> {
        let mut state = self.0.borrow_mut();
        state.entities.get(&entity)?.lift_weight?;
        state.entities.remove(&entity);
        state.events.push(format!("lifted {entity}"));
        Some(CarriedObject::new(entity))
    }

    fn throw_object(&mut self, object: CarriedObject, from: Point, direction: Direction4) {
        self.0
            .borrow_mut()
            .thrown
            .push((object.entity(), from, direction));
    }

    fn interaction_with_item(&mut self, entity: EntityId, _item: ItemId) -> bool {
        self.0.borrow().intercepting.contains(&entity)
    }
}

// ===== sprites =====

#[derive(Debug, Default)]
pub struct SpritesState {
    pub animation: Animation,
    pub direction: Direction4,
    pub lifted_item: Option<EntityId>,
    pub lifted_history: Vec<Option<EntityId>>,
    pub blinks: Vec<u64>,
    pub suspended: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FakeSprites(pub Rc<RefCell<SpritesState>>);

impl FakeSprites {
    pub fn animation(&self) -> Animation {
        self.0.borrow().animation
    }

    pub fn lifted_item(&self) -> Option<EntityId> {
        self.0.borrow().lifted_item
    }

    pub fn lifted_history(&self) -> Vec<Option<EntityId>> {
        self.0.borrow().lifted_history.clone()
    }

    pub fn blinks(&self) -> Vec<u64> {
        self.0.borrow().blinks.clone()
    }
}

impl HeroSprites for FakeSprites {
    fn set_animation(&mut self, animation: Animation, direction: Direction4) {
        let mut state = self.0.borrow_mut();
        state.animation = animation;
        state.direction = direction;
    }

    fn animation(&self) -> Animation {
        FakeSprites::animation(self)
    }

    fn set_lifted_item(&mut self, item: Option<EntityId>) {
        let mut state = self.0.borrow_mut();
        state.lifted_item = item;
        state.lifted_history.push(item);
    }

    fn lifted_item(&self) -> Option<EntityId> {
        FakeSprites::lifted_item(self)
    }

    fn blink(&mut self, duration: u64) {
        self.0.borrow_mut().blinks.push(duration);
    }

    fn set_suspended(&mut self, suspended: bool) {
        self.0.borrow_mut().suspended = suspended;
    }
}

// ===== equipment =====

#[derive(Debug)]
pub struct EquipmentState {
    pub abilities: HashMap<Ability, u32>,
    pub life: u32,
    pub abilities_used: Vec<Ability>,
    pub slots: [Option<ItemId>; 2],
    pub startable: bool,
    pub started: Vec<ItemId>,
    pub finished: HashSet<ItemId>,
    pub obtainable: bool,
}

impl Default for EquipmentState {
    fn default() -> Self {
        Self {
            abilities: HashMap::from([(Ability::Defense, 1), (Ability::Lift, 1), (Ability::Grab, 1)]),
            life: 20,
            abilities_used: Vec::new(),
            slots: [None, None],
            startable: true,
            started: Vec::new(),
            finished: HashSet::new(),
            obtainable: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeEquipment(pub Rc<RefCell<EquipmentState>>);

impl FakeEquipment {
    pub fn set_ability(&self, ability: Ability, level: u32) {
        self.0.borrow_mut().abilities.insert(ability, level);
    }

    pub fn life(&self) -> u32 {
        self.0.borrow().life
    }

    pub fn abilities_used(&self) -> Vec<Ability> {
        self.0.borrow().abilities_used.clone()
    }

    pub fn assign(&self, slot: ItemSlot, item: ItemId) {
        let index = match slot {
            ItemSlot::First => 0,
            ItemSlot::Second => 1,
        };
        self.0.borrow_mut().slots[index] = Some(item);
    }

    pub fn finish_item(&self, item: ItemId) {
        self.0.borrow_mut().finished.insert(item);
    }

    pub fn started(&self) -> Vec<ItemId> {
        self.0.borrow().started.clone()
    }
}

impl Equipment for FakeEquipment {
    fn ability_level(&self, ability: Ability) -> u32 {
        self.0.borrow().abilities.get(&ability).copied().unwrap_or(0)
    }

    fn notify_ability_used(&mut self, ability: Ability) {
        self.0.borrow_mut().abilities_used.push(ability);
    }

    fn life(&self) -> u32 {
        FakeEquipment::life(self)
    }

    fn remove_life(&mut self, points: u32) {
        let mut state = self.0.borrow_mut();
        state.life = state.life.saturating_sub(points);
    }

    fn item_assigned(&self, slot: ItemSlot) -> Option<ItemId> {
        let state = self.0.borrow();
        match slot {
            ItemSlot::First => state.slots[0],
            ItemSlot::Second => state.slots[1],
        }
    }

    fn can_start_item(&self, _item: ItemId) -> bool {
        self.0.borrow().startable
    }

    fn start_item(&mut self, item: ItemId) {
        self.0.borrow_mut().started.push(item);
    }

    fn is_item_finished(&self, item: ItemId) -> bool {
        self.0.borrow().finished.contains(&item)
    }

    fn is_item_obtainable(&self, _item: ItemId) -> bool {
        self.0.borrow().obtainable
    }
}

// ===== commands and audio =====

#[derive(Debug, Default)]
pub struct CommandsState {
    pub pressed: HashSet<Command>,
    pub wanted: Option<Direction8>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeCommands(pub Rc<RefCell<CommandsState>>);

impl FakeCommands {
    pub fn press(&self, command: Command) {
        self.0.borrow_mut().pressed.insert(command);
    }

    pub fn release(&self, command: Command) {
        self.0.borrow_mut().pressed.remove(&command);
    }

    pub fn want(&self, direction: Option<Direction8>) {
        self.0.borrow_mut().wanted = direction;
    }
}

impl Commands for FakeCommands {
    fn is_pressed(&self, command: Command) -> bool {
        self.0.borrow().pressed.contains(&command)
    }

    fn wanted_direction8(&self) -> Option<Direction8> {
        self.0.borrow().wanted
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeAudio(pub Rc<RefCell<Vec<Sound>>>);

impl FakeAudio {
    pub fn played(&self) -> Vec<Sound> {
        self.0.borrow().clone()
    }
}

impl Audio for FakeAudio {
    fn play(&mut self, sound: Sound) {
        self.0.borrow_mut().push(sound);
    }
}

// ===== world =====

/// Handles on every fake, plus a factory for heroes wired to them.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub map: FakeMap,
    pub sprites: FakeSprites,
    pub equipment: FakeEquipment,
    pub commands: FakeCommands,
    pub audio: FakeAudio,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            map: Box::new(self.map.clone()),
            sprites: Box::new(self.sprites.clone()),
            equipment: Box::new(self.equipment.clone()),
            commands: Box::new(self.commands.clone()),
            audio: Box::new(self.audio.clone()),
        }
    }

    pub fn spawn_hero(&self, position: Point) -> Hero {
        self.spawn_hero_with(HeroConfig::default(), position)
    }

    pub fn spawn_hero_with(&self, config: HeroConfig, position: Point) -> Hero {
        Hero::new(self.collaborators(), config, position, Tick::ZERO)
    }
}

/// Runs `hero.update` every `step` ms from `from` (exclusive) to `to` (inclusive).
pub fn run(hero: &mut Hero, from: u64, to: u64, step: u64) {
    let mut now = from;
    while now < to {
        now = (now + step).min(to);
        hero.update(Tick(now));
    }
}

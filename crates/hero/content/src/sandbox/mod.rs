//! In-memory collaborators for running the hero outside a game.
//!
//! Every collaborator is a cheap clonable handle on shared state: one clone
//! goes to the hero, the other stays with the caller for driving input and
//! inspecting what happened.

mod audio;
mod commands;
mod equipment;
mod map;
mod sprites;

pub use audio::RecordingAudio;
pub use commands::ScriptedCommands;
pub use equipment::SimpleEquipment;
pub use map::{RoomMap, ThrownObject};
pub use sprites::RecordingSprites;

use hero_core::{Collaborators, Hero, HeroConfig, Tick};

use crate::room::RoomSpec;

/// A room and the handles on every collaborator of the hero living in it.
#[derive(Clone, Debug)]
pub struct Sandbox {
    pub map: RoomMap,
    pub commands: ScriptedCommands,
    pub sprites: RecordingSprites,
    pub equipment: SimpleEquipment,
    pub audio: RecordingAudio,
    room: RoomSpec,
}

impl Sandbox {
    pub fn new(room: RoomSpec) -> Self {
        Self {
            map: RoomMap::from_spec(&room),
            commands: ScriptedCommands::new(),
            sprites: RecordingSprites::new(),
            equipment: SimpleEquipment::from_spec(&room.equipment),
            audio: RecordingAudio::new(),
            room,
        }
    }

    pub fn room(&self) -> &RoomSpec {
        &self.room
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

    /// Creates a hero at the room's starting point.
    pub fn spawn_hero(&self, config: HeroConfig, now: Tick) -> Hero {
        Hero::new(self.collaborators(), config, self.room.hero_start, now)
    }

    /// Reports what the room detected since the last call: a dragged entity
    /// running into something, and the entity now in front of the hero.
    pub fn sync(&self, hero: &mut Hero) {
        if self.map.take_dragged_entity_collision() {
            hero.notify_grabbed_entity_collision();
        }
        let facing = self
            .map
            .facing_entity(hero.context().bounds(), hero.direction());
        if facing != hero.context().facing_entity() {
            hero.set_facing_entity(facing);
        }
    }
}

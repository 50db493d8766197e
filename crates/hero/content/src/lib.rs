//! Data-driven content and sandbox collaborators for the hero engine.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Hero tuning (data-driven via TOML)
//! - Sandbox rooms: walls, grounds, entities and equipment (data-driven via RON)
//! - Input scripts replayed by the simulator (data-driven via RON)
//!
//! It also implements every collaborator trait of `hero-core` in memory, so a
//! hero can run headless inside a [`Sandbox`] and be driven by a [`Simulation`].

pub mod room;
pub mod sandbox;
pub mod script;
pub mod simulation;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use room::{EntitySpec, EquipmentSpec, GroundPatch, ItemSpec, RoomSpec};
pub use sandbox::{
    RecordingAudio, RecordingSprites, RoomMap, Sandbox, ScriptedCommands, SimpleEquipment,
    ThrownObject,
};
pub use script::{InputScript, ScriptEvent, ScriptStep};
pub use simulation::{DEFAULT_TICK, RunSummary, Simulation, Transition};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RoomLoader, ScriptLoader};

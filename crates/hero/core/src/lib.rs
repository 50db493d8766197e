//! Behavior state machine of the player-controlled hero.
//!
//! The [`Hero`] controller owns exactly one active [`HeroState`] and a
//! [`HeroContext`] holding position, movement and the collaborator
//! subsystems ([`Map`], [`HeroSprites`], [`Equipment`], [`Commands`],
//! [`Audio`]). Everything is single-threaded and driven by a fixed tick:
//! callers forward ticks, commands and world events to the controller, which
//! dispatches them to the active state and applies the transitions it asks for.
pub mod carried;
pub mod config;
pub mod env;
pub mod error;
pub mod hero;
pub mod movement;
pub mod state;
pub mod treasure;
pub mod types;

pub use carried::{CarriedBehavior, CarriedObject};
pub use config::HeroConfig;
pub use env::{
    Ability, ActionEffect, Animation, Audio, Command, Commands, EntityKind, Equipment, Ground,
    GroundObstacles, HeroSprites, Map, Sound,
};
pub use error::ConfigError;
pub use hero::{Collaborators, Hero, HeroContext};
pub use movement::{Movement, MovementInput, PathMovement, PlayerMovement, StraightMovement};
pub use state::{
    Carrying, Free, Freezed, Grabbing, HeroState, Hurt, ItemUsage, Lifting, PlayerMovementState,
    Pulling, Pushing, StateCore, StateId, TreasureState, UsingItem, life_lost,
};
pub use treasure::Treasure;
pub use types::{
    Direction4, Direction8, Displacement, EntityId, ItemId, ItemSlot, Layer, MapId, Point, Rect,
    Tick,
};

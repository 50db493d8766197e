//! Traits describing the subsystems the hero collaborates with.
//!
//! The map and its entity registry, the sprite layer, the equipment, the
//! command input layer and audio are all external to the behavior engine.
//! The hero owns one boxed implementation of each and states reach them
//! through [`HeroContext`](crate::HeroContext).
mod audio;
mod commands;
mod equipment;
mod map;
mod sprites;

pub use audio::{Audio, Sound};
pub use commands::{ActionEffect, Command, Commands};
pub use equipment::{Ability, Equipment};
pub use map::{EntityKind, Ground, GroundObstacles, Map};
pub use sprites::{Animation, HeroSprites};

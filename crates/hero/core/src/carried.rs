//! Objects lifted and carried by the hero.
//!
//! While held, an object is excluded from the map's normal update path and is
//! updated by the holding state instead.

use crate::types::{EntityId, Layer, MapId, Tick};

/// What happens to a carried object when the carrying state is replaced.
///
/// The value is reported by the *next* state.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CarriedBehavior {
    /// Launch the object in the facing direction and give it back to the map.
    #[default]
    Throw,
    /// Drop the object; the map is responsible for destroying it.
    Destroy,
    /// Leave the object to the next state.
    Keep,
}

/// An entity held above the hero's head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarriedObject {
    entity: EntityId,
    map: Option<MapId>,
    layer: Layer,
    lifting_until: Option<Tick>,
    explodes_at: Option<Tick>,
    broken: bool,
    suspended_since: Option<Tick>,
}

impl CarriedObject {
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            map: None,
            layer: Layer::default(),
            lifting_until: None,
            explodes_at: None,
            broken: false,
            suspended_since: None,
        }
    }

    /// Makes the object explode (and break) at `date`, like a lit bomb.
    pub fn with_explosion_date(mut self, date: Tick) -> Self {
        self.explodes_at = Some(date);
        self
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn map(&self) -> Option<MapId> {
        self.map
    }

    pub fn set_map(&mut self, map: MapId) {
        self.map = Some(map);
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    /// Starts the lifting animation, which completes `duration` ms after `now`.
    pub fn start_lifting(&mut self, now: Tick, duration: u64) {
        self.lifting_until = Some(now + duration);
    }

    pub fn is_being_lifted(&self) -> bool {
        self.lifting_until.is_some()
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Breaks the object immediately (hit by something, exploded).
    pub fn break_apart(&mut self) {
        self.broken = true;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended_since.is_some()
    }

    /// Advances the object's own timers.
    pub fn update(&mut self, now: Tick) {
        if self.is_suspended() {
            return;
        }

        if self.lifting_until.is_some_and(|until| now >= until) {
            self.lifting_until = None;
        }

        if self.explodes_at.is_some_and(|date| now >= date) {
            self.explodes_at = None;
            self.broken = true;
        }
    }

    /// Pauses or resumes the object; deadlines move forward by the paused time.
    pub fn set_suspended(&mut self, suspended: bool, now: Tick) {
        match (suspended, self.suspended_since) {
            (true, None) => self.suspended_since = Some(now),
            (false, Some(since)) => {
                let paused = now.saturating_since(since);
                for deadline in [&mut self.lifting_until, &mut self.explodes_at]
                    .into_iter()
                    .flatten()
                {
                    *deadline += paused;
                }
                self.suspended_since = None;
            }
            _ => {}
        }
    }
}

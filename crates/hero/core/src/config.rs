use crate::error::ConfigError;

/// Hero tuning constants and runtime-tunable parameters.
///
/// Speeds are expressed in pixels per second, durations in milliseconds and
/// distances in pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeroConfig {
    /// Speed of the player-controlled walking movement.
    pub walking_speed: u32,
    /// Speed of the hero while pushing or pulling an entity.
    pub drag_speed: u32,
    /// Time the hero must walk against an obstacle before pushing it.
    pub push_delay: u64,
    /// Length of the lifting animation before the object is carried.
    pub lift_duration: u64,
    /// Length of the hurt state when the knockback does not end it earlier.
    pub hurt_duration: u64,
    /// Invincibility and blink window granted when hurt.
    pub invincibility_duration: u64,
    /// Speed of the knockback movement.
    pub knockback_speed: u32,
    /// Maximum distance of the knockback movement.
    pub knockback_distance: u32,
}

impl HeroConfig {
    // ===== compile-time constants =====
    /// Size of a grid cell.
    pub const GRID_SIZE: i32 = 8;
    /// Width and height of the hero's bounding box.
    pub const HERO_SIZE: u32 = 16;
    /// Number of grid steps of a single drag.
    pub const DRAG_STEPS: usize = 2;
    /// A drag may stop only after covering strictly more than this distance.
    pub const DRAG_MIN_DISTANCE: u32 = 8;
    /// Distance between the hero and the dragged entity once a drag ends.
    pub const DRAG_SNAP_OFFSET: i32 = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WALKING_SPEED: u32 = 88;
    pub const DEFAULT_DRAG_SPEED: u32 = 40;
    pub const DEFAULT_PUSH_DELAY: u64 = 800;
    pub const DEFAULT_LIFT_DURATION: u64 = 200;
    pub const DEFAULT_HURT_DURATION: u64 = 200;
    pub const DEFAULT_INVINCIBILITY_DURATION: u64 = 2000;
    pub const DEFAULT_KNOCKBACK_SPEED: u32 = 120;
    pub const DEFAULT_KNOCKBACK_DISTANCE: u32 = 24;

    pub const fn new() -> Self {
        Self {
            walking_speed: Self::DEFAULT_WALKING_SPEED,
            drag_speed: Self::DEFAULT_DRAG_SPEED,
            push_delay: Self::DEFAULT_PUSH_DELAY,
            lift_duration: Self::DEFAULT_LIFT_DURATION,
            hurt_duration: Self::DEFAULT_HURT_DURATION,
            invincibility_duration: Self::DEFAULT_INVINCIBILITY_DURATION,
            knockback_speed: Self::DEFAULT_KNOCKBACK_SPEED,
            knockback_distance: Self::DEFAULT_KNOCKBACK_DISTANCE,
        }
    }

    pub fn with_walking_speed(mut self, walking_speed: u32) -> Self {
        self.walking_speed = walking_speed;
        self
    }

    /// Checks that every speed and duration can drive a movement or a timer.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found to be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("walking_speed", self.walking_speed),
            ("drag_speed", self.drag_speed),
            ("knockback_speed", self.knockback_speed),
        ];
        if let Some((field, _)) = speeds.into_iter().find(|(_, speed)| *speed == 0) {
            return Err(ConfigError::ZeroSpeed { field });
        }

        let durations = [
            ("lift_duration", self.lift_duration),
            ("hurt_duration", self.hurt_duration),
            ("invincibility_duration", self.invincibility_duration),
        ];
        if let Some((field, _)) = durations.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroDuration { field });
        }

        if self.invincibility_duration < self.hurt_duration {
            return Err(ConfigError::InvincibilityShorterThanHurt {
                invincibility: self.invincibility_duration,
                hurt: self.hurt_duration,
            });
        }

        Ok(())
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::new()
    }
}

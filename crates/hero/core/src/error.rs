//! Error types for hero-core.
//!
//! The behavior engine has two classes of failure:
//!
//! - **Programming-invariant violations** (stopping a state twice, changing
//!   state from inside `stop`). These are assertions and abort loudly.
//! - **Expected domain conditions** (no knockback source, an entity refusing
//!   to be dragged, an intercepted item). These are ordinary branches.
//!
//! Only configuration input can be rejected as a value, through [`ConfigError`].

/// Invalid [`HeroConfig`](crate::HeroConfig) values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive speed")]
    ZeroSpeed { field: &'static str },

    #[error("{field} must be a positive duration")]
    ZeroDuration { field: &'static str },

    #[error("invincibility window ({invincibility}ms) is shorter than the hurt state ({hurt}ms)")]
    InvincibilityShorterThanHurt { invincibility: u64, hurt: u64 },
}

impl ConfigError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroSpeed { .. } => "CONFIG_ZERO_SPEED",
            Self::ZeroDuration { .. } => "CONFIG_ZERO_DURATION",
            Self::InvincibilityShorterThanHurt { .. } => "CONFIG_INVINCIBILITY_TOO_SHORT",
        }
    }
}

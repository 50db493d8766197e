//! Content loaders for reading sandbox data from files.
//!
//! Hero tuning comes from TOML, rooms and input scripts from RON.

pub mod config;
pub mod room;
pub mod script;

pub use config::ConfigLoader;
pub use room::RoomLoader;
pub use script::ScriptLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

//! Hero configuration loader.

use std::path::Path;

use hero_core::HeroConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for hero tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load hero config from a TOML file.
    ///
    /// Missing keys keep their default value.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing HeroConfig
    ///
    /// # Returns
    ///
    /// Returns a validated HeroConfig.
    pub fn load(path: &Path) -> LoadResult<HeroConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate hero config from TOML text.
    pub fn parse(content: &str) -> LoadResult<HeroConfig> {
        let config: HeroConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config.validate().map_err(|e| {
            anyhow::anyhow!("Invalid hero config ({}): {}", e.error_code(), e)
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("walking_speed = 100\n").unwrap();

        assert_eq!(config.walking_speed, 100);
        assert_eq!(config.drag_speed, HeroConfig::DEFAULT_DRAG_SPEED);
        assert_eq!(config.push_delay, HeroConfig::DEFAULT_PUSH_DELAY);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("hurt_duration = 0\n").unwrap_err();

        assert!(err.to_string().contains("CONFIG_ZERO_DURATION"));
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hero.toml");
        std::fs::write(&path, "drag_speed = 20\nlift_duration = 300\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.drag_speed, 20);
        assert_eq!(config.lift_duration, 300);
    }

    #[test]
    fn missing_file_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}

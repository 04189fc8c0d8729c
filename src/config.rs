use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{Arena, START_HEAD};

pub const CONFIG_PATH: &str = "snake_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a game session. Every field falls back to its default when
/// missing from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Drawable surface size in pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Pixels per grid cell
    pub cell_scale: u32,
    /// Seconds between ticks when not slowed
    pub move_interval: f32,
    pub slowdown_factor: f32,
    /// Seconds a slowdown lasts
    pub slowdown_duration: f32,
    /// Chance per apple eaten of spawning a slowdown
    pub slowdown_chance: f32,
    pub max_slowdowns: usize,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
    pub volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            cell_scale: 20,
            move_interval: 0.06,
            slowdown_factor: 2.0,
            slowdown_duration: 15.0,
            slowdown_chance: 0.1,
            max_slowdowns: 1,
            seed: None,
            volume: 1.0,
        }
    }
}

impl GameConfig {
    /// Config for an arena of `width` x `height` cells
    pub fn with_arena(width: u32, height: u32) -> Self {
        let defaults = Self::default();
        Self {
            canvas_width: width * defaults.cell_scale,
            canvas_height: height * defaults.cell_scale,
            ..defaults
        }
    }

    pub fn arena(&self) -> Arena {
        Arena::from_display(self.canvas_width, self.canvas_height, self.cell_scale.max(1))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_scale == 0 {
            return Err(ConfigError::Invalid("cell_scale must be positive".into()));
        }

        let arena = self.arena();
        if arena.width <= START_HEAD.x || arena.height <= START_HEAD.y {
            return Err(ConfigError::Invalid(format!(
                "arena of {}x{} cells cannot hold the starting snake",
                arena.width, arena.height
            )));
        }

        if !(self.move_interval > 0.0) {
            return Err(ConfigError::Invalid("move_interval must be positive".into()));
        }
        if !(self.slowdown_duration > 0.0) {
            return Err(ConfigError::Invalid("slowdown_duration must be positive".into()));
        }
        if !(self.slowdown_factor >= 1.0) {
            return Err(ConfigError::Invalid("slowdown_factor must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.slowdown_chance) {
            return Err(ConfigError::Invalid("slowdown_chance must be within 0..=1".into()));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Invalid("volume must be within 0..=1".into()));
        }

        Ok(())
    }

    /// Reads and validates a config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake_config_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.arena(), Arena::new(20, 20));
        assert_eq!(config.slowdown_chance, 0.1);
        assert_eq!(config.slowdown_factor, 2.0);
        assert_eq!(config.slowdown_duration, 15.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_arena() {
        let config = GameConfig::with_arena(10, 8);
        assert_eq!(config.arena(), Arena::new(10, 8));
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let config = GameConfig::with_arena(5, 10);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.slowdown_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.move_interval = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.slowdown_factor = 0.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.cell_scale = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GameConfig::load(temp_path("missing")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "slowdown_chance": 0.5, "seed": 7 }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.slowdown_chance, 0.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.move_interval, GameConfig::default().move_interval);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_then_load() {
        let path = temp_path("written");
        let mut config = GameConfig::with_arena(12, 9);
        config.volume = 0.25;
        config.write(&path).unwrap();

        assert_eq!(GameConfig::load(&path).unwrap(), config);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());

        fs::remove_file(&path).unwrap();
    }
}

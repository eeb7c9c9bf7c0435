// config.rs - Optional TOML settings for the desktop front end

use anyhow::{Context, Result};
use life_engine::{SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colors for the four cell states, as `[r, g, b]`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub dead: [u8; 3],
    pub dead_fresh: [u8; 3],
    pub alive_new: [u8; 3],
    pub alive_persisted: [u8; 3],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            dead: [0x00, 0x00, 0x00],            // Black
            dead_fresh: [0xFF, 0x00, 0x00],      // Red
            alive_new: [0x00, 0xFF, 0x00],       // Green
            alive_persisted: [0x00, 0x93, 0xD1], // Blue
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Speed slider position, 1 (slowest) to 100 (fastest)
    pub speed: u8,
    pub start_running: bool,
    pub palette: PaletteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speed: SPEED_DEFAULT,
            start_running: false,
            palette: PaletteConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let config_str = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read config file '{}'", path_ref.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config in '{}'", path_ref.display()))
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(config_str).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(SPEED_MIN..=SPEED_MAX).contains(&self.speed) {
            anyhow::bail!("speed must be between {SPEED_MIN} and {SPEED_MAX}, got {}", self.speed);
        }
        Ok(())
    }
}

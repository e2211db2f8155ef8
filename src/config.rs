//! Configuration loading and the strongly typed settings structures.
//!
//! Defaults are embedded at compile time and extracted to the user's config
//! directory on first run, so there is always a file on disk to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Progress tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// How long the event loop blocks waiting for input.
    pub frame_poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            frame_poll_ms: 16,
        }
    }
}

impl Config {
    /// Load config.toml from the config directory, extracting the embedded
    /// default first if nothing is there yet.
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        Self::load_from_path(&Self::config_dir()?.join("config.toml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Config directory, normally ~/.widget-tour.
    /// Can be overridden with the WIDGET_TOUR_DIR environment variable.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("WIDGET_TOUR_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".widget-tour"))
    }

    fn extract_defaults() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .context(format!("Failed to create config directory: {:?}", dir))?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }
        Ok(())
    }
}

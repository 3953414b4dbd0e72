//! Game settings
//!
//! Read once at start-up from an optional JSON file. Every field has a
//! default, so a partial file only overrides what it names and a missing
//! file means "play with the defaults".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::AssetPaths;
use crate::consts::*;
use crate::sim::{CollisionPolicy, SimConfig};

/// Errors reading or validating a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: &'static str,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window (and play area) size in pixels
    pub width: u32,
    pub height: u32,
    /// Simulation updates per second
    pub ticks_per_second: u32,
    /// Overlap test used by the update
    pub collision: CollisionPolicy,
    /// Start with debug overlays on
    pub debug_overlay: bool,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Air Crash".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            collision: CollisionPolicy::Distance,
            debug_overlay: false,
            vsync: true,
            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// File looked for in the working directory
    pub const FILE_NAME: &'static str = "air_crash.json";

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from `path`
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is absent or bad
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid {
                name: "width/height",
                reason: "window size must be non-zero",
            });
        }
        if self.ticks_per_second == 0 {
            return Err(SettingsError::Invalid {
                name: "ticks_per_second",
                reason: "must be at least 1",
            });
        }
        if self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(SettingsError::Invalid {
                name: "ticks_per_second",
                reason: "must be at most 1000",
            });
        }
        Ok(())
    }

    /// Whole milliseconds one simulation step should take
    pub fn expected_step_ms(&self) -> u128 {
        1000 / u128::from(self.ticks_per_second.max(1))
    }

    /// Simulation parameters derived from these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            collision: self.collision,
            expected_step_ms: self.expected_step_ms(),
        }
    }
}

//! Navigation configuration and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Navigation coordinator configuration
///
/// Defaults mirror the production cadence: a 15 second tick, a 100 km search
/// radius, US-English results, and at most three narrated instructions per
/// tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Inter-tick sleep in milliseconds
    #[serde(rename = "tick-interval-ms")]
    pub tick_interval_ms: u64,

    /// Destination search radius around the current position, in meters
    #[serde(rename = "search-radius-m")]
    pub search_radius_m: u32,

    /// Language for place-search results (BCP 47 tag)
    pub language: String,

    /// Upper bound on narrated instructions per tick
    #[serde(rename = "max-spoken-instructions")]
    pub max_spoken_instructions: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 15_000,
            search_radius_m: crate::domain::DEFAULT_SEARCH_RADIUS_M,
            language: "en-US".to_string(),
            max_spoken_instructions: 3,
        }
    }
}

impl NavConfig {
    /// Validate configuration before use
    ///
    /// Call this early so a broken configuration fails fast instead of
    /// producing a session that can never narrate anything.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(eyre::eyre!("tick-interval-ms must be greater than zero"));
        }
        if self.search_radius_m == 0 {
            return Err(eyre::eyre!("search-radius-m must be greater than zero"));
        }
        if self.max_spoken_instructions == 0 {
            return Err(eyre::eyre!(
                "max-spoken-instructions must be greater than zero"
            ));
        }
        if self.language.trim().is_empty() {
            return Err(eyre::eyre!("language must not be empty"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    ///
    /// Explicit path, then project-local `.strider.yml`, then
    /// `~/.config/strider/strider.yml`, then built-in defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".strider.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("strider").join("strider.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}",
                            user_config.display(),
                            e
                        );
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

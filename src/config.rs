use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub carousel: CarouselConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default `tracing` filter; `RUST_LOG` overrides it.
    pub log_level: String,

    /// Where the snapshot document lives. Empty means the platform data
    /// dir (`<data_dir>/galleria`).
    pub data_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_dir: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between carousel advances.
    pub tick_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tick_ms: u64::try_from(crate::constants::intervals::CAROUSEL_TICK.as_millis())
                .unwrap_or(5000),
        }
    }
}

impl Config {
    /// Loads `config.toml` from `GALLERIA_CONFIG` or the platform config
    /// dir; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var("GALLERIA_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::config_dir().map(|d| d.join("galleria").join("config.toml")));

        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.carousel.tick_ms > 0, "carousel.tick_ms must be positive");
        Ok(())
    }

    /// Resolved snapshot directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        if self.general.data_dir.is_empty() {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("galleria")
        } else {
            PathBuf::from(&self.general.data_dir)
        }
    }
}

// User configuration loaded from ~/.config/jamaat/config.toml.
// Falls back to sensible defaults when the file is missing.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::client::DEFAULT_ENDPOINT;
use crate::clock::DEFAULT_TICK_INTERVAL;

/// Application configuration, deserialized from `~/.config/jamaat/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Target TUI refresh rate in frames per second (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL returning the JSON list of mosques and their prayer times.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// How often the status column is re-evaluated (default: 60000).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_frame_rate() -> f64 {
    30.0
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL.as_millis() as u64
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Config {
    /// Read config from the default location, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read config from an explicit `path` if given, else the default
    /// location. A missing file means defaults; a malformed one is an error
    /// either way.
    pub fn open(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Read config from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jamaat")
            .join("config.toml")
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_overrides(&mut self, endpoint: Option<String>, tick_interval_ms: Option<u64>) {
        if let Some(endpoint) = endpoint {
            self.source.endpoint = endpoint;
        }
        if let Some(ms) = tick_interval_ms {
            self.clock.tick_interval_ms = ms;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        reqwest::Url::parse(&self.source.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.source.endpoint))?;
        if self.clock.tick_interval_ms == 0 {
            anyhow::bail!("clock.tick_interval_ms must be greater than zero");
        }
        if self.general.frame_rate.is_nan() || self.general.frame_rate <= 0.0 {
            anyhow::bail!("general.frame_rate must be positive");
        }
        Ok(())
    }
}

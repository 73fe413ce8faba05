use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::groundtrack::default_palette;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    pub datasets: DatasetsConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub spectrum: SpectrumConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetsConfig {
    pub ephemeris: PathBuf,
    pub passes: PathBuf,
}

/// Map rendering knobs. The breakpoint is where the longitude
/// discontinuity lands; the default keeps it over Europe, away from the
/// Pacific tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_breakpoint")]
    pub breakpoint_deg: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            breakpoint_deg: default_breakpoint(),
            palette: default_palette(),
        }
    }
}

fn default_breakpoint() -> f64 {
    20.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpectrumConfig {
    /// Time slices kept in the waterfall window.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Frequency bins per slice.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Feed period, e.g. "600ms".
    #[serde(default = "default_cadence", deserialize_with = "deserialize_cadence")]
    pub cadence: Duration,
    #[serde(default = "default_frequency_start")]
    pub frequency_start_mhz: f64,
    #[serde(default = "default_frequency_step")]
    pub frequency_step_mhz: f64,
    #[serde(default = "default_time_step")]
    pub time_step_sec: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            width: default_width(),
            cadence: default_cadence(),
            frequency_start_mhz: default_frequency_start(),
            frequency_step_mhz: default_frequency_step(),
            time_step_sec: default_time_step(),
        }
    }
}

fn default_capacity() -> usize {
    50
}

fn default_width() -> usize {
    100
}

fn default_cadence() -> Duration {
    Duration::from_millis(600)
}

fn default_frequency_start() -> f64 {
    100.0
}

fn default_frequency_step() -> f64 {
    0.1
}

fn default_time_step() -> f64 {
    0.1
}

fn deserialize_cadence<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

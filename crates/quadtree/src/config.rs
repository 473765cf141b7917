//! Driver configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::QuadTreeError;
use crate::region::Region;
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, SIZE_FLOOR};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quadgen.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub region: RegionConfig,
    #[serde(default)]
    pub subdivision: SubdivisionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from `path`, or from `quadgen.toml` if present, or use defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    info!("No {} found, using default config", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let contents = std::fs::read_to_string(path)?;
        info!("Loaded configuration from {}", path.display());
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The validated root region.
    pub fn region(&self) -> Result<Region, QuadTreeError> {
        let r = &self.region;
        Region::from_xywh(r.x, r.y, r.width, r.height)
    }
}

/// Root region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegionConfig {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Subdivision settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubdivisionConfig {
    /// Inclusive size floor; regions with a side at or below this stay leaves.
    #[serde(default = "default_min_size")]
    pub min_size: u32,
}

impl Default for SubdivisionConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
        }
    }
}

fn default_min_size() -> u32 {
    SIZE_FLOOR
}

/// Which views the driver prints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub outline: bool,
    #[serde(default = "default_true")]
    pub dot: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            outline: default_true(),
            dot: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

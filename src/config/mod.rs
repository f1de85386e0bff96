//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments
//!
//! Each source is read into a [`ConfigLayer`] whose unset fields are `None`.
//! Layers are applied in order onto [`Config::default`]; a field set in a
//! later layer always wins, even when it equals the built-in default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PursuitError, Result};
use crate::render::{DEFAULT_PLOT_PATH, DEFAULT_PLOT_SIZE};
use crate::sim::SimulationParams;

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulation parameters
    #[serde(default)]
    pub simulation: SimulationParams,

    /// Plot output configuration
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a TOML file (missing fields take defaults)
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::default().apply(ConfigLayer::from_file(path)?))
    }

    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().apply(ConfigLayer::from_env())
    }

    /// Apply `layers` onto the defaults, later layers taking precedence
    pub fn layered<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = ConfigLayer>,
    {
        layers.into_iter().fold(Self::default(), Self::apply)
    }

    /// Overlay every field `layer` sets
    pub fn apply(mut self, layer: ConfigLayer) -> Self {
        let ConfigLayer { simulation, render } = layer;

        if let Some(duration) = simulation.duration {
            self.simulation.duration = duration;
        }
        if let Some(dt) = simulation.dt {
            self.simulation.dt = dt;
        }

        if let Some(enabled) = render.enabled {
            self.render.enabled = enabled;
        }
        if let Some(output) = render.output {
            self.render.output = output;
        }
        if let Some(width) = render.width {
            self.render.width = width;
        }
        if let Some(height) = render.height {
            self.render.height = height;
        }

        self
    }

    /// Per-user config file location (`<config dir>/pursuit/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pursuit").join("config.toml"))
    }

    /// Serialize as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Plot output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Write a plot at the end of a run (off unless requested)
    pub enabled: bool,

    /// SVG output path
    pub output: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output: PathBuf::from(DEFAULT_PLOT_PATH),
            width: DEFAULT_PLOT_SIZE.0,
            height: DEFAULT_PLOT_SIZE.1,
        }
    }
}

/// One configuration source; `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Simulation overrides
    #[serde(default)]
    pub simulation: SimulationLayer,

    /// Plot overrides
    #[serde(default)]
    pub render: RenderLayer,
}

/// Simulation fields of a [`ConfigLayer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationLayer {
    /// Total simulated time
    pub duration: Option<f64>,
    /// Time step
    pub dt: Option<f64>,
}

/// Render fields of a [`ConfigLayer`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderLayer {
    /// Write a plot
    pub enabled: Option<bool>,
    /// SVG output path
    pub output: Option<PathBuf>,
    /// Image width in pixels
    pub width: Option<u32>,
    /// Image height in pixels
    pub height: Option<u32>,
}

impl ConfigLayer {
    /// Parse a TOML file; absent keys stay unset
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            PursuitError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| PursuitError::Config(format!("Failed to parse config: {e}")))
    }

    /// Read `PURSUIT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a layer from `PURSUIT_*` variables resolved through `lookup`.
    ///
    /// Values that fail to parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut layer = Self::default();

        if let Some(val) = lookup("PURSUIT_DURATION") {
            layer.simulation.duration = val.parse().ok();
        }
        if let Some(val) = lookup("PURSUIT_DT") {
            layer.simulation.dt = val.parse().ok();
        }

        if let Some(output) = lookup("PURSUIT_PLOT_OUTPUT") {
            layer.render.output = Some(PathBuf::from(output));
        }
        if let Some(val) = lookup("PURSUIT_PLOT") {
            layer.render.enabled = match val.to_lowercase().as_str() {
                "0" | "false" | "off" | "no" => Some(false),
                "1" | "true" | "on" | "yes" => Some(true),
                _ => None,
            };
        }

        layer
    }
}

//! Configuration file support for polydraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/polydraw/config.toml`. Settings cover stroke and marker geometry,
//! hit-testing tolerances, colors, and the replay canvas.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ColorConfig, ToolConfig};

use crate::draw::Color;
use crate::input::ToolStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [tool]
/// line_width = 2.0
/// marker_radius = 5.0
/// hit_tolerance = 5.0
///
/// [colors]
/// stroke = "black"
/// marker = "black"
/// selection = "green"
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// default_tool = "triangle"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke width and hit-testing distances
    #[serde(default)]
    pub tool: ToolConfig,

    /// Edge, marker, and selection colors
    #[serde(default)]
    pub colors: ColorConfig,

    /// Replay canvas settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `tool.line_width`: 0.5 - 20.0
    /// - `tool.marker_radius`: 1.0 - 50.0
    /// - `tool.hit_tolerance`: 1.0 - 50.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    fn validate_and_clamp(&mut self) {
        // Line width: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.tool.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-20.0 range",
                self.tool.line_width
            );
            self.tool.line_width = clamp_or(self.tool.line_width, 0.5, 20.0);
        }

        // Marker radius: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.tool.marker_radius) {
            log::warn!(
                "Invalid marker_radius {:.1}, clamping to 1.0-50.0 range",
                self.tool.marker_radius
            );
            self.tool.marker_radius = clamp_or(self.tool.marker_radius, 1.0, 50.0);
        }

        // Hit tolerance: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.tool.hit_tolerance) {
            log::warn!(
                "Invalid hit_tolerance {:.1}, clamping to 1.0-50.0 range",
                self.tool.hit_tolerance
            );
            self.tool.hit_tolerance = clamp_or(self.tool.hit_tolerance, 1.0, 50.0);
        }

        // Canvas size: 16 - 8192
        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        let tool = self.canvas.default_tool.trim().to_lowercase();
        if tool.is_empty() {
            log::warn!("Empty default_tool, falling back to 'line'");
            self.canvas.default_tool = "line".to_string();
        } else {
            self.canvas.default_tool = tool;
        }
    }

    /// Builds the [`ToolStyle`] handed to newly created tools.
    pub fn tool_style(&self) -> ToolStyle {
        ToolStyle {
            line_width: self.tool.line_width,
            marker_radius: self.tool.marker_radius,
            hit_tolerance: self.tool.hit_tolerance,
            stroke_color: self.colors.stroke.to_color(),
            marker_color: self.colors.marker.to_color(),
            selection_color: self.colors.selection.to_color(),
        }
    }

    /// Canvas background color.
    pub fn background_color(&self) -> Color {
        self.canvas.background.to_color()
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/polydraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("polydraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML for [`Config`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

/// Documented example configuration shipped with the crate.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.example.toml");

/// `f64::clamp` that maps NaN to the lower bound instead of propagating it.
fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

//! Configuration file support for scribbler.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribbler/config.toml`. Settings cover the default stroke style
//! and the drawing surface.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_DIMENSION: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 10.0
/// default_cap = "round"
/// default_join = "round"
///
/// [canvas]
/// width = 800
/// height = 600
/// background_color = [1.0, 1.0, 1.0, 1.0]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Default stroke style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `default_alpha`: 0.0 - 1.0
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    /// - `background_color` components: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        // Width: 1.0 - 100.0 (NaN falls back to the default)
        if self.drawing.default_width.is_nan() {
            log::warn!("Invalid default_width NaN, using 10.0");
            self.drawing.default_width = 10.0;
        } else if !(1.0..=100.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(1.0, 100.0);
        }

        // Alpha: 0.0 - 1.0
        if !(0.0..=1.0).contains(&self.drawing.default_alpha) {
            log::warn!(
                "Invalid default_alpha {:.2}, clamping to 0.0-1.0 range",
                self.drawing.default_alpha
            );
            self.drawing.default_alpha = if self.drawing.default_alpha.is_nan() {
                1.0
            } else {
                self.drawing.default_alpha.clamp(0.0, 1.0)
            };
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(&*value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to 1-{} range",
                    name,
                    value,
                    MAX_CANVAS_DIMENSION
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }

        for (i, component) in self.canvas.background_color.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(&*component) {
                log::warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i,
                    component
                );
                *component = if component.is_nan() {
                    1.0
                } else {
                    component.clamp(0.0, 1.0)
                };
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scribbler/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scribbler");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
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

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Saves the current configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes a default configuration file to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path,
    /// or if it cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        Self::default().save_to(&config_path)?;
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

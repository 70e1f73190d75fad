//! Configuration management for VibeCanvas
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Tool defaults (stroke color and width for new shapes)
//! - Stage defaults (size of a new canvas)
//! - Text defaults (placeholder, font size and family of new labels)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vibecanvas_core::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH,
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, MAX_STAGE_DIMENSION, MIN_FONT_SIZE,
    MIN_STAGE_DIMENSION, MIN_STROKE_WIDTH, TEXT_PLACEHOLDER,
};

/// Tool defaults applied to newly drawn shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Active stroke color (also used as fill by the fill tool)
    pub stroke_color: String,
    /// Active stroke width in pixels
    pub stroke_width: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Stage size of a new canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
        }
    }
}

/// Text label defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Text of a freshly placed label, and the fallback for an emptied one
    pub placeholder: String,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            placeholder: TEXT_PLACEHOLDER.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Complete canvas configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CanvasConfig {
    pub tools: ToolSettings,
    pub stage: StageSettings,
    pub text: TextSettings,
}

enum ConfigFormat {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<ConfigFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl CanvasConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/vibecanvas/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("vibecanvas").join("config.toml"))
    }

    /// Load config from the default location, falling back to defaults if absent
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("No config directory available: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.tools.stroke_width.is_nan() || self.tools.stroke_width < MIN_STROKE_WIDTH {
            return Err(invalid("tools.stroke_width", "must be at least 1"));
        }

        if self.tools.stroke_color.trim().is_empty() {
            return Err(invalid("tools.stroke_color", "must not be empty"));
        }

        let stage_range = MIN_STAGE_DIMENSION..=MAX_STAGE_DIMENSION;
        if !stage_range.contains(&self.stage.width) {
            return Err(invalid("stage.width", "must be between 50 and 3000"));
        }
        if !stage_range.contains(&self.stage.height) {
            return Err(invalid("stage.height", "must be between 50 and 3000"));
        }

        if self.text.font_size.is_nan() || self.text.font_size < MIN_FONT_SIZE {
            return Err(invalid("text.font_size", "must be at least 8"));
        }

        if self.text.font_family.trim().is_empty() {
            return Err(invalid("text.font_family", "must not be empty"));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

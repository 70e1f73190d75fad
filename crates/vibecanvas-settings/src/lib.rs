//! VibeCanvas Settings Crate
//!
//! Handles canvas configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasConfig, StageSettings, TextSettings, ToolSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};

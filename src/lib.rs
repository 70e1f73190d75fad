//! # VibeCanvas
//!
//! A vector drawing canvas with:
//! - Rectangles, ellipses, lines, freehand pencil strokes, text labels,
//!   pasted images and nested groups
//! - Snapshot-based undo/redo
//! - Grouping, ungrouping and z-order control
//! - Stage resizing that rescales every shape
//!
//! ## Architecture
//!
//! VibeCanvas is organized as a workspace with multiple crates:
//!
//! 1. **vibecanvas-core** - Error types, operation outcomes, shared constants
//! 2. **vibecanvas-settings** - Canvas configuration (TOML/JSON)
//! 3. **vibecanvas-designer** - Shape model, interaction state machine, history
//! 4. **vibecanvas** - Desktop bridge, logging and the command-line binary

pub mod desktop_bridge;

pub use vibecanvas_designer as designer;

pub use vibecanvas_core::{
    ClipboardError, Error, FileError, OperationOutcome, OutcomeKind, ResizeError, Result,
};

pub use vibecanvas_designer::{
    CanvasBridge, CanvasFile, DesignerState, DrawingObject, PointerEvent, ResizePolicy, Shape,
    ShapeType, StageSize, Tool,
};

pub use vibecanvas_settings::{CanvasConfig, SettingsError};

pub use desktop_bridge::DesktopBridge;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so command output on stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

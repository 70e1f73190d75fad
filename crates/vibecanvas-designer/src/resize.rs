//! Stage resizing.
//!
//! Resizing the stage either scales every shape by the ratio between the new
//! and old dimensions, or clears the canvas. Requested sizes are validated
//! before anything changes.

use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::{MAX_STAGE_DIMENSION, MIN_STAGE_DIMENSION};
use vibecanvas_core::ResizeError;

use crate::model::{DesignerShape, DrawingObject, StageSize};

/// What happens to existing shapes when the stage is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Scale all shapes into the new stage and record one history entry.
    #[default]
    Scale,
    /// Discard all shapes and reset history.
    Clear,
}

impl std::str::FromStr for ResizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scale" => Ok(Self::Scale),
            "clear" => Ok(Self::Clear),
            other => Err(format!("unknown resize policy '{}'", other)),
        }
    }
}

/// Named stage size offered in the resize dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPreset {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

pub const CANVAS_PRESETS: &[CanvasPreset] = &[
    CanvasPreset { name: "Default (800×600)", width: 800.0, height: 600.0 },
    CanvasPreset { name: "Medium (1024×768)", width: 1024.0, height: 768.0 },
    CanvasPreset { name: "HD (1280×720)", width: 1280.0, height: 720.0 },
    CanvasPreset { name: "Full HD (1920×1080)", width: 1920.0, height: 1080.0 },
    CanvasPreset { name: "Small (400×300)", width: 400.0, height: 300.0 },
    CanvasPreset { name: "Compact (600×400)", width: 600.0, height: 400.0 },
];

/// Looks up the preset matching the given dimensions exactly.
pub fn preset_for(width: f64, height: f64) -> Option<&'static CanvasPreset> {
    CANVAS_PRESETS
        .iter()
        .find(|p| p.width == width && p.height == height)
}

/// Checks that both dimensions lie within the supported range.
pub fn validate_stage_size(size: StageSize) -> Result<(), ResizeError> {
    let range = MIN_STAGE_DIMENSION..=MAX_STAGE_DIMENSION;
    if range.contains(&size.width) && range.contains(&size.height) {
        Ok(())
    } else {
        Err(ResizeError::OutOfRange {
            width: size.width,
            height: size.height,
            min: MIN_STAGE_DIMENSION,
            max: MAX_STAGE_DIMENSION,
        })
    }
}

/// Returns a copy of `shapes` scaled from the `from` stage to the `to` stage.
///
/// Positions and sizes scale by `to / from` on each axis. Text scales its
/// font size by the mean of both factors. Group children are scaled inside
/// the group frame.
pub fn rescale_shapes(
    shapes: &[DrawingObject],
    from: StageSize,
    to: StageSize,
) -> Result<Vec<DrawingObject>, ResizeError> {
    if !(from.width > 0.0 && from.height > 0.0) {
        return Err(ResizeError::DegenerateSource {
            width: from.width,
            height: from.height,
        });
    }
    let sx = to.width / from.width;
    let sy = to.height / from.height;

    Ok(shapes
        .iter()
        .map(|obj| {
            let mut scaled = obj.clone();
            scaled.shape.rescale(sx, sy);
            scaled
        })
        .collect())
}

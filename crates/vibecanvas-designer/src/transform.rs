//! Transform and drag results reported by the renderer.
//!
//! The transform handle reports a multiplicative scale rather than absolute
//! sizes. Committing a result bakes that scale into the shape's own size
//! fields, so the stored shape never carries a pending scale.

use serde::{Deserialize, Serialize};

use crate::model::{DesignerShape, DrawingObject, Point};

/// Final state of a transform-handle gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees
    pub rotation: f64,
}

impl TransformResult {
    pub fn new(x: f64, y: f64, scale_x: f64, scale_y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            scale_x,
            scale_y,
            rotation,
        }
    }

    fn is_finite(&self) -> bool {
        [self.x, self.y, self.scale_x, self.scale_y, self.rotation]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Final position of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragResult {
    pub x: f64,
    pub y: f64,
}

impl DragResult {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl DrawingObject {
    /// Bakes a transform into the shape. Returns `false` for non-finite input.
    pub fn apply_transform(&mut self, result: &TransformResult) -> bool {
        if !result.is_finite() {
            tracing::warn!("Ignoring non-finite transform for {}", self.id);
            return false;
        }
        self.shape.bake_scale(result.scale_x, result.scale_y);
        self.shape.set_position(Point::new(result.x, result.y));
        self.rotation = result.rotation;
        true
    }

    /// Moves the shape to the dragged position.
    pub fn apply_drag(&mut self, result: &DragResult) -> bool {
        if !(result.x.is_finite() && result.y.is_finite()) {
            return false;
        }
        self.shape.set_position(Point::new(result.x, result.y));
        true
    }
}

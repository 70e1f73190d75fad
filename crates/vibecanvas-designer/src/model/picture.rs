use std::sync::Arc;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::MIN_SHAPE_SIZE;

use super::{scaled_with_floor, DesignerShape, Point, Property};

/// Embedded raster image. `source_ref` holds a `data:` URL so documents are
/// self-contained.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub source_ref: String,
    /// Decoded pixels. Absent until hydrated, or when decoding failed.
    #[serde(skip)]
    pub bitmap: Option<Arc<RgbaImage>>,
}

impl DesignImage {
    pub fn new(x: f64, y: f64, width: f64, height: f64, source_ref: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            source_ref: source_ref.into(),
            bitmap: None,
        }
    }

    pub fn with_bitmap(mut self, bitmap: Arc<RgbaImage>) -> Self {
        self.bitmap = Some(bitmap);
        self
    }

    /// Renders as an empty frame when there are no pixels to draw.
    pub fn is_placeholder(&self) -> bool {
        self.bitmap.is_none()
    }
}

impl DesignerShape for DesignImage {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn bake_scale(&mut self, sx: f64, sy: f64) {
        self.width = scaled_with_floor(self.width, sx, MIN_SHAPE_SIZE);
        self.height = scaled_with_floor(self.height, sy, MIN_SHAPE_SIZE);
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
        self.width *= sx;
        self.height *= sy;
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.x),
            Property::number("y", self.y),
            Property::number("width", self.width),
            Property::number("height", self.height),
        ]
    }
}

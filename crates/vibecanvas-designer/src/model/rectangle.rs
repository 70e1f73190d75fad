use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::MIN_SHAPE_SIZE;

use super::{scaled_with_floor, DesignerShape, Point, Property};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Moves the anchor so width and height are non-negative.
    /// A rectangle dragged up or left ends with negative size.
    pub fn normalize(&mut self) {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
    }
}

impl DesignerShape for DesignRectangle {
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
        let (x1, x2) = ordered(self.x, self.x + self.width);
        let (y1, y2) = ordered(self.y, self.y + self.height);
        (x1, y1, x2, y2)
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

pub(crate) fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

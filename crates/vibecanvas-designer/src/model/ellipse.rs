use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::MIN_SHAPE_SIZE;

use super::{scaled_with_floor, DesignerShape, Point, Property};

/// Ellipse centred at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignEllipse {
    pub x: f64,
    pub y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl DesignEllipse {
    pub fn new(x: f64, y: f64, radius_x: f64, radius_y: f64) -> Self {
        Self {
            x,
            y,
            radius_x,
            radius_y,
        }
    }
}

impl DesignerShape for DesignEllipse {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    fn extent(&self) -> (f64, f64) {
        (2.0 * self.radius_x, 2.0 * self.radius_y)
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.x - self.radius_x,
            self.y - self.radius_y,
            self.x + self.radius_x,
            self.y + self.radius_y,
        )
    }

    fn bake_scale(&mut self, sx: f64, sy: f64) {
        // Half the minimum box size, so the diameter floors at MIN_SHAPE_SIZE.
        self.radius_x = scaled_with_floor(self.radius_x, sx, MIN_SHAPE_SIZE / 2.0);
        self.radius_y = scaled_with_floor(self.radius_y, sy, MIN_SHAPE_SIZE / 2.0);
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
        self.radius_x *= sx;
        self.radius_y *= sy;
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.x),
            Property::number("y", self.y),
            Property::number("radiusX", self.radius_x),
            Property::number("radiusY", self.radius_y),
        ]
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let rx = self.radius_x + tolerance;
        let ry = self.radius_y + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (p.x - self.x) / rx;
        let dy = (p.y - self.y) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

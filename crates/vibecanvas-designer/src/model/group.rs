use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::MIN_SHAPE_SIZE;

use super::{scaled_with_floor, DesignerShape, DrawingObject, Point, Property};

/// A group of shapes. Children are positioned relative to the group origin
/// and may themselves be groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignGroup {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub children: Vec<DrawingObject>,
}

impl DesignGroup {
    pub fn new(x: f64, y: f64, width: f64, height: f64, children: Vec<DrawingObject>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            children,
        }
    }
}

impl DesignerShape for DesignGroup {
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
        let width = scaled_with_floor(self.width, sx, MIN_SHAPE_SIZE);
        let height = scaled_with_floor(self.height, sy, MIN_SHAPE_SIZE);
        // Children follow the box the group actually got, so a mirrored or
        // floored group never leaves them outside it or with negative sizes.
        let rx = applied_ratio(self.width, width, sx);
        let ry = applied_ratio(self.height, height, sy);
        self.width = width;
        self.height = height;
        for child in &mut self.children {
            let p = child.shape.position();
            child.shape.set_position(Point::new(p.x * rx, p.y * ry));
            child.shape.bake_scale(rx, ry);
        }
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
        self.width *= sx;
        self.height *= sy;
        for child in &mut self.children {
            child.shape.rescale(sx, sy);
        }
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

fn applied_ratio(old: f64, new: f64, factor: f64) -> f64 {
    if old.abs() > f64::EPSILON {
        new / old.abs()
    } else {
        factor.abs()
    }
}

use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::MIN_FONT_SIZE;

use super::{DesignerShape, Point, Property};

/// Average glyph advance as a fraction of the font size, for hit testing.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
}

impl DesignText {
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, font_family: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size,
            font_family: font_family.into(),
        }
    }
}

impl DesignerShape for DesignText {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    fn extent(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let longest = self
            .text
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let lines = self.text.lines().count().max(1) as f64;
        (
            self.x,
            self.y,
            self.x + longest * self.font_size * GLYPH_WIDTH_RATIO,
            self.y + lines * self.font_size,
        )
    }

    fn bake_scale(&mut self, sx: f64, sy: f64) {
        let factor = (sx.abs() + sy.abs()) / 2.0;
        self.font_size = (self.font_size * factor).max(MIN_FONT_SIZE);
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
        self.font_size *= (sx + sy) / 2.0;
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.x),
            Property::number("y", self.y),
            Property::string("text", &self.text),
            Property::number("fontSize", self.font_size),
            Property::string("fontFamily", &self.font_family),
        ]
    }
}

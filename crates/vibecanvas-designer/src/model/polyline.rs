use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, Property};

/// Open polyline. Straight lines hold two points, pencil strokes hold every
/// sampled point and are drawn `smoothed`.
///
/// Points are relative to the drag offset `(x, y)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignPolyline {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub points: Vec<Point>,
    #[serde(default)]
    pub smoothed: bool,
}

impl DesignPolyline {
    pub fn new(points: Vec<Point>, smoothed: bool) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            points,
            smoothed,
        }
    }

    /// Points in document space.
    pub fn absolute_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .iter()
            .map(move |p| Point::new(p.x + self.x, p.y + self.y))
    }
}

impl DesignerShape for DesignPolyline {
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
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in self.absolute_points() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x {
            return (self.x, self.y, self.x, self.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    fn bake_scale(&mut self, sx: f64, sy: f64) {
        for p in &mut self.points {
            p.x *= sx;
            p.y *= sy;
        }
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        self.x *= sx;
        self.y *= sy;
        self.bake_scale(sx, sy);
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("x", self.x),
            Property::number("y", self.y),
            Property::boolean("smoothed", self.smoothed),
        ]
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let pts: Vec<Point> = self.absolute_points().collect();
        match pts.as_slice() {
            [] => false,
            [only] => only.distance_to(&p) <= tolerance,
            _ => pts
                .windows(2)
                .any(|seg| distance_to_segment(p, seg[0], seg[1]) <= tolerance),
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

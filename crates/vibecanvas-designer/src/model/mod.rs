use serde::{Deserialize, Serialize};
use vibecanvas_core::constants::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, MIN_STROKE_WIDTH};

mod ellipse;
mod group;
mod picture;
mod polyline;
mod rectangle;
mod text;

pub use ellipse::DesignEllipse;
pub use group::DesignGroup;
pub use picture::DesignImage;
pub use polyline::DesignPolyline;
pub use rectangle::DesignRectangle;
pub use text::DesignText;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Stage (canvas) dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSize {
    pub width: f64,
    pub height: f64,
}

impl StageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Opaque shape identifier, stable for the lifetime of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShapeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    fn number(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Number(value),
        }
    }

    fn boolean(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Bool(value),
        }
    }

    fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::String(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
}

/// A single edit coming from the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeProperty {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    RadiusX(f64),
    RadiusY(f64),
    StrokeWidth(f64),
    FontSize(f64),
    Rotation(f64),
    Text(String),
    FontFamily(String),
    Stroke(String),
    Fill(String),
}

impl ShapeProperty {
    fn number(&self) -> Option<f64> {
        match self {
            Self::X(v)
            | Self::Y(v)
            | Self::Width(v)
            | Self::Height(v)
            | Self::RadiusX(v)
            | Self::RadiusY(v)
            | Self::StrokeWidth(v)
            | Self::FontSize(v)
            | Self::Rotation(v) => Some(*v),
            _ => None,
        }
    }
}

/// Geometry behaviour shared by every shape variant.
pub trait DesignerShape {
    /// Anchor position. Top-left for boxed shapes, centre for ellipses,
    /// drag offset for polylines.
    fn position(&self) -> Point;
    fn set_position(&mut self, p: Point);

    /// Width/height used when computing a group frame. Shapes without an
    /// explicit size report zero.
    fn extent(&self) -> (f64, f64);

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` used for hit testing.
    fn bounds(&self) -> (f64, f64, f64, f64);

    /// Bake a transform handle's scale into the size fields, applying the
    /// per-variant minimum sizes. The anchor is left alone.
    fn bake_scale(&mut self, sx: f64, sy: f64);

    /// Scale position and size together, without minimums.
    fn rescale(&mut self, sx: f64, sy: f64);

    fn properties(&self) -> Vec<Property>;

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        p.x >= x1 - tolerance && p.x <= x2 + tolerance && p.y >= y1 - tolerance && p.y <= y2 + tolerance
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let p = self.position();
        self.set_position(Point::new(p.x + dx, p.y + dy));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Polyline,
    Text,
    Image,
    Group,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Polyline => "Polyline",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Group => "Group",
        };
        f.write_str(name)
    }
}

/// Variant geometry, tagged by `kind` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Polyline(DesignPolyline),
    #[serde(rename = "textLabel")]
    Text(DesignText),
    Image(DesignImage),
    Group(DesignGroup),
}

impl DesignerShape for Shape {
    fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Ellipse(s) => s.position(),
            Shape::Polyline(s) => s.position(),
            Shape::Text(s) => s.position(),
            Shape::Image(s) => s.position(),
            Shape::Group(s) => s.position(),
        }
    }

    fn set_position(&mut self, p: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(p),
            Shape::Ellipse(s) => s.set_position(p),
            Shape::Polyline(s) => s.set_position(p),
            Shape::Text(s) => s.set_position(p),
            Shape::Image(s) => s.set_position(p),
            Shape::Group(s) => s.set_position(p),
        }
    }

    fn extent(&self) -> (f64, f64) {
        match self {
            Shape::Rectangle(s) => s.extent(),
            Shape::Ellipse(s) => s.extent(),
            Shape::Polyline(s) => s.extent(),
            Shape::Text(s) => s.extent(),
            Shape::Image(s) => s.extent(),
            Shape::Group(s) => s.extent(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polyline(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Image(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    fn bake_scale(&mut self, sx: f64, sy: f64) {
        match self {
            Shape::Rectangle(s) => s.bake_scale(sx, sy),
            Shape::Ellipse(s) => s.bake_scale(sx, sy),
            Shape::Polyline(s) => s.bake_scale(sx, sy),
            Shape::Text(s) => s.bake_scale(sx, sy),
            Shape::Image(s) => s.bake_scale(sx, sy),
            Shape::Group(s) => s.bake_scale(sx, sy),
        }
    }

    fn rescale(&mut self, sx: f64, sy: f64) {
        match self {
            Shape::Rectangle(s) => s.rescale(sx, sy),
            Shape::Ellipse(s) => s.rescale(sx, sy),
            Shape::Polyline(s) => s.rescale(sx, sy),
            Shape::Text(s) => s.rescale(sx, sy),
            Shape::Image(s) => s.rescale(sx, sy),
            Shape::Group(s) => s.rescale(sx, sy),
        }
    }

    fn properties(&self) -> Vec<Property> {
        match self {
            Shape::Rectangle(s) => s.properties(),
            Shape::Ellipse(s) => s.properties(),
            Shape::Polyline(s) => s.properties(),
            Shape::Text(s) => s.properties(),
            Shape::Image(s) => s.properties(),
            Shape::Group(s) => s.properties(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
            Shape::Ellipse(s) => s.contains_point(p, tolerance),
            Shape::Polyline(s) => s.contains_point(p, tolerance),
            Shape::Text(s) => s.contains_point(p, tolerance),
            Shape::Image(s) => s.contains_point(p, tolerance),
            Shape::Group(s) => s.contains_point(p, tolerance),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Polyline(_) => ShapeType::Polyline,
            Shape::Text(_) => ShapeType::Text,
            Shape::Image(_) => ShapeType::Image,
            Shape::Group(_) => ShapeType::Group,
        }
    }

    /// Only rectangles, ellipses and text labels render a fill.
    pub fn supports_fill(&self) -> bool {
        matches!(self, Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Text(_))
    }

    fn apply_geometry(&mut self, prop: &ShapeProperty) -> bool {
        match (self, prop) {
            (s, ShapeProperty::X(v)) => {
                let p = s.position();
                s.set_position(Point::new(*v, p.y));
                true
            }
            (s, ShapeProperty::Y(v)) => {
                let p = s.position();
                s.set_position(Point::new(p.x, *v));
                true
            }
            (Shape::Rectangle(r), ShapeProperty::Width(v)) => set_number(&mut r.width, *v),
            (Shape::Rectangle(r), ShapeProperty::Height(v)) => set_number(&mut r.height, *v),
            (Shape::Image(i), ShapeProperty::Width(v)) => set_number(&mut i.width, *v),
            (Shape::Image(i), ShapeProperty::Height(v)) => set_number(&mut i.height, *v),
            (Shape::Group(g), ShapeProperty::Width(v)) => set_number(&mut g.width, *v),
            (Shape::Group(g), ShapeProperty::Height(v)) => set_number(&mut g.height, *v),
            (Shape::Ellipse(e), ShapeProperty::RadiusX(v)) => set_number(&mut e.radius_x, *v),
            (Shape::Ellipse(e), ShapeProperty::RadiusY(v)) => set_number(&mut e.radius_y, *v),
            (Shape::Text(t), ShapeProperty::FontSize(v)) => set_number(&mut t.font_size, *v),
            (Shape::Text(t), ShapeProperty::Text(v)) => {
                t.text = v.clone();
                true
            }
            (Shape::Text(t), ShapeProperty::FontFamily(v)) => {
                t.font_family = v.clone();
                true
            }
            _ => false,
        }
    }
}

fn set_number(field: &mut f64, value: f64) -> bool {
    if value < 0.0 {
        return false;
    }
    *field = value;
    true
}

fn default_stroke() -> String {
    DEFAULT_STROKE_COLOR.to_string()
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

/// A shape on the canvas: common styling plus variant geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingObject {
    pub id: ShapeId,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub shape: Shape,
}

impl DrawingObject {
    /// Creates a new drawing object with a fresh id.
    pub fn new(shape: Shape, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            id: ShapeId::new(),
            stroke: stroke.into(),
            stroke_width: clamp_stroke_width(stroke_width),
            fill: None,
            rotation: 0.0,
            shape,
        }
    }

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn name(&self) -> String {
        self.shape.shape_type().to_string()
    }

    pub fn position(&self) -> Point {
        self.shape.position()
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.shape.contains_point(*point, tolerance)
    }

    /// Restores invariants after deserialization (stroke width floor, group children).
    pub fn normalize(&mut self) {
        self.stroke_width = clamp_stroke_width(self.stroke_width);
        if !self.rotation.is_finite() {
            self.rotation = 0.0;
        }
        if let Shape::Group(group) = &mut self.shape {
            for child in &mut group.children {
                child.normalize();
            }
        }
    }

    /// Applies a properties panel edit. Returns `false` when the property does
    /// not exist on this variant or the value is not usable.
    pub fn apply_property(&mut self, prop: &ShapeProperty) -> bool {
        if prop.number().is_some_and(|v| !v.is_finite()) {
            return false;
        }
        match prop {
            ShapeProperty::StrokeWidth(v) => {
                self.stroke_width = clamp_stroke_width(*v);
                true
            }
            ShapeProperty::Rotation(v) => {
                self.rotation = *v;
                true
            }
            ShapeProperty::Stroke(color) => {
                self.stroke = color.clone();
                true
            }
            ShapeProperty::Fill(color) => {
                if !self.shape.supports_fill() {
                    return false;
                }
                self.fill = Some(color.clone());
                true
            }
            other => self.shape.apply_geometry(other),
        }
    }

    /// All editable properties, common ones first.
    pub fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::string("stroke", &self.stroke),
            Property::number("strokeWidth", self.stroke_width),
            Property::number("rotation", self.rotation),
        ];
        if self.shape.supports_fill() {
            props.push(Property::string(
                "fill",
                self.fill.as_deref().unwrap_or_default(),
            ));
        }
        props.extend(self.shape.properties());
        props
    }
}

pub(crate) fn clamp_stroke_width(width: f64) -> f64 {
    if width.is_finite() {
        width.max(MIN_STROKE_WIDTH)
    } else {
        MIN_STROKE_WIDTH
    }
}

/// Magnitude of a scaled dimension, floored at `min`.
pub(crate) fn scaled_with_floor(value: f64, factor: f64, min: f64) -> f64 {
    (value * factor).abs().max(min)
}

//! Canvas type definitions: Tool, HitTarget, PointerEvent, InteractionState, Edit.

use serde::{Deserialize, Serialize};

use crate::model::{Point, ShapeId};

/// Tools selectable in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Selection,
    Rectangle,
    Ellipse,
    Line,
    Pencil,
    Text,
    Fill,
    Eraser,
}

impl Tool {
    /// Tools that create a shape by dragging.
    pub fn is_drawing_tool(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Ellipse | Tool::Line | Tool::Pencil)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Selection => "selection",
            Tool::Rectangle => "rectangle",
            Tool::Ellipse => "ellipse",
            Tool::Line => "line",
            Tool::Pencil => "pencil",
            Tool::Text => "text",
            Tool::Fill => "fill",
            Tool::Eraser => "eraser",
        };
        f.write_str(name)
    }
}

/// What the renderer found under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Shape(ShapeId),
    /// Empty stage.
    Background,
    /// A handle of the active transformer. Never counts as empty space.
    TransformHandle,
}

/// A pointer event in stage coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    /// `None` lets the canvas hit-test its own shapes.
    pub target: Option<HitTarget>,
    pub shift: bool,
}

impl PointerEvent {
    /// Event without a renderer hit target.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: None,
            shift: false,
        }
    }

    pub fn on_shape(x: f64, y: f64, id: ShapeId) -> Self {
        Self {
            position: Point::new(x, y),
            target: Some(HitTarget::Shape(id)),
            shift: false,
        }
    }

    pub fn on_background(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: Some(HitTarget::Background),
            shift: false,
        }
    }

    pub fn on_handle(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: Some(HitTarget::TransformHandle),
            shift: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Interaction mode of the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A drag tool is growing the shape `id`, anchored at `origin`.
    Drawing { id: ShapeId, origin: Point },
    /// The inline editor is open over the text label `id`.
    EditingText { id: ShapeId, buffer: String },
}

/// Coarse interaction mode, used for keyboard dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Drawing,
    EditingText,
}

impl InteractionState {
    pub fn mode(&self) -> InteractionMode {
        match self {
            InteractionState::Idle => InteractionMode::Idle,
            InteractionState::Drawing { .. } => InteractionMode::Drawing,
            InteractionState::EditingText { .. } => InteractionMode::EditingText,
        }
    }
}

/// A finished document change that must be recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Edit {
    pub label: &'static str,
}

impl Edit {
    pub(crate) fn new(label: &'static str) -> Self {
        Self { label }
    }
}

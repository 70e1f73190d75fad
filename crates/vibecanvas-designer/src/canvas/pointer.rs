//! Pointer-driven transitions: drawing, selection, fill, eraser, inline text
//! editing, and drag/transform gestures.

use super::{Canvas, Edit, HitTarget, InteractionState, PointerEvent, Tool};
use crate::model::{
    DesignEllipse, DesignPolyline, DesignRectangle, DesignText, DrawingObject, Point, Shape,
    ShapeId,
};
use crate::transform::{DragResult, TransformResult};

impl Canvas {
    /// Handles a pointer press.
    ///
    /// Drag tools start drawing here and commit on release. Text, fill and
    /// eraser finish immediately and return an [`Edit`].
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Option<Edit> {
        if self.interaction != InteractionState::Idle {
            return None;
        }

        let target = self.hit_test(event);
        match self.tool {
            Tool::Selection => {
                self.select_target(target, event.shift);
                None
            }
            Tool::Rectangle | Tool::Ellipse | Tool::Line | Tool::Pencil => {
                self.begin_drawing(event.position);
                None
            }
            Tool::Text => Some(self.place_text(event.position)),
            Tool::Fill => match target {
                HitTarget::Shape(id) => self.fill_shape(&id),
                _ => None,
            },
            Tool::Eraser => match target {
                HitTarget::Shape(id) => self.erase_shape(&id),
                _ => None,
            },
        }
    }

    /// Grows the shape being drawn. Does not record history.
    pub fn pointer_move(&mut self, position: Point) {
        let InteractionState::Drawing { id, origin } = &self.interaction else {
            return;
        };
        let origin = *origin;
        let Some(obj) = self.document.get_mut(id) else {
            return;
        };

        match &mut obj.shape {
            Shape::Rectangle(rect) => {
                rect.width = position.x - origin.x;
                rect.height = position.y - origin.y;
            }
            Shape::Ellipse(ellipse) => {
                ellipse.radius_x = (position.x - origin.x).abs();
                ellipse.radius_y = (position.y - origin.y).abs();
            }
            Shape::Polyline(line) if line.smoothed => {
                line.points.push(position);
            }
            Shape::Polyline(line) => {
                line.points = vec![origin, position];
            }
            _ => {}
        }
    }

    /// Finishes drawing. Returns the edit for the completed shape.
    pub fn pointer_up(&mut self) -> Option<Edit> {
        let InteractionState::Drawing { id, .. } = std::mem::take(&mut self.interaction) else {
            return None;
        };
        let obj = self.document.get_mut(&id)?;
        if let Shape::Rectangle(rect) = &mut obj.shape {
            rect.normalize();
        }
        tracing::debug!("Finished drawing {} {}", obj.name(), id);
        Some(Edit::new("Draw shape"))
    }

    /// Leaving the stage ends a drawing exactly like releasing the pointer.
    pub fn pointer_leave(&mut self) -> Option<Edit> {
        self.pointer_up()
    }

    /// Opens the inline editor over a text label.
    ///
    /// Returns `true` when editing started.
    pub fn double_click(&mut self, event: &PointerEvent) -> bool {
        if self.interaction != InteractionState::Idle {
            return false;
        }
        let HitTarget::Shape(id) = self.hit_test(event) else {
            return false;
        };
        let Some(Shape::Text(text)) = self.document.get(&id).map(|o| &o.shape) else {
            return false;
        };
        let buffer = text.text.clone();
        self.selection_manager.select_only(id.clone());
        self.interaction = InteractionState::EditingText { id, buffer };
        true
    }

    /// Replaces the inline editor contents.
    pub fn update_text_buffer(&mut self, value: impl Into<String>) {
        if let InteractionState::EditingText { buffer, .. } = &mut self.interaction {
            *buffer = value.into();
        }
    }

    /// Commits the inline editor (blur or Enter). Empty text falls back to
    /// the placeholder. Returns an edit only if the label changed.
    pub fn commit_text(&mut self) -> Option<Edit> {
        let InteractionState::EditingText { id, buffer } = std::mem::take(&mut self.interaction)
        else {
            return None;
        };
        let value = if buffer.trim().is_empty() {
            self.text_settings.placeholder.clone()
        } else {
            buffer
        };
        let obj = self.document.get_mut(&id)?;
        let Shape::Text(text) = &mut obj.shape else {
            return None;
        };
        if text.text == value {
            return None;
        }
        text.text = value;
        Some(Edit::new("Edit text"))
    }

    /// Closes the inline editor without changing the label (Escape).
    pub fn cancel_text(&mut self) {
        if matches!(self.interaction, InteractionState::EditingText { .. }) {
            self.interaction = InteractionState::Idle;
        }
    }

    /// Live drag preview. Moves the shape without recording history.
    pub fn drag_move(&mut self, id: &ShapeId, result: &DragResult) {
        if let Some(obj) = self.document.get_mut(id) {
            obj.apply_drag(result);
        }
    }

    /// Commits the final position of a drag.
    pub fn drag_end(&mut self, id: &ShapeId, result: &DragResult) -> Option<Edit> {
        let obj = self.document.get_mut(id)?;
        obj.apply_drag(result).then(|| Edit::new("Move shape"))
    }

    /// Commits the final state of a transform-handle gesture.
    pub fn transform_end(&mut self, id: &ShapeId, result: &TransformResult) -> Option<Edit> {
        let obj = self.document.get_mut(id)?;
        obj.apply_transform(result).then(|| Edit::new("Transform shape"))
    }

    fn select_target(&mut self, target: HitTarget, shift: bool) {
        match target {
            HitTarget::Shape(id) if shift => {
                self.selection_manager.toggle(id);
            }
            HitTarget::Shape(id) => self.selection_manager.select_only(id),
            HitTarget::Background if !shift => self.selection_manager.clear(),
            HitTarget::Background | HitTarget::TransformHandle => {}
        }
    }

    fn new_object(&self, shape: Shape) -> DrawingObject {
        DrawingObject::new(
            shape,
            self.tool_settings.stroke_color.clone(),
            self.tool_settings.stroke_width,
        )
    }

    fn begin_drawing(&mut self, at: Point) {
        let shape = match self.tool {
            Tool::Rectangle => Shape::Rectangle(DesignRectangle::new(at.x, at.y, 0.0, 0.0)),
            Tool::Ellipse => Shape::Ellipse(DesignEllipse::new(at.x, at.y, 0.0, 0.0)),
            Tool::Line => Shape::Polyline(DesignPolyline::new(vec![at, at], false)),
            _ => Shape::Polyline(DesignPolyline::new(vec![at], true)),
        };
        let obj = self.new_object(shape);
        let id = obj.id.clone();
        self.document.push(obj);
        self.selection_manager.clear();
        tracing::debug!("Started drawing {} at ({}, {})", self.tool, at.x, at.y);
        self.interaction = InteractionState::Drawing { id, origin: at };
    }

    fn place_text(&mut self, at: Point) -> Edit {
        let text = DesignText::new(
            self.text_settings.placeholder.clone(),
            at.x,
            at.y,
            self.text_settings.font_size,
            self.text_settings.font_family.clone(),
        );
        let obj = self
            .new_object(Shape::Text(text))
            .with_fill(self.tool_settings.stroke_color.clone());
        self.selection_manager.select_only(obj.id.clone());
        self.document.push(obj);
        Edit::new("Add text")
    }

    fn fill_shape(&mut self, id: &ShapeId) -> Option<Edit> {
        let color = self.tool_settings.stroke_color.clone();
        let obj = self.document.get_mut(id)?;
        if !obj.shape.supports_fill() {
            return None;
        }
        obj.fill = Some(color);
        Some(Edit::new("Fill shape"))
    }

    fn erase_shape(&mut self, id: &ShapeId) -> Option<Edit> {
        self.document.remove(id)?;
        self.selection_manager.remove(id);
        Some(Edit::new("Erase shape"))
    }
}

//! Designer state manager for UI integration.
//!
//! `DesignerState` owns the working canvas, the undo/redo history and the
//! file metadata. UI callbacks go through it so that every finished edit is
//! committed to history exactly once.
//!
//! Submodules:
//! - `shapes`: delete, group, z-order, properties, stage resize
//! - `file_io`: save/load, clipboard paste/copy

mod file_io;
mod shapes;

use std::path::PathBuf;

use vibecanvas_settings::CanvasConfig;

use crate::canvas::{Canvas, Edit, PointerEvent, Tool};
use crate::history::ShapeHistory;
use crate::model::{Point, ShapeId};
use crate::transform::{DragResult, TransformResult};

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub history: ShapeHistory,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self::with_config(&CanvasConfig::default())
    }

    /// Creates a designer state using the defaults of `config`.
    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            canvas: Canvas::with_config(config),
            history: ShapeHistory::default(),
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
        }
    }

    /// Records a finished canvas edit as one history snapshot.
    pub(crate) fn commit(&mut self, edit: Edit) {
        self.history.commit(self.canvas.shapes().to_vec());
        self.is_modified = true;
        tracing::debug!("Committed '{}' ({} shapes)", edit.label, self.canvas.shape_count());
    }

    /// Commits `edit` if there is one. Returns whether anything changed.
    pub(crate) fn commit_if(&mut self, edit: Option<Edit>) -> bool {
        match edit {
            Some(edit) => {
                self.commit(edit);
                true
            }
            None => false,
        }
    }

    /// Undo the last edit.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let shapes = snapshot.clone();
        self.canvas.replace_shapes(shapes);
        self.is_modified = true;
        true
    }

    /// Redo the last undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        let shapes = snapshot.clone();
        self.canvas.replace_shapes(shapes);
        self.is_modified = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drops all history and makes the current shapes the initial state.
    pub fn clear_history(&mut self) {
        self.history.reset(self.canvas.shapes().to_vec());
    }

    /// Sets the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.canvas.set_tool(tool);
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        let edit = self.canvas.pointer_down(event);
        self.commit_if(edit)
    }

    pub fn pointer_move(&mut self, position: Point) {
        self.canvas.pointer_move(position);
    }

    pub fn pointer_up(&mut self) -> bool {
        let edit = self.canvas.pointer_up();
        self.commit_if(edit)
    }

    pub fn pointer_leave(&mut self) -> bool {
        let edit = self.canvas.pointer_leave();
        self.commit_if(edit)
    }

    pub fn double_click(&mut self, event: &PointerEvent) -> bool {
        self.canvas.double_click(event)
    }

    pub fn update_text_buffer(&mut self, value: impl Into<String>) {
        self.canvas.update_text_buffer(value);
    }

    /// Closes the inline text editor, keeping its contents (blur or Enter).
    pub fn commit_text(&mut self) -> bool {
        let edit = self.canvas.commit_text();
        self.commit_if(edit)
    }

    pub fn cancel_text(&mut self) {
        self.canvas.cancel_text();
    }

    /// Live drag preview. Never recorded in history.
    pub fn drag_move(&mut self, id: &ShapeId, result: &DragResult) {
        self.canvas.drag_move(id, result);
    }

    pub fn drag_end(&mut self, id: &ShapeId, result: &DragResult) -> bool {
        let edit = self.canvas.drag_end(id, result);
        self.commit_if(edit)
    }

    pub fn transform_end(&mut self, id: &ShapeId, result: &TransformResult) -> bool {
        let edit = self.canvas.transform_end(id, result);
        self.commit_if(edit)
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

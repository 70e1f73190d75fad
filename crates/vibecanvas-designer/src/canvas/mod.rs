//! Canvas for drawing and manipulating shapes.
//!
//! The canvas owns the working document, the selection, the active tool and
//! the interaction state. Methods that finish a document change return an
//! [`Edit`]; the caller records it in history. Live previews return nothing.

mod operations;
mod pointer;
mod types;

pub use types::{Edit, HitTarget, InteractionMode, InteractionState, PointerEvent, Tool};

use crate::document::CanvasDocument;
use crate::model::{DrawingObject, ShapeId, StageSize};
use crate::selection_manager::SelectionManager;
use vibecanvas_core::constants::HIT_TOLERANCE;
use vibecanvas_settings::{CanvasConfig, TextSettings, ToolSettings};

/// Canvas state managing shapes and drawing operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub document: CanvasDocument,
    pub selection_manager: SelectionManager,
    /// Active stroke color and width for new shapes.
    pub tool_settings: ToolSettings,
    pub text_settings: TextSettings,
    tool: Tool,
    interaction: InteractionState,
}

impl Canvas {
    /// Creates a canvas with default settings.
    pub fn new() -> Self {
        Self::with_config(&CanvasConfig::default())
    }

    /// Creates a canvas using the stage, tool and text defaults of `config`.
    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            document: CanvasDocument::new(StageSize::new(config.stage.width, config.stage.height)),
            selection_manager: SelectionManager::new(),
            tool_settings: config.tools.clone(),
            text_settings: config.text.clone(),
            tool: Tool::Selection,
            interaction: InteractionState::Idle,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools. Multi-selection only exists in selection mode, so
    /// other tools keep at most the last selected shape.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::Selection {
            self.selection_manager.collapse_to_last();
        }
        tracing::debug!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn stage(&self) -> StageSize {
        self.document.stage
    }

    pub fn shapes(&self) -> &[DrawingObject] {
        &self.document.shapes
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.document.len()
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&DrawingObject> {
        self.document.get(id)
    }

    pub fn selected_ids(&self) -> &[ShapeId] {
        self.selection_manager.ids()
    }

    /// The selected shape when exactly one shape is selected.
    pub fn selected_shape(&self) -> Option<&DrawingObject> {
        self.selection_manager
            .single()
            .and_then(|id| self.document.get(id))
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.tool_settings.stroke_color = color.into();
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.tool_settings.stroke_width = crate::model::clamp_stroke_width(width);
    }

    /// Resolves what is under the pointer, preferring the renderer's answer.
    pub fn hit_test(&self, event: &PointerEvent) -> HitTarget {
        if let Some(target) = &event.target {
            return target.clone();
        }
        match self.document.shape_at(event.position, HIT_TOLERANCE) {
            Some(shape) => HitTarget::Shape(shape.id.clone()),
            None => HitTarget::Background,
        }
    }

    /// Installs a shape list from history or a file.
    ///
    /// The selection is pruned to shapes that still exist and any
    /// interaction whose shape disappeared is abandoned.
    pub fn replace_shapes(&mut self, shapes: Vec<DrawingObject>) {
        self.document.shapes = shapes;
        let pruned = self.selection_manager.prune(&self.document);
        if pruned > 0 {
            tracing::debug!("Pruned {} stale ids from selection", pruned);
        }
        let stale = match &self.interaction {
            InteractionState::Idle => false,
            InteractionState::Drawing { id, .. } | InteractionState::EditingText { id, .. } => {
                !self.document.contains(id)
            }
        };
        if stale {
            self.interaction = InteractionState::Idle;
        }
    }

    /// Drops any unfinished interaction. A shape still being drawn is
    /// removed; an open text editor closes without applying its buffer.
    pub fn abandon_interaction(&mut self) {
        match std::mem::take(&mut self.interaction) {
            InteractionState::Drawing { id, .. } => {
                self.document.remove(&id);
                self.selection_manager.prune(&self.document);
                tracing::debug!("Abandoned drawing of {}", id);
            }
            InteractionState::EditingText { id, .. } => {
                tracing::debug!("Abandoned text edit of {}", id);
            }
            InteractionState::Idle => {}
        }
    }

    /// Replaces the whole document and returns to idle with nothing selected.
    pub fn load_document(&mut self, stage: StageSize, shapes: Vec<DrawingObject>) {
        self.document = CanvasDocument { stage, shapes };
        self.selection_manager.clear();
        self.interaction = InteractionState::Idle;
    }

}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

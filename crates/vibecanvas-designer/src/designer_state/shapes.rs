//! Shape operations (delete, group, z-order, properties, stage resize) for designer state.

use vibecanvas_core::OperationOutcome;

use super::DesignerState;
use crate::model::{ShapeId, ShapeProperty, StageSize};
use crate::resize::{rescale_shapes, validate_stage_size, ResizePolicy};

impl DesignerState {
    /// Deletes the selected shape(s).
    pub fn delete_selected(&mut self) -> bool {
        let edit = self.canvas.delete_selected();
        self.commit_if(edit)
    }

    /// Check if grouping is possible (at least 2 shapes selected).
    pub fn can_group(&self) -> bool {
        self.canvas.can_group()
    }

    /// Check if ungrouping is possible (exactly one group selected).
    pub fn can_ungroup(&self) -> bool {
        self.canvas.can_ungroup()
    }

    pub fn group_selected(&mut self) -> bool {
        let edit = self.canvas.group_selected();
        self.commit_if(edit)
    }

    pub fn ungroup_selected(&mut self) -> bool {
        let edit = self.canvas.ungroup_selected();
        self.commit_if(edit)
    }

    pub fn bring_to_front(&mut self) -> bool {
        let edit = self.canvas.bring_to_front();
        self.commit_if(edit)
    }

    pub fn bring_forward(&mut self) -> bool {
        let edit = self.canvas.bring_forward();
        self.commit_if(edit)
    }

    pub fn send_backward(&mut self) -> bool {
        let edit = self.canvas.send_backward();
        self.commit_if(edit)
    }

    pub fn send_to_back(&mut self) -> bool {
        let edit = self.canvas.send_to_back();
        self.commit_if(edit)
    }

    pub fn can_bring_forward(&self) -> bool {
        self.canvas.can_bring_forward()
    }

    pub fn can_send_backward(&self) -> bool {
        self.canvas.can_send_backward()
    }

    /// Properties panel `onChange` for the selected shape.
    pub fn set_selected_property(&mut self, prop: ShapeProperty) -> bool {
        let edit = self.canvas.update_selected_property(&prop);
        self.commit_if(edit)
    }

    pub fn set_shape_property(&mut self, id: &ShapeId, prop: ShapeProperty) -> bool {
        let edit = self.canvas.update_shape_property(id, &prop);
        self.commit_if(edit)
    }

    /// Removes every shape and starts a fresh history.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear_shapes();
        self.clear_history();
        self.is_modified = true;
        tracing::info!("Canvas cleared");
    }

    /// Resizes the stage.
    ///
    /// The requested size is validated first; nothing changes when it is out
    /// of range. `Scale` rescales every shape and records one history entry,
    /// `Clear` discards the shapes and resets history.
    pub fn resize_stage(&mut self, width: f64, height: f64, policy: ResizePolicy) -> OperationOutcome {
        let target = StageSize::new(width, height);
        if let Err(e) = validate_stage_size(target) {
            tracing::warn!("Rejected stage resize: {}", e);
            return OperationOutcome::error(e.to_string());
        }

        self.canvas.abandon_interaction();
        let current = self.canvas.stage();
        match policy {
            ResizePolicy::Scale => {
                let scaled = match rescale_shapes(self.canvas.shapes(), current, target) {
                    Ok(shapes) => shapes,
                    Err(e) => {
                        tracing::error!("Stage resize failed: {}", e);
                        return OperationOutcome::error(e.to_string());
                    }
                };
                self.canvas.document.stage = target;
                self.canvas.replace_shapes(scaled);
                self.history.commit(self.canvas.shapes().to_vec());
            }
            ResizePolicy::Clear => {
                self.canvas.document.stage = target;
                self.canvas.clear_shapes();
                self.clear_history();
            }
        }
        self.is_modified = true;
        tracing::info!(
            "Stage resized {}x{} -> {}x{} ({:?})",
            current.width,
            current.height,
            width,
            height,
            policy
        );
        OperationOutcome::success(format!("Canvas resized to {} x {}", width, height))
    }
}

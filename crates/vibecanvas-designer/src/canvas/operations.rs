//! Selection-driven edits: delete, group/ungroup, z-order, property changes
//! and image insertion.

use std::sync::Arc;

use image::RgbaImage;
use vibecanvas_core::constants::PASTE_FIT_RATIO;

use super::{Canvas, Edit};
use crate::model::{DesignImage, DrawingObject, Shape, ShapeId, ShapeProperty};

impl Canvas {
    /// Removes every selected shape.
    pub fn delete_selected(&mut self) -> Option<Edit> {
        if self.selection_manager.is_empty() {
            return None;
        }
        let ids = self.selection_manager.ids().to_vec();
        let removed = ids
            .iter()
            .filter(|id| self.document.remove(id).is_some())
            .count();
        self.selection_manager.clear();
        if removed == 0 {
            return None;
        }
        tracing::debug!("Deleted {} shapes", removed);
        Some(Edit::new("Delete shapes"))
    }

    pub fn can_group(&self) -> bool {
        self.selection_manager.len() >= 2
    }

    /// Groups the selection. The new group becomes the selection.
    pub fn group_selected(&mut self) -> Option<Edit> {
        if !self.can_group() {
            return None;
        }
        let group_id = self.document.group(self.selection_manager.ids())?;
        self.selection_manager.select_only(group_id);
        Some(Edit::new("Group shapes"))
    }

    /// True when exactly one group is selected.
    pub fn can_ungroup(&self) -> bool {
        matches!(
            self.selected_shape().map(|s| &s.shape),
            Some(Shape::Group(_))
        )
    }

    /// Dissolves the selected group. Its children become the selection.
    pub fn ungroup_selected(&mut self) -> Option<Edit> {
        if !self.can_ungroup() {
            return None;
        }
        let id = self.selection_manager.single()?.clone();
        let children = self.document.ungroup(&id)?;
        self.selection_manager.set(children);
        Some(Edit::new("Ungroup shapes"))
    }

    pub fn bring_to_front(&mut self) -> Option<Edit> {
        let id = self.selection_manager.single()?.clone();
        self.document
            .bring_to_front(&id)
            .then(|| Edit::new("Bring to front"))
    }

    pub fn bring_forward(&mut self) -> Option<Edit> {
        let id = self.selection_manager.single()?.clone();
        self.document
            .bring_forward(&id)
            .then(|| Edit::new("Bring forward"))
    }

    pub fn send_backward(&mut self) -> Option<Edit> {
        let id = self.selection_manager.single()?.clone();
        self.document
            .send_backward(&id)
            .then(|| Edit::new("Send backward"))
    }

    pub fn send_to_back(&mut self) -> Option<Edit> {
        let id = self.selection_manager.single()?.clone();
        self.document
            .send_to_back(&id)
            .then(|| Edit::new("Send to back"))
    }

    /// Whether "bring forward" and "bring to front" would change anything.
    pub fn can_bring_forward(&self) -> bool {
        self.selection_manager
            .single()
            .is_some_and(|id| self.document.can_bring_forward(id))
    }

    /// Whether "send backward" and "send to back" would change anything.
    pub fn can_send_backward(&self) -> bool {
        self.selection_manager
            .single()
            .is_some_and(|id| self.document.can_send_backward(id))
    }

    /// Applies a properties panel edit to the single selected shape.
    pub fn update_selected_property(&mut self, prop: &ShapeProperty) -> Option<Edit> {
        let id = self.selection_manager.single()?.clone();
        self.update_shape_property(&id, prop)
    }

    pub fn update_shape_property(&mut self, id: &ShapeId, prop: &ShapeProperty) -> Option<Edit> {
        let obj = self.document.get_mut(id)?;
        if obj.apply_property(prop) {
            Some(Edit::new("Change property"))
        } else {
            tracing::debug!("Ignored {:?} on {}", prop, obj.name());
            None
        }
    }

    /// Adds a pasted image, scaled down to fit the stage and centred.
    ///
    /// `width`/`height` are the natural pixel dimensions. The image becomes
    /// the selection.
    pub fn insert_image(
        &mut self,
        width: f64,
        height: f64,
        source_ref: impl Into<String>,
        bitmap: Option<Arc<RgbaImage>>,
    ) -> Option<Edit> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let stage = self.stage();
        let (width, height) = fit_within(
            width,
            height,
            stage.width * PASTE_FIT_RATIO,
            stage.height * PASTE_FIT_RATIO,
        );
        let mut image = DesignImage::new(
            (stage.width - width) / 2.0,
            (stage.height - height) / 2.0,
            width,
            height,
            source_ref,
        );
        image.bitmap = bitmap;

        let obj = DrawingObject::new(
            Shape::Image(image),
            self.tool_settings.stroke_color.clone(),
            self.tool_settings.stroke_width,
        );
        self.selection_manager.select_only(obj.id.clone());
        self.document.push(obj);
        Some(Edit::new("Paste image"))
    }

    /// Removes all shapes. The caller resets history.
    pub fn clear_shapes(&mut self) {
        self.replace_shapes(Vec::new());
    }
}

/// Shrinks `(width, height)` to fit the box, keeping the aspect ratio.
/// Sizes that already fit are returned unchanged.
fn fit_within(width: f64, height: f64, max_width: f64, max_height: f64) -> (f64, f64) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let ratio = (max_width / width).min(max_height / height);
    (width * ratio, height * ratio)
}

//! The canvas document: stage size plus the ordered shape list.
//!
//! The order of `shapes` is the paint order. Index 0 is drawn first
//! (bottom-most) and the last shape is drawn on top. Grouping, ungrouping
//! and the z-order operations all work directly on that sequence.

use crate::model::{DesignGroup, DesignerShape, DrawingObject, Point, Shape, ShapeId, StageSize};
use vibecanvas_core::constants::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasDocument {
    pub stage: StageSize,
    pub shapes: Vec<DrawingObject>,
}

impl CanvasDocument {
    pub fn new(stage: StageSize) -> Self {
        Self {
            stage,
            shapes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| &s.id == id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: &ShapeId) -> Option<&DrawingObject> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut DrawingObject> {
        self.shapes.iter_mut().find(|s| &s.id == id)
    }

    /// Appends a shape on top of the stack.
    pub fn push(&mut self, shape: DrawingObject) {
        self.shapes.push(shape);
    }

    pub fn remove(&mut self, id: &ShapeId) -> Option<DrawingObject> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Topmost shape under `point`.
    pub fn shape_at(&self, point: Point, tolerance: f64) -> Option<&DrawingObject> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.contains_point(&point, tolerance))
    }

    /// Moves the shape to the top. Returns `false` if it is already there.
    pub fn bring_to_front(&mut self, id: &ShapeId) -> bool {
        match self.index_of(id) {
            Some(i) if i + 1 < self.shapes.len() => {
                let shape = self.shapes.remove(i);
                self.shapes.push(shape);
                true
            }
            _ => false,
        }
    }

    /// Swaps the shape with the one above it.
    pub fn bring_forward(&mut self, id: &ShapeId) -> bool {
        match self.index_of(id) {
            Some(i) if i + 1 < self.shapes.len() => {
                self.shapes.swap(i, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Swaps the shape with the one below it.
    pub fn send_backward(&mut self, id: &ShapeId) -> bool {
        match self.index_of(id) {
            Some(i) if i > 0 => {
                self.shapes.swap(i, i - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the shape to the bottom.
    pub fn send_to_back(&mut self, id: &ShapeId) -> bool {
        match self.index_of(id) {
            Some(i) if i > 0 => {
                let shape = self.shapes.remove(i);
                self.shapes.insert(0, shape);
                true
            }
            _ => false,
        }
    }

    pub fn can_bring_forward(&self, id: &ShapeId) -> bool {
        self.index_of(id).is_some_and(|i| i + 1 < self.shapes.len())
    }

    pub fn can_send_backward(&self, id: &ShapeId) -> bool {
        self.index_of(id).is_some_and(|i| i > 0)
    }

    /// Combines the given shapes into one group placed on top.
    ///
    /// Each member's box is anchored at its position, sized by its extent.
    /// The group frame covers all boxes and the members are translated into
    /// it. Returns the new group id, or `None` with fewer than two members.
    pub fn group(&mut self, ids: &[ShapeId]) -> Option<ShapeId> {
        let members: Vec<usize> = self
            .shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| ids.contains(&s.id))
            .map(|(i, _)| i)
            .collect();
        if members.len() < 2 {
            return None;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &i in &members {
            let p = self.shapes[i].position();
            let (w, h) = self.shapes[i].shape.extent();
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x + w);
            max_y = max_y.max(p.y + h);
        }

        // Remove from the top down so earlier indices stay valid, then
        // restore paint order.
        let mut children = Vec::with_capacity(members.len());
        for &i in members.iter().rev() {
            let mut child = self.shapes.remove(i);
            child.shape.translate(-min_x, -min_y);
            children.push(child);
        }
        children.reverse();

        let stroke = children[0].stroke.clone();
        let stroke_width = children[0].stroke_width;
        let group = DrawingObject::new(
            Shape::Group(DesignGroup::new(
                min_x,
                min_y,
                max_x - min_x,
                max_y - min_y,
                children,
            )),
            stroke,
            stroke_width,
        );
        let group_id = group.id.clone();
        tracing::debug!("Grouped {} shapes into {}", members.len(), group_id);
        self.shapes.push(group);
        Some(group_id)
    }

    /// Dissolves a group, appending its children on top with fresh ids and
    /// document coordinates. Returns the new ids, or `None` if `id` is not a
    /// group.
    pub fn ungroup(&mut self, id: &ShapeId) -> Option<Vec<ShapeId>> {
        let index = self.index_of(id)?;
        if !matches!(self.shapes[index].shape, Shape::Group(_)) {
            return None;
        }
        let Shape::Group(group) = self.shapes.remove(index).shape else {
            return None;
        };

        let mut new_ids = Vec::with_capacity(group.children.len());
        for mut child in group.children {
            child.shape.translate(group.x, group.y);
            child.id = ShapeId::new();
            new_ids.push(child.id.clone());
            self.shapes.push(child);
        }
        tracing::debug!("Ungrouped {} into {} shapes", id, new_ids.len());
        Some(new_ids)
    }
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new(StageSize::new(DEFAULT_STAGE_WIDTH, DEFAULT_STAGE_HEIGHT))
    }
}

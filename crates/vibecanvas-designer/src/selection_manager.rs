use crate::document::CanvasDocument;
use crate::model::ShapeId;

/// Manages shape selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking which shapes are selected, in selection order
/// - Handling click selection (replace) and shift-click selection (toggle)
/// - Dropping ids whose shapes no longer exist
///
/// # Selection Model
///
/// - **Selection set**: an ordered set of shape ids. It is never persisted.
/// - **Selected shape**: the singular selection exists only as a projection
///   of the set. [`SelectionManager::single`] returns an id when exactly one
///   shape is selected.
/// - **Multi-select**: only reachable in selection mode through shift-click
///   or grouping operations.
///
/// # Design
///
/// The manager holds ids only. After undo, redo, delete or load the caller
/// prunes it against the document with [`SelectionManager::prune`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    ids: Vec<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibecanvas_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert_eq!(manager.single(), None);
    /// ```
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Returns the selected ids in selection order.
    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the selected shape when exactly one shape is selected.
    ///
    /// # Returns
    ///
    /// `Some(id)` for a single selection, `None` for an empty or multiple
    /// selection.
    pub fn single(&self) -> Option<&ShapeId> {
        match self.ids.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Replaces the selection with a single shape.
    ///
    /// # Arguments
    ///
    /// * `id` - The shape to select
    pub fn select_only(&mut self, id: ShapeId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replaces the selection with the given shapes.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Adds the shape if it is not selected, removes it otherwise.
    ///
    /// # Arguments
    ///
    /// * `id` - The shape to toggle
    ///
    /// # Returns
    ///
    /// `true` if the shape is selected after the call.
    pub fn toggle(&mut self, id: ShapeId) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == &id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Removes a single id. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &ShapeId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keeps at most one selected shape, the most recently added.
    pub fn collapse_to_last(&mut self) {
        if self.ids.len() > 1 {
            let keep = self.ids.len() - 1;
            self.ids.drain(..keep);
        }
    }

    /// Drops ids that do not refer to a top-level shape of `document`.
    ///
    /// # Arguments
    ///
    /// * `document` - The document the selection must refer to
    ///
    /// # Returns
    ///
    /// The number of ids removed.
    pub fn prune(&mut self, document: &CanvasDocument) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| document.contains(id));
        before - self.ids.len()
    }
}

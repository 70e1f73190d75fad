//! Snapshot-based undo/redo history.
//!
//! Every committed edit stores a complete copy of the shape list. The log is
//! linear: committing after an undo discards the undone snapshots.

use crate::model::DrawingObject;

/// A full copy of the canvas shape list.
pub type Snapshot = Vec<DrawingObject>;

/// Linear undo/redo log over whole-canvas snapshots.
///
/// `snapshots[0]` is the initial state and `cursor` always points at a valid
/// snapshot, so the log is never empty.
#[derive(Debug, Clone)]
pub struct ShapeHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl ShapeHistory {
    /// Creates a history whose initial state is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Records `shapes` as the new current state.
    ///
    /// Snapshots after the cursor are dropped first, so redo is no longer
    /// available once a new edit follows an undo.
    pub fn commit(&mut self, shapes: Snapshot) {
        let dropped = self.snapshots.len() - self.cursor - 1;
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(shapes);
        self.cursor += 1;
        tracing::debug!(
            "History commit: cursor={} len={} dropped_redo={}",
            self.cursor,
            self.snapshots.len(),
            dropped
        );
    }

    /// Steps back one snapshot and returns it, or `None` at the initial state.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::debug!("History undo: cursor={}", self.cursor);
        self.snapshots.get(self.cursor)
    }

    /// Steps forward one snapshot and returns it, or `None` at the newest state.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::debug!("History redo: cursor={}", self.cursor);
        self.snapshots.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Replaces the whole log with a single snapshot.
    pub fn reset(&mut self, shapes: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(shapes);
        self.cursor = 0;
        tracing::debug!("History reset");
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the history holds at least the snapshot it was
    /// created or last reset with.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for ShapeHistory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

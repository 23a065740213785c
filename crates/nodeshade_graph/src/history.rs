// SPDX-License-Identifier: MIT OR Apache-2.0
//! Undo/redo history over serialized graph snapshots.
//!
//! Entries are whole-graph text blobs produced by
//! [`serialize_graph`](crate::serialize_graph). The stack never looks inside
//! them; restoring a state means deserializing the returned blob.

use std::collections::VecDeque;

/// Maximum undo history depth
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo history of serialized snapshots
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Most recent entry at the front
    undo_stack: VecDeque<String>,
    /// Most recent entry at the front
    redo_stack: VecDeque<String>,
    max_depth: usize,
}

impl UndoStack {
    /// Create an empty history holding up to [`MAX_HISTORY`] entries per side
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY)
    }

    /// Create with custom maximum depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth,
        }
    }

    /// Record the state before an edit.
    ///
    /// Any redo history is discarded.
    pub fn push_undo_state(&mut self, snapshot: String) {
        self.redo_stack.clear();
        Self::push_bounded(&mut self.undo_stack, snapshot, self.max_depth);
        tracing::debug!("Undo checkpoint ({} entries)", self.undo_stack.len());
    }

    /// Step back: `current` goes onto the redo side and the most recent undo
    /// entry is returned. With nothing to undo, `current` comes straight back.
    pub fn pop_undo_state(&mut self, current: String) -> String {
        let Some(previous) = self.undo_stack.pop_front() else {
            return current;
        };
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        tracing::debug!("Undo ({} left, {} redoable)", self.undo_stack.len(), self.redo_stack.len());
        previous
    }

    /// Mirror of [`pop_undo_state`](Self::pop_undo_state)
    pub fn pop_redo_state(&mut self, current: String) -> String {
        let Some(next) = self.redo_stack.pop_front() else {
            return current;
        };
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        tracing::debug!("Redo ({} left, {} undoable)", self.redo_stack.len(), self.undo_stack.len());
        next
    }

    fn push_bounded(stack: &mut VecDeque<String>, entry: String, max_depth: usize) {
        stack.push_front(entry);
        stack.truncate(max_depth);
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Maximum entries kept per side
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editing session: the live graph plus its serialized history.

use crate::error::{EditorError, Result};
use crate::settings::EditorSettings;
use nodeshade_graph::{
    deserialize_graph, serialize_graph, CurveEvaluator, Graph, NodeId, NodeRegistry, NodeType,
    SocketValue, UndoStack,
};
use std::path::{Path, PathBuf};

/// One open graph with undo/redo.
///
/// The UI edits [`graph_mut`](Self::graph_mut) freely and calls
/// [`checkpoint`](Self::checkpoint) after each user action. The session keeps
/// the serialized form of the last checkpoint as its current state; undo and
/// redo swap that state with history entries and rebuild the graph from it.
#[derive(Debug)]
pub struct EditorSession {
    settings: EditorSettings,
    registry: NodeRegistry,
    graph: Graph,
    history: UndoStack,
    current: String,
}

impl EditorSession {
    /// Start a session on an empty graph
    pub fn new(settings: EditorSettings) -> Self {
        let registry = NodeRegistry::new();
        let graph = Graph::new();
        let current = serialize_graph(&graph, &registry);
        let history = UndoStack::with_max_depth(settings.history_depth);
        Self {
            settings,
            registry,
            graph,
            history,
            current,
        }
    }

    /// Session settings
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Node registry
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Live graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Live graph, for edits
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Undo history
    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Serialized state as of the last checkpoint
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Add a node with default values
    pub fn add_node(&mut self, node_type: NodeType, position: [f32; 2]) -> Option<NodeId> {
        let node = self.registry.create_node(node_type, position)?;
        Some(self.graph.add_node(node))
    }

    /// Record the graph as a new undo step if anything changed since the
    /// last checkpoint. Returns whether a step was recorded.
    pub fn checkpoint(&mut self) -> bool {
        if !self.graph.any_changed() {
            return false;
        }
        let next = serialize_graph(&self.graph, &self.registry);
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push_undo_state(previous);
        self.graph.mark_all_unchanged();
        true
    }

    /// Step back one checkpoint. Pending edits are checkpointed first so redo
    /// can bring them back. Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        self.checkpoint();
        if !self.history.can_undo() {
            return false;
        }
        let current = std::mem::take(&mut self.current);
        let previous = self.history.pop_undo_state(current);
        self.restore(previous);
        true
    }

    /// Step forward one checkpoint. Returns whether anything was redone.
    pub fn redo(&mut self) -> bool {
        // New edits invalidate the redo history.
        if self.checkpoint() || !self.history.can_redo() {
            return false;
        }
        let current = std::mem::take(&mut self.current);
        let next = self.history.pop_redo_state(current);
        self.restore(next);
        true
    }

    fn restore(&mut self, state: String) {
        self.graph = deserialize_graph(&state, &self.registry);
        self.current = state;
    }

    /// Replace the graph with one decoded from `text` and clear history.
    ///
    /// Unreadable input gives an empty or partial graph, never an error.
    pub fn load_str(&mut self, text: &str) {
        self.graph = deserialize_graph(text, &self.registry);
        self.current = serialize_graph(&self.graph, &self.registry);
        self.history.clear();
        tracing::info!(
            "Loaded graph: {} nodes, {} connections",
            self.graph.node_count(),
            self.graph.connection_count()
        );
    }

    /// Checkpoint and return the serialized graph
    pub fn save_string(&mut self) -> String {
        self.checkpoint();
        self.current.clone()
    }

    /// Load a graph file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        self.load_str(&text);
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    /// Save the graph to a file
    pub fn save_file(&mut self, path: &Path) -> Result<()> {
        let text = self.save_string();
        std::fs::write(path, text).map_err(|e| EditorError::io(path, e))?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    /// Save to the configured autosave path
    pub fn autosave(&mut self) -> Result<PathBuf> {
        let path = self.settings.autosave_path.clone().ok_or(EditorError::NoPath)?;
        self.save_file(&path)?;
        Ok(path)
    }

    /// Load from the configured autosave path
    pub fn load_autosave(&mut self) -> Result<PathBuf> {
        let path = self.settings.autosave_path.clone().ok_or(EditorError::NoPath)?;
        self.load_file(&path)?;
        Ok(path)
    }

    /// Sample a curve input at the configured resolution
    pub fn sample_curve(&self, node_id: NodeId, internal_name: &str) -> Result<CurveEvaluator> {
        self.graph
            .node(node_id)
            .and_then(|node| node.value(internal_name))
            .and_then(SocketValue::as_curve)
            .map(|curve| curve.evaluator(self.settings.curve_resolution))
            .ok_or_else(|| EditorError::NoCurve(internal_name.to_owned()))
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

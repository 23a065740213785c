// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::connection::{Connection, ConnectionId};
use crate::node::{Node, NodeId};
use crate::socket::SocketId;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A shader node graph.
///
/// Owns its nodes outright; connections refer to sockets by handle and are
/// resolved through the node map on every access.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    connections: IndexMap<ConnectionId, Connection>,
    /// Structural edit (node added/removed, link changed) since the last checkpoint
    structure_changed: bool,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        self.structure_changed = true;
        id
    }

    /// Remove a node and every connection touching it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(&node_id)?;
        self.connections.retain(|_, c| !c.involves_node(node_id));
        self.structure_changed = true;
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node and connection
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
        self.structure_changed = true;
    }

    /// Connect an output socket to an input socket.
    ///
    /// An input accepts a single connection; an existing link into `to_socket`
    /// is replaced.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_socket: SocketId,
        to_node: NodeId,
        to_socket: SocketId,
    ) -> Result<ConnectionId, ConnectionError> {
        let source_node = self
            .nodes
            .get(&from_node)
            .ok_or(ConnectionError::NodeNotFound(from_node))?;
        let target_node = self
            .nodes
            .get(&to_node)
            .ok_or(ConnectionError::NodeNotFound(to_node))?;

        let source_socket = source_node
            .socket(from_socket)
            .ok_or(ConnectionError::SocketNotFound(from_socket))?;
        let target_socket = target_node
            .socket(to_socket)
            .ok_or(ConnectionError::SocketNotFound(to_socket))?;

        if !source_socket.can_connect(target_socket) {
            return Err(ConnectionError::IncompatibleSockets);
        }

        if from_node == to_node {
            return Err(ConnectionError::SelfLoop);
        }

        if self.reaches(to_node, from_node) {
            return Err(ConnectionError::Cycle);
        }

        self.connections.retain(|_, c| c.to_socket != to_socket);

        let connection = Connection::new(from_node, from_socket, to_node, to_socket);
        let id = connection.id;
        self.connections.insert(id, connection);
        self.structure_changed = true;
        Ok(id)
    }

    /// Remove a connection
    pub fn disconnect(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        let removed = self.connections.shift_remove(&connection_id);
        if removed.is_some() {
            self.structure_changed = true;
        }
        removed
    }

    /// Remove the connection feeding an input socket, if any
    pub fn disconnect_input(&mut self, to_socket: SocketId) -> Option<Connection> {
        let id = self.connections_to(to_socket).next()?.id;
        self.disconnect(id)
    }

    /// Get a connection by ID
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get connections from a specific socket
    pub fn connections_from(&self, socket_id: SocketId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.from_socket == socket_id)
    }

    /// Get connections to a specific socket
    pub fn connections_to(&self, socket_id: SocketId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.to_socket == socket_id)
    }

    /// Whether any connection touches the socket
    pub fn is_connected(&self, socket_id: SocketId) -> bool {
        self.connections.values().any(|c| c.involves_socket(socket_id))
    }

    /// Get connections involving a node
    pub fn connections_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.involves_node(node_id))
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether any node or the structure changed since the last checkpoint
    pub fn any_changed(&self) -> bool {
        self.structure_changed || self.nodes.values().any(Node::is_changed)
    }

    /// Clear every change flag
    pub fn mark_all_unchanged(&mut self) {
        self.structure_changed = false;
        for node in self.nodes.values_mut() {
            node.mark_unchanged();
        }
    }

    /// Whether `target` is downstream of `start`
    fn reaches(&self, start: NodeId, target: NodeId) -> bool {
        let mut stack = vec![start];
        let mut seen = HashSet::new();
        while let Some(node_id) = stack.pop() {
            if node_id == target {
                return true;
            }
            if !seen.insert(node_id) {
                continue;
            }
            stack.extend(
                self.connections
                    .values()
                    .filter(|c| c.from_node == node_id)
                    .map(|c| c.to_node),
            );
        }
        false
    }

    /// Get nodes in topological order, upstream first
    pub fn topological_order(&self) -> Result<Vec<NodeId>, CycleError> {
        let mut visited = HashSet::new();
        let mut temp_mark = HashSet::new();
        let mut order = Vec::new();

        for node_id in self.nodes.keys() {
            if !visited.contains(node_id) {
                self.visit(*node_id, &mut visited, &mut temp_mark, &mut order)?;
            }
        }

        Ok(order)
    }

    fn visit(
        &self,
        node_id: NodeId,
        visited: &mut HashSet<NodeId>,
        temp_mark: &mut HashSet<NodeId>,
        order: &mut Vec<NodeId>,
    ) -> Result<(), CycleError> {
        if temp_mark.contains(&node_id) {
            return Err(CycleError);
        }
        if visited.contains(&node_id) {
            return Ok(());
        }

        temp_mark.insert(node_id);

        // Upstream nodes first
        for connection in self.connections_for_node(node_id) {
            if connection.to_node == node_id {
                self.visit(connection.from_node, visited, temp_mark, order)?;
            }
        }

        temp_mark.remove(&node_id);
        visited.insert(node_id);
        order.push(node_id);

        Ok(())
    }
}

/// Error when creating a connection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket not found on its node
    #[error("Socket not found: {0:?}")]
    SocketNotFound(SocketId),

    /// Wrong directions or incompatible types
    #[error("Incompatible sockets")]
    IncompatibleSockets,

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,

    /// The link would close a cycle
    #[error("Connection would create a cycle")]
    Cycle,
}

/// Error when graph contains a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Graph contains a cycle")]
pub struct CycleError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;
    use crate::registry::NodeRegistry;
    use crate::socket::SocketDirection;

    fn socket(graph: &Graph, node: NodeId, direction: SocketDirection, name: &str) -> SocketId {
        graph
            .node(node)
            .and_then(|n| n.socket_by_display_name(direction, name))
            .map(|s| s.id)
            .expect("socket exists")
    }

    fn add(graph: &mut Graph, registry: &NodeRegistry, node_type: NodeType) -> NodeId {
        graph.add_node(registry.create_node(node_type, [0.0, 0.0]).expect("registered"))
    }

    #[test]
    fn test_connect_and_replace_input() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let diffuse = add(&mut graph, &registry, NodeType::DiffuseBsdf);
        let glossy = add(&mut graph, &registry, NodeType::GlossyBsdf);
        let output = add(&mut graph, &registry, NodeType::MaterialOutput);

        let surface = socket(&graph, output, SocketDirection::Input, "Surface");
        let diffuse_out = socket(&graph, diffuse, SocketDirection::Output, "BSDF");
        let glossy_out = socket(&graph, glossy, SocketDirection::Output, "BSDF");

        graph.connect(diffuse, diffuse_out, output, surface).expect("valid link");
        graph.connect(glossy, glossy_out, output, surface).expect("valid link");

        assert_eq!(graph.connection_count(), 1);
        let link = graph.connections_to(surface).next().expect("one link");
        assert_eq!(link.from_node, glossy);
    }

    #[test]
    fn test_remove_node_cascades() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let diffuse = add(&mut graph, &registry, NodeType::DiffuseBsdf);
        let output = add(&mut graph, &registry, NodeType::MaterialOutput);
        let from = socket(&graph, diffuse, SocketDirection::Output, "BSDF");
        let to = socket(&graph, output, SocketDirection::Input, "Surface");
        graph.connect(diffuse, from, output, to).expect("valid link");

        assert!(graph.remove_node(diffuse).is_some());
        assert_eq!(graph.connection_count(), 0);
        assert!(!graph.is_connected(to));
        assert!(graph.remove_node(diffuse).is_none());
    }

    #[test]
    fn test_rejects_bad_links() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let rgb = add(&mut graph, &registry, NodeType::Rgb);
        let output = add(&mut graph, &registry, NodeType::MaterialOutput);
        let invert = add(&mut graph, &registry, NodeType::Invert);

        let rgb_out = socket(&graph, rgb, SocketDirection::Output, "Color");
        let surface = socket(&graph, output, SocketDirection::Input, "Surface");
        let invert_in = socket(&graph, invert, SocketDirection::Input, "Color");
        let invert_out = socket(&graph, invert, SocketDirection::Output, "Color");

        assert_eq!(
            graph.connect(rgb, rgb_out, output, surface),
            Err(ConnectionError::IncompatibleSockets)
        );
        assert_eq!(
            graph.connect(invert, invert_in, rgb, rgb_out),
            Err(ConnectionError::IncompatibleSockets)
        );
        assert_eq!(
            graph.connect(invert, invert_out, invert, invert_in),
            Err(ConnectionError::SelfLoop)
        );
        let stranger = NodeId::new();
        assert_eq!(
            graph.connect(stranger, rgb_out, invert, invert_in),
            Err(ConnectionError::NodeNotFound(stranger))
        );
    }

    #[test]
    fn test_rejects_cycles() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let a = add(&mut graph, &registry, NodeType::Invert);
        let b = add(&mut graph, &registry, NodeType::Invert);

        let a_out = socket(&graph, a, SocketDirection::Output, "Color");
        let a_in = socket(&graph, a, SocketDirection::Input, "Color");
        let b_out = socket(&graph, b, SocketDirection::Output, "Color");
        let b_in = socket(&graph, b, SocketDirection::Input, "Color");

        graph.connect(a, a_out, b, b_in).expect("valid link");
        assert_eq!(graph.connect(b, b_out, a, a_in), Err(ConnectionError::Cycle));
        assert_eq!(graph.topological_order(), Ok(vec![a, b]));
    }

    #[test]
    fn test_change_tracking() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        assert!(!graph.any_changed());
        let node = add(&mut graph, &registry, NodeType::Rgb);
        assert!(graph.any_changed());
        graph.mark_all_unchanged();
        assert!(!graph.any_changed());
        graph.node_mut(node).expect("present").set_position([4.0, 4.0]);
        assert!(graph.any_changed());
    }

    #[test]
    fn test_disconnect_flags_only_real_removals() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let diffuse = add(&mut graph, &registry, NodeType::DiffuseBsdf);
        let output = add(&mut graph, &registry, NodeType::MaterialOutput);
        let from = socket(&graph, diffuse, SocketDirection::Output, "BSDF");
        let to = socket(&graph, output, SocketDirection::Input, "Surface");
        let link = graph.connect(diffuse, from, output, to).expect("valid link");
        graph.mark_all_unchanged();

        assert!(graph.disconnect(ConnectionId::new()).is_none());
        assert!(!graph.any_changed());

        let removed = graph.disconnect(link).expect("link exists");
        assert_eq!(removed.to_socket, to);
        assert!(graph.any_changed());
        assert_eq!(graph.connection_count(), 0);
        assert!(graph.connection(link).is_none());

        graph.mark_all_unchanged();
        assert!(graph.disconnect(link).is_none());
        assert!(!graph.any_changed());
    }

    #[test]
    fn test_disconnect_input_removes_only_that_link() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let diffuse = add(&mut graph, &registry, NodeType::DiffuseBsdf);
        let emission = add(&mut graph, &registry, NodeType::Emission);
        let mix = add(&mut graph, &registry, NodeType::MixShader);

        let diffuse_out = socket(&graph, diffuse, SocketDirection::Output, "BSDF");
        let emission_out = socket(&graph, emission, SocketDirection::Output, "Emission");
        let first = socket(&graph, mix, SocketDirection::Input, "Shader 1");
        let second = socket(&graph, mix, SocketDirection::Input, "Shader 2");
        graph.connect(diffuse, diffuse_out, mix, first).expect("valid link");
        graph.connect(emission, emission_out, mix, second).expect("valid link");
        graph.mark_all_unchanged();

        let removed = graph.disconnect_input(first).expect("input is linked");
        assert_eq!(removed.from_node, diffuse);
        assert!(graph.any_changed());
        assert!(!graph.is_connected(first));
        assert!(graph.is_connected(second));
        assert_eq!(graph.connection_count(), 1);

        graph.mark_all_unchanged();
        assert!(graph.disconnect_input(first).is_none());
        assert!(!graph.any_changed());
    }

    #[test]
    fn test_clear() {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let diffuse = add(&mut graph, &registry, NodeType::DiffuseBsdf);
        let output = add(&mut graph, &registry, NodeType::MaterialOutput);
        let from = socket(&graph, diffuse, SocketDirection::Output, "BSDF");
        let to = socket(&graph, output, SocketDirection::Input, "Surface");
        graph.connect(diffuse, from, output, to).expect("valid link");
        graph.mark_all_unchanged();

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.connection_count(), 0);
        assert!(graph.any_changed());
        assert_eq!(
            crate::serialize::serialize_graph(&graph, &registry),
            "nodeshade_graph|v002|section_nodes|section_connections"
        );
    }
}

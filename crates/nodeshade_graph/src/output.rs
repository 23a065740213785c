// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flat, serialization-ready form of a graph.
//!
//! These types carry no handles: nodes are named and connections refer to
//! those names plus socket display names. They are rebuilt on every save and
//! are what downstream renderer adapters consume.

use crate::curve::CurveValue;
use crate::node::NodeType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node with its input values grouped by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputNode {
    /// Name unique within one serialized blob
    pub name: String,
    /// Node type
    pub node_type: NodeType,
    /// Position in world space
    pub position: [f32; 2],
    /// Float parameters by internal name
    pub float_values: IndexMap<String, f32>,
    /// Vector and color parameters by internal name
    pub float3_values: IndexMap<String, [f32; 3]>,
    /// Enum parameters (internal option name) by internal name
    pub string_values: IndexMap<String, String>,
    /// Integer parameters by internal name
    pub int_values: IndexMap<String, i32>,
    /// Toggle parameters by internal name
    pub bool_values: IndexMap<String, bool>,
    /// Curve parameters by internal name
    pub curve_values: IndexMap<String, CurveValue>,
}

impl OutputNode {
    /// Create an empty output node; [`Node::update_output_node`](crate::Node::update_output_node)
    /// fills in the rest
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_type: NodeType::MaterialOutput,
            position: [0.0, 0.0],
            float_values: IndexMap::new(),
            float3_values: IndexMap::new(),
            string_values: IndexMap::new(),
            int_values: IndexMap::new(),
            bool_values: IndexMap::new(),
            curve_values: IndexMap::new(),
        }
    }
}

/// One connection, by node name and socket display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputConnection {
    /// Name of the node owning the output socket
    pub source_node: String,
    /// Display name of the output socket
    pub source_socket: String,
    /// Name of the node owning the input socket
    pub dest_node: String,
    /// Display name of the input socket
    pub dest_socket: String,
}

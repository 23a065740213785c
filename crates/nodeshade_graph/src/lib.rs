// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader node graph core for nodeshade.
//!
//! This crate provides the data side of the shader graph editor:
//! - Typed, range-validated socket values
//! - A declarative node catalog and the type/code registry built from it
//! - The live graph model (nodes, sockets, connections)
//! - Curve control points and their sampled evaluator
//! - The flat text wire format used for save files and undo snapshots
//! - A bounded undo/redo stack of serialized snapshots
//!
//! ## Architecture
//!
//! The UI mutates a [`Graph`]. When it wants a checkpoint it calls
//! [`serialize_graph`], which flattens the graph into [`OutputNode`] and
//! [`OutputConnection`] lists and encodes those into a single string.
//! Loading, undo and redo go the other way through [`deserialize_graph`],
//! which never fails: malformed input degrades to a partial or empty graph.

pub mod value;
pub mod curve;
pub mod socket;
pub mod node;
pub mod catalog;
pub mod registry;
pub mod connection;
pub mod graph;
pub mod output;
pub mod serialize;
pub mod history;

pub use value::{
    BoolValue, ColorValue, Float3Value, FloatValue, IntValue, SocketValue, StringEnumPair,
    StringEnumValue,
};
pub use curve::{CurveEvaluator, CurveInterpolation, CurveValue, DEFAULT_CURVE_STEPS};
pub use socket::{Socket, SocketDirection, SocketId, SocketType};
pub use node::{Node, NodeCategory, NodeId, NodeType};
pub use catalog::{NodeSchema, SocketDefault, SocketSpec};
pub use registry::{NodeRegistry, RegistryError};
pub use connection::{Connection, ConnectionId};
pub use graph::{ConnectionError, CycleError, Graph};
pub use output::{OutputConnection, OutputNode};
pub use serialize::{
    decode_output_lists, deserialize_graph, encode_output_lists, generate_output_lists,
    serialize_graph,
};
pub use history::UndoStack;

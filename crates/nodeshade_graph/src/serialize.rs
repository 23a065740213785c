// SPDX-License-Identifier: MIT OR Apache-2.0
//! Text wire format for graphs.
//!
//! A graph is written as one `|`-separated token stream:
//!
//! ```text
//! nodeshade_graph|v002|section_nodes|<node>*|section_connections|<connection>*
//! <node>       = code|name|x|y|(key|value)*|node_end
//! <connection> = source_node|source_socket|dest_node|dest_socket
//! ```
//!
//! There is no quoting or escaping, so names and values never contain `|`.
//! Values carry no type marker; the decoder interprets each one according to
//! the socket it lands in. Curves nest a `,`-separated stream inside a single
//! value token: `curve00,<interpolation>,<count>,x0,y0,x1,y1...`.
//!
//! Decoding is best-effort. Only an unrecognized header rejects the whole
//! input; unknown nodes, unknown keys, unreadable values and dangling
//! connections are each skipped on their own.

use crate::curve::{CurveInterpolation, CurveValue};
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::output::{OutputConnection, OutputNode};
use crate::registry::NodeRegistry;
use crate::socket::SocketDirection;
use crate::value::SocketValue;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// First token of every serialized graph
pub const MAGIC_WORD: &str = "nodeshade_graph";
/// Format version, second token
pub const VERSION: &str = "v002";
/// Separator between tokens
pub const DELIMITER: char = '|';
/// Separator inside curve and vector values
pub const SUB_DELIMITER: char = ',';

const SECTION_NODES: &str = "section_nodes";
const SECTION_CONNECTIONS: &str = "section_connections";
const NODE_END: &str = "node_end";
const CURVE_TAG: &str = "curve00";

static NEXT_NODE_NAME: AtomicU64 = AtomicU64::new(0);

/// Names only need to be unique inside one blob; a process-wide counter is
/// enough for that.
fn next_node_name() -> String {
    format!("node{}", NEXT_NODE_NAME.fetch_add(1, Ordering::Relaxed))
}

/// Reasons a piece of input was not understood
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
enum FormatError {
    #[error("Unrecognized magic word: {0:?}")]
    BadMagic(String),

    #[error("Unsupported version: {0:?}")]
    BadVersion(String),

    #[error("Missing section marker: {0}")]
    MissingSection(&'static str),

    #[error("Input ends inside a node block")]
    Truncated,

    #[error("Node {0:?} has no end marker")]
    UnterminatedNode(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Expected three components: {0:?}")]
    InvalidVector(String),

    #[error("Unknown option: {0:?}")]
    UnknownOption(String),

    #[error("Malformed curve: {0:?}")]
    InvalidCurve(String),
}

/// Flatten a graph into name-keyed output lists.
///
/// Every node gets a fresh synthetic name. Connections whose endpoints can no
/// longer be resolved are left out.
pub fn generate_output_lists(graph: &Graph) -> (Vec<OutputNode>, Vec<OutputConnection>) {
    let mut names: HashMap<NodeId, String> = HashMap::with_capacity(graph.node_count());

    let nodes = graph
        .nodes()
        .map(|node| {
            let mut output = OutputNode::new(next_node_name());
            node.update_output_node(&mut output);
            names.insert(node.id, output.name.clone());
            output
        })
        .collect();

    let connections = graph
        .connections()
        .filter_map(|c| {
            let source = graph.node(c.from_node)?.socket(c.from_socket)?;
            let dest = graph.node(c.to_node)?.socket(c.to_socket)?;
            Some(OutputConnection {
                source_node: names.get(&c.from_node)?.clone(),
                source_socket: source.display_name.clone(),
                dest_node: names.get(&c.to_node)?.clone(),
                dest_socket: dest.display_name.clone(),
            })
        })
        .collect();

    (nodes, connections)
}

/// Encode output lists into the wire format
pub fn encode_output_lists(
    nodes: &[OutputNode],
    connections: &[OutputConnection],
    registry: &NodeRegistry,
) -> String {
    let mut tokens: Vec<String> = vec![
        MAGIC_WORD.to_owned(),
        VERSION.to_owned(),
        SECTION_NODES.to_owned(),
    ];

    for node in nodes {
        let Some(code) = registry.type_to_code(node.node_type) else {
            tracing::warn!("Not writing node {}: {:?} is not registered", node.name, node.node_type);
            continue;
        };
        tokens.push(code.to_owned());
        tokens.push(node.name.clone());
        tokens.push(node.position[0].to_string());
        tokens.push(node.position[1].to_string());

        for (key, value) in &node.float_values {
            tokens.push(key.clone());
            tokens.push(value.to_string());
        }
        for (key, value) in &node.float3_values {
            tokens.push(key.clone());
            tokens.push(encode_float3(*value));
        }
        for (key, value) in &node.string_values {
            tokens.push(key.clone());
            tokens.push(value.clone());
        }
        for (key, value) in &node.int_values {
            tokens.push(key.clone());
            tokens.push(value.to_string());
        }
        for (key, value) in &node.bool_values {
            tokens.push(key.clone());
            tokens.push(if *value { "1" } else { "0" }.to_owned());
        }
        for (key, value) in &node.curve_values {
            tokens.push(key.clone());
            tokens.push(encode_curve(value));
        }
        tokens.push(NODE_END.to_owned());
    }

    tokens.push(SECTION_CONNECTIONS.to_owned());
    for connection in connections {
        tokens.push(connection.source_node.clone());
        tokens.push(connection.source_socket.clone());
        tokens.push(connection.dest_node.clone());
        tokens.push(connection.dest_socket.clone());
    }

    tokens.join(&DELIMITER.to_string())
}

/// Serialize a graph to its text form
pub fn serialize_graph(graph: &Graph, registry: &NodeRegistry) -> String {
    let (nodes, connections) = generate_output_lists(graph);
    encode_output_lists(&nodes, &connections, registry)
}

/// Rebuild a graph from its text form.
///
/// Never fails. Input that is not a graph at all yields an empty graph;
/// damaged input yields whatever could be recovered. Every node of the result
/// is marked unchanged.
pub fn deserialize_graph(text: &str, registry: &NodeRegistry) -> Graph {
    match decode_graph(text, registry) {
        Ok(graph) => graph,
        Err(err) => {
            tracing::warn!("Not a recognized graph: {err}");
            Graph::new()
        }
    }
}

/// Decode text straight into output lists, for renderer adapters.
///
/// Node names in the result are freshly generated, not the ones in `text`.
pub fn decode_output_lists(
    text: &str,
    registry: &NodeRegistry,
) -> (Vec<OutputNode>, Vec<OutputConnection>) {
    generate_output_lists(&deserialize_graph(text, registry))
}

/// Token stream over one serialized blob
struct Tokens<'a> {
    inner: std::iter::Peekable<std::vec::IntoIter<&'a str>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let mut tokens: Vec<&str> = text
            .trim_end_matches(['\r', '\n'])
            .split(DELIMITER)
            .collect();
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
        Self {
            inner: tokens.into_iter().peekable(),
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    fn require(&mut self) -> Result<&'a str, FormatError> {
        self.next().ok_or(FormatError::Truncated)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

fn decode_graph(text: &str, registry: &NodeRegistry) -> Result<Graph, FormatError> {
    let mut tokens = Tokens::new(text);

    let magic = tokens.next().unwrap_or_default();
    if magic != MAGIC_WORD {
        return Err(FormatError::BadMagic(magic.to_owned()));
    }
    let version = tokens.next().unwrap_or_default();
    if version != VERSION {
        return Err(FormatError::BadVersion(version.to_owned()));
    }
    if tokens.next() != Some(SECTION_NODES) {
        return Err(FormatError::MissingSection(SECTION_NODES));
    }

    let mut graph = Graph::new();
    let mut names: HashMap<String, NodeId> = HashMap::new();

    loop {
        match tokens.peek() {
            None => {
                tracing::debug!("Graph text has no connection section");
                graph.mark_all_unchanged();
                return Ok(graph);
            }
            Some(SECTION_CONNECTIONS) => {
                tokens.next();
                break;
            }
            Some(_) => {
                if let Err(err) = decode_node(&mut tokens, registry, &mut graph, &mut names) {
                    tracing::warn!("Stopped reading nodes: {err}");
                    graph.mark_all_unchanged();
                    return Ok(graph);
                }
            }
        }
    }

    decode_connections(tokens, &mut graph, &names);
    graph.mark_all_unchanged();
    Ok(graph)
}

fn decode_node(
    tokens: &mut Tokens<'_>,
    registry: &NodeRegistry,
    graph: &mut Graph,
    names: &mut HashMap<String, NodeId>,
) -> Result<(), FormatError> {
    let code = tokens.require()?;
    let name = tokens.require()?;
    let x = tokens.require()?;
    let y = tokens.require()?;

    let position = [parse_position(name, x), parse_position(name, y)];
    let mut node = registry.create_node_from_code(code, position);
    if node.is_none() {
        tracing::warn!("Skipping node {name}: unknown type code {code:?}");
    }

    loop {
        let key = tokens.require()?;
        if key == NODE_END {
            break;
        }
        if key == SECTION_CONNECTIONS {
            return Err(FormatError::UnterminatedNode(name.to_owned()));
        }
        let value = tokens.require()?;
        if let Some(node) = node.as_mut() {
            apply_parameter(node, key, value);
        }
    }

    if let Some(node) = node {
        let id = graph.add_node(node);
        if names.insert(name.to_owned(), id).is_some() {
            tracing::debug!("Node name {name} appears twice; links resolve to the later node");
        }
    }
    Ok(())
}

fn parse_position(name: &str, token: &str) -> f32 {
    match parse_f32(token) {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::debug!("Node {name} has unreadable coordinate {token:?}");
            0.0
        }
    }
}

fn apply_parameter(node: &mut Node, key: &str, token: &str) {
    let node_type = node.node_type;
    let Some(value) = node.value_mut(key) else {
        tracing::debug!("Ignoring parameter {key} unknown to {node_type:?}");
        return;
    };
    if let Err(err) = decode_value(value, token) {
        tracing::debug!("Keeping previous {key} on {node_type:?}: {err}");
    }
}

/// Decode `token` into `value`, dispatching on the kind the socket holds
fn decode_value(value: &mut SocketValue, token: &str) -> Result<(), FormatError> {
    match value {
        SocketValue::Float(v) => v.set(parse_f32(token)?),
        SocketValue::Int(v) => v.set(parse_i32(token)?),
        SocketValue::Float3(v) => v.set(parse_float3(token)?),
        SocketValue::Color(v) => v.set(parse_float3(token)?),
        SocketValue::StringEnum(v) => {
            if !v.select(token) {
                return Err(FormatError::UnknownOption(token.to_owned()));
            }
        }
        SocketValue::Bool(v) => v.set(parse_bool(token)?),
        SocketValue::Curve(v) => *v = decode_curve(token)?,
    }
    Ok(())
}

fn decode_connections(tokens: Tokens<'_>, graph: &mut Graph, names: &HashMap<String, NodeId>) {
    let rest: Vec<&str> = tokens.collect();
    let mut quads = rest.chunks_exact(4);

    for quad in &mut quads {
        let &[source, source_socket, dest, dest_socket] = quad else {
            continue;
        };

        let (Some(&from_node), Some(&to_node)) = (names.get(source), names.get(dest)) else {
            tracing::debug!("Dropping link {source}.{source_socket} -> {dest}.{dest_socket}: unknown node");
            continue;
        };

        let from_socket = graph
            .node(from_node)
            .and_then(|n| n.socket_by_display_name(SocketDirection::Output, source_socket))
            .map(|s| s.id);
        let to_socket = graph
            .node(to_node)
            .and_then(|n| n.socket_by_display_name(SocketDirection::Input, dest_socket))
            .map(|s| s.id);
        let (Some(from_socket), Some(to_socket)) = (from_socket, to_socket) else {
            tracing::debug!("Dropping link {source}.{source_socket} -> {dest}.{dest_socket}: unknown socket");
            continue;
        };

        if let Err(err) = graph.connect(from_node, from_socket, to_node, to_socket) {
            tracing::debug!("Dropping link {source}.{source_socket} -> {dest}.{dest_socket}: {err}");
        }
    }

    if !quads.remainder().is_empty() {
        tracing::debug!("Ignoring {} trailing tokens", quads.remainder().len());
    }
}

fn parse_f32(token: &str) -> Result<f32, FormatError> {
    token
        .trim()
        .parse::<f32>()
        .map_err(|_| FormatError::InvalidNumber(token.to_owned()))
}

fn parse_i64(token: &str) -> Result<i64, FormatError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| FormatError::InvalidNumber(token.to_owned()))
}

/// Integers outside the `i32` range saturate; the value setter clamps further
fn parse_i32(token: &str) -> Result<i32, FormatError> {
    Ok(parse_i64(token)?.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn parse_bool(token: &str) -> Result<bool, FormatError> {
    match token.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Ok(parse_i64(other)? != 0),
    }
}

fn parse_float3(token: &str) -> Result<[f32; 3], FormatError> {
    let parts: Vec<&str> = token.split(SUB_DELIMITER).collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(FormatError::InvalidVector(token.to_owned()));
    };
    Ok([parse_f32(x)?, parse_f32(y)?, parse_f32(z)?])
}

fn encode_float3(value: [f32; 3]) -> String {
    format!("{}{SUB_DELIMITER}{}{SUB_DELIMITER}{}", value[0], value[1], value[2])
}

fn encode_curve(curve: &CurveValue) -> String {
    let mut parts = vec![
        CURVE_TAG.to_owned(),
        curve.interpolation().name().to_owned(),
        curve.points().len().to_string(),
    ];
    for point in curve.points() {
        parts.push(point[0].to_string());
        parts.push(point[1].to_string());
    }
    parts.join(&SUB_DELIMITER.to_string())
}

/// Decode a curve value; any structural mismatch rejects the whole curve
fn decode_curve(token: &str) -> Result<CurveValue, FormatError> {
    let invalid = || FormatError::InvalidCurve(token.to_owned());

    let parts: Vec<&str> = token.split(SUB_DELIMITER).collect();
    let [tag, interpolation, count, coords @ ..] = parts.as_slice() else {
        return Err(invalid());
    };
    if *tag != CURVE_TAG {
        return Err(invalid());
    }
    let interpolation = CurveInterpolation::from_name(interpolation).ok_or_else(invalid)?;
    let count: usize = count.trim().parse().map_err(|_| invalid())?;
    if count.checked_mul(2) != Some(coords.len()) {
        return Err(invalid());
    }

    let points = coords
        .chunks_exact(2)
        .map(|xy| Ok([parse_f32(xy[0])?, parse_f32(xy[1])?]))
        .collect::<Result<Vec<_>, FormatError>>()
        .map_err(|_| invalid())?;

    Ok(CurveValue::new(points, interpolation))
}

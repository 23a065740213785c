// SPDX-License-Identifier: MIT OR Apache-2.0
//! Save/load round trips through the public API.

use nodeshade_graph::{
    deserialize_graph, serialize_graph, CurveInterpolation, CurveValue, Graph, NodeId,
    NodeRegistry, NodeType, SocketDirection, SocketValue,
};
use proptest::prelude::*;

/// Identity-free description of a node: type, position and every input value
fn describe_node(graph: &Graph, node_id: NodeId) -> String {
    let Some(node) = graph.node(node_id) else {
        return String::from("<missing>");
    };
    let values: Vec<String> = node
        .inputs()
        .filter_map(|s| s.value().map(|v| format!("{}={v:?}", s.internal_name)))
        .collect();
    format!("{:?} {:?} [{}]", node.node_type, node.position(), values.join(" "))
}

/// Sorted node and connection descriptions, comparable as multisets
fn describe(graph: &Graph) -> (Vec<String>, Vec<String>) {
    let mut nodes: Vec<String> = graph.node_ids().map(|id| describe_node(graph, id)).collect();
    nodes.sort();

    let mut connections: Vec<String> = graph
        .connections()
        .map(|c| {
            let socket_name = |node: NodeId, socket| {
                graph
                    .node(node)
                    .and_then(|n| n.socket(socket))
                    .map(|s| s.display_name.clone())
                    .unwrap_or_default()
            };
            format!(
                "{}.{} -> {}.{}",
                describe_node(graph, c.from_node),
                socket_name(c.from_node, c.from_socket),
                describe_node(graph, c.to_node),
                socket_name(c.to_node, c.to_socket),
            )
        })
        .collect();
    connections.sort();

    (nodes, connections)
}

fn link(graph: &mut Graph, from: NodeId, output: &str, to: NodeId, input: &str) {
    let from_socket = graph
        .node(from)
        .and_then(|n| n.socket_by_display_name(SocketDirection::Output, output))
        .map(|s| s.id)
        .expect("output exists");
    let to_socket = graph
        .node(to)
        .and_then(|n| n.socket_by_display_name(SocketDirection::Input, input))
        .map(|s| s.id)
        .expect("input exists");
    graph.connect(from, from_socket, to, to_socket).expect("valid link");
}

fn material(registry: &NodeRegistry) -> Graph {
    let mut graph = Graph::new();
    let add = |graph: &mut Graph, node_type, position| {
        graph.add_node(registry.create_node(node_type, position).expect("registered"))
    };

    let noise = add(&mut graph, NodeType::NoiseTexture, [-600.0, 0.0]);
    let ramp = add(&mut graph, NodeType::RgbCurves, [-400.0, 0.0]);
    let mix = add(&mut graph, NodeType::MixRgb, [-400.0, 200.0]);
    let diffuse = add(&mut graph, NodeType::DiffuseBsdf, [-200.0, 0.0]);
    let glossy = add(&mut graph, NodeType::GlossyBsdf, [-200.0, 200.0]);
    let shader_mix = add(&mut graph, NodeType::MixShader, [0.0, 100.0]);
    let output = add(&mut graph, NodeType::MaterialOutput, [200.0, 100.0]);

    if let Some(node) = graph.node_mut(ramp) {
        if let Some(SocketValue::Curve(curve)) = node.value_mut("curve_c") {
            *curve = CurveValue::new(
                vec![[0.0, 0.0], [0.3, 0.7], [1.0, 1.0]],
                CurveInterpolation::CubicHermite,
            );
        }
    }
    if let Some(node) = graph.node_mut(mix) {
        if let Some(SocketValue::StringEnum(blend)) = node.value_mut("blend_type") {
            blend.select("multiply");
        }
        if let Some(SocketValue::Bool(clamp)) = node.value_mut("use_clamp") {
            clamp.set(true);
        }
    }
    if let Some(SocketValue::Float(roughness)) =
        graph.node_mut(glossy).and_then(|n| n.value_mut("roughness"))
    {
        roughness.set(0.125);
    }

    link(&mut graph, noise, "Color", ramp, "Color");
    link(&mut graph, ramp, "Color", mix, "Color1");
    link(&mut graph, mix, "Color", diffuse, "Color");
    link(&mut graph, noise, "Fac", shader_mix, "Fac");
    link(&mut graph, diffuse, "BSDF", shader_mix, "Shader 1");
    link(&mut graph, glossy, "BSDF", shader_mix, "Shader 2");
    link(&mut graph, shader_mix, "Shader", output, "Surface");
    graph
}

#[test]
fn test_material_round_trip() {
    let registry = NodeRegistry::new();
    let graph = material(&registry);
    let loaded = deserialize_graph(&serialize_graph(&graph, &registry), &registry);

    assert_eq!(loaded.node_count(), 7);
    assert_eq!(loaded.connection_count(), 7);
    assert_eq!(describe(&loaded), describe(&graph));
    assert!(loaded.topological_order().is_ok());
}

#[test]
fn test_round_trip_is_idempotent() {
    let registry = NodeRegistry::new();
    let once = deserialize_graph(&serialize_graph(&material(&registry), &registry), &registry);
    let twice = deserialize_graph(&serialize_graph(&once, &registry), &registry);
    assert_eq!(describe(&twice), describe(&once));
}

#[test]
fn test_every_node_type_round_trips() {
    let registry = NodeRegistry::new();
    let mut graph = Graph::new();
    for (i, node_type) in NodeType::ALL.into_iter().enumerate() {
        let node = registry
            .create_node(node_type, [i as f32 * 10.0, -(i as f32)])
            .expect("registered");
        graph.add_node(node);
    }
    let loaded = deserialize_graph(&serialize_graph(&graph, &registry), &registry);
    assert_eq!(loaded.node_count(), NodeType::ALL.len());
    assert_eq!(describe(&loaded), describe(&graph));
}

#[test]
fn test_empty_graph_round_trips() {
    let registry = NodeRegistry::new();
    let text = serialize_graph(&Graph::new(), &registry);
    assert_eq!(text, "nodeshade_graph|v002|section_nodes|section_connections");
    assert!(deserialize_graph(&text, &registry).is_empty());
}

#[test]
fn test_truncated_blob_never_panics() {
    let registry = NodeRegistry::new();
    let text = serialize_graph(&material(&registry), &registry);
    for end in (0..text.len()).filter(|i| text.is_char_boundary(*i)) {
        let graph = deserialize_graph(&text[..end], &registry);
        assert!(graph.node_count() <= 7);
        assert!(graph.topological_order().is_ok());
    }
}

#[test]
fn test_non_finite_move_round_trips() {
    let registry = NodeRegistry::new();
    let mut graph = Graph::new();
    let node = graph.add_node(registry.create_node(NodeType::Value, [7.0, 2.0]).expect("registered"));
    if let Some(n) = graph.node_mut(node) {
        n.set_position([f32::INFINITY, 1e30]);
    }

    let text = serialize_graph(&graph, &registry);
    assert!(!text.contains("inf"));
    let loaded = deserialize_graph(&text, &registry);
    assert_eq!(describe(&loaded), describe(&graph));
    let restored = loaded.nodes().next().expect("one node");
    assert_eq!(restored.position(), [7.0, 1e30]);
}

proptest! {
    #[test]
    fn prop_random_graphs_round_trip(
        nodes in prop::collection::vec(
            (0..NodeType::ALL.len(), -5000.0f32..5000.0, -5000.0f32..5000.0, 0.0f32..1.0),
            1..10,
        ),
        links in prop::collection::vec((any::<usize>(), any::<usize>(), any::<usize>(), any::<usize>()), 0..16),
    ) {
        let registry = NodeRegistry::new();
        let mut graph = Graph::new();
        let mut ids = Vec::new();
        for (index, x, y, tweak) in nodes {
            let mut node = registry
                .create_node(NodeType::ALL[index], [x, y])
                .expect("registered");
            let first_float = node
                .inputs()
                .find(|s| matches!(s.value(), Some(SocketValue::Float(_))))
                .map(|s| s.internal_name.clone());
            if let Some(name) = first_float {
                if let Some(SocketValue::Float(value)) = node.value_mut(&name) {
                    value.set(tweak);
                }
            }
            ids.push(graph.add_node(node));
        }

        for (a, b, output, input) in links {
            let from = ids[a % ids.len()];
            let to = ids[b % ids.len()];
            let sockets = graph.node(from).zip(graph.node(to)).and_then(|(f, t)| {
                let outputs: Vec<_> = f.outputs().map(|s| s.id).collect();
                let inputs: Vec<_> = t.inputs().map(|s| s.id).collect();
                if outputs.is_empty() || inputs.is_empty() {
                    return None;
                }
                Some((outputs[output % outputs.len()], inputs[input % inputs.len()]))
            });
            if let Some((from_socket, to_socket)) = sockets {
                let _ = graph.connect(from, from_socket, to, to_socket);
            }
        }

        let loaded = deserialize_graph(&serialize_graph(&graph, &registry), &registry);
        prop_assert_eq!(describe(&loaded), describe(&graph));
        prop_assert!(!loaded.any_changed());
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in ".*") {
        let registry = NodeRegistry::new();
        let _ = deserialize_graph(&text, &registry);
        let prefixed = format!("nodeshade_graph|v002|section_nodes|{text}");
        let _ = deserialize_graph(&prefixed, &registry);
    }
}

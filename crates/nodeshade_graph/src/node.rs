// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the shader graph.

use crate::output::OutputNode;
use crate::socket::{Socket, SocketDirection, SocketId, SocketType};
use crate::value::SocketValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeCategory {
    /// BSDFs and other closures
    Shader,
    /// Geometry, light path and constant inputs
    Input,
    /// Procedural textures
    Texture,
    /// Color operators
    Color,
    /// Vector operators
    Vector,
    /// Type and space converters
    Converter,
    /// The material output sink
    Output,
}

/// Kind of a node. Fixes the node's socket layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NodeType {
    // Output
    MaterialOutput,

    // Shader
    PrincipledBsdf,
    DiffuseBsdf,
    GlossyBsdf,
    GlassBsdf,
    RefractionBsdf,
    AnisotropicBsdf,
    TranslucentBsdf,
    TransparentBsdf,
    VelvetBsdf,
    ToonBsdf,
    HairBsdf,
    SubsurfaceScattering,
    Emission,
    Holdout,
    MixShader,
    AddShader,
    VolumeAbsorption,
    VolumeScatter,
    PrincipledVolume,

    // Input
    Fresnel,
    LayerWeight,
    LightPath,
    TextureCoordinate,
    Geometry,
    ObjectInfo,
    Value,
    Rgb,

    // Texture
    BrickTexture,
    CheckerTexture,
    GradientTexture,
    MagicTexture,
    MusgraveTexture,
    NoiseTexture,
    VoronoiTexture,
    WaveTexture,

    // Color
    BrightnessContrast,
    Gamma,
    Hsv,
    Invert,
    LightFalloff,
    MixRgb,
    RgbCurves,

    // Vector
    Bump,
    NormalMap,
    VectorTransform,
    VectorCurves,

    // Converter
    Blackbody,
    CombineHsv,
    CombineRgb,
    CombineXyz,
    Math,
    VectorMath,
    RgbToBw,
    SeparateHsv,
    SeparateRgb,
    SeparateXyz,
    Wavelength,
}

impl NodeType {
    /// Every node type, in declaration order
    pub const ALL: [NodeType; 58] = [
        Self::MaterialOutput,
        Self::PrincipledBsdf,
        Self::DiffuseBsdf,
        Self::GlossyBsdf,
        Self::GlassBsdf,
        Self::RefractionBsdf,
        Self::AnisotropicBsdf,
        Self::TranslucentBsdf,
        Self::TransparentBsdf,
        Self::VelvetBsdf,
        Self::ToonBsdf,
        Self::HairBsdf,
        Self::SubsurfaceScattering,
        Self::Emission,
        Self::Holdout,
        Self::MixShader,
        Self::AddShader,
        Self::VolumeAbsorption,
        Self::VolumeScatter,
        Self::PrincipledVolume,
        Self::Fresnel,
        Self::LayerWeight,
        Self::LightPath,
        Self::TextureCoordinate,
        Self::Geometry,
        Self::ObjectInfo,
        Self::Value,
        Self::Rgb,
        Self::BrickTexture,
        Self::CheckerTexture,
        Self::GradientTexture,
        Self::MagicTexture,
        Self::MusgraveTexture,
        Self::NoiseTexture,
        Self::VoronoiTexture,
        Self::WaveTexture,
        Self::BrightnessContrast,
        Self::Gamma,
        Self::Hsv,
        Self::Invert,
        Self::LightFalloff,
        Self::MixRgb,
        Self::RgbCurves,
        Self::Bump,
        Self::NormalMap,
        Self::VectorTransform,
        Self::VectorCurves,
        Self::Blackbody,
        Self::CombineHsv,
        Self::CombineRgb,
        Self::CombineXyz,
        Self::Math,
        Self::VectorMath,
        Self::RgbToBw,
        Self::SeparateHsv,
        Self::SeparateRgb,
        Self::SeparateXyz,
        Self::Wavelength,
    ];
}

/// A node instance in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node type
    pub node_type: NodeType,
    position: [f32; 2],
    sockets: Vec<Socket>,
    changed: bool,
}

impl Node {
    /// Create a node from a prepared socket list.
    ///
    /// Use [`NodeRegistry::create_node`](crate::NodeRegistry::create_node) to
    /// get the socket layout belonging to `node_type`.
    pub fn new(node_type: NodeType, position: [f32; 2], sockets: Vec<Socket>) -> Self {
        Self {
            id: NodeId::new(),
            node_type,
            position: position.map(|v| if v.is_finite() { v } else { 0.0 }),
            sockets,
            changed: true,
        }
    }

    /// Position in world space
    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    /// Move the node. Non-finite coordinates leave that axis where it is.
    pub fn set_position(&mut self, position: [f32; 2]) {
        let next = [
            if position[0].is_finite() { position[0] } else { self.position[0] },
            if position[1].is_finite() { position[1] } else { self.position[1] },
        ];
        if self.position != next {
            self.position = next;
            self.changed = true;
        }
    }

    /// All sockets, inputs and outputs in schema order
    pub fn sockets(&self) -> &[Socket] {
        &self.sockets
    }

    /// Input sockets
    pub fn inputs(&self) -> impl Iterator<Item = &Socket> {
        self.sockets.iter().filter(|s| s.direction == SocketDirection::Input)
    }

    /// Output sockets
    pub fn outputs(&self) -> impl Iterator<Item = &Socket> {
        self.sockets.iter().filter(|s| s.direction == SocketDirection::Output)
    }

    /// Get a socket by ID
    pub fn socket(&self, socket_id: SocketId) -> Option<&Socket> {
        self.sockets.iter().find(|s| s.id == socket_id)
    }

    /// Find a socket by direction and display name
    pub fn socket_by_display_name(
        &self,
        direction: SocketDirection,
        display_name: &str,
    ) -> Option<&Socket> {
        self.sockets
            .iter()
            .find(|s| s.direction == direction && s.display_name == display_name)
    }

    /// Find an input socket by internal name
    pub fn input_by_internal_name(&self, internal_name: &str) -> Option<&Socket> {
        self.inputs().find(|s| s.internal_name == internal_name)
    }

    /// Value of the input with the given internal name
    pub fn value(&self, internal_name: &str) -> Option<&SocketValue> {
        self.input_by_internal_name(internal_name)?.value()
    }

    /// Mutable value of the input with the given internal name.
    ///
    /// Marks the node as changed when the input holds a value.
    pub fn value_mut(&mut self, internal_name: &str) -> Option<&mut SocketValue> {
        let socket = self
            .sockets
            .iter_mut()
            .find(|s| s.direction == SocketDirection::Input && s.internal_name == internal_name)?;
        let value = socket.value_mut()?;
        self.changed = true;
        Some(value)
    }

    /// Whether the node was edited since the last checkpoint
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Flag the node as edited
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Clear the edited flag
    pub fn mark_unchanged(&mut self) {
        self.changed = false;
    }

    /// Write type, position and every input value into `output`.
    ///
    /// Closure inputs and outputs carry no value and are skipped.
    pub fn update_output_node(&self, output: &mut OutputNode) {
        output.node_type = self.node_type;
        output.position = self.position;

        for socket in self.inputs() {
            if socket.socket_type == SocketType::Closure {
                continue;
            }
            let Some(value) = socket.value() else {
                continue;
            };
            let key = socket.internal_name.clone();
            match value {
                SocketValue::Float(v) => {
                    output.float_values.insert(key, v.get());
                }
                SocketValue::Float3(v) => {
                    output.float3_values.insert(key, v.get());
                }
                SocketValue::Color(v) => {
                    output.float3_values.insert(key, v.get());
                }
                SocketValue::StringEnum(v) => {
                    output.string_values.insert(key, v.selected().internal.clone());
                }
                SocketValue::Int(v) => {
                    output.int_values.insert(key, v.get());
                }
                SocketValue::Bool(v) => {
                    output.bool_values.insert(key, v.get());
                }
                SocketValue::Curve(v) => {
                    output.curve_values.insert(key, v.clone());
                }
            }
        }
    }
}

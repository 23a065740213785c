// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in node catalog.
//!
//! Each node type is described by a [`NodeSchema`]: its wire code, a display
//! name, a category and the ordered list of sockets it owns. A node's socket
//! layout is entirely determined by this table; the registry instantiates it
//! and the serializer reads values back into it.

use crate::curve::CurveValue;
use crate::node::{NodeCategory, NodeType};
use crate::socket::{Socket, SocketDirection, SocketType};
use crate::value::{
    BoolValue, ColorValue, Float3Value, FloatValue, IntValue, SocketValue, StringEnumPair,
    StringEnumValue,
};

/// Compiled-in default of a socket
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SocketDefault {
    /// No value; the socket is driven only by a connection
    None,
    /// Bounded float
    Float {
        /// Initial value
        value: f32,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },
    /// Bounded integer
    Int {
        /// Initial value
        value: i32,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
    /// Vector with a shared component range
    Vector {
        /// Initial value
        value: [f32; 3],
        /// Lower bound of each component
        min: f32,
        /// Upper bound of each component
        max: f32,
    },
    /// RGB color
    Color([f32; 3]),
    /// String enum; options are `(display, internal)` pairs
    Enum {
        /// Legal options
        options: &'static [(&'static str, &'static str)],
        /// Internal name of the initial selection
        selected: &'static str,
    },
    /// Toggle
    Bool(bool),
    /// Identity curve
    Curve,
}

impl SocketDefault {
    /// Build the runtime value, if the socket carries one
    pub fn to_value(&self) -> Option<SocketValue> {
        match *self {
            Self::None => None,
            Self::Float { value, min, max } => Some(SocketValue::Float(FloatValue::new(value, min, max))),
            Self::Int { value, min, max } => Some(SocketValue::Int(IntValue::new(value, min, max))),
            Self::Vector { value, min, max } => {
                Some(SocketValue::Float3(Float3Value::new(value, min, max)))
            }
            Self::Color(value) => Some(SocketValue::Color(ColorValue::new(value))),
            Self::Enum { options, selected } => {
                let options = options
                    .iter()
                    .map(|(display, internal)| StringEnumPair::new(*display, *internal))
                    .collect();
                Some(SocketValue::StringEnum(StringEnumValue::new(options, selected)))
            }
            Self::Bool(value) => Some(SocketValue::Bool(BoolValue::new(value))),
            Self::Curve => Some(SocketValue::Curve(CurveValue::default())),
        }
    }
}

/// One socket in a node schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketSpec {
    /// Label shown in the UI and used for connection endpoints
    pub display_name: &'static str,
    /// Key used for value parameters
    pub internal_name: &'static str,
    /// Input or output
    pub direction: SocketDirection,
    /// Data type
    pub socket_type: SocketType,
    /// Initial value
    pub default: SocketDefault,
}

impl SocketSpec {
    /// Instantiate a fresh socket
    pub fn instantiate(&self) -> Socket {
        let socket = match self.direction {
            SocketDirection::Input => {
                Socket::input(self.display_name, self.internal_name, self.socket_type)
            }
            SocketDirection::Output => {
                Socket::output(self.display_name, self.internal_name, self.socket_type)
            }
        };
        match self.default.to_value() {
            Some(value) => socket.with_value(value),
            None => socket,
        }
    }
}

/// Declarative description of one node type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSchema {
    /// Node type described
    pub node_type: NodeType,
    /// Short code written to the wire format
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
    /// Category
    pub category: NodeCategory,
    /// Sockets in display order
    pub sockets: &'static [SocketSpec],
}

impl NodeSchema {
    /// Instantiate the socket list of a new node
    pub fn instantiate_sockets(&self) -> Vec<Socket> {
        self.sockets.iter().map(SocketSpec::instantiate).collect()
    }
}

const fn spec(
    display_name: &'static str,
    internal_name: &'static str,
    direction: SocketDirection,
    socket_type: SocketType,
    default: SocketDefault,
) -> SocketSpec {
    SocketSpec {
        display_name,
        internal_name,
        direction,
        socket_type,
        default,
    }
}

const fn float_in(name: &'static str, internal: &'static str, value: f32, min: f32, max: f32) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Float, SocketDefault::Float { value, min, max })
}

const fn int_in(name: &'static str, internal: &'static str, value: i32, min: i32, max: i32) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Int, SocketDefault::Int { value, min, max })
}

const fn color_in(name: &'static str, internal: &'static str, value: [f32; 3]) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Color, SocketDefault::Color(value))
}

const fn vector_in(name: &'static str, internal: &'static str, value: [f32; 3], min: f32, max: f32) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Vector, SocketDefault::Vector { value, min, max })
}

/// Vector input that only receives links
const fn vector_link(name: &'static str, internal: &'static str) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Vector, SocketDefault::None)
}

const fn normal_in(name: &'static str, internal: &'static str) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Normal, SocketDefault::None)
}

const fn closure_in(name: &'static str, internal: &'static str) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Closure, SocketDefault::None)
}

const fn enum_in(
    name: &'static str,
    internal: &'static str,
    options: &'static [(&'static str, &'static str)],
    selected: &'static str,
) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::StringEnum, SocketDefault::Enum { options, selected })
}

const fn bool_in(name: &'static str, internal: &'static str, value: bool) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Boolean, SocketDefault::Bool(value))
}

const fn curve_in(name: &'static str, internal: &'static str) -> SocketSpec {
    spec(name, internal, SocketDirection::Input, SocketType::Curve, SocketDefault::Curve)
}

const fn out(name: &'static str, internal: &'static str, socket_type: SocketType) -> SocketSpec {
    spec(name, internal, SocketDirection::Output, socket_type, SocketDefault::None)
}

const BIG: f32 = 1.0e6;
const GREY: [f32; 3] = [0.8, 0.8, 0.8];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

const GLOSSY_DISTRIBUTIONS: &[(&str, &str)] = &[
    ("Sharp", "sharp"),
    ("Beckmann", "beckmann"),
    ("GGX", "ggx"),
    ("Ashikhmin-Shirley", "ashikhmin_shirley"),
    ("Multiscatter GGX", "multiscatter_ggx"),
];

const GLASS_DISTRIBUTIONS: &[(&str, &str)] = &[
    ("Sharp", "sharp"),
    ("Beckmann", "beckmann"),
    ("GGX", "ggx"),
    ("Multiscatter GGX", "multiscatter_ggx"),
];

const TRANSFORM_SPACES: &[(&str, &str)] = &[
    ("World", "world"),
    ("Object", "object"),
    ("Camera", "camera"),
];

/// Every built-in node type
pub static CATALOG: &[NodeSchema] = &[
    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::MaterialOutput,
        code: "material_output",
        name: "Material Output",
        category: NodeCategory::Output,
        sockets: &[
            closure_in("Surface", "surface"),
            closure_in("Volume", "volume"),
            normal_in("Displacement", "displacement"),
        ],
    },
    // ------------------------------------------------------------------------
    // Shader
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::PrincipledBsdf,
        code: "principled_bsdf",
        name: "Principled BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Distribution", "distribution", &[("Multiscatter GGX", "multiscatter_ggx"), ("GGX", "ggx")], "multiscatter_ggx"),
            enum_in("Subsurface Method", "subsurface_method", &[("Christensen-Burley", "burley"), ("Random Walk", "random_walk")], "burley"),
            color_in("Base Color", "base_color", GREY),
            float_in("Subsurface", "subsurface", 0.0, 0.0, 1.0),
            vector_in("Subsurface Radius", "subsurface_radius", [1.0, 0.2, 0.1], 0.0, 100.0),
            color_in("Subsurface Color", "subsurface_color", [0.7, 0.1, 0.1]),
            float_in("Metallic", "metallic", 0.0, 0.0, 1.0),
            float_in("Specular", "specular", 0.5, 0.0, 1.0),
            float_in("Specular Tint", "specular_tint", 0.0, 0.0, 1.0),
            float_in("Roughness", "roughness", 0.5, 0.0, 1.0),
            float_in("Anisotropic", "anisotropic", 0.0, 0.0, 1.0),
            float_in("Anisotropic Rotation", "anisotropic_rotation", 0.0, 0.0, 1.0),
            float_in("Sheen", "sheen", 0.0, 0.0, 1.0),
            float_in("Sheen Tint", "sheen_tint", 0.5, 0.0, 1.0),
            float_in("Clearcoat", "clearcoat", 0.0, 0.0, 1.0),
            float_in("Clearcoat Roughness", "clearcoat_roughness", 0.03, 0.0, 1.0),
            float_in("IOR", "ior", 1.45, 0.0, 100.0),
            float_in("Transmission", "transmission", 0.0, 0.0, 1.0),
            float_in("Transmission Roughness", "transmission_roughness", 0.0, 0.0, 1.0),
            color_in("Emission", "emission", [0.0, 0.0, 0.0]),
            float_in("Alpha", "alpha", 1.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            normal_in("Clearcoat Normal", "clearcoat_normal"),
            normal_in("Tangent", "tangent"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::DiffuseBsdf,
        code: "diffuse_bsdf",
        name: "Diffuse BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", GREY),
            float_in("Roughness", "roughness", 0.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::GlossyBsdf,
        code: "glossy_bsdf",
        name: "Glossy BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Distribution", "distribution", GLOSSY_DISTRIBUTIONS, "ggx"),
            color_in("Color", "color", GREY),
            float_in("Roughness", "roughness", 0.5, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::GlassBsdf,
        code: "glass_bsdf",
        name: "Glass BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Distribution", "distribution", GLASS_DISTRIBUTIONS, "ggx"),
            color_in("Color", "color", WHITE),
            float_in("Roughness", "roughness", 0.0, 0.0, 1.0),
            float_in("IOR", "ior", 1.45, 0.0, 100.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::RefractionBsdf,
        code: "refraction_bsdf",
        name: "Refraction BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Distribution", "distribution", &[("Sharp", "sharp"), ("Beckmann", "beckmann"), ("GGX", "ggx")], "ggx"),
            color_in("Color", "color", WHITE),
            float_in("Roughness", "roughness", 0.0, 0.0, 1.0),
            float_in("IOR", "ior", 1.45, 0.0, 100.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::AnisotropicBsdf,
        code: "anisotropic_bsdf",
        name: "Anisotropic BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in(
                "Distribution",
                "distribution",
                &[("Beckmann", "beckmann"), ("GGX", "ggx"), ("Multiscatter GGX", "multiscatter_ggx"), ("Ashikhmin-Shirley", "ashikhmin_shirley")],
                "ggx",
            ),
            color_in("Color", "color", GREY),
            float_in("Roughness", "roughness", 0.5, 0.0, 1.0),
            float_in("Anisotropy", "anisotropy", 0.5, -1.0, 1.0),
            float_in("Rotation", "rotation", 0.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            normal_in("Tangent", "tangent"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::TranslucentBsdf,
        code: "translucent_bsdf",
        name: "Translucent BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", GREY),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::TransparentBsdf,
        code: "transparent_bsdf",
        name: "Transparent BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", WHITE),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::VelvetBsdf,
        code: "velvet_bsdf",
        name: "Velvet BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", GREY),
            float_in("Sigma", "sigma", 1.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::ToonBsdf,
        code: "toon_bsdf",
        name: "Toon BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Component", "component", &[("Diffuse", "diffuse"), ("Glossy", "glossy")], "diffuse"),
            color_in("Color", "color", GREY),
            float_in("Size", "size", 0.5, 0.0, 1.0),
            float_in("Smooth", "smooth", 0.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::HairBsdf,
        code: "hair_bsdf",
        name: "Hair BSDF",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in("Component", "component", &[("Reflection", "reflection"), ("Transmission", "transmission")], "reflection"),
            color_in("Color", "color", GREY),
            float_in("Offset", "offset", 0.0, -90.0, 90.0),
            float_in("RoughnessU", "roughness_u", 0.1, 0.0, 1.0),
            float_in("RoughnessV", "roughness_v", 1.0, 0.0, 1.0),
            normal_in("Tangent", "tangent"),
            out("BSDF", "bsdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::SubsurfaceScattering,
        code: "subsurface_scattering",
        name: "Subsurface Scattering",
        category: NodeCategory::Shader,
        sockets: &[
            enum_in(
                "Falloff",
                "falloff",
                &[("Cubic", "cubic"), ("Gaussian", "gaussian"), ("Christensen-Burley", "burley"), ("Random Walk", "random_walk")],
                "burley",
            ),
            color_in("Color", "color", GREY),
            float_in("Scale", "scale", 1.0, 0.0, 1000.0),
            vector_in("Radius", "radius", [1.0, 1.0, 1.0], 0.0, 1000.0),
            float_in("Texture Blur", "texture_blur", 0.0, 0.0, 1.0),
            float_in("Sharpness", "sharpness", 0.0, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("BSSRDF", "bssrdf", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::Emission,
        code: "emission",
        name: "Emission",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", WHITE),
            float_in("Strength", "strength", 1.0, 0.0, BIG),
            out("Emission", "emission", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::Holdout,
        code: "holdout",
        name: "Holdout",
        category: NodeCategory::Shader,
        sockets: &[out("Holdout", "holdout", SocketType::Closure)],
    },
    NodeSchema {
        node_type: NodeType::MixShader,
        code: "mix_shader",
        name: "Mix Shader",
        category: NodeCategory::Shader,
        sockets: &[
            float_in("Fac", "fac", 0.5, 0.0, 1.0),
            closure_in("Shader 1", "closure1"),
            closure_in("Shader 2", "closure2"),
            out("Shader", "closure", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::AddShader,
        code: "add_shader",
        name: "Add Shader",
        category: NodeCategory::Shader,
        sockets: &[
            closure_in("Shader 1", "closure1"),
            closure_in("Shader 2", "closure2"),
            out("Shader", "closure", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::VolumeAbsorption,
        code: "volume_absorption",
        name: "Volume Absorption",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", GREY),
            float_in("Density", "density", 1.0, 0.0, BIG),
            out("Volume", "volume", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::VolumeScatter,
        code: "volume_scatter",
        name: "Volume Scatter",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", GREY),
            float_in("Density", "density", 1.0, 0.0, BIG),
            float_in("Anisotropy", "anisotropy", 0.0, -1.0, 1.0),
            out("Volume", "volume", SocketType::Closure),
        ],
    },
    NodeSchema {
        node_type: NodeType::PrincipledVolume,
        code: "principled_volume",
        name: "Principled Volume",
        category: NodeCategory::Shader,
        sockets: &[
            color_in("Color", "color", [0.5, 0.5, 0.5]),
            float_in("Density", "density", 1.0, 0.0, BIG),
            float_in("Anisotropy", "anisotropy", 0.0, -1.0, 1.0),
            color_in("Absorption Color", "absorption_color", [0.0, 0.0, 0.0]),
            float_in("Emission Strength", "emission_strength", 0.0, 0.0, BIG),
            color_in("Emission Color", "emission_color", WHITE),
            float_in("Blackbody Intensity", "blackbody_intensity", 0.0, 0.0, 1.0),
            color_in("Blackbody Tint", "blackbody_tint", WHITE),
            float_in("Temperature", "temperature", 1000.0, 0.0, 8000.0),
            out("Volume", "volume", SocketType::Closure),
        ],
    },
    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::Fresnel,
        code: "fresnel",
        name: "Fresnel",
        category: NodeCategory::Input,
        sockets: &[
            float_in("IOR", "ior", 1.45, 0.0, 100.0),
            normal_in("Normal", "normal"),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::LayerWeight,
        code: "layer_weight",
        name: "Layer Weight",
        category: NodeCategory::Input,
        sockets: &[
            float_in("Blend", "blend", 0.5, 0.0, 1.0),
            normal_in("Normal", "normal"),
            out("Fresnel", "fresnel", SocketType::Float),
            out("Facing", "facing", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::LightPath,
        code: "light_path",
        name: "Light Path",
        category: NodeCategory::Input,
        sockets: &[
            out("Is Camera Ray", "is_camera_ray", SocketType::Float),
            out("Is Shadow Ray", "is_shadow_ray", SocketType::Float),
            out("Is Diffuse Ray", "is_diffuse_ray", SocketType::Float),
            out("Is Glossy Ray", "is_glossy_ray", SocketType::Float),
            out("Is Singular Ray", "is_singular_ray", SocketType::Float),
            out("Is Reflection Ray", "is_reflection_ray", SocketType::Float),
            out("Is Transmission Ray", "is_transmission_ray", SocketType::Float),
            out("Ray Length", "ray_length", SocketType::Float),
            out("Ray Depth", "ray_depth", SocketType::Float),
            out("Transparent Depth", "transparent_depth", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::TextureCoordinate,
        code: "texture_coordinate",
        name: "Texture Coordinate",
        category: NodeCategory::Input,
        sockets: &[
            bool_in("From Dupli", "from_dupli", false),
            out("Generated", "generated", SocketType::Vector),
            out("Normal", "normal", SocketType::Normal),
            out("UV", "uv", SocketType::Vector),
            out("Object", "object", SocketType::Vector),
            out("Camera", "camera", SocketType::Vector),
            out("Window", "window", SocketType::Vector),
            out("Reflection", "reflection", SocketType::Vector),
        ],
    },
    NodeSchema {
        node_type: NodeType::Geometry,
        code: "geometry",
        name: "Geometry",
        category: NodeCategory::Input,
        sockets: &[
            out("Position", "position", SocketType::Vector),
            out("Normal", "normal", SocketType::Normal),
            out("Tangent", "tangent", SocketType::Normal),
            out("True Normal", "true_normal", SocketType::Normal),
            out("Incoming", "incoming", SocketType::Vector),
            out("Parametric", "parametric", SocketType::Vector),
            out("Backfacing", "backfacing", SocketType::Float),
            out("Pointiness", "pointiness", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::ObjectInfo,
        code: "object_info",
        name: "Object Info",
        category: NodeCategory::Input,
        sockets: &[
            out("Location", "location", SocketType::Vector),
            out("Color", "color", SocketType::Color),
            out("Object Index", "object_index", SocketType::Float),
            out("Material Index", "material_index", SocketType::Float),
            out("Random", "random", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::Value,
        code: "value",
        name: "Value",
        category: NodeCategory::Input,
        sockets: &[
            float_in("Value", "value", 0.0, -BIG, BIG),
            out("Value", "value", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::Rgb,
        code: "rgb",
        name: "RGB",
        category: NodeCategory::Input,
        sockets: &[
            color_in("Color", "color", [0.5, 0.5, 0.5]),
            out("Color", "color", SocketType::Color),
        ],
    },
    // ------------------------------------------------------------------------
    // Texture
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::BrickTexture,
        code: "brick_texture",
        name: "Brick Texture",
        category: NodeCategory::Texture,
        sockets: &[
            float_in("Offset", "offset", 0.5, 0.0, 1.0),
            int_in("Frequency", "offset_frequency", 2, 1, 99),
            float_in("Squash", "squash", 1.0, 0.0, 99.0),
            int_in("Squash Frequency", "squash_frequency", 2, 1, 99),
            vector_link("Vector", "vector"),
            color_in("Color1", "color1", GREY),
            color_in("Color2", "color2", [0.2, 0.2, 0.2]),
            color_in("Mortar", "mortar", [0.0, 0.0, 0.0]),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            float_in("Mortar Size", "mortar_size", 0.02, 0.0, 0.125),
            float_in("Mortar Smooth", "mortar_smooth", 0.0, 0.0, 1.0),
            float_in("Bias", "bias", 0.0, -1.0, 1.0),
            float_in("Brick Width", "brick_width", 0.5, 0.01, 100.0),
            float_in("Row Height", "row_height", 0.25, 0.01, 100.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::CheckerTexture,
        code: "checker_texture",
        name: "Checker Texture",
        category: NodeCategory::Texture,
        sockets: &[
            vector_link("Vector", "vector"),
            color_in("Color1", "color1", GREY),
            color_in("Color2", "color2", [0.2, 0.2, 0.2]),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::GradientTexture,
        code: "gradient_texture",
        name: "Gradient Texture",
        category: NodeCategory::Texture,
        sockets: &[
            enum_in(
                "Type",
                "gradient_type",
                &[
                    ("Linear", "linear"),
                    ("Quadratic", "quadratic"),
                    ("Easing", "easing"),
                    ("Diagonal", "diagonal"),
                    ("Radial", "radial"),
                    ("Quadratic Sphere", "quadratic_sphere"),
                    ("Spherical", "spherical"),
                ],
                "linear",
            ),
            vector_link("Vector", "vector"),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::MagicTexture,
        code: "magic_texture",
        name: "Magic Texture",
        category: NodeCategory::Texture,
        sockets: &[
            int_in("Depth", "depth", 2, 0, 10),
            vector_link("Vector", "vector"),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            float_in("Distortion", "distortion", 1.0, -1000.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::MusgraveTexture,
        code: "musgrave_texture",
        name: "Musgrave Texture",
        category: NodeCategory::Texture,
        sockets: &[
            enum_in(
                "Type",
                "musgrave_type",
                &[
                    ("Multifractal", "multifractal"),
                    ("fBM", "fbm"),
                    ("Hybrid Multifractal", "hybrid_multifractal"),
                    ("Ridged Multifractal", "ridged_multifractal"),
                    ("Hetero Terrain", "hetero_terrain"),
                ],
                "fbm",
            ),
            vector_link("Vector", "vector"),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            float_in("Detail", "detail", 2.0, 0.0, 16.0),
            float_in("Dimension", "dimension", 2.0, 0.0, 1000.0),
            float_in("Lacunarity", "lacunarity", 1.0, 0.0, 1000.0),
            float_in("Offset", "offset", 0.0, -1000.0, 1000.0),
            float_in("Gain", "gain", 1.0, 0.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::NoiseTexture,
        code: "noise_texture",
        name: "Noise Texture",
        category: NodeCategory::Texture,
        sockets: &[
            vector_link("Vector", "vector"),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            float_in("Detail", "detail", 2.0, 0.0, 16.0),
            float_in("Distortion", "distortion", 0.0, -1000.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::VoronoiTexture,
        code: "voronoi_texture",
        name: "Voronoi Texture",
        category: NodeCategory::Texture,
        sockets: &[
            enum_in("Coloring", "coloring", &[("Intensity", "intensity"), ("Cells", "cells")], "intensity"),
            vector_link("Vector", "vector"),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::WaveTexture,
        code: "wave_texture",
        name: "Wave Texture",
        category: NodeCategory::Texture,
        sockets: &[
            enum_in("Type", "wave_type", &[("Bands", "bands"), ("Rings", "rings")], "bands"),
            enum_in("Profile", "wave_profile", &[("Sine", "sine"), ("Saw", "saw")], "sine"),
            vector_link("Vector", "vector"),
            float_in("Scale", "scale", 5.0, -1000.0, 1000.0),
            float_in("Distortion", "distortion", 0.0, -1000.0, 1000.0),
            float_in("Detail", "detail", 2.0, 0.0, 16.0),
            float_in("Detail Scale", "detail_scale", 1.0, -1000.0, 1000.0),
            out("Color", "color", SocketType::Color),
            out("Fac", "fac", SocketType::Float),
        ],
    },
    // ------------------------------------------------------------------------
    // Color
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::BrightnessContrast,
        code: "brightness_contrast",
        name: "Brightness/Contrast",
        category: NodeCategory::Color,
        sockets: &[
            color_in("Color", "color", WHITE),
            float_in("Bright", "bright", 0.0, -100.0, 100.0),
            float_in("Contrast", "contrast", 0.0, -100.0, 100.0),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::Gamma,
        code: "gamma",
        name: "Gamma",
        category: NodeCategory::Color,
        sockets: &[
            color_in("Color", "color", WHITE),
            float_in("Gamma", "gamma", 1.0, 0.001, 10.0),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::Hsv,
        code: "hsv",
        name: "Hue/Saturation/Value",
        category: NodeCategory::Color,
        sockets: &[
            float_in("Hue", "hue", 0.5, 0.0, 1.0),
            float_in("Saturation", "saturation", 1.0, 0.0, 2.0),
            float_in("Value", "value", 1.0, 0.0, 2.0),
            float_in("Fac", "fac", 1.0, 0.0, 1.0),
            color_in("Color", "color", GREY),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::Invert,
        code: "invert",
        name: "Invert",
        category: NodeCategory::Color,
        sockets: &[
            float_in("Fac", "fac", 1.0, 0.0, 1.0),
            color_in("Color", "color", [0.0, 0.0, 0.0]),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::LightFalloff,
        code: "light_falloff",
        name: "Light Falloff",
        category: NodeCategory::Color,
        sockets: &[
            float_in("Strength", "strength", 100.0, 0.0, BIG),
            float_in("Smooth", "smooth", 0.0, 0.0, 1000.0),
            out("Quadratic", "quadratic", SocketType::Float),
            out("Linear", "linear", SocketType::Float),
            out("Constant", "constant", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::MixRgb,
        code: "mix_rgb",
        name: "Mix RGB",
        category: NodeCategory::Color,
        sockets: &[
            enum_in(
                "Type",
                "blend_type",
                &[
                    ("Mix", "mix"),
                    ("Add", "add"),
                    ("Multiply", "multiply"),
                    ("Subtract", "subtract"),
                    ("Screen", "screen"),
                    ("Divide", "divide"),
                    ("Difference", "difference"),
                    ("Darken", "darken"),
                    ("Lighten", "lighten"),
                    ("Overlay", "overlay"),
                    ("Dodge", "dodge"),
                    ("Burn", "burn"),
                    ("Hue", "hue"),
                    ("Saturation", "saturation"),
                    ("Value", "value"),
                    ("Color", "color"),
                    ("Soft Light", "soft_light"),
                    ("Linear Light", "linear_light"),
                ],
                "mix",
            ),
            bool_in("Clamp", "use_clamp", false),
            float_in("Fac", "fac", 0.5, 0.0, 1.0),
            color_in("Color1", "color1", [0.5, 0.5, 0.5]),
            color_in("Color2", "color2", [0.5, 0.5, 0.5]),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::RgbCurves,
        code: "rgb_curves",
        name: "RGB Curves",
        category: NodeCategory::Color,
        sockets: &[
            curve_in("C", "curve_c"),
            curve_in("R", "curve_r"),
            curve_in("G", "curve_g"),
            curve_in("B", "curve_b"),
            float_in("Fac", "fac", 1.0, 0.0, 1.0),
            color_in("Color", "color", WHITE),
            out("Color", "color", SocketType::Color),
        ],
    },
    // ------------------------------------------------------------------------
    // Vector
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::Bump,
        code: "bump",
        name: "Bump",
        category: NodeCategory::Vector,
        sockets: &[
            bool_in("Invert", "invert", false),
            float_in("Strength", "strength", 1.0, 0.0, 1.0),
            float_in("Distance", "distance", 0.1, 0.0, 1000.0),
            float_in("Height", "height", 1.0, -1000.0, 1000.0),
            normal_in("Normal", "normal"),
            out("Normal", "normal", SocketType::Normal),
        ],
    },
    NodeSchema {
        node_type: NodeType::NormalMap,
        code: "normal_map",
        name: "Normal Map",
        category: NodeCategory::Vector,
        sockets: &[
            enum_in("Space", "space", &[("Tangent", "tangent"), ("Object", "object"), ("World", "world")], "tangent"),
            float_in("Strength", "strength", 1.0, 0.0, 10.0),
            color_in("Color", "color", [0.5, 0.5, 1.0]),
            out("Normal", "normal", SocketType::Normal),
        ],
    },
    NodeSchema {
        node_type: NodeType::VectorTransform,
        code: "vector_transform",
        name: "Vector Transform",
        category: NodeCategory::Vector,
        sockets: &[
            enum_in("Type", "transform_type", &[("Point", "point"), ("Vector", "vector"), ("Normal", "normal")], "vector"),
            enum_in("Convert From", "convert_from", TRANSFORM_SPACES, "world"),
            enum_in("Convert To", "convert_to", TRANSFORM_SPACES, "object"),
            vector_in("Vector", "vector", [0.5, 0.5, 0.5], -BIG, BIG),
            out("Vector", "vector", SocketType::Vector),
        ],
    },
    NodeSchema {
        node_type: NodeType::VectorCurves,
        code: "vector_curves",
        name: "Vector Curves",
        category: NodeCategory::Vector,
        sockets: &[
            curve_in("X", "curve_x"),
            curve_in("Y", "curve_y"),
            curve_in("Z", "curve_z"),
            float_in("Fac", "fac", 1.0, 0.0, 1.0),
            vector_link("Vector", "vector"),
            out("Vector", "vector", SocketType::Vector),
        ],
    },
    // ------------------------------------------------------------------------
    // Converter
    // ------------------------------------------------------------------------
    NodeSchema {
        node_type: NodeType::Blackbody,
        code: "blackbody",
        name: "Blackbody",
        category: NodeCategory::Converter,
        sockets: &[
            float_in("Temperature", "temperature", 1500.0, 800.0, 12000.0),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::CombineHsv,
        code: "combine_hsv",
        name: "Combine HSV",
        category: NodeCategory::Converter,
        sockets: &[
            float_in("H", "h", 0.0, 0.0, 1.0),
            float_in("S", "s", 0.0, 0.0, 1.0),
            float_in("V", "v", 0.0, 0.0, 1.0),
            out("Color", "color", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::CombineRgb,
        code: "combine_rgb",
        name: "Combine RGB",
        category: NodeCategory::Converter,
        sockets: &[
            float_in("R", "r", 0.0, 0.0, 1.0),
            float_in("G", "g", 0.0, 0.0, 1.0),
            float_in("B", "b", 0.0, 0.0, 1.0),
            out("Image", "image", SocketType::Color),
        ],
    },
    NodeSchema {
        node_type: NodeType::CombineXyz,
        code: "combine_xyz",
        name: "Combine XYZ",
        category: NodeCategory::Converter,
        sockets: &[
            float_in("X", "x", 0.0, -BIG, BIG),
            float_in("Y", "y", 0.0, -BIG, BIG),
            float_in("Z", "z", 0.0, -BIG, BIG),
            out("Vector", "vector", SocketType::Vector),
        ],
    },
    NodeSchema {
        node_type: NodeType::Math,
        code: "math",
        name: "Math",
        category: NodeCategory::Converter,
        sockets: &[
            enum_in(
                "Operation",
                "operation",
                &[
                    ("Add", "add"),
                    ("Subtract", "subtract"),
                    ("Multiply", "multiply"),
                    ("Divide", "divide"),
                    ("Power", "power"),
                    ("Logarithm", "logarithm"),
                    ("Square Root", "sqrt"),
                    ("Absolute", "absolute"),
                    ("Minimum", "minimum"),
                    ("Maximum", "maximum"),
                    ("Less Than", "less_than"),
                    ("Greater Than", "greater_than"),
                    ("Modulo", "modulo"),
                    ("Round", "round"),
                    ("Floor", "floor"),
                    ("Ceil", "ceil"),
                    ("Sine", "sine"),
                    ("Cosine", "cosine"),
                    ("Tangent", "tangent"),
                    ("Arcsine", "arcsine"),
                    ("Arccosine", "arccosine"),
                    ("Arctangent", "arctangent"),
                    ("Arctan2", "arctan2"),
                ],
                "add",
            ),
            bool_in("Clamp", "use_clamp", false),
            float_in("Value1", "value1", 0.5, -BIG, BIG),
            float_in("Value2", "value2", 0.5, -BIG, BIG),
            out("Value", "value", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::VectorMath,
        code: "vector_math",
        name: "Vector Math",
        category: NodeCategory::Converter,
        sockets: &[
            enum_in(
                "Operation",
                "operation",
                &[
                    ("Add", "add"),
                    ("Subtract", "subtract"),
                    ("Average", "average"),
                    ("Dot Product", "dot_product"),
                    ("Cross Product", "cross_product"),
                    ("Normalize", "normalize"),
                ],
                "add",
            ),
            vector_in("Vector1", "vector1", [0.0, 0.0, 0.0], -BIG, BIG),
            vector_in("Vector2", "vector2", [0.0, 0.0, 0.0], -BIG, BIG),
            out("Vector", "vector", SocketType::Vector),
            out("Value", "value", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::RgbToBw,
        code: "rgb_to_bw",
        name: "RGB to BW",
        category: NodeCategory::Converter,
        sockets: &[
            color_in("Color", "color", [0.5, 0.5, 0.5]),
            out("Val", "val", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::SeparateHsv,
        code: "separate_hsv",
        name: "Separate HSV",
        category: NodeCategory::Converter,
        sockets: &[
            color_in("Color", "color", GREY),
            out("H", "h", SocketType::Float),
            out("S", "s", SocketType::Float),
            out("V", "v", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::SeparateRgb,
        code: "separate_rgb",
        name: "Separate RGB",
        category: NodeCategory::Converter,
        sockets: &[
            color_in("Image", "image", GREY),
            out("R", "r", SocketType::Float),
            out("G", "g", SocketType::Float),
            out("B", "b", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::SeparateXyz,
        code: "separate_xyz",
        name: "Separate XYZ",
        category: NodeCategory::Converter,
        sockets: &[
            vector_in("Vector", "vector", [0.0, 0.0, 0.0], -BIG, BIG),
            out("X", "x", SocketType::Float),
            out("Y", "y", SocketType::Float),
            out("Z", "z", SocketType::Float),
        ],
    },
    NodeSchema {
        node_type: NodeType::Wavelength,
        code: "wavelength",
        name: "Wavelength",
        category: NodeCategory::Converter,
        sockets: &[
            float_in("Wavelength", "wavelength", 500.0, 380.0, 780.0),
            out("Color", "color", SocketType::Color),
        ],
    },
];

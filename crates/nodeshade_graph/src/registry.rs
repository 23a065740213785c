// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node registry: the type <-> code mapping and the node factory.

use crate::catalog::{NodeSchema, CATALOG};
use crate::node::{Node, NodeCategory, NodeType};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Error raised while building a registry from schemas
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two schemas share a wire code
    #[error("Duplicate node code: {0}")]
    DuplicateCode(&'static str),

    /// Two schemas describe the same node type
    #[error("Duplicate node type: {0:?}")]
    DuplicateType(NodeType),

    /// A node type has no schema
    #[error("Node type has no schema: {0:?}")]
    MissingType(NodeType),

    /// The two lookup maps disagree in size
    #[error("Registry maps out of sync: {types} types, {codes} codes")]
    CardinalityMismatch {
        /// Entries in the type -> code map
        types: usize,
        /// Entries in the code -> type map
        codes: usize,
    },
}

/// Registry of available node types.
///
/// Built once at startup and passed by reference to whatever needs to
/// resolve or construct nodes.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    schemas: IndexMap<NodeType, &'static NodeSchema>,
    codes: HashMap<&'static str, NodeType>,
}

impl NodeRegistry {
    /// Create the registry holding every built-in node type.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalog is inconsistent (a duplicate code or
    /// type, or a node type without a schema). That is a programming error.
    pub fn new() -> Self {
        match Self::builtin() {
            Ok(registry) => registry,
            Err(err) => panic!("built-in node catalog is inconsistent: {err}"),
        }
    }

    /// Build the built-in registry, reporting catalog inconsistencies
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = Self::from_schemas(CATALOG)?;
        if let Some(missing) = NodeType::ALL.iter().find(|t| !registry.schemas.contains_key(*t)) {
            return Err(RegistryError::MissingType(*missing));
        }
        Ok(registry)
    }

    /// Build a registry from an arbitrary schema table
    pub fn from_schemas(schemas: &'static [NodeSchema]) -> Result<Self, RegistryError> {
        let mut registry = Self {
            schemas: IndexMap::with_capacity(schemas.len()),
            codes: HashMap::with_capacity(schemas.len()),
        };
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    fn register(&mut self, schema: &'static NodeSchema) -> Result<(), RegistryError> {
        if self.schemas.contains_key(&schema.node_type) {
            return Err(RegistryError::DuplicateType(schema.node_type));
        }
        if self.codes.contains_key(schema.code) {
            return Err(RegistryError::DuplicateCode(schema.code));
        }
        self.schemas.insert(schema.node_type, schema);
        self.codes.insert(schema.code, schema.node_type);

        if self.schemas.len() != self.codes.len() {
            return Err(RegistryError::CardinalityMismatch {
                types: self.schemas.len(),
                codes: self.codes.len(),
            });
        }
        Ok(())
    }

    /// Wire code of a node type
    pub fn type_to_code(&self, node_type: NodeType) -> Option<&'static str> {
        self.schemas.get(&node_type).map(|s| s.code)
    }

    /// Node type for a wire code. `None` means the code is not recognized.
    pub fn code_to_type(&self, code: &str) -> Option<NodeType> {
        self.codes.get(code).copied()
    }

    /// Schema of a node type
    pub fn schema(&self, node_type: NodeType) -> Option<&'static NodeSchema> {
        self.schemas.get(&node_type).copied()
    }

    /// All registered schemas, in registration order
    pub fn schemas(&self) -> impl Iterator<Item = &'static NodeSchema> + '_ {
        self.schemas.values().copied()
    }

    /// Schemas in one category
    pub fn schemas_in_category(
        &self,
        category: NodeCategory,
    ) -> impl Iterator<Item = &'static NodeSchema> + '_ {
        self.schemas().filter(move |s| s.category == category)
    }

    /// Number of registered node types
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Create a node of `node_type` with every socket at its default
    pub fn create_node(&self, node_type: NodeType, position: [f32; 2]) -> Option<Node> {
        let schema = self.schema(node_type)?;
        Some(Node::new(node_type, position, schema.instantiate_sockets()))
    }

    /// Create a node from its wire code
    pub fn create_node_from_code(&self, code: &str, position: [f32; 2]) -> Option<Node> {
        self.create_node(self.code_to_type(code)?, position)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SocketSpec;
    use crate::socket::SocketDirection;

    static NO_SOCKETS: &[SocketSpec] = &[];

    static DUPLICATE_CODES: &[NodeSchema] = &[
        NodeSchema {
            node_type: NodeType::Holdout,
            code: "holdout",
            name: "Holdout",
            category: NodeCategory::Shader,
            sockets: NO_SOCKETS,
        },
        NodeSchema {
            node_type: NodeType::Emission,
            code: "holdout",
            name: "Emission",
            category: NodeCategory::Shader,
            sockets: NO_SOCKETS,
        },
    ];

    static DUPLICATE_TYPES: &[NodeSchema] = &[
        NodeSchema {
            node_type: NodeType::Holdout,
            code: "holdout",
            name: "Holdout",
            category: NodeCategory::Shader,
            sockets: NO_SOCKETS,
        },
        NodeSchema {
            node_type: NodeType::Holdout,
            code: "holdout_again",
            name: "Holdout",
            category: NodeCategory::Shader,
            sockets: NO_SOCKETS,
        },
    ];

    #[test]
    fn test_builtin_covers_every_type() {
        let registry = NodeRegistry::builtin().expect("catalog is consistent");
        assert_eq!(registry.len(), NodeType::ALL.len());
        for node_type in NodeType::ALL {
            let node = registry.create_node(node_type, [1.0, 2.0]);
            assert!(node.is_some(), "{node_type:?} is not constructible");
        }
    }

    #[test]
    fn test_codes_are_mutual_inverses() {
        let registry = NodeRegistry::new();
        for node_type in NodeType::ALL {
            let code = registry.type_to_code(node_type).expect("every type has a code");
            assert_eq!(registry.code_to_type(code), Some(node_type));
        }
    }

    #[test]
    fn test_unknown_code() {
        let registry = NodeRegistry::new();
        assert_eq!(registry.code_to_type("teapot_bsdf"), None);
        assert!(registry.create_node_from_code("teapot_bsdf", [0.0, 0.0]).is_none());
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        assert_eq!(
            NodeRegistry::from_schemas(DUPLICATE_CODES).err(),
            Some(RegistryError::DuplicateCode("holdout"))
        );
    }

    #[test]
    fn test_duplicate_type_is_rejected() {
        assert_eq!(
            NodeRegistry::from_schemas(DUPLICATE_TYPES).err(),
            Some(RegistryError::DuplicateType(NodeType::Holdout))
        );
    }

    #[test]
    fn test_partial_registry_reports_missing() {
        let registry = NodeRegistry::from_schemas(&DUPLICATE_TYPES[..1]).expect("one schema");
        assert_eq!(registry.len(), 1);
        assert!(registry.create_node(NodeType::Emission, [0.0, 0.0]).is_none());
    }

    #[test]
    fn test_created_node_follows_schema() {
        let registry = NodeRegistry::new();
        let node = registry
            .create_node(NodeType::MixShader, [3.0, 4.0])
            .expect("mix shader is registered");
        assert_eq!(node.position(), [3.0, 4.0]);
        assert_eq!(node.sockets().len(), 4);
        assert!(node.is_changed());
        let outputs: Vec<_> = node.outputs().map(|s| s.display_name.as_str()).collect();
        assert_eq!(outputs, ["Shader"]);
        assert!(node
            .socket_by_display_name(SocketDirection::Input, "Shader 2")
            .is_some());
    }

    #[test]
    fn test_categories() {
        let registry = NodeRegistry::new();
        let outputs: Vec<_> = registry.schemas_in_category(NodeCategory::Output).collect();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].node_type, NodeType::MaterialOutput);
    }

    #[test]
    fn test_socket_names_resolve_to_one_socket() {
        let registry = NodeRegistry::new();
        for node_type in NodeType::ALL {
            let node = registry.create_node(node_type, [0.0, 0.0]).expect("registered");
            for socket in node.sockets() {
                let by_display = node
                    .socket_by_display_name(socket.direction, &socket.display_name)
                    .map(|s| s.id);
                assert_eq!(by_display, Some(socket.id), "{node_type:?}.{}", socket.display_name);
            }
            for socket in node.inputs() {
                let by_internal = node.input_by_internal_name(&socket.internal_name).map(|s| s.id);
                assert_eq!(by_internal, Some(socket.id), "{node_type:?}.{}", socket.internal_name);
            }
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for node inputs/outputs.

use crate::value::SocketValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketId(pub Uuid);

impl SocketId {
    /// Create a new random socket ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SocketId {
    fn default() -> Self {
        Self::new()
    }
}

/// Socket direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketDirection {
    /// Input socket
    Input,
    /// Output socket
    Output,
}

/// Data type carried by a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketType {
    /// Scalar float
    Float,
    /// Integer
    Int,
    /// RGB color
    Color,
    /// 3D vector
    Vector,
    /// Surface normal
    Normal,
    /// Shader closure (BSDF, volume, emission...)
    Closure,
    /// Free text
    String,
    /// Choice out of a fixed set
    StringEnum,
    /// Toggle
    Boolean,
    /// Control-point curve
    Curve,
}

impl SocketType {
    /// Check if an output of this type can feed an input of `other`.
    ///
    /// Closures only flow into closures. Data sockets convert freely between
    /// float, color, vector and normal; node parameters (enum, toggle, curve,
    /// text, int) are not link targets.
    pub fn can_connect_to(&self, other: &SocketType) -> bool {
        matches!(
            (self, other),
            (Self::Closure, Self::Closure)
                | (
                    Self::Float | Self::Color | Self::Vector | Self::Normal,
                    Self::Float | Self::Color | Self::Vector | Self::Normal,
                )
        )
    }
}

/// A socket on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    /// Unique socket ID
    pub id: SocketId,
    /// Label shown in the UI, also the key for connection endpoints
    pub display_name: String,
    /// Key for value parameters in the wire format
    pub internal_name: String,
    /// Socket direction
    pub direction: SocketDirection,
    /// Data type
    pub socket_type: SocketType,
    value: Option<SocketValue>,
}

impl Socket {
    /// Create a new input socket without a value
    pub fn input(
        display_name: impl Into<String>,
        internal_name: impl Into<String>,
        socket_type: SocketType,
    ) -> Self {
        Self {
            id: SocketId::new(),
            display_name: display_name.into(),
            internal_name: internal_name.into(),
            direction: SocketDirection::Input,
            socket_type,
            value: None,
        }
    }

    /// Create a new output socket
    pub fn output(
        display_name: impl Into<String>,
        internal_name: impl Into<String>,
        socket_type: SocketType,
    ) -> Self {
        Self {
            id: SocketId::new(),
            display_name: display_name.into(),
            internal_name: internal_name.into(),
            direction: SocketDirection::Output,
            socket_type,
            value: None,
        }
    }

    /// Attach a value. Outputs never hold one, so this is a no-op for them.
    pub fn with_value(mut self, value: SocketValue) -> Self {
        if self.direction == SocketDirection::Input {
            self.value = Some(value);
        }
        self
    }

    /// Value held by this socket, if any
    pub fn value(&self) -> Option<&SocketValue> {
        self.value.as_ref()
    }

    /// Mutable access to the held value
    pub fn value_mut(&mut self) -> Option<&mut SocketValue> {
        self.value.as_mut()
    }

    /// Whether this is an input socket
    pub fn is_input(&self) -> bool {
        self.direction == SocketDirection::Input
    }

    /// Check if a connection from this socket into `other` is valid
    pub fn can_connect(&self, other: &Socket) -> bool {
        self.direction == SocketDirection::Output
            && other.direction == SocketDirection::Input
            && self.socket_type.can_connect_to(&other.socket_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FloatValue;

    #[test]
    fn test_outputs_never_hold_values() {
        let socket = Socket::output("Fac", "fac", SocketType::Float)
            .with_value(SocketValue::Float(FloatValue::new(0.5, 0.0, 1.0)));
        assert!(socket.value().is_none());
    }

    #[test]
    fn test_closure_compatibility() {
        assert!(SocketType::Closure.can_connect_to(&SocketType::Closure));
        assert!(!SocketType::Closure.can_connect_to(&SocketType::Color));
        assert!(!SocketType::Float.can_connect_to(&SocketType::Closure));
        assert!(SocketType::Color.can_connect_to(&SocketType::Float));
        assert!(SocketType::Float.can_connect_to(&SocketType::Normal));
        assert!(!SocketType::Float.can_connect_to(&SocketType::Curve));
    }

    #[test]
    fn test_direction_check() {
        let out = Socket::output("Color", "color", SocketType::Color);
        let input = Socket::input("Color", "color", SocketType::Color);
        assert!(out.can_connect(&input));
        assert!(!input.can_connect(&out));
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Typed values held by input sockets.
//!
//! Every setter clamps into the value's legal range instead of failing.
//! Text fields in the UI and decoded save data both rely on that: whatever
//! number arrives, the stored value stays inside its bounds.

use crate::curve::CurveValue;
use serde::{Deserialize, Serialize};

/// Integer value with an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntValue {
    value: i32,
    default: i32,
    min: i32,
    max: i32,
}

impl IntValue {
    /// Create a value set to `default`, bounded by `[min, max]`
    pub fn new(default: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let default = default.clamp(min, max);
        Self {
            value: default,
            default,
            min,
            max,
        }
    }

    /// Current value
    pub fn get(&self) -> i32 {
        self.value
    }

    /// Store `value`, clamped into range
    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Default value
    pub fn default_value(&self) -> i32 {
        self.default
    }

    /// Lower bound
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Restore the default
    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

/// Float value with an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatValue {
    value: f32,
    default: f32,
    min: f32,
    max: f32,
}

impl FloatValue {
    /// Create a value set to `default`, bounded by `[min, max]`
    pub fn new(default: f32, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let default = default.clamp(min, max);
        Self {
            value: default,
            default,
            min,
            max,
        }
    }

    /// Current value
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Store `value`, clamped into range. NaN is ignored.
    pub fn set(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    /// Default value
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Lower bound
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Restore the default
    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

/// Three-component vector, each component an independent [`FloatValue`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Float3Value {
    /// X component
    pub x: FloatValue,
    /// Y component
    pub y: FloatValue,
    /// Z component
    pub z: FloatValue,
}

impl Float3Value {
    /// Create a vector whose components share one range
    pub fn new(default: [f32; 3], min: f32, max: f32) -> Self {
        Self {
            x: FloatValue::new(default[0], min, max),
            y: FloatValue::new(default[1], min, max),
            z: FloatValue::new(default[2], min, max),
        }
    }

    /// Current components
    pub fn get(&self) -> [f32; 3] {
        [self.x.get(), self.y.get(), self.z.get()]
    }

    /// Store all three components, each clamped
    pub fn set(&mut self, value: [f32; 3]) {
        self.x.set(value[0]);
        self.y.set(value[1]);
        self.z.set(value[2]);
    }
}

/// RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// Red channel
    pub r: FloatValue,
    /// Green channel
    pub g: FloatValue,
    /// Blue channel
    pub b: FloatValue,
}

impl ColorValue {
    /// Create a color from RGB components
    pub fn new(default: [f32; 3]) -> Self {
        Self {
            r: FloatValue::new(default[0], 0.0, 1.0),
            g: FloatValue::new(default[1], 0.0, 1.0),
            b: FloatValue::new(default[2], 0.0, 1.0),
        }
    }

    /// Current RGB components
    pub fn get(&self) -> [f32; 3] {
        [self.r.get(), self.g.get(), self.b.get()]
    }

    /// Store RGB components, each clamped to `[0, 1]`
    pub fn set(&mut self, value: [f32; 3]) {
        self.r.set(value[0]);
        self.g.set(value[1]);
        self.b.set(value[2]);
    }
}

/// One legal choice of a string enum: what the UI shows and what gets saved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringEnumPair {
    /// Label shown in the UI
    pub display: String,
    /// Name written to the wire format
    pub internal: String,
}

impl StringEnumPair {
    /// Create a pair
    pub fn new(display: impl Into<String>, internal: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            internal: internal.into(),
        }
    }
}

/// A selection out of a fixed set of [`StringEnumPair`]s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringEnumValue {
    selected: StringEnumPair,
    options: Vec<StringEnumPair>,
}

impl StringEnumValue {
    /// Create an enum selecting the option whose internal name is `selected`.
    ///
    /// Falls back to the first option when `selected` is not among them.
    pub fn new(options: Vec<StringEnumPair>, selected: &str) -> Self {
        let selected = options
            .iter()
            .find(|o| o.internal == selected)
            .or_else(|| options.first())
            .cloned()
            .unwrap_or_else(|| StringEnumPair::new("", ""));
        Self { selected, options }
    }

    /// Currently selected option
    pub fn selected(&self) -> &StringEnumPair {
        &self.selected
    }

    /// All legal options
    pub fn options(&self) -> &[StringEnumPair] {
        &self.options
    }

    /// Select by internal name. Returns `false` and leaves the selection alone
    /// when no option matches.
    pub fn select(&mut self, internal: &str) -> bool {
        match self.options.iter().find(|o| o.internal == internal) {
            Some(option) => {
                self.selected = option.clone();
                true
            }
            None => false,
        }
    }

    /// Select by display label
    pub fn select_display(&mut self, display: &str) -> bool {
        match self.options.iter().find(|o| o.display == display) {
            Some(option) => {
                self.selected = option.clone();
                true
            }
            None => false,
        }
    }
}

/// Boolean toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolValue {
    value: bool,
    default: bool,
}

impl BoolValue {
    /// Create a toggle set to `default`
    pub fn new(default: bool) -> Self {
        Self {
            value: default,
            default,
        }
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.value
    }

    /// Store a new value
    pub fn set(&mut self, value: bool) {
        self.value = value;
    }

    /// Default value
    pub fn default_value(&self) -> bool {
        self.default
    }
}

/// Value owned by an input socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SocketValue {
    /// Bounded integer
    Int(IntValue),
    /// Bounded float
    Float(FloatValue),
    /// Vector built from three floats
    Float3(Float3Value),
    /// RGB color
    Color(ColorValue),
    /// Choice out of a fixed set
    StringEnum(StringEnumValue),
    /// Toggle
    Bool(BoolValue),
    /// Control-point curve
    Curve(CurveValue),
}

impl SocketValue {
    /// Float payload, if this is a float value
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Vector or color payload
    pub fn as_float3(&self) -> Option<[f32; 3]> {
        match self {
            Self::Float3(v) => Some(v.get()),
            Self::Color(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Integer payload
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v.get()),
            _ => None,
        }
    }

    /// Internal name of the selected enum option
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Self::StringEnum(v) => Some(v.selected().internal.as_str()),
            _ => None,
        }
    }

    /// Curve payload
    pub fn as_curve(&self) -> Option<&CurveValue> {
        match self {
            Self::Curve(v) => Some(v),
            _ => None,
        }
    }
}

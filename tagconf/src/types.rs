//! Declared primitive kinds

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A primitive kind that can appear in a `type=` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primitive {
    String,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    /// One Unicode code point (`char`)
    Rune,
    /// One byte (`u8`)
    Byte,
}

impl Primitive {
    /// Every supported kind, in annotation-grammar order.
    pub const ALL: [Primitive; 17] = [
        Primitive::String,
        Primitive::Bool,
        Primitive::Int,
        Primitive::Int8,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::Uint,
        Primitive::Uint8,
        Primitive::Uint16,
        Primitive::Uint32,
        Primitive::Uint64,
        Primitive::Uintptr,
        Primitive::Float32,
        Primitive::Float64,
        Primitive::Rune,
        Primitive::Byte,
    ];

    /// Name used for this kind in annotations and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::Int8 => "int8",
            Primitive::Int16 => "int16",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Uint => "uint",
            Primitive::Uint8 => "uint8",
            Primitive::Uint16 => "uint16",
            Primitive::Uint32 => "uint32",
            Primitive::Uint64 => "uint64",
            Primitive::Uintptr => "uintptr",
            Primitive::Float32 => "float32",
            Primitive::Float64 => "float64",
            Primitive::Rune => "rune",
            Primitive::Byte => "byte",
        }
    }

    /// Resolve a declared type name; the empty name is the `string` default.
    pub fn from_declared(type_name: &str) -> Result<Self, ConfigError> {
        if type_name.is_empty() {
            return Ok(Primitive::String);
        }
        type_name.parse()
    }
}

impl FromStr for Primitive {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Primitive::ALL
            .into_iter()
            .find(|primitive| primitive.name() == s)
            .ok_or_else(|| ConfigError::UnrecognizedType {
                type_name: s.to_string(),
            })
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `Variant`.

use crate::{
    byte_string::ByteString, date_time::DateTime, guid::Guid, localized_text::LocalizedText,
    node_id::NodeId, qualified_name::QualifiedName, status_code::StatusCode,
};

/// A discriminated union over the scalar types that attribute values can
/// hold. Larger payloads are boxed to keep the in-line size small.
#[derive(PartialEq, Clone, Debug, Default)]
pub enum Variant {
    /// An empty value.
    #[default]
    Empty,
    /// A boolean value.
    Boolean(bool),
    /// An unsigned byte value.
    Byte(u8),
    /// An unsigned 16-bit value.
    UInt16(u16),
    /// A signed 32-bit value.
    Int32(i32),
    /// An unsigned 32-bit value.
    UInt32(u32),
    /// A 64-bit floating point value.
    Double(f64),
    /// A string value.
    String(String),
    /// A timestamp value.
    DateTime(Box<DateTime>),
    /// A guid value.
    Guid(Box<Guid>),
    /// A status code value.
    StatusCode(StatusCode),
    /// An opaque sequence of bytes.
    ByteString(ByteString),
    /// A node id value.
    NodeId(Box<NodeId>),
    /// A qualified name value.
    QualifiedName(Box<QualifiedName>),
    /// A localized text value.
    LocalizedText(Box<LocalizedText>),
    /// An array of variants.
    Array(Vec<Variant>),
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

impl From<u8> for Variant {
    fn from(value: u8) -> Self {
        Variant::Byte(value)
    }
}

impl From<u16> for Variant {
    fn from(value: u16) -> Self {
        Variant::UInt16(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int32(value)
    }
}

impl From<u32> for Variant {
    fn from(value: u32) -> Self {
        Variant::UInt32(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Double(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<DateTime> for Variant {
    fn from(value: DateTime) -> Self {
        Variant::DateTime(Box::new(value))
    }
}

impl From<Guid> for Variant {
    fn from(value: Guid) -> Self {
        Variant::Guid(Box::new(value))
    }
}

impl From<StatusCode> for Variant {
    fn from(value: StatusCode) -> Self {
        Variant::StatusCode(value)
    }
}

impl From<ByteString> for Variant {
    fn from(value: ByteString) -> Self {
        Variant::ByteString(value)
    }
}

impl From<NodeId> for Variant {
    fn from(value: NodeId) -> Self {
        Variant::NodeId(Box::new(value))
    }
}

impl From<QualifiedName> for Variant {
    fn from(value: QualifiedName) -> Self {
        Variant::QualifiedName(Box::new(value))
    }
}

impl From<LocalizedText> for Variant {
    fn from(value: LocalizedText) -> Self {
        Variant::LocalizedText(Box::new(value))
    }
}

impl From<Vec<u32>> for Variant {
    fn from(value: Vec<u32>) -> Self {
        Variant::Array(value.into_iter().map(Variant::UInt32).collect())
    }
}

impl Variant {
    /// Return `true` if the variant holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }
}

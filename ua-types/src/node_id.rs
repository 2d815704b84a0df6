// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `NodeId` and `Identifier`.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{byte_string::ByteString, errors::NodeIdError, guid::Guid};

/// The identifier portion of a node id, one of the four kinds defined in
/// Part 3.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub enum Identifier {
    /// An unsigned numeric identifier, `i=N`.
    Numeric(u32),
    /// A string identifier, `s=...`.
    String(String),
    /// A guid identifier, `g=...`.
    Guid(Guid),
    /// An opaque identifier, `b=...` with a base64 payload.
    ByteString(ByteString),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(v) => write!(f, "s={}", v),
            Identifier::Guid(v) => write!(f, "g={}", v),
            Identifier::ByteString(v) => write!(f, "b={}", v.as_base64()),
        }
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Numeric(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::String(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::String(value)
    }
}

impl From<Guid> for Identifier {
    fn from(value: Guid) -> Self {
        Identifier::Guid(value)
    }
}

impl From<ByteString> for Identifier {
    fn from(value: ByteString) -> Self {
        Identifier::ByteString(value)
    }
}

/// An identifier for a node in the address space: a namespace index plus an
/// identifier unique within that namespace.
///
/// Equality and hashing are structural, which is the same equivalence as
/// comparing the canonical string forms since `Display` is injective.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct NodeId {
    /// The index of the namespace the identifier lives in.
    pub namespace: u16,
    /// The identifier, unique within the namespace.
    pub identifier: Identifier,
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::null()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        } else {
            write!(f, "{}", self.identifier)
        }
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    /// Parse the canonical string form, e.g. `i=84`, `ns=2;s=Demo.Value`,
    /// `ns=1;g=...`, `ns=1;b=...`. A bare identifier defaults to namespace 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            // Identifier portions can contain arbitrary text, so the regex is
            // deliberately permissive there and the type tag decides parsing.
            static ref RE: Regex =
                Regex::new(r"^(ns=(?P<ns>[0-9]+);)?(?P<t>[isgb])=(?P<v>.+)$").unwrap();
        }

        let captures = RE.captures(s).ok_or(NodeIdError::InvalidFormat)?;
        let namespace = match captures.name("ns") {
            Some(ns) => ns
                .as_str()
                .parse::<u16>()
                .map_err(|_| NodeIdError::InvalidNamespace)?,
            None => 0,
        };

        let value = captures.name("v").unwrap().as_str();
        let identifier = match captures.name("t").unwrap().as_str() {
            "i" => value
                .parse::<u32>()
                .map(Identifier::Numeric)
                .map_err(|_| NodeIdError::InvalidIdentifier)?,
            "s" => Identifier::String(value.to_string()),
            "g" => Guid::from_str(value)
                .map(Identifier::Guid)
                .map_err(|_| NodeIdError::InvalidIdentifier)?,
            "b" => ByteString::from_base64(value)
                .map(Identifier::ByteString)
                .ok_or(NodeIdError::InvalidIdentifier)?,
            _ => return Err(NodeIdError::InvalidFormat),
        };

        Ok(NodeId {
            namespace,
            identifier,
        })
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        NodeId::new(0, value)
    }
}

impl From<(u16, u32)> for NodeId {
    fn from(value: (u16, u32)) -> Self {
        NodeId::new(value.0, value.1)
    }
}

impl From<(u16, &str)> for NodeId {
    fn from(value: (u16, &str)) -> Self {
        NodeId::new(value.0, value.1)
    }
}

impl NodeId {
    /// Create a new node id from a namespace index and anything that converts
    /// into an identifier.
    pub fn new(namespace: u16, identifier: impl Into<Identifier>) -> NodeId {
        NodeId {
            namespace,
            identifier: identifier.into(),
        }
    }

    /// The null node id, `i=0`.
    pub fn null() -> NodeId {
        NodeId::new(0, 0u32)
    }

    /// Return `true` if this is the null node id.
    pub fn is_null(&self) -> bool {
        self.namespace == 0 && self.identifier == Identifier::Numeric(0)
    }

    /// The node id of the `RootFolder` object, `i=84`.
    pub fn root_folder_id() -> NodeId {
        NodeId::new(0, 84u32)
    }

    /// The node id of the `ObjectsFolder` object, `i=85`.
    pub fn objects_folder_id() -> NodeId {
        NodeId::new(0, 85u32)
    }

    /// The node id of the abstract `References` reference type, `i=31`.
    pub fn references_type_id() -> NodeId {
        NodeId::new(0, 31u32)
    }
}

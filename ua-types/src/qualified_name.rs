// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `QualifiedName`.

use std::fmt;

/// An name qualified by a namespace index. Qualified names are the browse
/// names of nodes, unique amongst a node's siblings but not globally.
#[derive(PartialEq, Eq, Clone, Debug, Hash, Default)]
pub struct QualifiedName {
    /// The namespace index of the name.
    pub namespace_index: u16,
    /// The name itself.
    pub name: String,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "{}:{}", self.namespace_index, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        QualifiedName::new(0, value)
    }
}

impl From<String> for QualifiedName {
    fn from(value: String) -> Self {
        QualifiedName::new(0, value)
    }
}

impl QualifiedName {
    /// Create a new qualified name from a namespace index and a name.
    pub fn new(namespace_index: u16, name: impl Into<String>) -> QualifiedName {
        QualifiedName {
            namespace_index,
            name: name.into(),
        }
    }

    /// Create a null qualified name.
    pub fn null() -> QualifiedName {
        QualifiedName::default()
    }

    /// Return `true` if the name portion is empty. A node with a null browse
    /// name cannot be registered in an address space.
    pub fn is_null(&self) -> bool {
        self.name.is_empty()
    }
}

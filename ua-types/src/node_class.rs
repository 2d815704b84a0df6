// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the `NodeClass` enumeration.

/// The class of a node, fixed at construction. The discriminants are the
/// OPC UA wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// No class specified, only valid as a browse filter.
    Unspecified = 0,
    /// Objects are general structural nodes without special meaning.
    Object = 1,
    /// Variables are nodes with a current value.
    Variable = 2,
    /// Methods are nodes that can be called.
    Method = 4,
    /// Object types define properties of object nodes.
    ObjectType = 8,
    /// Variable types define properties of variable nodes.
    VariableType = 16,
    /// Reference types define properties of references.
    ReferenceType = 32,
    /// Data types define different types used by variables.
    DataType = 64,
    /// Views are pre-defined subsets of the address space.
    View = 128,
}

impl NodeClass {
    /// Look up a node class from its wire value.
    pub fn from_i32(value: i32) -> Option<NodeClass> {
        match value {
            0 => Some(NodeClass::Unspecified),
            1 => Some(NodeClass::Object),
            2 => Some(NodeClass::Variable),
            4 => Some(NodeClass::Method),
            8 => Some(NodeClass::ObjectType),
            16 => Some(NodeClass::VariableType),
            32 => Some(NodeClass::ReferenceType),
            64 => Some(NodeClass::DataType),
            128 => Some(NodeClass::View),
            _ => None,
        }
    }
}

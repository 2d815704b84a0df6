// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use ua_types::{
    AttributeId, DataValue, LocalizedText, NodeClass, NodeId, QualifiedName, StatusCode, Variant,
};

use crate::references::Reference;

use super::{DataType, Object, ObjectType, ReferenceType, Variable, VariableType, View};

/// The `NodeType` enum enumerates the different OPC-UA node classes.
#[derive(Debug)]
pub enum NodeType {
    /// Objects are general structural nodes without special meaning.
    Object(Box<Object>),
    /// Object types define properties of object nodes.
    ObjectType(Box<ObjectType>),
    /// Reference types define properties of references.
    ReferenceType(Box<ReferenceType>),
    /// Variables are nodes with a current value that can be stored historically.
    Variable(Box<Variable>),
    /// Variable types define properties of variable nodes.
    VariableType(Box<VariableType>),
    /// Views are pre-defined subsets of the address space.
    View(Box<View>),
    /// Data types define different types used by variables.
    DataType(Box<DataType>),
}

/// Trait for types that have a node ID.
pub trait HasNodeId {
    /// Get the node ID of this item.
    fn node_id(&self) -> &NodeId;
}

impl HasNodeId for NodeType {
    fn node_id(&self) -> &NodeId {
        self.as_node().node_id()
    }
}

impl NodeType {
    /// Get a reference to this as dyn [Node].
    pub fn as_node<'a>(&'a self) -> &'a (dyn Node + 'a) {
        match self {
            NodeType::Object(value) => value.as_ref(),
            NodeType::ObjectType(value) => value.as_ref(),
            NodeType::ReferenceType(value) => value.as_ref(),
            NodeType::Variable(value) => value.as_ref(),
            NodeType::VariableType(value) => value.as_ref(),
            NodeType::View(value) => value.as_ref(),
            NodeType::DataType(value) => value.as_ref(),
        }
    }

    /// Get a reference to this as mut dyn [Node].
    pub fn as_mut_node(&mut self) -> &mut dyn Node {
        match self {
            NodeType::Object(ref mut value) => value.as_mut(),
            NodeType::ObjectType(ref mut value) => value.as_mut(),
            NodeType::ReferenceType(ref mut value) => value.as_mut(),
            NodeType::Variable(ref mut value) => value.as_mut(),
            NodeType::VariableType(ref mut value) => value.as_mut(),
            NodeType::View(ref mut value) => value.as_mut(),
            NodeType::DataType(ref mut value) => value.as_mut(),
        }
    }

    /// Returns the [`NodeClass`] of this `NodeType`.
    pub fn node_class(&self) -> NodeClass {
        match self {
            NodeType::Object(_) => NodeClass::Object,
            NodeType::ObjectType(_) => NodeClass::ObjectType,
            NodeType::ReferenceType(_) => NodeClass::ReferenceType,
            NodeType::Variable(_) => NodeClass::Variable,
            NodeType::VariableType(_) => NodeClass::VariableType,
            NodeType::View(_) => NodeClass::View,
            NodeType::DataType(_) => NodeClass::DataType,
        }
    }
}

/// Implemented within a macro for all Node types. Functions that return a result in an Option
/// do so because the attribute is optional and not necessarily there.
pub trait NodeBase {
    /// Returns the node class - Object, ObjectType, DataType, ReferenceType, Variable, VariableType or View
    fn node_class(&self) -> NodeClass;

    /// Returns the node's `NodeId`
    fn node_id(&self) -> &NodeId;

    /// Returns the node's browse name
    fn browse_name(&self) -> &QualifiedName;

    /// Returns the node's display name
    fn display_name(&self) -> &LocalizedText;

    /// Sets the node's display name
    fn set_display_name(&mut self, display_name: LocalizedText);

    /// Get the description of this node.
    fn description(&self) -> Option<&LocalizedText>;

    /// Set the description of this node.
    fn set_description(&mut self, description: LocalizedText);

    /// Get the references held by this node.
    fn references(&self) -> &[Reference];

    /// Add a reference to this node. The reference list may grow after
    /// construction; everything else about a node's identity is immutable.
    fn add_reference(&mut self, reference: Reference);
}

/// Implemented by each node type to provide a generic way to set or get attributes, e.g.
/// from the Attributes service set. Internal callers could call the setter / getter on the node
/// if they have access to them.
pub trait Node: NodeBase {
    /// Finds the attribute and value. Returns `None` if the attribute is not
    /// supported for this node class.
    fn get_attribute(&self, attribute_id: AttributeId) -> Option<DataValue>;

    /// Sets the attribute with the new value.
    fn set_attribute(&mut self, attribute_id: AttributeId, value: Variant)
        -> Result<(), StatusCode>;

    /// Read an attribute as the Read service would: an unsupported attribute
    /// becomes a data value with `BadAttributeIdInvalid`.
    fn read_attribute(&self, attribute_id: AttributeId) -> DataValue {
        self.get_attribute(attribute_id).unwrap_or_else(|| DataValue {
            status: Some(StatusCode::BadAttributeIdInvalid),
            ..Default::default()
        })
    }
}

//! Implementation of [AddressSpace], an in-memory OPC-UA address space.

mod browse_path;

pub use browse_path::{
    construct_browse_path, parse_relative_path, BrowsePathError, MAX_BROWSE_PATH_DEPTH,
    MAX_BROWSE_PATH_TARGETS,
};
pub use ua_nodes::*;

use std::str::FromStr;

use hashbrown::{HashMap, HashSet};
use log::debug;

use ua_types::{LocalizedText, NodeClass, NodeId, NodeIdError, QualifiedName};

/// Represents an in-memory address space: the primary owning map of nodes
/// plus the secondary lookup indices, an alias table, and the forward and
/// inverse name tables for reference types.
///
/// Registration and index updates need `&mut self`; queries borrow shared,
/// so the usual Rust borrow discipline is the reader-writer discipline.
#[derive(Default)]
pub struct AddressSpace {
    /// The primary map, owning every registered node.
    node_map: HashMap<NodeId, NodeType>,
    /// Alias strings resolving directly to node ids.
    aliases: HashMap<String, NodeId>,
    /// Objects, variables and views, browsable by name.
    objects_by_browse_name: HashMap<String, NodeId>,
    object_types_by_browse_name: HashMap<String, NodeId>,
    variable_types_by_browse_name: HashMap<String, NodeId>,
    data_types_by_browse_name: HashMap<String, NodeId>,
    /// Reference types by their forward browse name.
    reference_types_by_browse_name: HashMap<String, NodeId>,
    /// The same reference types, keyed by their inverse name.
    reference_types_by_inverse_name: HashMap<String, NodeId>,
}

impl AddressSpace {
    /// Create a new empty address space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, placing it into the primary map and into the
    /// browse-name index its node class dictates. Registering a duplicate
    /// node id, a node without a browse name, or a reference type without an
    /// inverse name signals a corrupt address space load and panics.
    fn register(&mut self, node: NodeType) {
        let node_id = node.node_id().clone();
        let browse_name = node.as_node().browse_name().clone();
        if node_id.is_null() {
            panic!("Node has a null node id");
        }
        if browse_name.is_null() {
            panic!("Node {} has no browse name", node_id);
        }
        if self.node_map.contains_key(&node_id) {
            panic!("This node {} already exists", node_id);
        }
        match node.node_class() {
            // Instances share one index so they are browsable by name
            // alongside each other.
            NodeClass::Object | NodeClass::Variable | NodeClass::View => {
                self.objects_by_browse_name
                    .insert(browse_name.name.clone(), node_id.clone());
            }
            NodeClass::ObjectType => {
                self.object_types_by_browse_name
                    .insert(browse_name.name.clone(), node_id.clone());
            }
            NodeClass::VariableType => {
                self.variable_types_by_browse_name
                    .insert(browse_name.name.clone(), node_id.clone());
            }
            NodeClass::DataType => {
                self.data_types_by_browse_name
                    .insert(browse_name.name.clone(), node_id.clone());
            }
            NodeClass::ReferenceType => {
                let NodeType::ReferenceType(reference_type) = &node else {
                    panic!("Node {} has class ReferenceType but is not one", node_id);
                };
                let Some(inverse_name) =
                    reference_type.inverse_name().filter(|v| !v.is_null())
                else {
                    panic!("Reference type {} has no inverse name", node_id);
                };
                self.reference_types_by_browse_name
                    .insert(browse_name.name.clone(), node_id.clone());
                self.reference_types_by_inverse_name
                    .insert(inverse_name.text, node_id.clone());
            }
            node_class => {
                panic!("Node {} has unsupported node class {:?}", node_id, node_class);
            }
        }
        self.node_map.insert(node_id, node);
    }

    /// Insert a node and a list of references from/to that node. References
    /// are given as (target node, reference type browse name, direction) and
    /// are normalized before insertion. This is the single entry point for
    /// populating the space; loaders construct a node of the wanted class and
    /// hand it over here.
    pub fn insert<'a, T>(
        &mut self,
        node: T,
        references: Option<&'a [(&'a NodeId, &'a str, ReferenceDirection)]>,
    ) -> bool
    where
        T: Into<NodeType>,
    {
        let node_type = node.into();
        let node_id = node_type.node_id().clone();
        self.register(node_type);

        // If references are supplied, add them now
        if let Some(references) = references {
            for (target, reference_type, direction) in references {
                match direction {
                    ReferenceDirection::Forward => {
                        self.insert_reference(&node_id, target, reference_type)
                    }
                    ReferenceDirection::Inverse => {
                        self.insert_reference(target, &node_id, reference_type)
                    }
                }
            }
        }
        true
    }

    /// Insert a reference from `source_node` to `target_node` with the given
    /// reference type browse name. The name is normalized, so an inverse name
    /// ("OrganizedBy") inserts the equivalent forward reference. The
    /// reciprocal reference is pushed onto the target when the target exists;
    /// a dangling target is tolerated.
    pub fn insert_reference(
        &mut self,
        source_node: &NodeId,
        target_node: &NodeId,
        reference_type: &str,
    ) {
        if source_node == target_node {
            panic!(
                "Node id from == node id to {}, self reference is not allowed",
                source_node
            );
        }

        let (reference_type, is_forward) = self.normalize_reference_type(reference_type, None);

        let added = match self.node_map.get_mut(source_node) {
            Some(node) => {
                let node = node.as_mut_node();
                let reference =
                    Reference::new(reference_type.clone(), target_node.clone(), is_forward);
                if node.references().contains(&reference) {
                    false
                } else {
                    node.add_reference(reference);
                    true
                }
            }
            None => {
                debug!(
                    "Reference from missing node {} to {} is dropped",
                    source_node, target_node
                );
                false
            }
        };

        // If the reference was already there, no reason to mirror it either.
        if !added {
            return;
        }

        match self.node_map.get_mut(target_node) {
            Some(node) => {
                let node = node.as_mut_node();
                let reference =
                    Reference::new(reference_type, source_node.clone(), !is_forward);
                if !node.references().contains(&reference) {
                    node.add_reference(reference);
                }
            }
            None => {
                debug!(
                    "Reference from {} to missing node {} is not mirrored",
                    source_node, target_node
                );
            }
        }
    }

    /// Check if the reference given by `source_node`, `target_node` and
    /// `reference_type` exists in the address space.
    pub fn has_reference(
        &self,
        source_node: &NodeId,
        target_node: &NodeId,
        reference_type: &str,
    ) -> bool {
        let (reference_type, is_forward) = self.normalize_reference_type(reference_type, None);
        self.node_map
            .get(source_node)
            .map(|node| {
                node.as_node().references().iter().any(|r| {
                    r.reference_type == reference_type
                        && &r.target_node == target_node
                        && r.is_forward == is_forward
                })
            })
            .unwrap_or_default()
    }

    /// Register an alias string resolving to a node id.
    pub fn alias(&mut self, alias: impl Into<String>, node_id: impl Into<NodeId>) {
        self.aliases.insert(alias.into(), node_id.into());
    }

    /// Resolve a string to a node id: the alias table first, then the
    /// canonical node id syntax.
    pub fn resolve_node_id(&self, input: &str) -> Result<NodeId, NodeIdError> {
        if let Some(node_id) = self.aliases.get(input) {
            Ok(node_id.clone())
        } else {
            NodeId::from_str(input)
        }
    }

    /// Return `true` if the node with the given node ID exists in this address space.
    pub fn node_exists(&self, node_id: &NodeId) -> bool {
        self.node_map.contains_key(node_id)
    }

    /// Find node by something that can be turned into a node id and return a reference to it.
    pub fn find<N>(&self, node_id: N) -> Option<&NodeType>
    where
        N: Into<NodeId>,
    {
        self.find_node(&node_id.into())
    }

    /// Finds a node by its node id and returns a reference to it.
    pub fn find_node(&self, node_id: &NodeId) -> Option<&NodeType> {
        self.node_map.get(node_id)
    }

    /// Finds a node by its node id and returns a mutable reference to it.
    pub fn find_node_mut(&mut self, node_id: &NodeId) -> Option<&mut NodeType> {
        self.node_map.get_mut(node_id)
    }

    /// Find an object, variable or view by its browse name.
    pub fn find_object_by_browse_name(&self, browse_name: &str) -> Option<&NodeType> {
        self.objects_by_browse_name
            .get(browse_name)
            .and_then(|node_id| self.node_map.get(node_id))
    }

    /// Find an object type by its browse name.
    pub fn find_object_type_by_browse_name(&self, browse_name: &str) -> Option<&NodeType> {
        self.object_types_by_browse_name
            .get(browse_name)
            .and_then(|node_id| self.node_map.get(node_id))
    }

    /// Find a variable type by its browse name.
    pub fn find_variable_type_by_browse_name(&self, browse_name: &str) -> Option<&NodeType> {
        self.variable_types_by_browse_name
            .get(browse_name)
            .and_then(|node_id| self.node_map.get(node_id))
    }

    /// Find a data type by its browse name.
    pub fn find_data_type_by_browse_name(&self, browse_name: &str) -> Option<&NodeType> {
        self.data_types_by_browse_name
            .get(browse_name)
            .and_then(|node_id| self.node_map.get(node_id))
    }

    /// Find a reference type by its forward browse name, or by a node id
    /// string (`i=...` / `ns=...`). A node id that resolves to a node of
    /// another class is a construction bug and panics.
    pub fn find_reference_type(&self, name: &str) -> Option<&ReferenceType> {
        if name.starts_with("i=") || name.starts_with("ns=") {
            let node_id = NodeId::from_str(name).ok()?;
            self.find_reference_type_by_id(&node_id)
        } else {
            let node_id = self.reference_types_by_browse_name.get(name)?;
            self.find_reference_type_by_id(node_id)
        }
    }

    /// Find a reference type by its inverse browse name.
    pub fn find_reference_type_from_inverse_name(&self, name: &str) -> Option<&ReferenceType> {
        let node_id = self.reference_types_by_inverse_name.get(name)?;
        self.find_reference_type_by_id(node_id)
    }

    /// Find a reference type by its node id. A hit of another node class is
    /// a construction bug and panics.
    pub fn find_reference_type_by_id(&self, node_id: &NodeId) -> Option<&ReferenceType> {
        match self.node_map.get(node_id)? {
            NodeType::ReferenceType(reference_type) => Some(reference_type),
            _ => panic!("Node {} is not a reference type", node_id),
        }
    }

    /// Canonicalise a (reference type name, direction) pair so that the
    /// result always names the forward reference type. An inverse name flips
    /// the direction; an unknown name passes through unchanged. An absent
    /// direction counts as forward. Idempotent.
    pub fn normalize_reference_type(
        &self,
        reference_type: &str,
        is_forward: Option<bool>,
    ) -> (String, bool) {
        let is_forward = is_forward.unwrap_or(true);
        if self.reference_types_by_browse_name.contains_key(reference_type) {
            (reference_type.to_string(), is_forward)
        } else if let Some(node) = self
            .reference_types_by_inverse_name
            .get(reference_type)
            .and_then(|node_id| self.node_map.get(node_id))
        {
            (node.as_node().browse_name().name.clone(), !is_forward)
        } else {
            (reference_type.to_string(), is_forward)
        }
    }

    /// Return the partner name of a reference type name: the inverse name
    /// for a forward name, the forward name for an inverse name. `None` for
    /// names that match no registered reference type.
    pub fn inverse_reference_type(&self, name: &str) -> Option<String> {
        if let Some(node_id) = self.reference_types_by_browse_name.get(name) {
            self.find_reference_type_by_id(node_id)
                .and_then(|reference_type| reference_type.inverse_name())
                .map(|inverse_name| inverse_name.text)
        } else if let Some(node) = self
            .reference_types_by_inverse_name
            .get(name)
            .and_then(|node_id| self.node_map.get(node_id))
        {
            Some(node.as_node().browse_name().name.clone())
        } else {
            None
        }
    }

    /// Test whether `reference_type` is `base_type` or one of its subtypes,
    /// walking the inverse `HasSubtype` references between reference type
    /// nodes. Cycles in a corrupt hierarchy are guarded by a visited set.
    pub fn reference_type_is_subtype_of(
        &self,
        reference_type: &NodeId,
        base_type: &NodeId,
    ) -> bool {
        let mut visited = HashSet::new();
        let mut current = reference_type.clone();
        loop {
            if &current == base_type {
                return true;
            }
            if !visited.insert(current.clone()) {
                return false;
            }
            let Some(node) = self.node_map.get(&current) else {
                return false;
            };
            let parent = node
                .as_node()
                .references()
                .iter()
                .find(|r| r.reference_type == "HasSubtype" && !r.is_forward);
            match parent {
                Some(reference) => current = reference.target_node.clone(),
                None => return false,
            }
        }
    }

    /// Add a folder object organized by a parent node.
    pub fn add_folder(
        &mut self,
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        parent_node_id: &NodeId,
    ) -> bool {
        ObjectBuilder::new(node_id, browse_name, display_name)
            .is_folder()
            .organized_by(parent_node_id.clone())
            .insert(self)
    }
}

impl NodeInsertTarget for AddressSpace {
    fn insert<'a>(
        &mut self,
        node: impl Into<NodeType>,
        references: Option<&'a [(&'a NodeId, &'a str, ReferenceDirection)]>,
    ) -> bool {
        AddressSpace::insert(self, node, references)
    }
}

#[cfg(test)]
mod tests;

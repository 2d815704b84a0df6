// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use ua_types::NodeId;

/// A typed directed edge held by its source node. The reference type is a
/// *browse name* ("Organizes", "HasSubtype", ...), never a node id string;
/// the target is resolved lazily through the address space and may dangle
/// during a partial load.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Reference {
    /// Browse name of the reference type.
    pub reference_type: String,
    /// Target node ID.
    pub target_node: NodeId,
    /// Whether the reference points from source to target.
    pub is_forward: bool,
}

impl Reference {
    /// Create a new reference. A reference type that is empty or shaped like
    /// a node id string signals a corrupt address space load and panics.
    pub fn new(
        reference_type: impl Into<String>,
        target_node: NodeId,
        is_forward: bool,
    ) -> Reference {
        let reference_type = reference_type.into();
        if reference_type.is_empty() {
            panic!("Reference type is empty, expected a browse name");
        }
        if reference_type.starts_with("i=") || reference_type.starts_with("ns=") {
            panic!(
                "Reference type {} is a node id string, expected a browse name",
                reference_type
            );
        }
        Reference {
            reference_type,
            target_node,
            is_forward,
        }
    }

    /// The same reference seen from the other end.
    pub fn reciprocal(&self, source_node: &NodeId) -> Reference {
        Reference {
            reference_type: self.reference_type.clone(),
            target_node: source_node.clone(),
            is_forward: !self.is_forward,
        }
    }
}

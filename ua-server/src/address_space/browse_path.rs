//! Translation of browse paths into node ids, i.e. the heart of the
//! `TranslateBrowsePathsToNodeIds` service.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use ua_types::{
    service_types::{
        BrowsePath, BrowsePathResult, BrowsePathTarget, RelativePath, RelativePathElement,
        MATCHED_ENTIRE_PATH,
    },
    NodeId, QualifiedName, StatusCode,
};

use super::AddressSpace;
use ua_nodes::Reference;

/// The deepest relative path the resolver will follow. OPC UA clients send
/// modest paths; anything deeper is rejected as `BadQueryTooComplex` before
/// recursion starts.
pub const MAX_BROWSE_PATH_DEPTH: usize = 32;

/// The largest number of targets a single browse path may produce before the
/// resolution is abandoned with `BadTooManyMatches`.
pub const MAX_BROWSE_PATH_TARGETS: usize = 1024;

/// Error returned when a browse path string cannot be turned into a
/// [`BrowsePath`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowsePathError {
    /// The starting node is neither `/` nor a parseable node id.
    #[error("Browse path starting node {0} is not a valid node id")]
    InvalidStartingNode(String),
    /// A path segment carries a namespace prefix that is not a 16-bit
    /// unsigned integer.
    #[error("Browse path segment {0} has a malformed namespace prefix")]
    InvalidNamespacePrefix(String),
}

/// Parse a dot separated path string into a relative path. Each segment may
/// carry an `N:` namespace prefix; the produced elements follow any forward
/// reference (`reference_type_id` null, subtypes not considered).
pub fn parse_relative_path(path: &str) -> Result<RelativePath, BrowsePathError> {
    let mut elements = Vec::new();
    for segment in path.split('.') {
        let (namespace_index, name) = match segment.split_once(':') {
            Some((namespace, name)) => {
                let namespace_index = namespace
                    .parse::<u16>()
                    .map_err(|_| BrowsePathError::InvalidNamespacePrefix(segment.to_string()))?;
                (namespace_index, name)
            }
            None => (0, segment),
        };
        elements.push(RelativePathElement {
            reference_type_id: NodeId::null(),
            is_inverse: false,
            include_subtypes: false,
            target_name: QualifiedName::new(namespace_index, name),
        });
    }
    Ok(RelativePath {
        elements: Some(elements),
    })
}

/// Construct a browse path from a starting node string and a dot separated
/// path. `/` stands for the `RootFolder` object.
pub fn construct_browse_path(
    starting_node: &str,
    path: &str,
) -> Result<BrowsePath, BrowsePathError> {
    let starting_node = if starting_node == "/" {
        NodeId::root_folder_id()
    } else {
        NodeId::from_str(starting_node)
            .map_err(|_| BrowsePathError::InvalidStartingNode(starting_node.to_string()))?
    };
    Ok(BrowsePath {
        starting_node,
        relative_path: parse_relative_path(path)?,
    })
}

impl AddressSpace {
    /// Resolve a single browse path against the space, producing the matched
    /// targets in depth-first order. Duplicates are preserved; deduplication
    /// is the caller's business.
    pub fn browse_path(&self, browse_path: &BrowsePath) -> BrowsePathResult {
        if self.find_node(&browse_path.starting_node).is_none() {
            return BrowsePathResult {
                status_code: StatusCode::BadNodeIdUnknown,
                targets: None,
            };
        }
        let elements = browse_path
            .relative_path
            .elements
            .as_deref()
            .unwrap_or_default();
        if elements.is_empty() {
            return BrowsePathResult {
                status_code: StatusCode::BadNothingToDo,
                targets: None,
            };
        }
        if elements.len() > MAX_BROWSE_PATH_DEPTH {
            return BrowsePathResult {
                status_code: StatusCode::BadQueryTooComplex,
                targets: None,
            };
        }
        // The final hop must name a target; intermediate dead ends just fail
        // to contribute matches.
        let last_element = &elements[elements.len() - 1];
        if last_element.target_name.is_null() {
            return BrowsePathResult {
                status_code: StatusCode::BadBrowseNameInvalid,
                targets: None,
            };
        }

        let mut targets = Vec::new();
        self.browse_path_descend(&browse_path.starting_node, elements, 0, &mut targets);

        if targets.len() > MAX_BROWSE_PATH_TARGETS {
            BrowsePathResult {
                status_code: StatusCode::BadTooManyMatches,
                targets: None,
            }
        } else if targets.is_empty() {
            BrowsePathResult {
                status_code: StatusCode::BadNoMatch,
                targets: None,
            }
        } else {
            BrowsePathResult {
                status_code: StatusCode::Good,
                targets: Some(targets),
            }
        }
    }

    /// Resolve a batch of browse paths, one result per path in order.
    pub fn translate_browse_paths_to_node_ids(
        &self,
        browse_paths: &[BrowsePath],
    ) -> Vec<BrowsePathResult> {
        browse_paths
            .iter()
            .map(|browse_path| self.browse_path(browse_path))
            .collect()
    }

    fn browse_path_descend(
        &self,
        node_id: &NodeId,
        elements: &[RelativePathElement],
        index: usize,
        targets: &mut Vec<BrowsePathTarget>,
    ) {
        let element = &elements[index];
        let is_last = index == elements.len() - 1;
        for child in self.browse_node_by_target_name(node_id, element) {
            if targets.len() > MAX_BROWSE_PATH_TARGETS {
                return;
            }
            if is_last {
                targets.push(BrowsePathTarget {
                    target_id: child,
                    remaining_path_index: MATCHED_ENTIRE_PATH,
                });
            } else {
                self.browse_path_descend(&child, elements, index + 1, targets);
            }
        }
    }

    /// Return the nodes reachable from `node_id` through references matching
    /// the element's reference type filter whose browse name equals the
    /// element's target name. A null `reference_type_id` matches any
    /// reference; dangling references terminate that branch silently.
    pub fn browse_node_by_target_name(
        &self,
        node_id: &NodeId,
        element: &RelativePathElement,
    ) -> Vec<NodeId> {
        let Some(node) = self.find_node(node_id) else {
            return Vec::new();
        };
        let filter = if element.reference_type_id.is_null() {
            None
        } else {
            Some(&element.reference_type_id)
        };
        let mut matches = Vec::new();
        for reference in node.as_node().references() {
            if reference.is_forward == element.is_inverse {
                continue;
            }
            if let Some(filter_id) = filter {
                if !self.reference_matches_filter(reference, filter_id, element.include_subtypes) {
                    continue;
                }
            }
            let Some(target) = self.find_node(&reference.target_node) else {
                debug!(
                    "Reference from {} to missing node {} is ignored",
                    node_id, reference.target_node
                );
                continue;
            };
            if target.as_node().browse_name() == &element.target_name {
                matches.push(reference.target_node.clone());
            }
        }
        matches
    }

    /// Resolve a starting node (an alias, a node id string, or `/` for the
    /// root folder) and a dot separated path, returning the last matched
    /// target if the whole path resolves.
    pub fn simple_browse_path(&self, starting_node: &str, path: &str) -> Option<NodeId> {
        let starting_node = if starting_node == "/" {
            NodeId::root_folder_id()
        } else {
            self.resolve_node_id(starting_node).ok()?
        };
        let browse_path = BrowsePath {
            starting_node,
            relative_path: parse_relative_path(path).ok()?,
        };
        let result = self.browse_path(&browse_path);
        if result.status_code.is_good() {
            result
                .targets
                .and_then(|targets| targets.last().map(|target| target.target_id.clone()))
        } else {
            None
        }
    }

    /// Test an edge against a reference type filter: a direct browse-name
    /// match, or a subtype match when requested. Edges with reference types
    /// unknown to the space only ever match by name.
    fn reference_matches_filter(
        &self,
        reference: &Reference,
        filter_id: &NodeId,
        include_subtypes: bool,
    ) -> bool {
        let Some(filter_node) = self.find_node(filter_id) else {
            return false;
        };
        if reference.reference_type == filter_node.as_node().browse_name().name {
            return true;
        }
        if !include_subtypes {
            return false;
        }
        let Some(reference_type_id) = self
            .reference_types_by_browse_name
            .get(&reference.reference_type)
        else {
            return false;
        };
        self.reference_type_is_subtype_of(reference_type_id, filter_id)
    }
}

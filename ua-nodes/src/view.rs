// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `View` and `ViewBuilder`.

use ua_types::{AttributeId, DataValue, StatusCode, Variant};

use super::{base::Base, node::Node, node::NodeBase, EventNotifier};

node_builder_impl!(ViewBuilder, View);
node_builder_impl_property_of!(ViewBuilder);

impl ViewBuilder {
    /// Set whether the view guarantees to contain no loops.
    pub fn contains_no_loops(mut self, contains_no_loops: bool) -> Self {
        self.node.set_contains_no_loops(contains_no_loops);
        self
    }

    /// Set the event notifier of the view.
    pub fn event_notifier(mut self, event_notifier: EventNotifier) -> Self {
        self.node.set_event_notifier(event_notifier);
        self
    }
}

/// A `View` is a type of node within the `AddressSpace`.
#[derive(Debug)]
pub struct View {
    pub(super) base: Base,
    pub(super) event_notifier: EventNotifier,
    pub(super) contains_no_loops: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            base: Base::new(NodeClass::View, &NodeId::null(), "", ""),
            event_notifier: EventNotifier::empty(),
            contains_no_loops: true,
        }
    }
}

node_base_impl!(View);

impl Node for View {
    fn get_attribute(&self, attribute_id: AttributeId) -> Option<DataValue> {
        match attribute_id {
            AttributeId::EventNotifier => Some((self.event_notifier().bits() as u32).into()),
            AttributeId::ContainsNoLoops => Some(self.contains_no_loops().into()),
            _ => self.base.get_attribute(attribute_id),
        }
    }

    fn set_attribute(
        &mut self,
        attribute_id: AttributeId,
        value: Variant,
    ) -> Result<(), StatusCode> {
        match attribute_id {
            AttributeId::EventNotifier => match value {
                Variant::Byte(v) => {
                    self.set_event_notifier(EventNotifier::from_bits_truncate(v));
                    Ok(())
                }
                Variant::UInt32(v) => {
                    self.set_event_notifier(EventNotifier::from_bits_truncate(v as u8));
                    Ok(())
                }
                _ => Err(StatusCode::BadTypeMismatch),
            },
            AttributeId::ContainsNoLoops => {
                if let Variant::Boolean(v) = value {
                    self.set_contains_no_loops(v);
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            _ => self.base.set_attribute(attribute_id, value),
        }
    }
}

impl View {
    /// Create a new view.
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        event_notifier: EventNotifier,
        contains_no_loops: bool,
    ) -> View {
        View {
            base: Base::new(NodeClass::View, node_id, browse_name, display_name),
            event_notifier,
            contains_no_loops,
        }
    }

    /// Get whether this view is valid.
    pub fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    /// Get the event notifier status of this view.
    pub fn event_notifier(&self) -> EventNotifier {
        self.event_notifier
    }

    /// Set the event notifier status of this view.
    pub fn set_event_notifier(&mut self, event_notifier: EventNotifier) {
        self.event_notifier = event_notifier;
    }

    /// Get whether this view guarantees to contain no loops.
    pub fn contains_no_loops(&self) -> bool {
        self.contains_no_loops
    }

    /// Set whether this view guarantees to contain no loops.
    pub fn set_contains_no_loops(&mut self, contains_no_loops: bool) {
        self.contains_no_loops = contains_no_loops;
    }
}

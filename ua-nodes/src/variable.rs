// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `Variable` and `VariableBuilder`.

use ua_types::{AttributeId, DataValue, StatusCode, Variant};

use super::{base::Base, node::Node, node::NodeBase, AccessLevel};

node_builder_impl!(VariableBuilder, Variable);
node_builder_impl_component_of!(VariableBuilder);
node_builder_impl_property_of!(VariableBuilder);

impl VariableBuilder {
    /// Set the current value of the variable.
    pub fn value(mut self, value: impl Into<Variant>) -> Self {
        self.node.set_value(value);
        self
    }

    /// Set the data type of the variable.
    pub fn data_type(mut self, data_type: impl Into<NodeId>) -> Self {
        self.node.set_data_type(data_type);
        self
    }

    /// Set the value rank of the variable.
    pub fn value_rank(mut self, value_rank: i32) -> Self {
        self.node.set_value_rank(value_rank);
        self
    }

    /// Set the array dimensions of the variable.
    pub fn array_dimensions(mut self, array_dimensions: &[u32]) -> Self {
        self.node.set_array_dimensions(array_dimensions);
        self
    }

    /// Set the access level of the variable.
    pub fn access_level(mut self, access_level: AccessLevel) -> Self {
        self.node.set_access_level(access_level);
        self
    }

    /// Set the user access level of the variable.
    pub fn user_access_level(mut self, user_access_level: AccessLevel) -> Self {
        self.node.set_user_access_level(user_access_level);
        self
    }

    /// Set the minimum sampling interval of the variable.
    pub fn minimum_sampling_interval(mut self, minimum_sampling_interval: f64) -> Self {
        self.node
            .set_minimum_sampling_interval(minimum_sampling_interval);
        self
    }

    /// Set whether the variable's history is recorded.
    pub fn historizing(mut self, historizing: bool) -> Self {
        self.node.set_historizing(historizing);
        self
    }

    /// Add a `HasTypeDefinition` reference to the given variable type.
    pub fn has_type_definition(self, type_id: impl Into<NodeId>) -> Self {
        self.reference(type_id, "HasTypeDefinition", ReferenceDirection::Forward)
    }
}

/// A `Variable` is a type of node within the `AddressSpace`.
#[derive(Debug)]
pub struct Variable {
    pub(super) base: Base,
    pub(super) value: DataValue,
    pub(super) data_type: NodeId,
    pub(super) value_rank: i32,
    pub(super) array_dimensions: Option<Vec<u32>>,
    pub(super) access_level: AccessLevel,
    pub(super) user_access_level: AccessLevel,
    pub(super) minimum_sampling_interval: Option<f64>,
    pub(super) historizing: bool,
}

impl Default for Variable {
    fn default() -> Self {
        Self {
            base: Base::new(NodeClass::Variable, &NodeId::null(), "", ""),
            value: DataValue::null(),
            data_type: NodeId::null(),
            // Scalar by default
            value_rank: -1,
            array_dimensions: None,
            access_level: AccessLevel::CURRENT_READ,
            user_access_level: AccessLevel::CURRENT_READ,
            minimum_sampling_interval: None,
            historizing: false,
        }
    }
}

node_base_impl!(Variable);

impl Node for Variable {
    fn get_attribute(&self, attribute_id: AttributeId) -> Option<DataValue> {
        match attribute_id {
            AttributeId::Value => Some(self.value.clone()),
            AttributeId::DataType => Some(self.data_type.clone().into()),
            AttributeId::ValueRank => Some(self.value_rank.into()),
            AttributeId::ArrayDimensions => self
                .array_dimensions
                .clone()
                .map(|dimensions| dimensions.into()),
            AttributeId::AccessLevel => Some(self.access_level.bits().into()),
            AttributeId::UserAccessLevel => Some(self.user_access_level.bits().into()),
            AttributeId::MinimumSamplingInterval => {
                self.minimum_sampling_interval.map(|i| i.into())
            }
            AttributeId::Historizing => Some(self.historizing.into()),
            _ => self.base.get_attribute(attribute_id),
        }
    }

    fn set_attribute(
        &mut self,
        attribute_id: AttributeId,
        value: Variant,
    ) -> Result<(), StatusCode> {
        match attribute_id {
            AttributeId::Value => {
                self.set_value(value);
                Ok(())
            }
            AttributeId::DataType => {
                if let Variant::NodeId(v) = value {
                    self.data_type = *v;
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            AttributeId::ValueRank => {
                if let Variant::Int32(v) = value {
                    self.value_rank = v;
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            AttributeId::AccessLevel => {
                if let Variant::Byte(v) = value {
                    self.access_level = AccessLevel::from_bits_truncate(v);
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            AttributeId::UserAccessLevel => {
                if let Variant::Byte(v) = value {
                    self.user_access_level = AccessLevel::from_bits_truncate(v);
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            AttributeId::MinimumSamplingInterval => {
                if let Variant::Double(v) = value {
                    self.minimum_sampling_interval = Some(v);
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            AttributeId::Historizing => {
                if let Variant::Boolean(v) = value {
                    self.historizing = v;
                    Ok(())
                } else {
                    Err(StatusCode::BadTypeMismatch)
                }
            }
            _ => self.base.set_attribute(attribute_id, value),
        }
    }
}

impl Variable {
    /// Create a new variable with the given data type and initial value.
    pub fn new(
        node_id: &NodeId,
        browse_name: impl Into<QualifiedName>,
        display_name: impl Into<LocalizedText>,
        data_type: impl Into<NodeId>,
        value: impl Into<Variant>,
    ) -> Variable {
        Variable {
            base: Base::new(NodeClass::Variable, node_id, browse_name, display_name),
            value: DataValue::new_now(value),
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    /// Get whether this variable is valid.
    pub fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    /// Get the current value of this variable.
    pub fn value(&self) -> &DataValue {
        &self.value
    }

    /// Set the current value of this variable, stamping it with the current
    /// time.
    pub fn set_value(&mut self, value: impl Into<Variant>) {
        self.value = DataValue::new_now(value);
    }

    /// Get the data type of this variable.
    pub fn data_type(&self) -> &NodeId {
        &self.data_type
    }

    /// Set the data type of this variable.
    pub fn set_data_type(&mut self, data_type: impl Into<NodeId>) {
        self.data_type = data_type.into();
    }

    /// Get the value rank of this variable.
    pub fn value_rank(&self) -> i32 {
        self.value_rank
    }

    /// Set the value rank of this variable.
    pub fn set_value_rank(&mut self, value_rank: i32) {
        self.value_rank = value_rank;
    }

    /// Get the array dimensions of this variable, if any.
    pub fn array_dimensions(&self) -> Option<&[u32]> {
        self.array_dimensions.as_deref()
    }

    /// Set the array dimensions of this variable.
    pub fn set_array_dimensions(&mut self, array_dimensions: &[u32]) {
        self.array_dimensions = Some(array_dimensions.to_vec());
    }

    /// Get the access level of this variable.
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Set the access level of this variable.
    pub fn set_access_level(&mut self, access_level: AccessLevel) {
        self.access_level = access_level;
    }

    /// Get the user access level of this variable.
    pub fn user_access_level(&self) -> AccessLevel {
        self.user_access_level
    }

    /// Set the user access level of this variable.
    pub fn set_user_access_level(&mut self, user_access_level: AccessLevel) {
        self.user_access_level = user_access_level;
    }

    /// Get the minimum sampling interval of this variable, if one is set.
    pub fn minimum_sampling_interval(&self) -> Option<f64> {
        self.minimum_sampling_interval
    }

    /// Set the minimum sampling interval of this variable.
    pub fn set_minimum_sampling_interval(&mut self, minimum_sampling_interval: f64) {
        self.minimum_sampling_interval = Some(minimum_sampling_interval);
    }

    /// Get whether this variable's history is recorded.
    pub fn historizing(&self) -> bool {
        self.historizing
    }

    /// Set whether this variable's history is recorded.
    pub fn set_historizing(&mut self, historizing: bool) {
        self.historizing = historizing;
    }
}

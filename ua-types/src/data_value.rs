// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `DataValue`.

use crate::{date_time::DateTime, status_code::StatusCode, variant::Variant};

/// The value of a node attribute together with its status and timestamps.
/// Every field is optional; an absent status means `Good`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataValue {
    /// The attribute value, if one could be produced.
    pub value: Option<Variant>,
    /// The status associated with the value.
    pub status: Option<StatusCode>,
    /// The time the value was read from its source.
    pub source_timestamp: Option<DateTime>,
    /// The time the server received the value.
    pub server_timestamp: Option<DateTime>,
}

impl<T> From<T> for DataValue
where
    T: Into<Variant>,
{
    fn from(value: T) -> Self {
        DataValue::new_now(value)
    }
}

impl DataValue {
    /// Create a good data value stamped with the current time.
    pub fn new_now(value: impl Into<Variant>) -> DataValue {
        let now = DateTime::now();
        DataValue {
            value: Some(value.into()),
            status: Some(StatusCode::Good),
            source_timestamp: Some(now),
            server_timestamp: Some(now),
        }
    }

    /// Create an empty data value.
    pub fn null() -> DataValue {
        DataValue::default()
    }

    /// The status of the value. An unset status means the value is good.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::Good)
    }

    /// Return `true` if the value is usable, i.e. its status is not bad.
    pub fn is_valid(&self) -> bool {
        !self.status().is_bad()
    }
}

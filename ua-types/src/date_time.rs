// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `DateTime`.

use std::fmt;

use chrono::{TimeZone, Utc};

/// A UTC timestamp. OPC UA timestamps count from the Windows epoch but the
/// in-memory representation here is a `chrono` UTC date time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct DateTime {
    value: chrono::DateTime<Utc>,
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::null()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value.to_rfc3339())
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        DateTime { value }
    }
}

impl DateTime {
    /// The current time in UTC.
    pub fn now() -> DateTime {
        DateTime { value: Utc::now() }
    }

    /// The null time, i.e. the Unix epoch.
    pub fn null() -> DateTime {
        DateTime {
            value: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    /// Return `true` if this is the null time.
    pub fn is_null(&self) -> bool {
        *self == DateTime::null()
    }

    /// Access the wrapped `chrono` value.
    pub fn as_chrono(&self) -> &chrono::DateTime<Utc> {
        &self.value
    }
}

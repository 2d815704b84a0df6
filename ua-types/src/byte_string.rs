// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ByteString`.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

/// A sequence of opaque bytes, e.g. the payload of an opaque node identifier.
/// The canonical text form is base64.
#[derive(Eq, PartialEq, Clone, Hash, Default)]
pub struct ByteString {
    /// The raw bytes.
    pub value: Vec<u8>,
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ByteString({})", self.as_base64())
    }
}

impl<T: AsRef<[u8]>> From<T> for ByteString {
    fn from(value: T) -> Self {
        ByteString {
            value: value.as_ref().to_vec(),
        }
    }
}

impl ByteString {
    /// Create a byte string with no bytes in it.
    pub fn null() -> ByteString {
        ByteString { value: Vec::new() }
    }

    /// Return `true` if the byte string holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Decode a base64 string into a byte string.
    pub fn from_base64(data: &str) -> Option<ByteString> {
        STANDARD.decode(data).map(|value| ByteString { value }).ok()
    }

    /// Encode the byte string as base64.
    pub fn as_base64(&self) -> String {
        STANDARD.encode(&self.value)
    }
}

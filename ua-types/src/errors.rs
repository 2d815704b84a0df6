// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0

//! Rust-level errors for the types crate.

use thiserror::Error;

/// Error returned when a node id string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    /// The string does not match the `ns=N;t=...` syntax at all.
    #[error("Node id string has an invalid format")]
    InvalidFormat,
    /// The namespace portion is not a 16-bit unsigned integer.
    #[error("Node id namespace index is out of range")]
    InvalidNamespace,
    /// The identifier portion cannot be parsed for its declared type.
    #[error("Node id identifier portion is invalid")]
    InvalidIdentifier,
}

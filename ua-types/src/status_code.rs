// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the `StatusCode` type and the subset of OPC UA status codes this
//! project surfaces. The numeric values are taken from the official status
//! code table in Part 6.

use std::fmt;

/// An OPC UA status code. The top two bits encode the severity: `00` good,
/// `01` uncertain, `10` bad.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct StatusCode(u32);

macro_rules! status_codes {
    ( $( $doc:literal $name:ident = $value:literal; )* ) => {
        #[allow(non_upper_case_globals)]
        impl StatusCode {
            $(
                #[doc = $doc]
                pub const $name: StatusCode = StatusCode($value);
            )*

            /// The symbolic name of the status code, or `Unknown` for a code
            /// outside the table.
            pub fn name(&self) -> &'static str {
                match self.0 {
                    $( v if v == $value => stringify!($name), )*
                    _ => "Unknown",
                }
            }
        }
    };
}

status_codes! {
    "The operation succeeded." Good = 0x0000_0000;
    "An unexpected error occurred." BadUnexpectedError = 0x8001_0000;
    "The operation timed out." BadTimeout = 0x800A_0000;
    "There was nothing to do because the request contained no work." BadNothingToDo = 0x800F_0000;
    "The session was closed by the client." BadSessionClosed = 0x8026_0000;
    "The subscription id is not valid." BadSubscriptionIdInvalid = 0x8028_0000;
    "The node id syntax is not valid." BadNodeIdInvalid = 0x8033_0000;
    "The node id refers to a node that does not exist." BadNodeIdUnknown = 0x8034_0000;
    "The attribute is not supported for the specified node." BadAttributeIdInvalid = 0x8035_0000;
    "The browse name is not valid." BadBrowseNameInvalid = 0x8060_0000;
    "The requested operation has too many matches to return." BadTooManyMatches = 0x806D_0000;
    "The requested operation requires too many resources in the server." BadQueryTooComplex = 0x806E_0000;
    "The requested operation has no match to return." BadNoMatch = 0x806F_0000;
    "The value supplied for the attribute is not of the same type as the attribute's value." BadTypeMismatch = 0x8074_0000;
    "The operation cannot be completed because the object is in the wrong state." BadInvalidState = 0x80AF_0000;
    "One of the references to follow in the relative path references to a node in the address space in another server." UncertainReferenceOutOfServer = 0x406C_0000;
}

impl StatusCode {
    /// The raw numeric value of the status code.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Return `true` if the severity is good.
    pub fn is_good(&self) -> bool {
        self.0 >> 30 == 0
    }

    /// Return `true` if the severity is uncertain.
    pub fn is_uncertain(&self) -> bool {
        self.0 >> 30 == 1
    }

    /// Return `true` if the severity is bad.
    pub fn is_bad(&self) -> bool {
        self.0 >> 30 == 2
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

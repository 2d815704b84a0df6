// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `LocalizedText`.

use std::fmt;

/// A human readable text with an optional locale identifier.
#[derive(PartialEq, Eq, Clone, Debug, Hash, Default)]
pub struct LocalizedText {
    /// The locale, e.g. "en" or empty for unspecified.
    pub locale: String,
    /// The text in that locale.
    pub text: String,
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText {
            locale: String::new(),
            text: value.to_string(),
        }
    }
}

impl From<String> for LocalizedText {
    fn from(value: String) -> Self {
        LocalizedText {
            locale: String::new(),
            text: value,
        }
    }
}

impl LocalizedText {
    /// Create a new localized text from a locale and a text.
    pub fn new(locale: &str, text: &str) -> LocalizedText {
        LocalizedText {
            locale: locale.to_string(),
            text: text.to_string(),
        }
    }

    /// Create a null localized text.
    pub fn null() -> LocalizedText {
        LocalizedText::default()
    }

    /// Return `true` if the text portion is empty.
    pub fn is_null(&self) -> bool {
        self.text.is_empty()
    }
}

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Client publish pipeline configuration data.

use serde::{Deserialize, Serialize};

/// Configuration for the client publish engine.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PublishEngineConfig {
    /// The number of publish requests pipelined for each newly registered
    /// subscription. Keeping several requests outstanding means the server
    /// always holds one it can answer the moment a notification is due.
    #[serde(default = "defaults::pipeline_depth")]
    pub pipeline_depth: usize,
    /// The baseline request timeout hint in milliseconds. The hint only
    /// grows as subscriptions with larger hints register, and the effective
    /// hint on each request scales with the number of outstanding requests.
    #[serde(default = "defaults::timeout_hint_ms")]
    pub timeout_hint_ms: u32,
}

impl Default for PublishEngineConfig {
    fn default() -> Self {
        PublishEngineConfig {
            pipeline_depth: defaults::pipeline_depth(),
            timeout_hint_ms: defaults::timeout_hint_ms(),
        }
    }
}

impl PublishEngineConfig {
    /// Validate the config, returning a list of validation errors if it is
    /// unusable.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.pipeline_depth == 0 {
            errors.push("Pipeline depth must be at least 1.".to_owned());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

mod defaults {
    pub fn pipeline_depth() -> usize {
        5
    }

    pub fn timeout_hint_ms() -> u32 {
        10_000
    }
}

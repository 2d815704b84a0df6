// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! The client crate contains the client-side publish pipeline: the state
//! machine that keeps publish requests outstanding against a session,
//! batches acknowledgements, and routes publish responses to per
//! subscription callbacks.
//!
//! The session itself (transport, secure channel, request encoding) is a
//! collaborator; the engine only relies on the [`PublishSession`] contract.

mod config;
mod publish_engine;
mod session;

pub use config::PublishEngineConfig;
pub use publish_engine::ClientPublishEngine;
pub use session::{
    OnSubscriptionNotification, PublishResponseCallback, PublishSession, SubscriptionCallback,
};

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The client-side publish engine: a pipelined publish request issuer,
//! acknowledgement batcher, and response dispatcher.
//!
//! The engine owns no threads and never awaits. Every mutation happens on
//! the caller's thread during registration and acknowledgement, or inside
//! the session's response callback. Request issuance is deferred through a
//! small cooperative scheduler so the current stack unwinds before a request
//! is built, which is what lets acknowledgements pushed during a
//! notification callback ride along on the very next request.

use std::sync::Arc;

use hashbrown::HashMap;
use log::debug;
use parking_lot::Mutex;

use ua_types::{
    service_types::{PublishRequest, PublishResponse, RequestHeader, SubscriptionAcknowledgement},
    StatusCode,
};

use crate::{
    config::PublishEngineConfig,
    session::{OnSubscriptionNotification, PublishSession},
};

type SubscriptionCallbackRef = Arc<Mutex<dyn OnSubscriptionNotification>>;

struct EngineState {
    /// The session handle, cleared on terminate.
    session: Option<Arc<dyn PublishSession>>,
    /// Acknowledgements batched until the next request is built.
    subscription_acknowledgements: Vec<SubscriptionAcknowledgement>,
    /// One callback per registered subscription.
    callbacks: HashMap<u32, SubscriptionCallbackRef>,
    /// The timeout hint baseline in milliseconds, monotone non-decreasing
    /// under registration.
    timeout_hint: u32,
    active_subscription_count: u32,
    pending_publish_request_count: u32,
    next_request_handle: u32,
    /// Requests scheduled but not yet built, the ready queue of the
    /// cooperative scheduler.
    deferred_requests: usize,
    /// Latch held by the outermost draining frame.
    draining: bool,
}

struct EngineInner {
    config: PublishEngineConfig,
    state: Mutex<EngineState>,
}

/// The client-side publish engine. The handle is cheap to clone; all clones
/// share the same pipeline state.
#[derive(Clone)]
pub struct ClientPublishEngine {
    inner: Arc<EngineInner>,
}

impl ClientPublishEngine {
    /// Create a publish engine attached to a session, with default
    /// configuration.
    pub fn new(session: Arc<dyn PublishSession>) -> Self {
        Self::with_config(session, PublishEngineConfig::default())
    }

    /// Create a publish engine attached to a session. An unusable
    /// configuration is a programmer error and panics.
    pub fn with_config(session: Arc<dyn PublishSession>, config: PublishEngineConfig) -> Self {
        if let Err(errors) = config.validate() {
            panic!("Publish engine config is invalid: {}", errors.join(" "));
        }
        let timeout_hint = config.timeout_hint_ms;
        ClientPublishEngine {
            inner: Arc::new(EngineInner {
                config,
                state: Mutex::new(EngineState {
                    session: Some(session),
                    subscription_acknowledgements: Vec::new(),
                    callbacks: HashMap::new(),
                    timeout_hint,
                    active_subscription_count: 0,
                    pending_publish_request_count: 0,
                    next_request_handle: 0,
                    deferred_requests: 0,
                    draining: false,
                }),
            }),
        }
    }

    /// Register the callback receiving the notifications of a subscription
    /// and pipeline a burst of publish requests for it. The initial burst
    /// compensates for network latency; afterwards each response refills one
    /// request. Registering the same subscription twice is a programmer
    /// error and panics.
    pub fn register_subscription_callback(
        &self,
        subscription_id: u32,
        timeout_hint: u32,
        callback: impl OnSubscriptionNotification + 'static,
    ) {
        {
            let mut state = self.inner.state.lock();
            if state.callbacks.contains_key(&subscription_id) {
                panic!(
                    "Subscription {} already has a callback registered",
                    subscription_id
                );
            }
            state
                .callbacks
                .insert(subscription_id, Arc::new(Mutex::new(callback)));
            state.active_subscription_count += 1;
            // The hint only grows; the server treats it as advisory.
            state.timeout_hint = state.timeout_hint.max(timeout_hint);
            state.deferred_requests += self.inner.config.pipeline_depth;
        }
        self.drain_deferred();
    }

    /// Remove the callback of a subscription. In-flight requests are not
    /// cancelled; their responses will find no callback and be dropped.
    /// Unregistering an unknown subscription is a programmer error and
    /// panics.
    pub fn unregister_subscription_callback(&self, subscription_id: u32) {
        let mut state = self.inner.state.lock();
        if state.callbacks.remove(&subscription_id).is_none() {
            panic!(
                "Subscription {} has no callback registered",
                subscription_id
            );
        }
        state.active_subscription_count -= 1;
    }

    /// Queue an acknowledgement for a notification. It rides along on the
    /// next publish request that is built.
    pub fn acknowledge_notification(&self, subscription_id: u32, sequence_number: u32) {
        self.inner
            .state
            .lock()
            .subscription_acknowledgements
            .push(SubscriptionAcknowledgement {
                subscription_id,
                sequence_number,
            });
    }

    /// Drop every queued acknowledgement belonging to a subscription. Used
    /// when a subscription is torn down before its acknowledgements flush.
    pub fn cleanup_acknowledgments_for_subscription(&self, subscription_id: u32) {
        self.inner
            .state
            .lock()
            .subscription_acknowledgements
            .retain(|ack| ack.subscription_id != subscription_id);
    }

    /// Detach the engine from its session. Idempotent. No further requests
    /// are issued and responses still in flight are dropped without
    /// dispatch.
    pub fn terminate(&self) {
        self.inner.state.lock().session = None;
    }

    /// The number of subscriptions with a registered callback.
    pub fn subscription_count(&self) -> usize {
        self.inner.state.lock().callbacks.len()
    }

    /// The number of publish requests currently outstanding against the
    /// session.
    pub fn pending_publish_request_count(&self) -> u32 {
        self.inner.state.lock().pending_publish_request_count
    }

    /// Schedule one publish request. The request is built and issued after
    /// the current engine operation completes, so acknowledgements queued on
    /// the current stack are included.
    pub fn send_publish_request(&self) {
        self.inner.state.lock().deferred_requests += 1;
        self.drain_deferred();
    }

    /// Issue every scheduled request. Only the outermost frame drains;
    /// nested calls (a notification callback scheduling more work) return
    /// immediately and leave the work to the frame holding the latch.
    fn drain_deferred(&self) {
        {
            let mut state = self.inner.state.lock();
            if state.draining {
                return;
            }
            state.draining = true;
        }
        loop {
            while let Some((session, request)) = self.next_publish_request() {
                let engine = self.clone();
                session.publish(
                    request,
                    Box::new(move |result| engine.handle_publish_response(result)),
                );
            }
            let mut state = self.inner.state.lock();
            // Requests scheduled while the latch was held are drained here
            // rather than lost.
            if state.deferred_requests == 0 {
                state.draining = false;
                return;
            }
        }
    }

    /// Build the next scheduled publish request: count it as pending, drain
    /// the acknowledgement batch, and scale the timeout hint by the number
    /// of outstanding requests. Scheduled requests on a terminated engine
    /// are dropped silently.
    fn next_publish_request(&self) -> Option<(Arc<dyn PublishSession>, PublishRequest)> {
        let mut state = self.inner.state.lock();
        while state.deferred_requests > 0 {
            state.deferred_requests -= 1;
            let Some(session) = state.session.clone() else {
                continue;
            };
            state.pending_publish_request_count += 1;
            state.next_request_handle = state.next_request_handle.wrapping_add(1);
            let acknowledgements = std::mem::take(&mut state.subscription_acknowledgements);
            // A server that mishandles timeout_hint = 0 with BadTimeout must
            // never see a hint shorter than its keep-alive interval, so the
            // hint grows with the pipeline depth.
            let timeout_hint = state
                .pending_publish_request_count
                .saturating_mul(state.timeout_hint);
            let request = PublishRequest {
                request_header: RequestHeader::new(state.next_request_handle, timeout_hint),
                subscription_acknowledgements: if acknowledgements.is_empty() {
                    None
                } else {
                    Some(acknowledgements)
                },
            };
            return Some((session, request));
        }
        None
    }

    /// Invoked by the session once per request, with the response or a
    /// transport error. Either way the request is no longer outstanding, and
    /// the pipeline refills by one as long as subscriptions remain.
    fn handle_publish_response(&self, result: Result<PublishResponse, StatusCode>) {
        {
            let mut state = self.inner.state.lock();
            state.pending_publish_request_count =
                state.pending_publish_request_count.saturating_sub(1);
        }
        match result {
            Ok(response) => self.receive_publish_response(response),
            Err(status) => debug!("Publish request returned an error {}", status),
        }
        let refill = {
            let state = self.inner.state.lock();
            state.session.is_some() && state.active_subscription_count > 0
        };
        if refill {
            self.send_publish_request();
        }
    }

    /// Route a publish response to its subscription callback. Notification
    /// messages with data are queued for acknowledgement; keep-alives are
    /// not acknowledged. Responses with no callback, or arriving after
    /// terminate, are dropped.
    fn receive_publish_response(&self, response: PublishResponse) {
        let subscription_id = response.subscription_id;
        let notification_message = response.notification_message;
        let notification_data = notification_message.notification_data.unwrap_or_default();
        let publish_time = notification_message.publish_time;

        let callback = {
            let mut state = self.inner.state.lock();
            if !notification_data.is_empty() {
                state
                    .subscription_acknowledgements
                    .push(SubscriptionAcknowledgement {
                        subscription_id,
                        sequence_number: notification_message.sequence_number,
                    });
            }
            if state.session.is_none() {
                debug!(
                    "Publish response for subscription {} dropped, the engine is terminated",
                    subscription_id
                );
                return;
            }
            let Some(callback) = state.callbacks.get(&subscription_id) else {
                debug!(
                    "Publish response for subscription {} dropped, no callback is registered",
                    subscription_id
                );
                return;
            };
            callback.clone()
        };
        // The engine lock is released around user code so a callback can
        // acknowledge or unregister without deadlocking.
        callback.lock().on_notification(notification_data, publish_time);
    }
}

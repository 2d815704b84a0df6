// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The contracts between the publish engine and its collaborators: the slice
//! of a session the engine drives, and the callbacks it routes notifications
//! to.

use ua_types::{
    service_types::{NotificationData, PublishRequest, PublishResponse},
    DateTime, StatusCode,
};

/// Callback invoked with the outcome of a publish call. Invoked at most once
/// per call.
pub type PublishResponseCallback = Box<dyn FnOnce(Result<PublishResponse, StatusCode>) + Send>;

/// The slice of a session the publish engine relies on. The session owns the
/// transport and the request encoding; the engine only hands it fully formed
/// publish requests. Response ordering across calls is preserved.
pub trait PublishSession: Send + Sync {
    /// Issue a publish request. The callback fires when the matching
    /// response or a transport error arrives.
    fn publish(&self, request: PublishRequest, callback: PublishResponseCallback);
}

/// Receives the notification messages of one subscription.
/// You may implement this on your own struct, or simply use
/// [SubscriptionCallback] to wrap a closure.
pub trait OnSubscriptionNotification: Send {
    /// Called once per publish response routed to this subscription. A
    /// keep-alive arrives as an empty notification list.
    fn on_notification(
        &mut self,
        notification_data: Vec<NotificationData>,
        publish_time: DateTime,
    );
}

type NotificationCallbackFun = dyn FnMut(Vec<NotificationData>, DateTime) + Send;

/// A convenient wrapper around a notification closure that implements
/// [OnSubscriptionNotification].
pub struct SubscriptionCallback {
    notification: Box<NotificationCallbackFun>,
}

impl SubscriptionCallback {
    /// Create a new subscription callback wrapper.
    ///
    /// # Arguments
    ///
    /// * `notification` - Called for each notification message routed to the
    ///   subscription.
    pub fn new(
        notification: impl FnMut(Vec<NotificationData>, DateTime) + Send + 'static,
    ) -> Self {
        Self {
            notification: Box::new(notification) as Box<NotificationCallbackFun>,
        }
    }
}

impl OnSubscriptionNotification for SubscriptionCallback {
    fn on_notification(
        &mut self,
        notification_data: Vec<NotificationData>,
        publish_time: DateTime,
    ) {
        (self.notification)(notification_data, publish_time);
    }
}

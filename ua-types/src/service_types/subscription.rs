// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Types for the subscription service set: the publish request/response pair
//! and the notification message payloads.

use crate::{data_value::DataValue, date_time::DateTime, status_code::StatusCode};

/// The common header carried by every service request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeader {
    /// The time the request was issued.
    pub timestamp: DateTime,
    /// A client-assigned handle identifying the request.
    pub request_handle: u32,
    /// A hint, in milliseconds, for how long the server should hold the
    /// request before abandoning it. Zero means no timeout, although some
    /// servers misinterpret that.
    pub timeout_hint: u32,
}

impl Default for RequestHeader {
    fn default() -> Self {
        RequestHeader {
            timestamp: DateTime::now(),
            request_handle: 0,
            timeout_hint: 0,
        }
    }
}

impl RequestHeader {
    /// Create a request header with the given timeout hint, stamped now.
    pub fn new(request_handle: u32, timeout_hint: u32) -> RequestHeader {
        RequestHeader {
            timestamp: DateTime::now(),
            request_handle,
            timeout_hint,
        }
    }
}

/// The common header carried by every service response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseHeader {
    /// The time the response was produced.
    pub timestamp: DateTime,
    /// The handle of the request this responds to.
    pub request_handle: u32,
    /// The overall outcome of the service call.
    pub service_result: StatusCode,
}

/// Confirms receipt of a notification message for a subscription so the
/// server can release it from its retransmission queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionAcknowledgement {
    /// The subscription the notification belonged to.
    pub subscription_id: u32,
    /// The sequence number of the acknowledged notification.
    pub sequence_number: u32,
}

/// Asks the server for the next notification message on any subscription,
/// acknowledging previously received messages in the same breath.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublishRequest {
    /// The request header.
    pub request_header: RequestHeader,
    /// The batched acknowledgements.
    pub subscription_acknowledgements: Option<Vec<SubscriptionAcknowledgement>>,
}

/// The server's answer to a publish request, carrying one notification
/// message for one subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResponse {
    /// The response header.
    pub response_header: ResponseHeader,
    /// The subscription the notification message belongs to.
    pub subscription_id: u32,
    /// Sequence numbers the server still holds for retransmission.
    pub available_sequence_numbers: Option<Vec<u32>>,
    /// Whether more notifications are queued for this subscription.
    pub more_notifications: bool,
    /// The notification message itself.
    pub notification_message: NotificationMessage,
}

/// A notification message for a subscription. A message with no notification
/// data is a keep-alive.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage {
    /// The sequence number of this message within the subscription.
    pub sequence_number: u32,
    /// The time the message was published.
    pub publish_time: DateTime,
    /// The notifications, or none for a keep-alive.
    pub notification_data: Option<Vec<NotificationData>>,
}

impl NotificationMessage {
    /// Create a notification message carrying data change notifications.
    /// Calling this with no notifications will panic; use
    /// [`NotificationMessage::keep_alive`] for an empty message.
    pub fn data_change(
        sequence_number: u32,
        publish_time: DateTime,
        monitored_items: Vec<MonitoredItemNotification>,
    ) -> NotificationMessage {
        if monitored_items.is_empty() {
            panic!("No notifications supplied to data_change()");
        }
        NotificationMessage {
            sequence_number,
            publish_time,
            notification_data: Some(vec![NotificationData::DataChange(DataChangeNotification {
                monitored_items: Some(monitored_items),
            })]),
        }
    }

    /// Create a status change notification message.
    pub fn status_change(
        sequence_number: u32,
        publish_time: DateTime,
        status: StatusCode,
    ) -> NotificationMessage {
        NotificationMessage {
            sequence_number,
            publish_time,
            notification_data: Some(vec![NotificationData::StatusChange(
                StatusChangeNotification { status },
            )]),
        }
    }

    /// Create a keep-alive notification message.
    pub fn keep_alive(sequence_number: u32, publish_time: DateTime) -> NotificationMessage {
        NotificationMessage {
            sequence_number,
            publish_time,
            notification_data: None,
        }
    }

    /// Return `true` if this message is a keep-alive, i.e. carries no
    /// notifications.
    pub fn is_keep_alive(&self) -> bool {
        self.notification_data
            .as_ref()
            .map(|d| d.is_empty())
            .unwrap_or(true)
    }
}

/// One notification payload. On the wire these are extension objects; with
/// encoding out of scope the payload kinds collapse to a sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationData {
    /// Changed values of monitored items.
    DataChange(DataChangeNotification),
    /// A change of the subscription's state on the server.
    StatusChange(StatusChangeNotification),
}

/// The changed values of one or more monitored items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataChangeNotification {
    /// The changed values.
    pub monitored_items: Option<Vec<MonitoredItemNotification>>,
}

/// A changed value for a single monitored item.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredItemNotification {
    /// The client-assigned handle of the monitored item.
    pub client_handle: u32,
    /// The new value.
    pub value: DataValue,
}

/// Notifies the client that the subscription changed state on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeNotification {
    /// The new status of the subscription.
    pub status: StatusCode,
}

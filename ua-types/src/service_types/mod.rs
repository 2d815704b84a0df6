// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The semantic shapes of the service messages this project consumes and
//! produces. Encoding and decoding these is the concern of the wire layer,
//! which is out of scope here.

mod subscription;
mod view;

pub use subscription::{
    DataChangeNotification, MonitoredItemNotification, NotificationData, NotificationMessage,
    PublishRequest, PublishResponse, RequestHeader, ResponseHeader, StatusChangeNotification,
    SubscriptionAcknowledgement,
};
pub use view::{
    BrowsePath, BrowsePathResult, BrowsePathTarget, RelativePath, RelativePathElement,
    MATCHED_ENTIRE_PATH,
};

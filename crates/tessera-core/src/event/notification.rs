// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::object::ObjectId;
use serde::{Deserialize, Serialize};

/// Which family of listeners a notification is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotifierCategory {
    /// Data-block set of the document.
    Id,
    /// Asset catalog views.
    Asset,
    /// Scene contents.
    Scene,
}

/// What happened to the subject of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotifierAction {
    /// Something was added.
    Added,
    /// Something was modified.
    Edited,
    /// Something was removed.
    Removed,
}

/// A "something changed" message for UI and other listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Listener family.
    pub category: NotifierCategory,
    /// Kind of change.
    pub action: NotifierAction,
    /// The affected data-block, when listeners need it.
    pub reference: Option<ObjectId>,
}

impl Notification {
    /// A generic "data-blocks edited" notification without a subject.
    pub const fn id_edited() -> Self {
        Self {
            category: NotifierCategory::Id,
            action: NotifierAction::Edited,
            reference: None,
        }
    }
}

/// Sink for notifications.
pub trait Notifier {
    /// Publishes a notification. Delivery failures are logged, never returned.
    fn notify(&self, notification: Notification);
}

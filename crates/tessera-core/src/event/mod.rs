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

//! Primitives for telling other subsystems that the document changed.
//!
//! [`EventBus`] is a generic MPSC channel; [`Notification`] is the payload the
//! editor publishes on it, and [`Notifier`] is the narrow interface the editor
//! depends on so that tests can substitute a recorder.

mod bus;
mod notification;

pub use self::bus::EventBus;
pub use self::notification::*;

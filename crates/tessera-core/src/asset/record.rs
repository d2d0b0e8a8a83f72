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

use super::AssetUUID;
use crate::object::ObjectId;
use serde::{Deserialize, Serialize};

/// Payload of a data-block of kind `Asset`.
///
/// The record points at the object it wraps but does not own it: the
/// registry keeps the referenced object alive through its own user count.
/// Its thumbnail lives on the owning [`DataBlock`](crate::object::DataBlock).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Stable identifier of the asset, independent of its registry slot.
    pub uuid: AssetUUID,

    /// The object this asset stands for, if it is still linked.
    pub referenced: Option<ObjectId>,
}

impl AssetRecord {
    /// Creates an unlinked record with a fresh identifier.
    pub fn new() -> Self {
        Self::default()
    }
}

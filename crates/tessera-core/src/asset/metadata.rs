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

use serde::{Deserialize, Serialize};

/// Metadata attached to an object once asset management is enabled for it.
///
/// Its presence is what matters: an object with `Some(AssetMetadata)` is an
/// asset and cannot be promoted again. The fields are optional catalog
/// information and are all empty on a freshly created value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Free-form description shown in the asset browser.
    pub description: Option<String>,

    /// Author credited for the asset.
    pub author: Option<String>,

    /// Semantic tags for filtering and search.
    pub tags: Vec<String>,
}

impl AssetMetadata {
    /// Creates empty metadata, marking an object as asset-enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no catalog information has been filled in yet.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.author.is_none() && self.tags.is_empty()
    }

    /// Adds a tag unless it is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

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

use super::PreviewImage;
use crate::object::DataBlock;
use serde::{Deserialize, Serialize};

/// Which of the two standard preview resolutions to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewSize {
    /// Small list icon.
    Icon,
    /// Large thumbnail used by the asset browser.
    #[default]
    Large,
}

/// Parameters for a single preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Requested resolution class.
    pub size: PreviewSize,
    /// Hint that the renderer may schedule the work on its own threads.
    /// The call still returns a finished image.
    pub deferred: bool,
}

/// Produces thumbnails for data-blocks.
///
/// Calls are synchronous from the caller's point of view. An implementation
/// backed by a job system must block until the image is ready.
pub trait PreviewRenderer {
    /// Renders a preview of `block`.
    fn render_preview(&self, block: &DataBlock, options: &PreviewOptions) -> PreviewImage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_snake_case_size() {
        let options: PreviewOptions =
            serde_json::from_str(r#"{ "size": "icon", "deferred": true }"#).unwrap();
        assert_eq!(options.size, PreviewSize::Icon);
        assert!(options.deferred);
    }

    #[test]
    fn default_options_request_a_large_blocking_preview() {
        let options = PreviewOptions::default();
        assert_eq!(options.size, PreviewSize::Large);
        assert!(!options.deferred);
    }
}

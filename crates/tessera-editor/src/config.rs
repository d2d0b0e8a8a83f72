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

//! Editor configuration, loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tessera_core::preview::{PreviewOptions, PreviewSize};
use thiserror::Error;

/// Failure to read or write a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The content is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Preview generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Size class requested when an asset preview is generated.
    pub size: PreviewSize,
    /// Allow the renderer to use its own job system.
    pub deferred: bool,
    /// Edge length of icon previews, in pixels.
    pub icon_resolution: u32,
    /// Edge length of large previews, in pixels.
    pub large_resolution: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            size: PreviewSize::Large,
            deferred: false,
            icon_resolution: 32,
            large_resolution: 128,
        }
    }
}

impl PreviewConfig {
    /// The per-request options derived from these settings.
    pub fn options(&self) -> PreviewOptions {
        PreviewOptions {
            size: self.size,
            deferred: self.deferred,
        }
    }
}

/// Complete editor configuration.
///
/// Missing sections and fields fall back to their defaults, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Preview generation settings.
    pub preview: PreviewConfig,
}

impl EditorConfig {
    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

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

use crate::config::EditorConfig;
use tessera_core::event::Notifier;
use tessera_core::object::ObjectRegistry;
use tessera_core::preview::PreviewRenderer;

/// The collaborators available to an operator while it runs.
///
/// Everything is passed in explicitly; operators never reach for global
/// state, which lets tests drive them against a throwaway document.
pub struct OperatorContext<'a> {
    /// The working document's data-block registry.
    pub registry: &'a mut dyn ObjectRegistry,
    /// Thumbnail producer.
    pub renderer: &'a dyn PreviewRenderer,
    /// Where "something changed" notifications go.
    pub notifier: &'a dyn Notifier,
    /// Active editor configuration.
    pub config: &'a EditorConfig,
}

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

//! Asset-side vocabulary shared by the registry and the editor.
//!
//! An object becomes "asset-enabled" when it carries an [`AssetMetadata`].
//! The catalog-visible entry that wraps such an object is an [`AssetRecord`],
//! stored as the payload of a data-block of kind [`ObjectKind::Asset`].
//!
//! [`ObjectKind::Asset`]: crate::object::ObjectKind::Asset

mod metadata;
mod record;
mod uuid;

pub use metadata::*;
pub use record::*;
pub use self::uuid::*;

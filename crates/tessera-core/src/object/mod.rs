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

//! Data-blocks and the registry contract that owns them.
//!
//! - [`ObjectId`]: generational handle to a registry slot.
//! - [`ObjectKind`]: the type tag of a data-block.
//! - [`DataBlock`]: the record stored per slot (name, users, payload, ...).
//! - [`ObjectRegistry`]: the interface the editor uses to allocate, copy,
//!   discard and reference-count data-blocks.

mod block;
mod id;
mod kind;
mod registry;

pub use block::*;
pub use id::*;
pub use kind::*;
pub use registry::*;

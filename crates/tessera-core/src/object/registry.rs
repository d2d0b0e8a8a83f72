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

use super::{DataBlock, ObjectId, ObjectKind};
use thiserror::Error;

/// Failures reported by an [`ObjectRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The id does not resolve to a live data-block.
    #[error("no data-block with id {0}")]
    NotFound(ObjectId),
    /// The registry cannot hold any more data-blocks.
    #[error("registry is full ({capacity} data-blocks)")]
    Exhausted {
        /// The configured maximum number of live data-blocks.
        capacity: usize,
    },
    /// The data-block has no data payload and cannot use other data-blocks.
    #[error("data-block {0} cannot hold references")]
    CannotReference(ObjectId),
    /// Data-blocks of this kind cannot be duplicated.
    #[error("data-blocks of kind {0} cannot be copied")]
    NotCopyable(ObjectKind),
}

/// The store of all live data-blocks in a working document.
///
/// The registry owns every data-block together with its user count, its
/// fake user and its links to other data-blocks. Callers hold [`ObjectId`]s
/// and can only read that bookkeeping; it changes solely through the
/// structural operations below.
pub trait ObjectRegistry {
    /// Looks up a data-block.
    fn get(&self, id: ObjectId) -> Option<&DataBlock>;

    /// Looks up a data-block's content for modification.
    fn get_mut(&mut self, id: ObjectId) -> Option<&mut DataBlock>;

    /// Number of users of a data-block, the fake user included.
    fn users(&self, id: ObjectId) -> Option<u32>;

    /// Whether the fake user of a data-block is set.
    fn has_fake_user(&self, id: ObjectId) -> Option<bool>;

    /// Data-blocks that `id` uses, each holding one user on its target.
    /// Empty for an unknown id.
    fn references(&self, id: ObjectId) -> &[ObjectId];

    /// Creates a new, unused data-block of `kind` named `name`.
    fn allocate(&mut self, kind: ObjectKind, name: &str) -> Result<ObjectId, RegistryError>;

    /// Copies a data-block into a new slot.
    ///
    /// The copy is deep, starts without users, and adds one user to every
    /// live data-block the source references.
    fn duplicate(&mut self, id: ObjectId) -> Result<ObjectId, RegistryError>;

    /// Removes a data-block regardless of its user count and returns its
    /// content. The users it held on other data-blocks are released.
    fn discard(&mut self, id: ObjectId) -> Result<DataBlock, RegistryError>;

    /// Sets the fake user, keeping the data-block alive without real users.
    fn increment_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError>;

    /// Clears the fake user.
    fn decrement_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError>;

    /// Returns `true` if the id resolves to a live data-block.
    fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live data-blocks.
    fn len(&self) -> usize;

    /// Returns `true` if the registry holds no data-blocks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

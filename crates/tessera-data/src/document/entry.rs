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

//! Per-slot bookkeeping kept next to a data-block's content.

use tessera_core::object::{DataBlock, ObjectId};

/// A live data-block plus the user counting the document owns for it.
///
/// Only the document touches the counts and links; callers outside the
/// crate see the `block` alone.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub block: DataBlock,
    users: u32,
    fake_user: bool,
    references: Vec<ObjectId>,
}

impl Entry {
    /// Wraps content with no users and no links.
    pub fn new(block: DataBlock) -> Self {
        Self {
            block,
            users: 0,
            fake_user: false,
            references: Vec::new(),
        }
    }

    /// Number of users, the fake user included.
    pub fn users(&self) -> u32 {
        self.users
    }

    pub fn has_fake_user(&self) -> bool {
        self.fake_user
    }

    /// Data-blocks this one holds a user on.
    pub fn references(&self) -> &[ObjectId] {
        &self.references
    }

    /// Records a link. The caller adds the matching user on `target`.
    pub fn push_reference(&mut self, target: ObjectId) {
        self.references.push(target);
    }

    /// Drops every link to `target`, returning how many were dropped.
    pub fn unlink(&mut self, target: ObjectId) -> usize {
        let before = self.references.len();
        self.references.retain(|id| *id != target);
        before - self.references.len()
    }

    /// Same content and links, but no users and no fake user.
    pub fn duplicate(&self) -> Self {
        Self {
            block: self.block.clone(),
            users: 0,
            fake_user: false,
            references: self.references.clone(),
        }
    }

    pub fn add_user(&mut self) {
        self.users = self.users.saturating_add(1);
    }

    /// Removes one real user. Never drops below the fake user's share.
    pub fn remove_user(&mut self) {
        let floor = u32::from(self.fake_user);
        if self.users > floor {
            self.users -= 1;
        }
    }

    /// Sets the fake user. Returns `false` if it was already set.
    pub fn set_fake_user(&mut self) -> bool {
        if self.fake_user {
            return false;
        }
        self.fake_user = true;
        self.add_user();
        true
    }

    /// Clears the fake user. Returns `false` if it was not set.
    pub fn clear_fake_user(&mut self) -> bool {
        if !self.fake_user {
            return false;
        }
        self.fake_user = false;
        self.users = self.users.saturating_sub(1);
        true
    }
}

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

//! The in-memory data-block registry of a working document.

mod entry;
mod slots;

use self::entry::Entry;
use self::slots::SlotStore;
use tessera_core::object::{DataBlock, ObjectId, ObjectKind, ObjectRegistry, RegistryError};

/// All live data-blocks of one working file.
///
/// The document owns its data-blocks and keeps user counts consistent:
/// links recorded through [`Document::add_reference`] or copied by
/// duplication hold one user on their target, and are released again when
/// the linking data-block is discarded. Links and counts live beside the
/// content, so nothing handed out by [`ObjectRegistry::get_mut`] can change
/// them.
#[derive(Debug, Clone, Default)]
pub struct Document {
    slots: SlotStore,
    capacity: Option<usize>,
}

impl Document {
    /// Creates an empty, unbounded document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document that refuses to hold more than `capacity`
    /// data-blocks.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            slots: SlotStore::new(),
            capacity: Some(capacity),
        }
    }

    /// Adds a fully built data-block, unused and unlinked, as a file loader
    /// would before restoring links with [`Document::add_reference`].
    pub fn insert(&mut self, block: DataBlock) -> Result<ObjectId, RegistryError> {
        self.ensure_capacity()?;
        let id = self.slots.insert(Entry::new(block));
        log::trace!("Document: inserted data-block {id}");
        Ok(id)
    }

    /// Records that `from` uses `to`, adding one user to `to`.
    ///
    /// Asset records cannot hold data references.
    pub fn add_reference(&mut self, from: ObjectId, to: ObjectId) -> Result<(), RegistryError> {
        if self.slots.get(to).is_none() {
            return Err(RegistryError::NotFound(to));
        }
        let source = self.slots.get_mut(from).ok_or(RegistryError::NotFound(from))?;
        if source.block.data().is_none() {
            return Err(RegistryError::CannotReference(from));
        }
        source.push_reference(to);
        if let Some(target) = self.slots.get_mut(to) {
            target.add_user();
        }
        Ok(())
    }

    /// Finds the first data-block of `kind` named `name`.
    pub fn find(&self, kind: ObjectKind, name: &str) -> Option<ObjectId> {
        self.iter()
            .find(|(_, block)| block.kind() == kind && block.name == name)
            .map(|(id, _)| id)
    }

    /// Iterates over live data-blocks in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &DataBlock)> {
        self.slots.iter().map(|(id, entry)| (id, &entry.block))
    }

    /// Ids of every live data-block of `kind`.
    pub fn ids_of_kind(&self, kind: ObjectKind) -> Vec<ObjectId> {
        self.iter()
            .filter(|(_, block)| block.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of live data-blocks of `kind`.
    pub fn count_of_kind(&self, kind: ObjectKind) -> usize {
        self.iter().filter(|(_, block)| block.kind() == kind).count()
    }

    /// Removes every data-block without users, repeating until none is left,
    /// since a removal can release the last user of another block.
    ///
    /// Returns how many data-blocks were removed.
    pub fn purge_orphans(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let orphans: Vec<ObjectId> = self
                .slots
                .iter()
                .filter(|(_, entry)| entry.users() == 0)
                .map(|(id, _)| id)
                .collect();
            if orphans.is_empty() {
                break;
            }
            for id in orphans {
                if self.release(id).is_some() {
                    removed += 1;
                }
            }
        }
        if removed > 0 {
            log::info!("Document: purged {removed} orphan data-block(s)");
        }
        removed
    }

    fn ensure_capacity(&self) -> Result<(), RegistryError> {
        match self.capacity {
            Some(capacity) if self.slots.len() >= capacity => {
                log::error!("Document: capacity of {capacity} data-blocks reached");
                Err(RegistryError::Exhausted { capacity })
            }
            _ => Ok(()),
        }
    }

    /// Removes an entry, releases the users it held, and unlinks everything
    /// that pointed at it.
    fn release(&mut self, id: ObjectId) -> Option<Entry> {
        let entry = self.slots.remove(id)?;
        for target in entry.references() {
            if let Some(target) = self.slots.get_mut(*target) {
                target.remove_user();
            }
        }
        for (_, other) in self.slots.iter_mut() {
            other.unlink(id);
            if let Some(record) = other.block.asset_record_mut() {
                if record.referenced == Some(id) {
                    record.referenced = None;
                }
            }
        }
        Some(entry)
    }
}

impl ObjectRegistry for Document {
    fn get(&self, id: ObjectId) -> Option<&DataBlock> {
        self.slots.get(id).map(|entry| &entry.block)
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut DataBlock> {
        self.slots.get_mut(id).map(|entry| &mut entry.block)
    }

    fn users(&self, id: ObjectId) -> Option<u32> {
        self.slots.get(id).map(Entry::users)
    }

    fn has_fake_user(&self, id: ObjectId) -> Option<bool> {
        self.slots.get(id).map(Entry::has_fake_user)
    }

    fn references(&self, id: ObjectId) -> &[ObjectId] {
        self.slots.get(id).map(Entry::references).unwrap_or(&[])
    }

    fn allocate(&mut self, kind: ObjectKind, name: &str) -> Result<ObjectId, RegistryError> {
        self.ensure_capacity()?;
        let id = self.slots.insert(Entry::new(DataBlock::new(kind, name)));
        log::debug!("Document: allocated {kind} '{name}' as {id}");
        Ok(id)
    }

    fn duplicate(&mut self, id: ObjectId) -> Result<ObjectId, RegistryError> {
        let source = self.slots.get(id).ok_or(RegistryError::NotFound(id))?;
        let kind = source.block.kind();
        if !kind.is_copyable() {
            return Err(RegistryError::NotCopyable(kind));
        }
        self.ensure_capacity()?;

        // Links only ever point at live entries: release unlinks the dead.
        let copy = source.duplicate();
        for target in copy.references() {
            if let Some(target) = self.slots.get_mut(*target) {
                target.add_user();
            }
        }

        let copy_id = self.slots.insert(copy);
        log::debug!("Document: duplicated {id} into {copy_id}");
        Ok(copy_id)
    }

    fn discard(&mut self, id: ObjectId) -> Result<DataBlock, RegistryError> {
        let entry = self.release(id).ok_or(RegistryError::NotFound(id))?;
        log::debug!(
            "Document: discarded {} '{}' ({id})",
            entry.block.kind(),
            entry.block.name
        );
        Ok(entry.block)
    }

    fn increment_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError> {
        self.slots
            .get_mut(id)
            .ok_or(RegistryError::NotFound(id))?
            .set_fake_user();
        Ok(())
    }

    fn decrement_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError> {
        self.slots
            .get_mut(id)
            .ok_or(RegistryError::NotFound(id))?
            .clear_fake_user();
        Ok(())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

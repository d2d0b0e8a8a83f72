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

//! Internal slot storage and id management.

use super::entry::Entry;
use tessera_core::object::ObjectId;

/// Dense list of data-block slots with index recycling.
///
/// A slot holds `Some(entry)` while its data-block is alive. Freed indices
/// are reused with an incremented generation, so stale ids fail to resolve.
#[derive(Debug, Clone, Default)]
pub(crate) struct SlotStore {
    slots: Vec<(ObjectId, Option<Entry>)>,
    freed: Vec<u32>,
    live: usize,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry in a new or recycled slot.
    pub fn insert(&mut self, entry: Entry) -> ObjectId {
        self.live += 1;
        if let Some(index) = self.freed.pop() {
            let (id_slot, block_slot) = &mut self.slots[index as usize];
            id_slot.generation += 1;
            *block_slot = Some(entry);
            *id_slot
        } else {
            let id = ObjectId::new(self.slots.len() as u32, 0);
            self.slots.push((id, Some(entry)));
            id
        }
    }

    /// Takes the entry out of its slot and frees the index.
    pub fn remove(&mut self, id: ObjectId) -> Option<Entry> {
        let (slot_id, block) = self.slots.get_mut(id.index as usize)?;
        if slot_id.generation != id.generation {
            return None;
        }
        let block = block.take()?;
        self.freed.push(id.index);
        self.live -= 1;
        Some(block)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Entry> {
        self.slots
            .get(id.index as usize)
            .and_then(|(slot_id, block)| {
                if slot_id.generation == id.generation {
                    block.as_ref()
                } else {
                    None
                }
            })
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index as usize)
            .and_then(|(slot_id, block)| {
                if slot_id.generation == id.generation {
                    block.as_mut()
                } else {
                    None
                }
            })
    }

    /// Number of live blocks.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Iterates over live blocks in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Entry)> {
        self.slots
            .iter()
            .filter_map(|(id, block)| block.as_ref().map(|block| (*id, block)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut Entry)> {
        self.slots
            .iter_mut()
            .filter_map(|(id, block)| block.as_mut().map(|block| (*id, block)))
    }
}

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

use std::collections::HashMap;
use tessera_core::object::ObjectId;

/// A pointer-valued operator property.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataPointer {
    /// Points at nothing.
    #[default]
    Null,
    /// Points at a registry data-block.
    Id(ObjectId),
    /// Points at some other editor structure that is not a data-block.
    Struct {
        /// Name of the pointed-to structure type.
        type_name: String,
    },
}

impl DataPointer {
    /// The data-block id, if this points at one.
    pub fn as_id(&self) -> Option<ObjectId> {
        match self {
            DataPointer::Id(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<ObjectId> for DataPointer {
    fn from(id: ObjectId) -> Self {
        DataPointer::Id(id)
    }
}

/// Parameters of one operator invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorProperties {
    pointers: HashMap<String, DataPointer>,
}

impl OperatorProperties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set_pointer`](Self::set_pointer).
    pub fn with_pointer(
        mut self,
        name: impl Into<String>,
        pointer: impl Into<DataPointer>,
    ) -> Self {
        self.set_pointer(name, pointer);
        self
    }

    /// Sets a pointer property.
    pub fn set_pointer(&mut self, name: impl Into<String>, pointer: impl Into<DataPointer>) {
        self.pointers.insert(name.into(), pointer.into());
    }

    /// Reads a pointer property. Unset properties read as [`DataPointer::Null`].
    pub fn pointer(&self, name: &str) -> DataPointer {
        self.pointers.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_pointer_is_null() {
        assert_eq!(OperatorProperties::new().pointer("id"), DataPointer::Null);
    }

    #[test]
    fn set_pointer_overrides() {
        let id = ObjectId::new(3, 1);
        let props = OperatorProperties::new()
            .with_pointer(
                "id",
                DataPointer::Struct {
                    type_name: "Bone".into(),
                },
            )
            .with_pointer("id", id);
        assert_eq!(props.pointer("id").as_id(), Some(id));
    }
}

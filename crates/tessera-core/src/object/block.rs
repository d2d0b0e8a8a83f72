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

use super::ObjectKind;
use crate::asset::{AssetMetadata, AssetRecord};
use crate::preview::PreviewImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value stored on an ordinary data-block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point scalar.
    Float(f64),
    /// A UTF-8 string.
    Text(String),
    /// A flat float array (vertex positions, colors, ...).
    Floats(Vec<f32>),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

/// The data of an ordinary (non-asset) data-block.
///
/// Links to other data-blocks are not part of the data: they hold users on
/// their targets, so the registry records them alongside its user counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    /// Named properties, kept in a stable order.
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ObjectData {
    /// Sets a property, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value)
    }

    /// Returns a property by name.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// Kind-specific payload of a data-block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Ordinary data (meshes, materials, ...).
    Data(ObjectData),
    /// The record of an `Asset` data-block.
    Asset(AssetRecord),
}

impl Payload {
    /// The empty payload appropriate for a kind.
    pub fn for_kind(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Asset => Payload::Asset(AssetRecord::new()),
            _ => Payload::Data(ObjectData::default()),
        }
    }
}

/// The editable content of a registry slot.
///
/// User counts, the fake user and links to other data-blocks are owned by
/// the registry and are not reachable from here; cloning a `DataBlock`
/// therefore copies content only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    /// Display name. Not required to be unique; identity is the `ObjectId`.
    pub name: String,
    kind: ObjectKind,
    /// Present once asset management has been enabled for this data-block.
    pub asset_data: Option<AssetMetadata>,
    /// Thumbnail, if one has been rendered or copied in.
    pub preview: Option<PreviewImage>,
    /// Kind-specific content.
    pub payload: Payload,
}

impl DataBlock {
    /// Creates a data-block of the given kind with an empty payload.
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            asset_data: None,
            preview: None,
            payload: Payload::for_kind(kind),
        }
    }

    /// The type tag.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Whether asset management is enabled for this data-block.
    pub fn is_asset(&self) -> bool {
        self.asset_data.is_some()
    }

    /// Ordinary data, if this is not an asset record.
    pub fn data(&self) -> Option<&ObjectData> {
        match &self.payload {
            Payload::Data(data) => Some(data),
            Payload::Asset(_) => None,
        }
    }

    /// Mutable ordinary data, if this is not an asset record.
    pub fn data_mut(&mut self) -> Option<&mut ObjectData> {
        match &mut self.payload {
            Payload::Data(data) => Some(data),
            Payload::Asset(_) => None,
        }
    }

    /// The asset record, if this data-block is of kind `Asset`.
    pub fn asset_record(&self) -> Option<&AssetRecord> {
        match &self.payload {
            Payload::Asset(record) => Some(record),
            Payload::Data(_) => None,
        }
    }

    /// Mutable asset record, if this data-block is of kind `Asset`.
    pub fn asset_record_mut(&mut self) -> Option<&mut AssetRecord> {
        match &mut self.payload {
            Payload::Asset(record) => Some(record),
            Payload::Data(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_kind_gets_record_payload() {
        let block = DataBlock::new(ObjectKind::Asset, "Chair");
        assert!(block.asset_record().is_some());
        assert!(block.data().is_none());
    }

    #[test]
    fn clone_is_deep() {
        let mut block = DataBlock::new(ObjectKind::Mesh, "Chair");
        block
            .data_mut()
            .unwrap()
            .set("verts", PropertyValue::Floats(vec![0.0, 1.0, 2.0]));

        let mut copy = block.clone();
        assert_eq!(copy.data(), block.data());

        copy.data_mut()
            .unwrap()
            .set("verts", PropertyValue::Floats(vec![9.0]));
        assert_eq!(
            block.data().unwrap().get("verts"),
            Some(&PropertyValue::Floats(vec![0.0, 1.0, 2.0]))
        );
    }
}

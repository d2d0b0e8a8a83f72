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

use anyhow::{Context, Result};
use std::cell::Cell;
use tessera_core::asset::AssetMetadata;
use tessera_core::event::{EventBus, Notification, NotifierAction, NotifierCategory};
use tessera_core::object::{
    DataBlock, ObjectId, ObjectKind, ObjectRegistry, PropertyValue, RegistryError,
};
use tessera_core::preview::{PreviewImage, PreviewOptions, PreviewRenderer};
use tessera_data::{Document, PatternPreviewRenderer};
use tessera_editor::asset::{register_asset_operators, CreateAssetOperator};
use tessera_editor::operator::{DataPointer, OperatorContext, OperatorOutcome, OperatorProperties};
use tessera_editor::{EditorConfig, OperatorRegistry, OperatorStatus, ReportLevel};

// --- Test Setup: counting renderer and a registry that can be told to fail ---

#[derive(Default)]
struct CountingRenderer {
    inner: PatternPreviewRenderer,
    calls: Cell<usize>,
}

impl PreviewRenderer for CountingRenderer {
    fn render_preview(&self, block: &DataBlock, options: &PreviewOptions) -> PreviewImage {
        self.calls.set(self.calls.get() + 1);
        self.inner.render_preview(block, options)
    }
}

/// Delegates to a `Document` but refuses to set the fake user on asset
/// records, which fails a promotion after both data-blocks exist.
struct RefusingFakeUser(Document);

impl ObjectRegistry for RefusingFakeUser {
    fn get(&self, id: ObjectId) -> Option<&DataBlock> {
        self.0.get(id)
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut DataBlock> {
        self.0.get_mut(id)
    }

    fn users(&self, id: ObjectId) -> Option<u32> {
        self.0.users(id)
    }

    fn has_fake_user(&self, id: ObjectId) -> Option<bool> {
        self.0.has_fake_user(id)
    }

    fn references(&self, id: ObjectId) -> &[ObjectId] {
        self.0.references(id)
    }

    fn allocate(&mut self, kind: ObjectKind, name: &str) -> Result<ObjectId, RegistryError> {
        self.0.allocate(kind, name)
    }

    fn duplicate(&mut self, id: ObjectId) -> Result<ObjectId, RegistryError> {
        self.0.duplicate(id)
    }

    fn discard(&mut self, id: ObjectId) -> Result<DataBlock, RegistryError> {
        self.0.discard(id)
    }

    fn increment_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError> {
        match self.0.get(id).map(DataBlock::kind) {
            Some(ObjectKind::Asset) => Err(RegistryError::NotFound(id)),
            _ => self.0.increment_fake_user(id),
        }
    }

    fn decrement_fake_user(&mut self, id: ObjectId) -> Result<(), RegistryError> {
        self.0.decrement_fake_user(id)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

struct Harness {
    operators: OperatorRegistry,
    renderer: CountingRenderer,
    bus: EventBus<Notification>,
    config: EditorConfig,
}

impl Harness {
    fn new() -> Self {
        let mut operators = OperatorRegistry::new();
        register_asset_operators(&mut operators);
        Self {
            operators,
            renderer: CountingRenderer::default(),
            bus: EventBus::new(),
            config: EditorConfig::default(),
        }
    }

    fn create_asset(
        &self,
        registry: &mut dyn ObjectRegistry,
        pointer: DataPointer,
    ) -> Result<OperatorOutcome> {
        let mut ctx = OperatorContext {
            registry,
            renderer: &self.renderer,
            notifier: &self.bus,
            config: &self.config,
        };
        let props =
            OperatorProperties::new().with_pointer(CreateAssetOperator::ID_PROPERTY, pointer);
        Ok(self
            .operators
            .invoke(CreateAssetOperator::IDNAME, &mut ctx, &props)?)
    }
}

fn chair_scene(doc: &mut Document) -> Result<(ObjectId, ObjectId)> {
    let material = doc.allocate(ObjectKind::Material, "Wood")?;
    let chair = doc.allocate(ObjectKind::Mesh, "Chair")?;
    doc.get_mut(chair)
        .and_then(DataBlock::data_mut)
        .context("chair has data")?
        .set("legs", PropertyValue::Int(4));
    doc.add_reference(chair, material)?;
    Ok((chair, material))
}

// --- Tests ---

#[test]
fn test_operator_is_registered() {
    let harness = Harness::new();
    let op = harness
        .operators
        .get("ASSET_OT_create")
        .expect("ASSET_OT_create registered");
    assert_eq!(op.label(), "Create Asset");
    assert_eq!(op.description(), "Enable asset management for a data-block");
}

#[test]
fn test_create_asset_from_mesh() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, material) = chair_scene(&mut doc)?;
    let before = doc.clone();

    let outcome = harness.create_asset(&mut doc, chair.into())?;

    assert_eq!(outcome.status, OperatorStatus::Finished);
    assert_eq!(
        outcome.reports.messages(ReportLevel::Info),
        vec!["Asset 'Chair' created"]
    );
    assert!(!outcome.reports.has_errors());

    // Exactly one asset record and one copy were added.
    assert_eq!(doc.len(), before.len() + 2);
    let assets = doc.ids_of_kind(ObjectKind::Asset);
    assert_eq!(assets.len(), 1);
    let meshes = doc.ids_of_kind(ObjectKind::Mesh);
    assert_eq!(meshes.len(), 2);
    let copy = meshes
        .into_iter()
        .find(|id| *id != chair)
        .context("copy exists")?;

    let record = doc.get(assets[0]).context("asset record")?;
    assert_eq!(record.name, "Chair");
    assert_eq!(
        record.asset_record().and_then(|r| r.referenced),
        Some(copy)
    );

    let copied = doc.get(copy).context("copy")?;
    assert_eq!(copied.name, "Chair");
    assert_eq!(copied.asset_data, Some(AssetMetadata::new()));
    assert_eq!(
        copied.data().and_then(|d| d.get("legs")),
        Some(&PropertyValue::Int(4))
    );

    // The source is untouched; the copy holds its own user on the material.
    assert_eq!(doc.get(chair), before.get(chair));
    assert_eq!(doc.users(material), Some(2));
    assert_eq!(doc.has_fake_user(assets[0]), Some(true));
    assert!(doc.users(assets[0]) >= Some(1));
    assert_eq!(doc.has_fake_user(copy), Some(true));
    assert!(doc.users(copy) >= Some(1));
    assert_eq!(doc.references(copy), &[material]);

    assert_eq!(harness.renderer.calls.get(), 1);
    assert_eq!(
        harness.bus.drain(),
        vec![Notification {
            category: NotifierCategory::Id,
            action: NotifierAction::Edited,
            reference: None,
        }]
    );
    Ok(())
}

#[test]
fn test_previews_are_equal_but_independent() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, _) = chair_scene(&mut doc)?;

    harness.create_asset(&mut doc, chair.into())?;

    let asset = doc.ids_of_kind(ObjectKind::Asset)[0];
    let copy = doc
        .get(asset)
        .and_then(DataBlock::asset_record)
        .and_then(|record| record.referenced)
        .context("asset references its copy")?;

    let copy_preview = doc
        .get(copy)
        .and_then(|b| b.preview.clone())
        .context("copy preview")?;
    let asset_preview = doc
        .get(asset)
        .and_then(|b| b.preview.clone())
        .context("asset preview")?;
    assert_eq!(copy_preview.as_bytes(), asset_preview.as_bytes());

    doc.get_mut(copy)
        .and_then(|b| b.preview.as_mut())
        .context("copy preview")?
        .set_pixel(0, 0, [1, 2, 3, 4]);

    let asset_after = doc.get(asset).and_then(|b| b.preview.as_ref());
    assert_eq!(asset_after, Some(&asset_preview));
    assert_ne!(
        doc.get(copy).and_then(|b| b.preview.as_ref()),
        Some(&asset_preview)
    );
    Ok(())
}

#[test]
fn test_asset_source_is_refused() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let my_asset = doc.allocate(ObjectKind::Asset, "MyAsset")?;

    let outcome = harness.create_asset(&mut doc, my_asset.into())?;

    assert_eq!(outcome.status, OperatorStatus::Cancelled);
    assert_eq!(
        outcome.reports.messages(ReportLevel::Error),
        vec!["The selected data-block 'MyAsset' is itself of the type asset. Creating an asset for this is not supported."]
    );
    assert_eq!(doc.len(), 1);
    assert_eq!(harness.renderer.calls.get(), 0);
    assert!(harness.bus.drain().is_empty());
    Ok(())
}

#[test]
fn test_existing_asset_is_refused() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let mut block = DataBlock::new(ObjectKind::Mesh, "Chair");
    block.asset_data = Some(AssetMetadata::new());
    let chair = doc.insert(block)?;

    let outcome = harness.create_asset(&mut doc, chair.into())?;

    assert_eq!(outcome.status, OperatorStatus::Cancelled);
    assert_eq!(
        outcome.reports.messages(ReportLevel::Error),
        vec!["Data-block 'Chair' already is an asset"]
    );
    assert_eq!(doc.len(), 1);
    assert!(harness.bus.drain().is_empty());
    Ok(())
}

#[test]
fn test_promoting_twice_refuses_the_copy() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, _) = chair_scene(&mut doc)?;

    harness.create_asset(&mut doc, chair.into())?;
    let asset = doc.ids_of_kind(ObjectKind::Asset)[0];
    let copy = doc
        .get(asset)
        .and_then(DataBlock::asset_record)
        .and_then(|record| record.referenced)
        .context("copy")?;
    let count = doc.len();

    let again = harness.create_asset(&mut doc, copy.into())?;
    assert_eq!(again.status, OperatorStatus::Cancelled);
    assert_eq!(
        again.reports.messages(ReportLevel::Error),
        vec!["Data-block 'Chair' already is an asset"]
    );

    let on_record = harness.create_asset(&mut doc, asset.into())?;
    assert_eq!(on_record.status, OperatorStatus::Cancelled);
    assert_eq!(doc.len(), count);

    // The original, never marked, can be promoted again into a second pair.
    let second = harness.create_asset(&mut doc, chair.into())?;
    assert_eq!(second.status, OperatorStatus::Finished);
    assert_eq!(doc.count_of_kind(ObjectKind::Asset), 2);
    Ok(())
}

#[test]
fn test_invalid_pointer_cancels_silently() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    chair_scene(&mut doc)?;

    for pointer in [
        DataPointer::Null,
        DataPointer::Struct {
            type_name: "Bone".to_string(),
        },
        DataPointer::Id(ObjectId::new(42, 0)),
    ] {
        let outcome = harness.create_asset(&mut doc, pointer)?;
        assert_eq!(outcome.status, OperatorStatus::Cancelled);
        assert!(outcome.reports.is_empty());
    }

    let unset = {
        let mut ctx = OperatorContext {
            registry: &mut doc,
            renderer: &harness.renderer,
            notifier: &harness.bus,
            config: &harness.config,
        };
        harness.operators.invoke(
            CreateAssetOperator::IDNAME,
            &mut ctx,
            &OperatorProperties::new(),
        )?
    };
    assert_eq!(unset.status, OperatorStatus::Cancelled);
    assert_eq!(doc.len(), 2);
    Ok(())
}

#[test]
fn test_duplication_failure_rolls_back() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let screen = doc.allocate(ObjectKind::Screen, "Layout")?;

    let outcome = harness.create_asset(&mut doc, screen.into())?;

    assert_eq!(outcome.status, OperatorStatus::Cancelled);
    assert_eq!(
        outcome.reports.messages(ReportLevel::Error),
        vec!["Data-block 'Layout' could not be copied into an asset data-block"]
    );
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.count_of_kind(ObjectKind::Asset), 0);
    assert!(harness.bus.drain().is_empty());
    Ok(())
}

#[test]
fn test_full_registry_aborts_cleanly() -> Result<()> {
    let harness = Harness::new();

    // No room for the asset record.
    let mut doc = Document::with_capacity_limit(1);
    let chair = doc.allocate(ObjectKind::Mesh, "Chair")?;
    let outcome = harness.create_asset(&mut doc, chair.into())?;
    assert_eq!(outcome.status, OperatorStatus::Cancelled);
    assert!(outcome.reports.has_errors());
    assert_eq!(doc.len(), 1);

    // Room for the asset record but not for the copy.
    let mut doc = Document::with_capacity_limit(2);
    let chair = doc.allocate(ObjectKind::Mesh, "Chair")?;
    let outcome = harness.create_asset(&mut doc, chair.into())?;
    assert_eq!(
        outcome.reports.messages(ReportLevel::Error),
        vec!["Data-block 'Chair' could not be copied into an asset data-block"]
    );
    assert_eq!(doc.len(), 1);
    Ok(())
}

#[test]
fn test_failure_after_copy_rolls_back_both() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, material) = chair_scene(&mut doc)?;
    let mut registry = RefusingFakeUser(doc);

    let outcome = harness.create_asset(&mut registry, chair.into())?;

    assert_eq!(outcome.status, OperatorStatus::Cancelled);
    assert!(outcome.reports.has_errors());
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.0.count_of_kind(ObjectKind::Asset), 0);
    assert_eq!(registry.0.count_of_kind(ObjectKind::Mesh), 1);
    // The discarded copy released the user it held on the material.
    assert_eq!(registry.users(material), Some(1));
    assert!(harness.bus.drain().is_empty());
    Ok(())
}

#[test]
fn test_promoted_pair_survives_orphan_purge() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, material) = chair_scene(&mut doc)?;

    harness.create_asset(&mut doc, chair.into())?;
    let asset = doc.ids_of_kind(ObjectKind::Asset)[0];
    let copy = doc
        .get(asset)
        .and_then(DataBlock::asset_record)
        .and_then(|record| record.referenced)
        .context("copy")?;

    // The unused source goes; the pair and the material it uses stay.
    assert_eq!(doc.purge_orphans(), 1);
    assert!(doc.get(chair).is_none());
    assert!(doc.get(asset).is_some());
    assert!(doc.get(copy).is_some());
    assert_eq!(doc.users(material), Some(1));
    Ok(())
}

#[test]
fn test_discarding_the_copy_unlinks_the_record() -> Result<()> {
    let harness = Harness::new();
    let mut doc = Document::new();
    let (chair, _) = chair_scene(&mut doc)?;

    harness.create_asset(&mut doc, chair.into())?;
    let asset = doc.ids_of_kind(ObjectKind::Asset)[0];
    let copy = doc
        .get(asset)
        .and_then(DataBlock::asset_record)
        .and_then(|record| record.referenced)
        .context("copy")?;

    doc.discard(copy)?;

    assert_eq!(
        doc.get(asset)
            .and_then(DataBlock::asset_record)
            .and_then(|record| record.referenced),
        None
    );
    assert!(doc.get(asset).and_then(|b| b.preview.as_ref()).is_some());
    Ok(())
}

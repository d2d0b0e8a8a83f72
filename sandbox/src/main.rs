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

//! Builds a small document, runs `ASSET_OT_create` on its mesh, and prints
//! the reports and notifications.
//!
//! Usage: `sandbox [config.json]`

use anyhow::{Context, Result};
use tessera_core::event::{EventBus, Notification};
use tessera_core::object::{ObjectId, ObjectKind, ObjectRegistry, PropertyValue};
use tessera_data::{Document, PatternPreviewRenderer};
use tessera_editor::asset::{register_asset_operators, CreateAssetOperator};
use tessera_editor::operator::{OperatorContext, OperatorProperties};
use tessera_editor::{EditorConfig, OperatorRegistry};

fn load_config() -> Result<EditorConfig> {
    match std::env::args().nth(1) {
        Some(path) => EditorConfig::from_file(&path)
            .with_context(|| format!("Failed to load editor configuration from '{path}'")),
        None => Ok(EditorConfig::default()),
    }
}

fn build_document() -> Result<(Document, ObjectId)> {
    let mut doc = Document::new();
    let wood = doc.allocate(ObjectKind::Material, "Wood")?;
    let chair = doc.allocate(ObjectKind::Mesh, "Chair")?;
    let data = doc
        .get_mut(chair)
        .and_then(|block| block.data_mut())
        .context("Mesh data-block has no data")?;
    data.set("vertex_count", PropertyValue::Int(8));
    data.set(
        "positions",
        PropertyValue::Floats(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]),
    );
    doc.add_reference(chair, wood)?;
    Ok((doc, chair))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let renderer = PatternPreviewRenderer::with_resolutions(
        config.preview.icon_resolution,
        config.preview.large_resolution,
    );
    let bus = EventBus::<Notification>::new();
    let mut operators = OperatorRegistry::new();
    register_asset_operators(&mut operators);

    let (mut doc, chair) = build_document()?;
    log::info!("Sandbox: document ready with {} data-blocks", doc.len());

    let outcome = {
        let mut ctx = OperatorContext {
            registry: &mut doc,
            renderer: &renderer,
            notifier: &bus,
            config: &config,
        };
        let props =
            OperatorProperties::new().with_pointer(CreateAssetOperator::ID_PROPERTY, chair);
        operators.invoke(CreateAssetOperator::IDNAME, &mut ctx, &props)?
    };

    println!("{}: {:?}", CreateAssetOperator::IDNAME, outcome.status);
    for report in &outcome.reports {
        println!("  {report}");
    }
    for notification in bus.drain() {
        println!(
            "  notification: {:?} {:?}",
            notification.category, notification.action
        );
    }

    println!("Document ({} data-blocks):", doc.len());
    for (id, block) in doc.iter() {
        let target = block
            .asset_record()
            .and_then(|record| record.referenced)
            .map(|target| format!(" -> {target}"))
            .unwrap_or_default();
        println!(
            "  {id} {} '{}' users={} fake_user={} asset={}{target}",
            block.kind().code(),
            block.name,
            doc.users(id).unwrap_or_default(),
            doc.has_fake_user(id).unwrap_or_default(),
            block.is_asset(),
        );
    }

    Ok(())
}

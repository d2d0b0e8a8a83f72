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

use crate::config::EditorConfig;
use crate::operator::DataPointer;
use crate::report::ReportList;
use tessera_core::asset::AssetMetadata;
use tessera_core::event::{Notification, Notifier};
use tessera_core::object::{ObjectId, ObjectKind, ObjectRegistry, RegistryError};
use tessera_core::preview::{PreviewOptions, PreviewRenderer};
use thiserror::Error;

/// Why a data-block could not be turned into an asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    /// Nothing, or something that is not a data-block, was given.
    #[error("no data-block given")]
    InvalidInput,
    /// The data-block is itself an asset record.
    #[error("The selected data-block '{0}' is itself of the type asset. Creating an asset for this is not supported.")]
    SourceIsAsset(String),
    /// The data-block already has asset metadata.
    #[error("Data-block '{0}' already is an asset")]
    AlreadyAsset(String),
    /// The registry refused to copy the data-block.
    #[error("Data-block '{name}' could not be copied into an asset data-block")]
    DuplicationFailed {
        /// Display name of the source data-block.
        name: String,
        /// What the registry reported.
        #[source]
        source: RegistryError,
    },
    /// The registry failed while creating or linking the new data-blocks.
    #[error("Could not create asset data-block: {0}")]
    RegistryFailure(#[from] RegistryError),
}

impl PromotionError {
    /// Whether the user should see a report for this error.
    ///
    /// Invalid input is a silent cancel: the caller offered the action for
    /// something that cannot carry it.
    pub fn is_reported(&self) -> bool {
        !matches!(self, PromotionError::InvalidInput)
    }
}

/// The data-blocks created by a successful promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    /// The new `Asset` data-block.
    pub asset: ObjectId,
    /// The asset-enabled copy of the source.
    pub duplicate: ObjectId,
    /// Display name of the copy.
    pub name: String,
}

/// Turns ordinary data-blocks into assets.
///
/// A promotion either creates both the asset record and the copy, fully
/// populated and kept alive by fake users, or leaves the registry exactly as
/// it found it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetPromotion {
    preview: PreviewOptions,
}

impl AssetPromotion {
    /// Creates a promotion service requesting previews with `preview`.
    pub fn new(preview: PreviewOptions) -> Self {
        Self { preview }
    }

    /// Creates a promotion service from the editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.preview.options())
    }

    /// Checks that `source` points at a data-block that may be promoted.
    ///
    /// Returns the resolved id. Never mutates the registry.
    pub fn validate(
        &self,
        registry: &dyn ObjectRegistry,
        source: &DataPointer,
    ) -> Result<ObjectId, PromotionError> {
        let id = source.as_id().ok_or(PromotionError::InvalidInput)?;
        let block = registry.get(id).ok_or(PromotionError::InvalidInput)?;

        if block.kind() == ObjectKind::Asset {
            return Err(PromotionError::SourceIsAsset(block.name.clone()));
        }
        if block.is_asset() {
            return Err(PromotionError::AlreadyAsset(block.name.clone()));
        }
        Ok(id)
    }

    /// Promotes the data-block `source` points at.
    ///
    /// On success the registry holds one new `Asset` data-block referencing
    /// one new copy of the source, `reports` holds the confirmation, and only
    /// then `notifier` receives a generic "data-blocks edited" notification.
    /// On failure nothing was added and nothing was reported here.
    pub fn promote(
        &self,
        registry: &mut dyn ObjectRegistry,
        renderer: &dyn PreviewRenderer,
        notifier: &dyn Notifier,
        reports: &mut ReportList,
        source: &DataPointer,
    ) -> Result<Promotion, PromotionError> {
        let source_id = self.validate(registry, source)?;
        let name = registry
            .get(source_id)
            .map(|block| block.name.clone())
            .ok_or(PromotionError::InvalidInput)?;

        let asset = registry.allocate(ObjectKind::Asset, &name)?;

        let duplicate = match registry.duplicate(source_id) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Asset promotion: copying '{name}' failed ({err}), rolling back");
                Self::roll_back(registry, &[asset]);
                return Err(PromotionError::DuplicationFailed { name, source: err });
            }
        };

        if let Err(err) = self.populate(registry, renderer, asset, duplicate) {
            log::warn!("Asset promotion: linking '{name}' failed ({err}), rolling back");
            Self::roll_back(registry, &[duplicate, asset]);
            return Err(err.into());
        }

        let name = registry
            .get(duplicate)
            .map(|block| block.name.clone())
            .unwrap_or(name);
        log::debug!("Asset promotion: '{name}' promoted as {asset} wrapping {duplicate}");
        reports.info(format!("Asset '{name}' created"));
        notifier.notify(Notification::id_edited());

        Ok(Promotion {
            asset,
            duplicate,
            name,
        })
    }

    /// Fills in the freshly created pair.
    fn populate(
        &self,
        registry: &mut dyn ObjectRegistry,
        renderer: &dyn PreviewRenderer,
        asset: ObjectId,
        duplicate: ObjectId,
    ) -> Result<(), RegistryError> {
        registry.increment_fake_user(duplicate)?;
        registry.increment_fake_user(asset)?;

        let copy = registry
            .get_mut(duplicate)
            .ok_or(RegistryError::NotFound(duplicate))?;
        copy.asset_data = Some(AssetMetadata::new());

        let copy = registry
            .get(duplicate)
            .ok_or(RegistryError::NotFound(duplicate))?;
        let preview = renderer.render_preview(copy, &self.preview);
        log::debug!(
            "Asset promotion: rendered {}x{} preview for {duplicate}",
            preview.width(),
            preview.height()
        );

        registry
            .get_mut(duplicate)
            .ok_or(RegistryError::NotFound(duplicate))?
            .preview = Some(preview.clone());

        let record = registry
            .get_mut(asset)
            .ok_or(RegistryError::NotFound(asset))?;
        record.preview = Some(preview);
        record
            .asset_record_mut()
            .ok_or(RegistryError::CannotReference(asset))?
            .referenced = Some(duplicate);

        Ok(())
    }

    /// Discards data-blocks created by a failed promotion, in order.
    fn roll_back(registry: &mut dyn ObjectRegistry, created: &[ObjectId]) {
        for id in created {
            if let Err(err) = registry.discard(*id) {
                log::error!("Asset promotion: rollback could not discard {id}: {err}");
            }
        }
    }
}

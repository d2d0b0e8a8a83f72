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

//! Asset management operators.
//!
//! [`AssetPromotion`] turns an ordinary data-block into an asset: it copies
//! the data-block, marks the copy with asset metadata, renders a preview and
//! wraps the copy in a new `Asset` data-block. [`CreateAssetOperator`]
//! exposes it as `ASSET_OT_create`.

mod create;
mod promote;

pub use create::CreateAssetOperator;
pub use promote::{AssetPromotion, Promotion, PromotionError};

use crate::operator::OperatorRegistry;

/// Registers every asset operator.
pub fn register_asset_operators(registry: &mut OperatorRegistry) {
    registry.register(CreateAssetOperator);
}

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

use super::promote::AssetPromotion;
use crate::operator::{Operator, OperatorContext, OperatorProperties, OperatorStatus};
use crate::report::ReportList;

/// `ASSET_OT_create`: enables asset management for a data-block.
///
/// Takes one pointer property, `id`, naming the data-block to promote.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateAssetOperator;

impl CreateAssetOperator {
    /// Idname under which the operator is registered.
    pub const IDNAME: &'static str = "ASSET_OT_create";
    /// Name of the pointer property holding the data-block.
    pub const ID_PROPERTY: &'static str = "id";
}

impl Operator for CreateAssetOperator {
    fn idname(&self) -> &'static str {
        Self::IDNAME
    }

    fn label(&self) -> &'static str {
        "Create Asset"
    }

    fn description(&self) -> &'static str {
        "Enable asset management for a data-block"
    }

    fn exec(
        &self,
        ctx: &mut OperatorContext<'_>,
        props: &OperatorProperties,
        reports: &mut ReportList,
    ) -> OperatorStatus {
        let source = props.pointer(Self::ID_PROPERTY);
        let promotion = AssetPromotion::from_config(ctx.config);

        match promotion.promote(
            &mut *ctx.registry,
            ctx.renderer,
            ctx.notifier,
            reports,
            &source,
        ) {
            Ok(_) => OperatorStatus::Finished,
            Err(err) if !err.is_reported() => {
                log::debug!("{}: cancelled, {err}", Self::IDNAME);
                OperatorStatus::Cancelled
            }
            Err(err) => {
                reports.error(err.to_string());
                OperatorStatus::Cancelled
            }
        }
    }
}

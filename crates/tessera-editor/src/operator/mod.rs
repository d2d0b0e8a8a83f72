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

//! The operator framework: named, user-invokable editor actions.
//!
//! An [`Operator`] is registered under its `idname` in an
//! [`OperatorRegistry`] and invoked with an [`OperatorContext`] (the
//! collaborators it may use) and [`OperatorProperties`] (its parameters).

mod context;
mod properties;
mod registry;

pub use context::OperatorContext;
pub use properties::{DataPointer, OperatorProperties};
pub use registry::{OperatorError, OperatorOutcome, OperatorRegistry};

use crate::report::ReportList;

/// How an operator run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// The action completed and changed the document.
    Finished,
    /// The action did nothing.
    Cancelled,
}

/// A user-invokable editor action.
pub trait Operator {
    /// Unique identifier, e.g. `ASSET_OT_create`.
    fn idname(&self) -> &'static str;

    /// Short name shown in menus.
    fn label(&self) -> &'static str;

    /// Tooltip text.
    fn description(&self) -> &'static str;

    /// Whether the operator can run in this context at all.
    fn poll(&self, _ctx: &OperatorContext<'_>) -> bool {
        true
    }

    /// Runs the operator to completion.
    fn exec(
        &self,
        ctx: &mut OperatorContext<'_>,
        props: &OperatorProperties,
        reports: &mut ReportList,
    ) -> OperatorStatus;
}

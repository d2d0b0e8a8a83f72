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

use super::{Operator, OperatorContext, OperatorProperties, OperatorStatus};
use crate::report::ReportList;
use std::collections::HashMap;
use thiserror::Error;

/// Failure to dispatch an operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    /// No operator is registered under this idname.
    #[error("unknown operator '{0}'")]
    Unknown(String),
}

/// Result of one operator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorOutcome {
    /// How the run ended.
    pub status: OperatorStatus,
    /// Messages produced during the run.
    pub reports: ReportList,
}

/// Registry of operators, keyed by idname.
#[derive(Default)]
pub struct OperatorRegistry {
    operators: HashMap<&'static str, Box<dyn Operator>>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operator. An operator with the same idname is replaced.
    pub fn register(&mut self, operator: impl Operator + 'static) {
        let idname = operator.idname();
        log::info!("OperatorRegistry: Registered {idname} ('{}')", operator.label());
        self.operators.insert(idname, Box::new(operator));
    }

    /// Looks up an operator by idname.
    #[must_use]
    pub fn get(&self, idname: &str) -> Option<&dyn Operator> {
        self.operators.get(idname).map(|operator| operator.as_ref())
    }

    /// Returns `true` if an operator is registered under `idname`.
    #[must_use]
    pub fn contains(&self, idname: &str) -> bool {
        self.operators.contains_key(idname)
    }

    /// Registered idnames, sorted.
    pub fn idnames(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.operators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if no operators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Polls and runs the operator registered under `idname`.
    ///
    /// A failed poll cancels the run without calling `exec`.
    pub fn invoke(
        &self,
        idname: &str,
        ctx: &mut OperatorContext<'_>,
        props: &OperatorProperties,
    ) -> Result<OperatorOutcome, OperatorError> {
        let operator = self
            .get(idname)
            .ok_or_else(|| OperatorError::Unknown(idname.to_string()))?;

        let mut reports = ReportList::new();
        if !operator.poll(ctx) {
            log::debug!("OperatorRegistry: {idname} poll failed, cancelling");
            return Ok(OperatorOutcome {
                status: OperatorStatus::Cancelled,
                reports,
            });
        }

        log::debug!("OperatorRegistry: running {idname}");
        let status = operator.exec(ctx, props, &mut reports);
        log::debug!("OperatorRegistry: {idname} ended with {status:?}");
        Ok(OperatorOutcome { status, reports })
    }
}

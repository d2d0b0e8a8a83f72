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

//! User-facing messages produced while running operators.

use std::fmt;

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportLevel {
    /// Developer detail.
    Debug,
    /// Confirmation of a completed action.
    Info,
    /// Something worth the user's attention that did not stop the action.
    Warning,
    /// The action failed.
    Error,
}

impl ReportLevel {
    fn log_level(self) -> log::Level {
        match self {
            ReportLevel::Debug => log::Level::Debug,
            ReportLevel::Info => log::Level::Info,
            ReportLevel::Warning => log::Level::Warn,
            ReportLevel::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportLevel::Debug => "Debug",
            ReportLevel::Info => "Info",
            ReportLevel::Warning => "Warning",
            ReportLevel::Error => "Error",
        };
        f.write_str(label)
    }
}

/// A single message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity.
    pub level: ReportLevel,
    /// Human-readable text.
    pub message: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Reports collected during one operator run, in emission order.
///
/// Every report is also forwarded to the `log` facade at the matching level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportList {
    reports: Vec<Report>,
}

impl ReportList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a report.
    pub fn report(&mut self, level: ReportLevel, message: impl Into<String>) {
        let message = message.into();
        log::log!(level.log_level(), "{message}");
        self.reports.push(Report { level, message });
    }

    /// Appends an info report.
    pub fn info(&mut self, message: impl Into<String>) {
        self.report(ReportLevel::Info, message);
    }

    /// Appends a warning report.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.report(ReportLevel::Warning, message);
    }

    /// Appends an error report.
    pub fn error(&mut self, message: impl Into<String>) {
        self.report(ReportLevel::Error, message);
    }

    /// Whether any report has error severity.
    pub fn has_errors(&self) -> bool {
        self.reports
            .iter()
            .any(|report| report.level == ReportLevel::Error)
    }

    /// Messages of one severity, in order.
    pub fn messages(&self, level: ReportLevel) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|report| report.level == level)
            .map(|report| report.message.as_str())
            .collect()
    }

    /// Iterates over all reports.
    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReportList {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

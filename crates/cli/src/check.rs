// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check result types and the contract every check implements.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Passed => "PASSED",
            CheckStatus::Failed => "FAILED",
            CheckStatus::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running a single check.
///
/// Built once per check invocation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    status: CheckStatus,
    details: String,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            details: details.into(),
        }
    }

    /// Create a passing check result.
    pub fn passed(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Passed, details)
    }

    /// Create a failing check result.
    pub fn failed(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Failed, details)
    }

    /// Create a skipped check result.
    pub fn skipped(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Skipped, details)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn is_passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }

    pub fn is_skipped(&self) -> bool {
        self.status == CheckStatus::Skipped
    }
}

/// Kind of definition a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Module,
    Class,
    Function,
    AsyncFunction,
}

impl ElementKind {
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Module => "module",
            ElementKind::Class => "class",
            ElementKind::Function => "function",
            ElementKind::AsyncFunction => "async function",
        }
    }
}

/// One problem an analyzer found in one file.
///
/// Renders as `<path>[:<line>] - <message>`. A finding about a definition
/// carries its kind and name; with no message it renders as the definition
/// itself (`class 'Foo'`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file_path: PathBuf,
    pub line: Option<usize>,
    pub element_kind: Option<ElementKind>,
    pub element_name: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(
        file_path: impl Into<PathBuf>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            element_kind: None,
            element_name: None,
            message: message.into(),
        }
    }

    /// Finding about a named definition: `function 'f'`, or `module`.
    pub fn element(
        file_path: impl Into<PathBuf>,
        line: usize,
        kind: ElementKind,
        name: &str,
    ) -> Self {
        Self::new(file_path, Some(line), String::new()).with_element(kind, name)
    }

    /// Attach the definition this finding is about.
    pub fn with_element(mut self, kind: ElementKind, name: impl Into<String>) -> Self {
        self.element_kind = Some(kind);
        self.element_name = Some(name.into());
        self
    }

    /// `class 'Foo'`; modules are unnamed.
    pub fn element_label(&self) -> Option<String> {
        let kind = self.element_kind?;
        Some(match (kind, &self.element_name) {
            (ElementKind::Module, _) | (_, None) => kind.label().to_string(),
            (_, Some(name)) => format!("{} '{}'", kind.label(), name),
        })
    }

    /// File that could not be parsed.
    pub fn syntax_error(file_path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::new(file_path, None, format!("Syntax error: {message}"))
    }

    /// File that could not be read.
    pub fn io_error(file_path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::new(file_path, None, format!("Error: {err}"))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_path.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        match self.element_label() {
            Some(label) if self.message.is_empty() => write!(f, " - {label}"),
            _ => write!(f, " - {}", self.message),
        }
    }
}

/// Per-status tally of a result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl StatusCounts {
    pub fn tally(results: &[CheckResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.status() {
                CheckStatus::Passed => counts.passed += 1,
                CheckStatus::Failed => counts.failed += 1,
                CheckStatus::Skipped => counts.skipped += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// Overall verdict for a run.
///
/// Skipped results never fail a run: the run passes when every result is
/// either passed or skipped.
pub fn verdict(results: &[CheckResult]) -> bool {
    results.iter().all(|r| !r.is_failed())
}

/// Immutable input shared by every check in a run.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    /// Absolute project root.
    pub project_path: &'a Path,
    /// Source directories relative to the project root, already validated.
    pub source_dirs: &'a [PathBuf],
    /// Resolved configuration.
    pub config: &'a Config,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(project_path: &'a Path, source_dirs: &'a [PathBuf], config: &'a Config) -> Self {
        Self {
            project_path,
            source_dirs,
            config,
        }
    }

    /// Project root, rejecting contexts a check cannot work with.
    pub fn require_project_path(&self) -> Result<&'a Path> {
        if self.project_path.as_os_str().is_empty() {
            return Err(Error::Context("no project path provided".to_string()));
        }
        if !self.project_path.is_absolute() {
            return Err(Error::Context(format!(
                "project path must be absolute: {}",
                self.project_path.display()
            )));
        }
        Ok(self.project_path)
    }

    /// Absolute paths of the source directories, in declared order.
    pub fn source_roots(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.source_dirs.iter().map(|d| self.project_path.join(d))
    }

    /// Render a path relative to the project root for display.
    pub fn display_path<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.project_path).unwrap_or(path)
    }
}

/// A single pluggable quality check.
///
/// Implementations turn every foreseeable problem (unreadable files, syntax
/// errors, missing tools) into a failed result. `Err` is reserved for a
/// broken contract such as an unusable context; it aborts the rest of the
/// chain.
pub trait Check {
    /// Human-readable check name (e.g., "File Length").
    fn name(&self) -> &str;

    /// Run the check and return its results in order.
    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>>;
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

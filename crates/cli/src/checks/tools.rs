// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks that delegate to external Python tools.
//!
//! The library never spawns processes itself: every program goes through a
//! [`ToolRunner`], which the binary backs with `std::process::Command`.

use std::io;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::check::{Check, CheckResult, ExecutionContext};
use crate::config::Config;
use crate::error::Result;

pub const FORMATTING: &str = "Code Formatting (Black)";
pub const IMPORTS: &str = "Import Sorting (isort)";
pub const PYLINT: &str = "Code Linting (Pylint)";
pub const RUFF: &str = "Code Linting (Ruff)";
pub const MYPY: &str = "Type Checking (mypy)";
pub const BANDIT: &str = "Security Check (Bandit)";
pub const COVERAGE: &str = "Test Coverage";

pub(crate) const NO_RUNNER: &str = "no tool runner configured";
const DISABLED: &str = "disabled by configuration";
const NO_SOURCES: &str = "No source directories found to check.";

/// Captured result of one external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion.
pub trait ToolRunner {
    /// `Err` means the program could not be started at all.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput>;
}

/// The wrapped tools, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Black,
    Isort,
    Pylint,
    Ruff,
    Mypy,
    Bandit,
    Coverage,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Black,
        Tool::Isort,
        Tool::Pylint,
        Tool::Ruff,
        Tool::Mypy,
        Tool::Bandit,
        Tool::Coverage,
    ];

    pub fn check_name(self) -> &'static str {
        match self {
            Tool::Black => FORMATTING,
            Tool::Isort => IMPORTS,
            Tool::Pylint => PYLINT,
            Tool::Ruff => RUFF,
            Tool::Mypy => MYPY,
            Tool::Bandit => BANDIT,
            Tool::Coverage => COVERAGE,
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            Tool::Black => "black",
            Tool::Isort => "isort",
            Tool::Pylint => "pylint",
            Tool::Ruff => "ruff",
            Tool::Mypy => "mypy",
            Tool::Bandit => "bandit",
            Tool::Coverage => "pytest",
        }
    }

    /// Arguments for a run over `dirs`.
    pub fn args(self, dirs: &[String], min_coverage: u32) -> Vec<String> {
        let leading: &[&str] = match self {
            Tool::Black => &["--check"],
            Tool::Isort => &["--check-only", "--diff"],
            Tool::Ruff => &["check"],
            Tool::Bandit => &["-r"],
            Tool::Pylint | Tool::Mypy => &[],
            Tool::Coverage => {
                return vec![
                    format!("--cov={}", dirs.join(",")),
                    "--cov-report=term".to_string(),
                    "--cov-fail-under".to_string(),
                    min_coverage.to_string(),
                ];
            }
        };
        leading
            .iter()
            .map(|s| s.to_string())
            .chain(dirs.iter().cloned())
            .collect()
    }

    /// Pass sentence and failure header.
    fn sentences(self) -> (&'static str, &'static str) {
        match self {
            Tool::Black => ("All code is properly formatted.", "Files need formatting:"),
            Tool::Isort => ("All imports are properly sorted.", "Imports need sorting:"),
            Tool::Pylint => ("All code passes linting checks.", "Linting issues found:"),
            Tool::Ruff => ("All code passes Ruff checks.", "Ruff issues found:"),
            Tool::Mypy => (
                "All code passes type checking.",
                "Type checking issues found:",
            ),
            Tool::Bandit => ("No security issues found.", "Security issues found:"),
            Tool::Coverage => ("", ""),
        }
    }

    /// Whether configuration turns this tool on.
    pub fn enabled(self, config: &Config) -> bool {
        match self {
            Tool::Ruff => config.general.check_ruff,
            Tool::Mypy => config.general.check_mypy,
            Tool::Bandit => config.general.check_bandit,
            _ => true,
        }
    }
}

/// One wrapped tool as a check.
pub struct ToolCheck {
    tool: Tool,
    runner: Option<Arc<dyn ToolRunner>>,
}

impl ToolCheck {
    pub fn new(tool: Tool, runner: Option<Arc<dyn ToolRunner>>) -> Self {
        Self { tool, runner }
    }

    fn evaluate(&self, output: &ToolOutput, config: &Config) -> CheckResult {
        let name = self.tool.check_name();
        if self.tool == Tool::Coverage {
            return coverage_result(output, config.general.min_test_coverage);
        }
        if output.success() {
            let (pass, _) = self.tool.sentences();
            return CheckResult::passed(name, pass);
        }
        if self.tool == Tool::Pylint && output.code.is_some_and(|c| c >= 16) {
            return CheckResult::failed(
                name,
                format!("Linting failed with an error:\n{}", output.stderr),
            );
        }
        let (_, header) = self.tool.sentences();
        CheckResult::failed(name, with_stderr(format!("{header}\n{}", output.stdout), output))
    }
}

impl Check for ToolCheck {
    fn name(&self) -> &str {
        self.tool.check_name()
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        let project = ctx.require_project_path()?;
        let name = self.tool.check_name();

        if !self.tool.enabled(ctx.config) {
            return Ok(vec![CheckResult::skipped(name, DISABLED)]);
        }
        if ctx.source_dirs.is_empty() {
            return Ok(vec![CheckResult::skipped(name, NO_SOURCES)]);
        }
        let Some(runner) = &self.runner else {
            return Ok(vec![CheckResult::skipped(name, NO_RUNNER)]);
        };

        let dirs: Vec<String> = ctx
            .source_dirs
            .iter()
            .map(|d| d.to_string_lossy().into_owned())
            .collect();
        let program = self.tool.program();
        let args = self.tool.args(&dirs, ctx.config.general.min_test_coverage);
        tracing::debug!("running {} {}", program, args.join(" "));

        let result = match runner.run(program, &args, project) {
            Ok(output) => self.evaluate(&output, ctx.config),
            Err(err) => {
                tracing::warn!("{} could not be run: {}", program, err);
                CheckResult::failed(name, format!("`{program}` could not be run: {err}"))
            }
        };
        Ok(vec![result])
    }
}

/// Append `Errors:` with stderr when the tool wrote any.
fn with_stderr(mut details: String, output: &ToolOutput) -> String {
    if !output.stderr.is_empty() {
        details.push_str("\nErrors:\n");
        details.push_str(&output.stderr);
    }
    details
}

#[allow(clippy::expect_used)]
static COVERAGE_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TOTAL\s+\d+\s+\d+\s+(\d+)%").expect("valid regex"));

/// Percentage on the `TOTAL` row of a pytest-cov terminal report.
pub fn extract_coverage(stdout: &str) -> Option<u32> {
    COVERAGE_TOTAL
        .captures(stdout)
        .and_then(|caps| caps[1].parse().ok())
}

fn coverage_result(output: &ToolOutput, min: u32) -> CheckResult {
    match extract_coverage(&output.stdout) {
        Some(pct) if pct >= min => CheckResult::passed(
            COVERAGE,
            format!("Test coverage is {pct}%, which meets the minimum requirement of {min}%."),
        ),
        Some(pct) => CheckResult::failed(
            COVERAGE,
            format!(
                "Test coverage is {pct}%, which is below the minimum requirement of {min}%.\n{}",
                output.stdout
            ),
        ),
        None => CheckResult::failed(
            COVERAGE,
            with_stderr(
                format!("Failed to determine test coverage.\n{}", output.stdout),
                output,
            ),
        ),
    }
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;

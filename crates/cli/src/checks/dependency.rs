// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outdated requirements.
//!
//! Compares the packages named in `requirements.txt` files against
//! `pip list --outdated`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::check::{Check, CheckResult, ExecutionContext};
use crate::checks::tools::{NO_RUNNER, ToolRunner};
use crate::error::Result;
use crate::walker::SourceWalker;

pub const NAME: &str = "Dependency Check";

const PASS: &str = "All dependencies are up-to-date.";
const HEADER: &str = "Outdated dependencies found:";

/// One entry of `pip list --outdated --format=json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutdatedPackage {
    pub name: String,
    pub version: String,
    pub latest_version: String,
}

/// Outdated packages keyed by lowercase name.
pub type Outdated = HashMap<String, OutdatedPackage>;

pub struct DependencyCheck {
    runner: Option<Arc<dyn ToolRunner>>,
}

impl DependencyCheck {
    pub fn new(runner: Option<Arc<dyn ToolRunner>>) -> Self {
        Self { runner }
    }

    fn outdated(
        &self,
        runner: &dyn ToolRunner,
        project: &Path,
    ) -> std::result::Result<Outdated, String> {
        let args: Vec<String> = ["list", "--outdated", "--format=json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let output = runner
            .run("pip", &args, project)
            .map_err(|e| format!("`pip` could not be run: {e}"))?;
        if !output.success() {
            return Err(format!(
                "Failed to check for outdated packages:\n{}",
                output.stderr
            ));
        }
        parse_outdated(&output.stdout)
            .map_err(|_| format!("Failed to parse pip output:\n{}", output.stdout))
    }
}

impl Check for DependencyCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        let project = ctx.require_project_path()?;
        let files = requirement_files(ctx);
        if files.is_empty() {
            return Ok(vec![CheckResult::skipped(
                NAME,
                "No requirements.txt files found.",
            )]);
        }
        let Some(runner) = &self.runner else {
            return Ok(vec![CheckResult::skipped(NAME, NO_RUNNER)]);
        };

        let outdated = match self.outdated(runner.as_ref(), project) {
            Ok(outdated) => outdated,
            Err(details) => return Ok(vec![CheckResult::failed(NAME, details)]),
        };
        tracing::debug!("pip reports {} outdated packages", outdated.len());

        let mut lines = Vec::new();
        for file in &files {
            let shown = ctx.display_path(file).display().to_string();
            match fs::read_to_string(file) {
                Ok(content) => {
                    for requirement in content.lines().filter_map(requirement_name) {
                        if let Some(pkg) = outdated.get(&requirement) {
                            lines.push(format!(
                                "- {}: {} (current: {}, latest: {})",
                                shown, pkg.name, pkg.version, pkg.latest_version
                            ));
                        }
                    }
                }
                Err(err) => lines.push(format!("- {shown}: Error: {err}")),
            }
        }

        if lines.is_empty() {
            return Ok(vec![CheckResult::passed(NAME, PASS)]);
        }
        Ok(vec![CheckResult::failed(
            NAME,
            format!("{HEADER}\n{}", lines.join("\n")),
        )])
    }
}

/// `requirements.txt` and `*-requirements.txt` anywhere under the project.
fn requirement_files(ctx: &ExecutionContext<'_>) -> Vec<PathBuf> {
    let (files, _) = SourceWalker::for_context(ctx).collect(ctx.project_path, |path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n == "requirements.txt" || n.ends_with("-requirements.txt"))
    });
    files
}

pub fn parse_outdated(json: &str) -> std::result::Result<Outdated, serde_json::Error> {
    let packages: Vec<OutdatedPackage> = serde_json::from_str(json)?;
    Ok(packages
        .into_iter()
        .map(|p| (p.name.to_lowercase(), p))
        .collect())
}

/// Lowercase package name of a requirement line.
///
/// Blank lines, comments and pip options (`-r other.txt`) name nothing.
pub fn requirement_name(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let end = line
        .find(|c: char| "=<>~!;[".contains(c) || c.is_whitespace())
        .unwrap_or(line.len());
    let name = &line[..end];
    (!name.is_empty()).then(|| name.to_lowercase())
}

#[cfg(test)]
#[path = "dependency_tests.rs"]
mod tests;

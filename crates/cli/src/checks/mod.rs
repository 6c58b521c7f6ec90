// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in checks.
//!
//! The structural analyzers read Python sources directly:
//! - docstring: modules, classes and functions without docstrings
//! - naming: identifier casing
//! - length: file and function length limits
//!
//! The wrapper checks (tools, dependency) delegate to external programs
//! through a [`tools::ToolRunner`].

pub mod dependency;
pub mod docstring;
pub mod length;
pub mod naming;
pub mod tools;

use std::fs;
use std::path::Path;

use crate::check::{CheckResult, ExecutionContext, Finding};
use crate::syntax::{self, Module};

/// Check names in chain order.
pub const CHECK_NAMES: &[&str] = &[
    tools::FORMATTING,
    tools::IMPORTS,
    tools::PYLINT,
    tools::RUFF,
    tools::MYPY,
    tools::BANDIT,
    tools::COVERAGE,
    naming::NAME,
    length::FILE_LENGTH,
    length::FUNCTION_LENGTH,
    docstring::NAME,
    dependency::NAME,
];

/// Fold findings into the single result an analyzer reports.
///
/// No findings passes with `pass`; otherwise fails with `header` followed
/// by one `- <finding>` line each.
pub(crate) fn aggregate(
    name: &str,
    findings: &[Finding],
    header: &str,
    pass: impl Into<String>,
) -> CheckResult {
    if findings.is_empty() {
        return CheckResult::passed(name, pass);
    }
    let mut details = String::from(header);
    for finding in findings {
        details.push_str("\n- ");
        details.push_str(&finding.to_string());
    }
    CheckResult::failed(name, details)
}

/// A source file read and parsed, or the finding explaining why not.
pub(crate) enum Parsed {
    Module(Module),
    Unusable(Finding),
}

/// Read and parse one Python file for an analyzer.
///
/// Unreadable or unparsable files become a single finding so analysis of
/// the remaining files continues.
pub(crate) fn parse_file(ctx: &ExecutionContext<'_>, path: &Path) -> crate::Result<Parsed> {
    let shown = ctx.display_path(path);
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!("cannot read {}: {}", path.display(), err);
            return Ok(Parsed::Unusable(Finding::io_error(shown, &err)));
        }
    };
    let module = syntax::parse(source)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(err) = module.syntax_error(&file_name) {
        tracing::debug!("syntax error in {}: {}", path.display(), err);
        return Ok(Parsed::Unusable(Finding::syntax_error(shown, err)));
    }
    Ok(Parsed::Module(module))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File and function length limits.

use std::fs;
use std::path::Path;

use crate::check::{Check, CheckResult, ElementKind, ExecutionContext, Finding};
use crate::checks::{Parsed, aggregate, parse_file};
use crate::error::Result;
use crate::syntax;
use crate::walker::SourceWalker;

pub const FILE_LENGTH: &str = "File Length";
pub const FUNCTION_LENGTH: &str = "Function Length";

/// Physical lines in `content`, blanks and comments included.
///
/// A final line without a trailing newline still counts.
pub fn count_lines(content: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', content).count();
    match content.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

/// Flags files longer than `max_lines` physical lines.
pub struct FileLengthCheck {
    max_lines: usize,
}

impl Default for FileLengthCheck {
    fn default() -> Self {
        Self { max_lines: 300 }
    }
}

impl FileLengthCheck {
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

impl Check for FileLengthCheck {
    fn name(&self) -> &str {
        FILE_LENGTH
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        ctx.require_project_path()?;
        let files = SourceWalker::for_context(ctx).python_sources(ctx);

        let mut findings = Vec::new();
        for path in &files {
            let shown = ctx.display_path(path);
            match fs::read(path) {
                Ok(content) => {
                    let lines = count_lines(&content);
                    if lines > self.max_lines {
                        findings.push(Finding::new(
                            shown,
                            None,
                            format!("{} lines (max {})", lines, self.max_lines),
                        ));
                    }
                }
                Err(err) => findings.push(Finding::io_error(shown, &err)),
            }
        }

        let max = self.max_lines;
        Ok(vec![aggregate(
            FILE_LENGTH,
            &findings,
            &format!("Files exceeding the maximum length of {max} lines:"),
            format!("All files are under the maximum length of {max} lines."),
        )])
    }
}

/// Flags functions, methods and nested functions spanning more than
/// `max_lines` lines.
///
/// The span runs from the `def` line to the last line of the body;
/// decorators and trailing comments are not counted.
pub struct FunctionLengthCheck {
    max_lines: usize,
}

impl Default for FunctionLengthCheck {
    fn default() -> Self {
        Self { max_lines: 50 }
    }
}

impl FunctionLengthCheck {
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    fn check_file(&self, ctx: &ExecutionContext<'_>, path: &Path) -> Result<Vec<Finding>> {
        let module = match parse_file(ctx, path)? {
            Parsed::Module(module) => module,
            Parsed::Unusable(finding) => return Ok(vec![finding]),
        };
        let shown = ctx.display_path(path);
        let mut findings = Vec::new();
        syntax::visit(module.root(), |node| {
            if node.kind() != "function_definition" {
                return;
            }
            let start = syntax::first_line(node);
            let span = syntax::last_line(node) - start + 1;
            if span > self.max_lines {
                let name = module.name_of(node);
                let kind = if syntax::is_async(node) {
                    ElementKind::AsyncFunction
                } else {
                    ElementKind::Function
                };
                findings.push(
                    Finding::new(
                        shown,
                        Some(start),
                        format!(
                            "function '{}' is {} lines (max {})",
                            name, span, self.max_lines
                        ),
                    )
                    .with_element(kind, name),
                );
            }
        });
        Ok(findings)
    }
}

impl Check for FunctionLengthCheck {
    fn name(&self) -> &str {
        FUNCTION_LENGTH
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        ctx.require_project_path()?;
        let files = SourceWalker::for_context(ctx).python_sources(ctx);

        let mut findings = Vec::new();
        for path in &files {
            findings.extend(self.check_file(ctx, path)?);
        }

        let max = self.max_lines;
        Ok(vec![aggregate(
            FUNCTION_LENGTH,
            &findings,
            &format!("Functions exceeding the maximum length of {max} lines:"),
            format!("All functions are under {max} lines"),
        )])
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;

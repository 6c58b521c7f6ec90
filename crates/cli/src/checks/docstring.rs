// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Docstring presence.
//!
//! Every module, class and function must open with a docstring. Private
//! functions (`_helper`, not dunders) and test files can be skipped.

use std::path::Path;

use crate::check::{Check, CheckResult, ElementKind, ExecutionContext, Finding};
use crate::checks::{Parsed, aggregate, parse_file};
use crate::error::Result;
use crate::syntax::{self, Module};
use crate::walker::{SourceWalker, is_test_file};

pub const NAME: &str = "Docstring Check";

const PASS: &str = "All modules, classes, and functions have docstrings.";
const HEADER: &str = "Missing docstrings found:";

pub struct DocstringCheck {
    skip_private: bool,
    skip_test_files: bool,
}

impl Default for DocstringCheck {
    fn default() -> Self {
        Self {
            skip_private: true,
            skip_test_files: true,
        }
    }
}

impl DocstringCheck {
    pub fn new(skip_private: bool, skip_test_files: bool) -> Self {
        Self {
            skip_private,
            skip_test_files,
        }
    }

    fn check_file(&self, ctx: &ExecutionContext<'_>, path: &Path) -> Result<Vec<Finding>> {
        let module = match parse_file(ctx, path)? {
            Parsed::Module(module) => module,
            Parsed::Unusable(finding) => return Ok(vec![finding]),
        };
        Ok(self.missing(&module, ctx.display_path(path)))
    }

    /// Undocumented definitions in source order, module first.
    fn missing(&self, module: &Module, shown: &Path) -> Vec<Finding> {
        let mut findings = Vec::new();
        let root = module.root();
        if !module.has_docstring(root) {
            findings.push(Finding::element(shown, 1, ElementKind::Module, ""));
        }
        syntax::visit(root, |node| {
            let kind = match node.kind() {
                "class_definition" => ElementKind::Class,
                "function_definition" if syntax::is_async(node) => ElementKind::AsyncFunction,
                "function_definition" => ElementKind::Function,
                _ => return,
            };
            let name = module.name_of(node);
            if kind != ElementKind::Class && self.skip_private && is_private(name) {
                return;
            }
            if !module.has_docstring(node) {
                findings.push(Finding::element(
                    shown,
                    syntax::first_line(node),
                    kind,
                    name,
                ));
            }
        });
        findings
    }
}

/// `_name` but not `__name__`.
fn is_private(name: &str) -> bool {
    name.starts_with('_') && !(name.starts_with("__") && name.ends_with("__"))
}

impl Check for DocstringCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        ctx.require_project_path()?;
        let files = SourceWalker::for_context(ctx).python_sources(ctx);

        let mut findings = Vec::new();
        for path in &files {
            if self.skip_test_files && is_test_file(path) {
                tracing::trace!("skipping test file {}", path.display());
                continue;
            }
            findings.extend(self.check_file(ctx, path)?);
        }

        Ok(vec![aggregate(NAME, &findings, HEADER, PASS)])
    }
}

#[cfg(test)]
#[path = "docstring_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier naming conventions.
//!
//! Module names and functions are snake_case, classes PascalCase, and
//! all-uppercase assignment targets UPPER_CASE. Names are taken from the
//! syntax tree; a file that does not parse falls back to scanning its text
//! with docstrings and comments stripped.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::Node;

use crate::check::{Check, CheckResult, ElementKind, ExecutionContext, Finding};
use crate::checks::aggregate;
use crate::error::Result;
use crate::syntax::{self, Module};
use crate::walker::SourceWalker;

pub const NAME: &str = "Naming Conventions";

const PASS: &str = "All code follows naming conventions.";
const HEADER: &str = "Naming convention issues found:";

#[allow(clippy::expect_used)]
static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex"));

#[allow(clippy::expect_used)]
static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid regex"));

#[allow(clippy::expect_used)]
static UPPER_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"));

/// `visit_Module`, `visit_ClassDef`: AST visitor callbacks.
#[allow(clippy::expect_used)]
static VISITOR_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^visit_[A-Z][a-zA-Z0-9]*$").expect("valid regex"));

#[allow(clippy::expect_used)]
static DUNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^__[a-z][a-z0-9_]*__$").expect("valid regex"));

/// Receiver names and keywords that the text scan can mistake for targets.
const RESERVED: &[&str] = &[
    "self", "cls", "True", "False", "None", "import", "from", "as", "class", "def", "for", "if",
    "return", "yield",
];

/// Prose words that show up as `word =` in docstrings and comments.
const PROSE_WORDS: &[&str] = &[
    "for",
    "which",
    "from",
    "class",
    "definition",
    "orchestrates",
    "contents",
    "names",
    "function",
    "methods",
    "module",
    "documentation",
];

/// What an identifier names, which decides the convention it must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    Module,
    Class,
    Function,
    /// Assignment target; all-uppercase targets are constants.
    Variable,
}

impl Identifier {
    /// Attach the definition to `finding`; variables are not definitions.
    fn tag(self, finding: Finding, name: impl Into<String>) -> Finding {
        match self {
            Identifier::Module => finding.with_element(ElementKind::Module, name),
            Identifier::Class => finding.with_element(ElementKind::Class, name),
            Identifier::Function => finding.with_element(ElementKind::Function, name),
            Identifier::Variable => finding,
        }
    }
}

/// The violation message for `name`, or `None` when it conforms.
pub fn violation(kind: Identifier, name: &str) -> Option<String> {
    match kind {
        Identifier::Module => {
            if (name.starts_with("__") && name.ends_with("__")) || SNAKE_CASE.is_match(name) {
                None
            } else {
                Some(format!(
                    "Module name '{name}' does not follow snake_case convention"
                ))
            }
        }
        Identifier::Class => (!PASCAL_CASE.is_match(name)).then(|| {
            format!("Class name '{name}' does not follow PascalCase convention")
        }),
        Identifier::Function => (!function_conforms(name)).then(|| {
            format!("Function name '{name}' does not follow snake_case convention")
        }),
        Identifier::Variable => {
            if RESERVED.contains(&name) || PROSE_WORDS.contains(&name.to_lowercase().as_str()) {
                None
            } else if is_upper(name) {
                (!UPPER_CASE.is_match(name)).then(|| {
                    format!("Constant '{name}' does not follow UPPER_CASE convention")
                })
            } else {
                (!function_conforms(name)).then(|| {
                    format!("Variable '{name}' does not follow snake_case convention")
                })
            }
        }
    }
}

fn function_conforms(name: &str) -> bool {
    if DUNDER.is_match(name) || VISITOR_METHOD.is_match(name) {
        return true;
    }
    if let Some(rest) = name.strip_prefix('_')
        && (rest.is_empty() || SNAKE_CASE.is_match(rest))
    {
        return true;
    }
    SNAKE_CASE.is_match(name)
}

/// At least one cased character and no lowercase ones.
fn is_upper(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

#[derive(Default)]
pub struct NamingConventionsCheck;

impl NamingConventionsCheck {
    fn check_file(&self, ctx: &ExecutionContext<'_>, path: &Path) -> Result<Vec<Finding>> {
        let shown = ctx.display_path(path);
        let mut findings = Vec::new();

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(message) = violation(Identifier::Module, &stem) {
            findings.push(Identifier::Module.tag(Finding::new(shown, None, message), stem));
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                findings.push(Finding::io_error(shown, &err));
                return Ok(findings);
            }
        };
        let module = syntax::parse(source)?;
        if !module.is_valid() {
            tracing::debug!(
                "{} does not parse, scanning text for names",
                path.display()
            );
            findings.extend(
                scan_text(module.source())
                    .into_iter()
                    .filter_map(|(kind, name)| {
                        violation(kind, &name)
                            .map(|m| kind.tag(Finding::new(shown, None, m), name))
                    }),
            );
        } else {
            findings.extend(
                tree_names(&module)
                    .into_iter()
                    .filter_map(|(kind, name, line)| {
                        violation(kind, name)
                            .map(|m| kind.tag(Finding::new(shown, Some(line), m), name))
                    }),
            );
        }
        Ok(findings)
    }
}

impl Check for NamingConventionsCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        ctx.require_project_path()?;
        let files = SourceWalker::for_context(ctx).python_sources(ctx);

        let mut findings = Vec::new();
        for path in &files {
            findings.extend(self.check_file(ctx, path)?);
        }

        Ok(vec![aggregate(NAME, &findings, HEADER, PASS)])
    }
}

/// Class, function and assignment-target names in source order.
fn tree_names(module: &Module) -> Vec<(Identifier, &str, usize)> {
    let mut names = Vec::new();
    syntax::visit(module.root(), |node| match node.kind() {
        "class_definition" => names.push((
            Identifier::Class,
            module.name_of(node),
            syntax::first_line(node),
        )),
        "function_definition" => names.push((
            Identifier::Function,
            module.name_of(node),
            syntax::first_line(node),
        )),
        "assignment" => {
            if let Some(left) = node.child_by_field_name("left") {
                collect_targets(module, left, &mut names);
            }
        }
        _ => {}
    });
    names
}

/// Plain identifiers bound by an assignment target, unpacking included.
/// Attribute and subscript targets bind no new name.
fn collect_targets<'m>(
    module: &'m Module,
    target: Node<'_>,
    names: &mut Vec<(Identifier, &'m str, usize)>,
) {
    match target.kind() {
        "identifier" => names.push((
            Identifier::Variable,
            module.text(target),
            syntax::first_line(target),
        )),
        "pattern_list" | "tuple_pattern" | "list_pattern" | "list_splat_pattern" => {
            for child in syntax::named_children(target) {
                collect_targets(module, child, names);
            }
        }
        _ => {}
    }
}

#[allow(clippy::expect_used)]
static TRIPLE_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)""".*?""""#).expect("valid regex"));

#[allow(clippy::expect_used)]
static TRIPLE_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)'''.*?'''").expect("valid regex"));

#[allow(clippy::expect_used)]
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)#.*$").expect("valid regex"));

#[allow(clippy::expect_used)]
static CLASS_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+([A-Za-z0-9_]+)[\s(:]").expect("valid regex"));

#[allow(clippy::expect_used)]
static DEF_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+([A-Za-z0-9_]+)[\s(:]").expect("valid regex"));

#[allow(clippy::expect_used)]
static ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z][A-Za-z0-9_]*)\s*=").expect("valid regex"));

/// Names declared in `source` found by pattern matching.
///
/// Classes first, then functions, then assignment targets. Prose words are
/// skipped for classes and functions too, since the scan cannot tell code
/// from text that survived stripping.
fn scan_text(source: &str) -> Vec<(Identifier, String)> {
    let stripped = TRIPLE_DOUBLE.replace_all(source, "");
    let stripped = TRIPLE_SINGLE.replace_all(&stripped, "");
    let stripped = COMMENT.replace_all(&stripped, "");

    let mut names = Vec::new();
    for (kind, pattern) in [
        (Identifier::Class, &*CLASS_DECL),
        (Identifier::Function, &*DEF_DECL),
        (Identifier::Variable, &*ASSIGN),
    ] {
        for caps in pattern.captures_iter(&stripped) {
            let name = &caps[1];
            if kind != Identifier::Variable && PROSE_WORDS.contains(&name.to_lowercase().as_str())
            {
                continue;
            }
            names.push((kind, name.to_string()));
        }
    }
    names
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;

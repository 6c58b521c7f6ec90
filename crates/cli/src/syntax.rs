// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python syntax trees via tree-sitter.
//!
//! Tree-sitter recovers from syntax errors instead of failing, so a tree
//! that contains an `ERROR` or `MISSING` node is treated as a file that
//! does not parse. The grammar also accepts Python 2 `print` and `exec`
//! statements; those are rejected the same way.

use std::fmt;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};

/// A parsed Python module.
pub struct Module {
    tree: Tree,
    source: String,
}

/// First syntax error found in a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line of the offending node.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parse Python source.
///
/// Only a parser that cannot be set up returns `Err`; malformed source
/// still yields a module, see [`Module::syntax_error`].
pub fn parse(source: impl Into<String>) -> Result<Module> {
    let source = source.into();
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| Error::Internal(format!("failed to load python grammar: {e}")))?;
    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| Error::Internal("python parser returned no tree".to_string()))?;
    Ok(Module { tree, source })
}

impl Module {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// The first syntax error in the module, if any.
    ///
    /// `file_name` only feeds the message, which reads
    /// `invalid syntax (<file_name>, line <n>)`.
    pub fn syntax_error(&self, file_name: &str) -> Option<SyntaxError> {
        let line = first_line(self.first_invalid()?);
        Some(SyntaxError {
            line,
            message: format!("invalid syntax ({file_name}, line {line})"),
        })
    }

    /// Whether the module is valid Python 3.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// First node, in source order, that Python 3 rejects.
    fn first_invalid(&self) -> Option<Node<'_>> {
        let mut first: Option<Node<'_>> = None;
        visit(self.root(), |node| {
            if first.is_none() && is_invalid(node) {
                first = Some(node);
            }
        });
        first
    }

    /// Name of a class or function definition.
    pub fn name_of(&self, definition: Node<'_>) -> &str {
        definition
            .child_by_field_name("name")
            .map_or("", |n| self.text(n))
    }

    /// Whether a module, class or function body opens with a docstring.
    ///
    /// The docstring is the first statement (comments skipped) when it is
    /// an expression statement holding exactly one text literal, or an
    /// implicit concatenation of text literals.
    pub fn has_docstring(&self, node: Node<'_>) -> bool {
        let body = match node.kind() {
            "module" => Some(node),
            _ => node.child_by_field_name("body"),
        };
        let Some(first) = body.and_then(first_statement) else {
            return false;
        };
        if first.kind() != "expression_statement" || first.named_child_count() != 1 {
            return false;
        }
        let Some(expr) = first.named_child(0) else {
            return false;
        };
        match expr.kind() {
            "string" => self.is_plain_string(expr),
            "concatenated_string" => named_children(expr)
                .into_iter()
                .all(|s| s.kind() == "string" && self.is_plain_string(s)),
            _ => false,
        }
    }

    /// Text literal: no `f` (formatted) or `b` (bytes) prefix.
    fn is_plain_string(&self, string: Node<'_>) -> bool {
        let prefix = string
            .child(0)
            .map(|start| self.text(start))
            .unwrap_or_default();
        let prefix = prefix.trim_end_matches(['"', '\'']);
        !prefix.contains(['f', 'F', 'b', 'B'])
    }
}

/// Recovery nodes, plus the Python 2 statements the grammar still accepts
/// (`print "x"`, `exec "code"`).
fn is_invalid(node: Node<'_>) -> bool {
    node.is_error()
        || node.is_missing()
        || matches!(node.kind(), "print_statement" | "exec_statement")
}

/// True for `async def` definitions.
pub fn is_async(function: Node<'_>) -> bool {
    function.child(0).is_some_and(|c| c.kind() == "async")
}

/// 1-based first line of a node.
pub fn first_line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// 1-based last line of the last token inside `node`.
///
/// Only leaf tokens count, and comments are not tokens here, so a comment
/// trailing a body never extends it. A token ending at column 0 ends on
/// the previous line.
pub fn last_line(node: Node<'_>) -> usize {
    let mut max = first_line(node);
    visit(node, |n| {
        if n.child_count() == 0 && n.kind() != "comment" {
            max = max.max(end_line(n));
        }
    });
    max
}

fn end_line(node: Node<'_>) -> usize {
    let start = node.start_position();
    let end = node.end_position();
    if end.column == 0 && end.row > start.row {
        end.row
    } else {
        end.row + 1
    }
}

/// First statement of a body, skipping comments.
pub fn first_statement(body: Node<'_>) -> Option<Node<'_>> {
    named_children(body)
        .into_iter()
        .find(|n| n.kind() != "comment")
}

/// Named children of a node, in order.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .collect()
}

/// Pre-order traversal of `root` and all its descendants.
pub fn visit<'t>(root: Node<'t>, mut f: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    let mut depth = 0usize;
    loop {
        f(cursor.node());
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;

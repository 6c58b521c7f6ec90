// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::check::{Check, CheckResult, ExecutionContext};
use crate::checks::tools::{ToolOutput, ToolRunner};
use crate::config::Config;

/// Creates a temp project directory from a list of (path, content) pairs.
pub fn temp_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), files);
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project(&[]);
/// create_tree(tmp.path(), &[
///     ("src/app.py", "\"\"\"App.\"\"\"\n"),
///     ("tests/test_app.py", "def test_app(): pass\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Run a check over `root` with the given source directories and config.
pub fn run_check(check: &dyn Check, root: &Path, dirs: &[&str], config: &Config) -> CheckResult {
    let dirs: Vec<PathBuf> = dirs.iter().map(PathBuf::from).collect();
    let ctx = ExecutionContext::new(root, &dirs, config);
    let mut results = check.run(&ctx).unwrap();
    assert_eq!(results.len(), 1, "analyzers produce exactly one result");
    results.remove(0)
}

/// Run a check over `root/src` with the default config.
pub fn run_on_src(check: &dyn Check, root: &Path) -> CheckResult {
    run_check(check, root, &["src"], &Config::default())
}

/// A file with exactly `n` physical lines.
pub fn lines(n: usize) -> String {
    "x = 1\n".repeat(n)
}

/// Tool runner that answers every call with one canned output and records
/// each invocation. `None` simulates a program that is not installed.
pub struct FakeRunner {
    output: Option<ToolOutput>,
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn answering(output: Option<ToolOutput>) -> Self {
        Self {
            output,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn succeeding(stdout: &str) -> Self {
        Self::answering(Some(ToolOutput {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }))
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String], _cwd: &Path) -> io::Result<ToolOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        self.output
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not installed"))
    }
}
